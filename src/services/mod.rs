pub mod api;
pub mod diagnostics;
pub mod logbook;
pub mod logging;

pub use api::{ApiError, LogsApi};
pub use diagnostics::{ProbeReport, ProbeStatus, probe_logs_endpoint};
pub use logbook::{
    LoadPhase, LogbookEvent, LogbookState, dispatch, fetch_logbook, queue_initial_load,
};
pub use logging::init_tracing;
