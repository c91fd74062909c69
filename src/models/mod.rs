pub mod car;
pub mod employee;
pub mod filter;
pub mod listing;
pub mod log;

pub use car::Car;
pub use employee::Employee;
pub use filter::{FilterCriteria, FilterField};
pub use listing::{LogEnvelope, LogListing};
pub use log::{Log, LogDraft};
