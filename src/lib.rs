use dioxus::LaunchBuilder;
use mimalloc::MiMalloc;

use anyhow::Result;

pub mod app;
pub mod components;
pub mod config;
pub mod labels;
pub mod models;
pub mod services;
pub mod style;
pub mod table;

pub use app::App;
pub use config::ApiConfig;
pub use services::{LogsApi, init_tracing};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[cfg(not(target_os = "android"))]
use dioxus_desktop::Config;
#[cfg(not(target_os = "android"))]
use dioxus_desktop::tao::dpi::LogicalSize;
#[cfg(not(target_os = "android"))]
use dioxus_desktop::tao::window::WindowBuilder;

/// Builds the logs client from `LOGBOOK_API_*` overrides or the defaults.
pub fn api_from_env() -> Result<LogsApi> {
    let config = ApiConfig::from_env()?;
    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "logs API configured"
    );
    Ok(LogsApi::new(&config)?)
}

#[cfg(not(target_os = "android"))]
pub fn launch_desktop(api: LogsApi) -> Result<()> {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(labels::WINDOW_TITLE)
                    .with_inner_size(LogicalSize::new(1320.0, 860.0))
                    .with_resizable(true),
            ),
        )
        .with_context(api)
        .launch(App);
    Ok(())
}

#[cfg(target_os = "android")]
pub fn launch_mobile(api: LogsApi) {
    LaunchBuilder::mobile().with_context(api).launch(App);
}
