#[cfg(not(target_os = "android"))]
fn main() -> anyhow::Result<()> {
    vehicle_logbook::init_tracing();
    let api = vehicle_logbook::api_from_env()?;
    vehicle_logbook::launch_desktop(api)
}

#[cfg(target_os = "android")]
fn main() {
    vehicle_logbook::init_tracing();
    match vehicle_logbook::api_from_env() {
        Ok(api) => vehicle_logbook::launch_mobile(api),
        Err(err) => tracing::error!(error = %err, "cannot start without a logs API"),
    }
}
