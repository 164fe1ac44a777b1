//! Shared startup for the demo binaries
//!
//! Every binary takes an optional configuration file (`.toml` or `.ron`) as
//! its first argument and otherwise runs its built-in preset.

use ngon_engine::config::AppConfig;
use ngon_engine::foundation::logging;

/// Initialize logging, resolve the configuration and run until the window closes
pub fn launch(name: &str, preset: fn() -> AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook for better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {panic_info}");
    }));

    logging::init();
    log::info!("Starting {name}");

    let config_path = std::env::args_os().nth(1);
    let config = AppConfig::load_or_preset(config_path.as_ref(), preset).map_err(|e| {
        log::error!("Invalid configuration: {e}");
        e
    })?;

    match ngon_engine::run_windowed(&config) {
        Ok(stats) => {
            log::info!("{name} finished after {} frames", stats.frames);
            Ok(())
        }
        Err(e) => {
            log::error!("{name} failed: {e}");
            Err(e.into())
        }
    }
}
