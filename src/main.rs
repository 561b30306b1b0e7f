//! Fitness tracker service
//!
//! Reads configuration from TOML (`$FITNESS_TRACKER_CONFIG` or
//! `~/.config/fitness-tracker/config.toml`) and serves the REST API until
//! SIGINT/SIGTERM.

use tracing::{error, info};

use fitness_tracker::server::{init_tracing, ServerHandle};
use fitness_tracker::{default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = default_config_path();
    let (app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&app_cfg);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    let handle = ServerHandle::start(app_cfg).await?;
    handle.install_signal_handler();
    handle.wait().await;

    Ok(())
}
