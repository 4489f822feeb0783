//! Server startup utilities.

use roster_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("REST API:       http://{}/api", addr);
    info!("Health:         http://{}/health", addr);
    info!("API Docs:       http://{}/swagger-ui", addr);
    info!("Storage:        {}", config.storage.backend);
    info!("Cache:          {}", config.cache.backend);
    info!("Notifications:  {}", config.notifications.backend);
    info!("{}", separator);
}
