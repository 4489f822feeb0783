//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads the layered configuration once at startup.
#[derive(Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `ROSTER__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RosterError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config,
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RosterError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, RosterError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("ROSTER_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ROSTER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_roster_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_roster_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    pub fn validate_config(config: &AppConfig) -> Result<(), RosterError> {
        if config.storage.backend.requires_database() && config.storage.database_url.is_empty() {
            return Err(RosterError::Configuration(
                "storage.database_url is required for the sqlite backend".to_string(),
            ));
        }

        if config.cache.backend.requires_redis() && config.cache.redis_url.is_empty() {
            return Err(RosterError::Configuration(
                "cache.redis_url is required for the redis cache backend".to_string(),
            ));
        }

        if config.cache.backend.requires_redis() && config.cache.ttl_secs == 0 {
            return Err(RosterError::Configuration(
                "cache.ttl_secs must be greater than zero for the redis cache backend".to_string(),
            ));
        }

        if config.notifications.backend.requires_redis()
            && config.notifications.redis_url.is_empty()
        {
            return Err(RosterError::Configuration(
                "notifications.redis_url is required for the redis notification backend"
                    .to_string(),
            ));
        }

        if config.notifications.buffer_size == 0 {
            return Err(RosterError::Configuration(
                "notifications.buffer_size must be greater than zero".to_string(),
            ));
        }

        if config.app.environment == "production" && !config.storage.backend.requires_database() {
            warn!("Running production with the in-memory record store; data will not survive a restart");
        }

        Ok(())
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CacheBackend, StorageBackend};
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_missing_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let loader = ConfigLoader::new(missing.to_string_lossy().to_string()).unwrap();
        let config = loader.get();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_default_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "default.toml",
            r#"
            [server]
            port = 9000

            [cache]
            backend = "disabled"
            "#,
        );

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap();
        let config = loader.get();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cache.backend, CacheBackend::Disabled);
    }

    #[test]
    fn test_load_rejects_redis_cache_without_ttl() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "default.toml",
            "[cache]\nbackend = \"redis\"\nttl_secs = 0\n",
        );

        let err = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap_err();
        assert!(matches!(err, RosterError::Configuration(ref msg) if msg.contains("ttl_secs")));
    }

    #[test]
    fn test_validate_zero_ttl_only_matters_for_redis() {
        let mut config = AppConfig::default();
        config.cache.ttl_secs = 0;
        assert!(ConfigLoader::validate_config(&config).is_ok());

        config.cache.backend = CacheBackend::Redis;
        assert!(ConfigLoader::validate_config(&config).is_err());

        config.cache.ttl_secs = 1;
        assert!(ConfigLoader::validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_database_url() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Sqlite;
        config.storage.database_url = String::new();
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_buffer() {
        let mut config = AppConfig::default();
        config.notifications.buffer_size = 0;
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ConfigLoader::validate_config(&AppConfig::default()).is_ok());
    }
}
