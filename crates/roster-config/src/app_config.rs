//! Application configuration structures.

use crate::{CacheBackend, NotificationBackend, StorageBackend};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// User cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Notification channel configuration.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "roster".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Enable CORS.
    pub cors_enabled: bool,
    /// CORS allowed origins.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Returns the server bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Which record store to use.
    pub backend: StorageBackend,
    /// Database URL (SQLite backend only).
    pub database_url: String,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Connection acquire timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            database_url: "sqlite://roster.db?mode=rwc".to_string(),
            max_connections: 5,
            connect_timeout_secs: 30,
        }
    }
}

impl StorageConfig {
    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// User cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Which cache to use.
    pub backend: CacheBackend,
    /// Redis URL (Redis backend only).
    pub redis_url: String,
    /// Entry TTL in seconds for the Redis backend. Bounds how long a missed
    /// invalidation can serve stale data, so it must be non-zero there.
    pub ttl_secs: u64,
    /// Clear the whole cache when a user is created, not only the new key.
    pub invalidate_all_on_create: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::Memory,
            redis_url: "redis://localhost:6379".to_string(),
            ttl_secs: 300,
            invalidate_all_on_create: true,
        }
    }
}

impl CacheConfig {
    /// Returns the entry TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Notification channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Which channel to use.
    pub backend: NotificationBackend,
    /// Redis URL (Redis backend only).
    pub redis_url: String,
    /// Broadcast buffer size; slow subscribers lose the oldest events.
    pub buffer_size: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            backend: NotificationBackend::Broadcast,
            redis_url: "redis://localhost:6379".to_string(),
            buffer_size: 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info,roster=debug,tower_http=debug".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Returns true if logs should be emitted as JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert!(config.cache.invalidate_all_on_create);
        assert_eq!(config.notifications.backend, NotificationBackend::Broadcast);
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_cache_ttl() {
        let mut config = CacheConfig::default();
        assert_eq!(config.ttl(), Duration::from_secs(300));
        config.ttl_secs = 60;
        assert_eq!(config.ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"cache": {"backend": "disabled"}}"#).unwrap();
        assert_eq!(config.cache.backend, CacheBackend::Disabled);
        assert!(config.cache.invalidate_all_on_create);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_log_format() {
        let mut config = ObservabilityConfig::default();
        assert!(!config.is_json());
        config.log_format = "JSON".to_string();
        assert!(config.is_json());
    }
}
