//! Backend selection for the pluggable collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Record store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map; contents are lost on shutdown.
    #[default]
    Memory,
    /// SQLite database through SQLx.
    Sqlite,
}

impl StorageBackend {
    /// Returns true if the backend needs a database URL.
    #[must_use]
    pub const fn requires_database(&self) -> bool {
        matches!(self, Self::Sqlite)
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// User cache backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process-local concurrent map.
    #[default]
    Memory,
    /// Shared Redis cache.
    Redis,
    /// Caching turned off; every lookup goes to the store.
    Disabled,
}

impl CacheBackend {
    /// Returns true if the backend needs a Redis URL.
    #[must_use]
    pub const fn requires_redis(&self) -> bool {
        matches!(self, Self::Redis)
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Redis => write!(f, "redis"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// Notification channel backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationBackend {
    /// In-process broadcast channel.
    #[default]
    Broadcast,
    /// Redis pub/sub.
    Redis,
    /// Log events only.
    Log,
}

impl NotificationBackend {
    /// Returns true if the backend needs a Redis URL.
    #[must_use]
    pub const fn requires_redis(&self) -> bool {
        matches!(self, Self::Redis)
    }
}

impl fmt::Display for NotificationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Broadcast => write!(f, "broadcast"),
            Self::Redis => write!(f, "redis"),
            Self::Log => write!(f, "log"),
        }
    }
}
