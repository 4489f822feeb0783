//! # Roster Config
//!
//! Configuration management for Roster.
//! Supports layered configuration from files and environment variables,
//! with runtime refresh.

mod app_config;
mod backends;
mod loader;

pub use app_config::*;
pub use backends::*;
pub use loader::*;
