//! # Roster REST
//!
//! REST API layer using Axum for Roster.
//! Maps HTTP requests onto the user record service and serves the static
//! order, product and notification catalogues plus health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
