//! # Roster Server Library
//!
//! Builds the collaborators named by the configuration and wires them into
//! the user service, plus startup logging helpers.

pub mod startup;
pub mod wiring;

pub use wiring::*;
