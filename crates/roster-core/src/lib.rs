//! # Roster Core
//!
//! Core types, domain entities, and error definitions for Roster.
//! Every other crate in the workspace builds on the abstractions here.

pub mod error;
pub mod events;
pub mod id;
pub mod result;
pub mod user;
pub mod validation;

pub use error::*;
pub use events::*;
pub use id::*;
pub use result::*;
pub use user::*;
pub use validation::*;
