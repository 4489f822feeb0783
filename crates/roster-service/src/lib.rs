//! # Roster Service
//!
//! The user record service and the collaborators it orchestrates.
//!
//! Reads are cache-aside: the [`UserCache`] is consulted first and populated
//! from the record store on a miss. Writes go to the store first, then
//! invalidate the cache, then announce the mutation on a
//! [`NotificationChannel`].

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod notification;
pub mod user_service;

pub use cache::*;
pub use dto::*;
pub use notification::*;
pub use r#impl::*;
pub use user_service::*;
