//! # Roster Repository
//!
//! Durable record store for users, behind the [`UserRepository`] trait:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>
//! InMemoryUserRepository  |  SqliteUserRepository
//!                              ↓
//!                            DatabasePool (SQLx)
//! ```
//!
//! Both stores assign identifiers sequentially, treat `save` as
//! insert-or-update, treat `delete_by_id` as idempotent, and return
//! `find_all` in ascending identifier order.

pub mod memory;
pub mod pool;
pub mod sqlite;
pub mod traits;

pub use memory::InMemoryUserRepository;
pub use pool::*;
pub use sqlite::SqliteUserRepository;
pub use traits::*;
