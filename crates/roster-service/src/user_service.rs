//! User service trait definition.

use async_trait::async_trait;
use roster_core::{RosterResult, User, UserId};

/// How much of the cache a create clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateInvalidation {
    /// Clear every cached user.
    #[default]
    All,
    /// Leave the cache alone. A new ID cannot have a cached entry.
    None,
}

impl CreateInvalidation {
    /// Maps the `cache.invalidate_all_on_create` setting.
    #[must_use]
    pub const fn from_flag(invalidate_all: bool) -> Self {
        if invalidate_all {
            Self::All
        } else {
            Self::None
        }
    }
}

/// User record service.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a user by ID, serving from the cache when possible.
    ///
    /// Returns `Ok(None)` when no such user exists.
    async fn get_user(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Lists every user straight from the record store.
    async fn list_users(&self) -> RosterResult<Vec<User>>;

    /// Persists a new user and announces it.
    async fn create_user(&self, user: User) -> RosterResult<User>;

    /// Deletes a user and announces it. Unknown IDs are not an error.
    async fn delete_user(&self, id: UserId) -> RosterResult<()>;
}
