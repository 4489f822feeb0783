//! Cache interface trait for user lookups.

use async_trait::async_trait;
use roster_core::{User, UserId};

/// Identifier-keyed cache of user records.
///
/// None of the operations can fail. Backends that talk to a remote server
/// log their errors and degrade to a miss or a no-op.
#[async_trait]
pub trait UserCache: Send + Sync {
    /// Looks up a cached user. Never touches the record store.
    async fn get(&self, id: UserId) -> Option<User>;

    /// Stores a user, overwriting any previous entry for the same key.
    async fn put(&self, id: UserId, user: &User);

    /// Removes the entry for `id` if there is one.
    async fn invalidate(&self, id: UserId);

    /// Removes every entry.
    async fn invalidate_all(&self);

    /// Returns false when caching is switched off.
    fn is_enabled(&self) -> bool {
        true
    }
}
