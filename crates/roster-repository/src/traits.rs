//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{RosterResult, User, UserId};

/// User record store.
///
/// Failures are reported through `RosterError` and propagated untouched by the
/// service layer.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Returns every stored user, ordered by ID.
    async fn find_all(&self) -> RosterResult<Vec<User>>;

    /// Inserts the user when it has no ID yet, otherwise updates it.
    ///
    /// Returns the canonical stored form, which always carries an ID.
    async fn save(&self, user: &User) -> RosterResult<User>;

    /// Deletes a user by ID. Deleting an unknown ID is not an error.
    async fn delete_by_id(&self, id: UserId) -> RosterResult<()>;
}
