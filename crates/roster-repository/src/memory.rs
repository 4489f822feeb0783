//! In-memory user repository.

use crate::traits::UserRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{RosterError, RosterResult, User, UserId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, warn};

/// Process-local user store.
///
/// IDs start at 1 and are never reused, even after a delete.
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Creates a repository pre-populated with the given users.
    ///
    /// Users without an ID are assigned one in iteration order.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        for user in users {
            if let Err(e) = repo.store(user) {
                warn!("Skipping seeded user: {}", e);
            }
        }
        repo
    }

    /// Returns the number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Returns true if no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    /// The sequence saturates at `i64::MAX`; once there, generating a fresh
    /// ID fails instead of wrapping onto an existing record.
    fn store(&self, mut user: User) -> RosterResult<User> {
        let id = match user.id {
            Some(id) => {
                self.next_id
                    .fetch_max(id.into_inner().saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self
                .next_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
                .map(UserId::new)
                .map_err(|_| RosterError::database("User ID sequence exhausted"))?,
        };
        user.id = Some(id);
        self.users.write().insert(id, user.clone());
        Ok(user)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Finding user by id: {}", id);
        Ok(self.users.read().get(&id).cloned())
    }

    async fn find_all(&self) -> RosterResult<Vec<User>> {
        debug!("Finding all users");
        Ok(self.users.read().values().cloned().collect())
    }

    async fn save(&self, user: &User) -> RosterResult<User> {
        let saved = self.store(user.clone())?;
        debug!("Saved user: {:?}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: UserId) -> RosterResult<()> {
        let removed = self.users.write().remove(&id).is_some();
        debug!("Deleted user {}: {}", id, removed);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserRepository")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
