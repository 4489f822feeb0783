//! User service implementation.

use crate::cache::UserCache;
use crate::notification::{NotificationChannel, NotificationChannelExt};
use crate::user_service::{CreateInvalidation, UserService};
use async_trait::async_trait;
use roster_core::{RosterError, RosterResult, User, UserEvent, UserId};
use roster_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Cache-aside user service over a record store, a cache and a notification
/// channel.
///
/// Mutations run in a fixed order: store write, cache invalidation,
/// notification. When the store write fails the later steps are skipped.
pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn UserCache>,
    notifier: Arc<dyn NotificationChannel>,
    create_invalidation: CreateInvalidation,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: Arc<dyn UserCache>,
        notifier: Arc<dyn NotificationChannel>,
    ) -> Self {
        Self {
            repository,
            cache,
            notifier,
            create_invalidation: CreateInvalidation::default(),
        }
    }

    /// Sets how much of the cache a create clears.
    #[must_use]
    pub fn with_create_invalidation(mut self, policy: CreateInvalidation) -> Self {
        self.create_invalidation = policy;
        self
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get_user(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Getting user: {}", id);

        if let Some(user) = self.cache.get(id).await {
            return Ok(Some(user));
        }

        let user = self.repository.find_by_id(id).await?;
        if let Some(user) = &user {
            self.cache.put(id, user).await;
        }

        Ok(user)
    }

    async fn list_users(&self) -> RosterResult<Vec<User>> {
        debug!("Listing users");
        self.repository.find_all().await
    }

    async fn create_user(&self, user: User) -> RosterResult<User> {
        debug!("Creating user: {}", user.name);

        let saved = self.repository.save(&user).await?;
        let id = saved
            .id
            .ok_or_else(|| RosterError::internal("Record store returned a user without an id"))?;

        if self.create_invalidation == CreateInvalidation::All {
            self.cache.invalidate_all().await;
        }

        self.notifier.publish(&UserEvent::Created(id));

        info!("User created: {}", id);
        Ok(saved)
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<()> {
        debug!("Deleting user: {}", id);

        self.repository.delete_by_id(id).await?;
        self.cache.invalidate(id).await;
        self.notifier.publish(&UserEvent::Deleted(id));

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl")
            .field("create_invalidation", &self.create_invalidation)
            .finish_non_exhaustive()
    }
}
