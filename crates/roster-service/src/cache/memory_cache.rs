//! Process-local cache implementations.

use super::UserCache;
use async_trait::async_trait;
use dashmap::DashMap;
use roster_core::{User, UserId};
use tracing::debug;

/// In-memory user cache backed by a sharded concurrent map.
///
/// Operations on different keys do not contend with each other.
#[derive(Debug, Default)]
pub struct InMemoryUserCache {
    entries: DashMap<UserId, User>,
}

impl InMemoryUserCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an entry exists for `id`.
    #[must_use]
    pub fn contains(&self, id: UserId) -> bool {
        self.entries.contains_key(&id)
    }
}

#[async_trait]
impl UserCache for InMemoryUserCache {
    async fn get(&self, id: UserId) -> Option<User> {
        let value = self.entries.get(&id).map(|entry| entry.value().clone());
        match &value {
            Some(_) => debug!("Cache hit for user {}", id),
            None => debug!("Cache miss for user {}", id),
        }
        value
    }

    async fn put(&self, id: UserId, user: &User) {
        self.entries.insert(id, user.clone());
    }

    async fn invalidate(&self, id: UserId) {
        if self.entries.remove(&id).is_some() {
            debug!("Invalidated cached user {}", id);
        }
    }

    async fn invalidate_all(&self) {
        let count = self.entries.len();
        self.entries.clear();
        debug!("Invalidated {} cached users", count);
    }
}

/// Cache that stores nothing. Every lookup is a miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopUserCache;

#[async_trait]
impl UserCache for NoopUserCache {
    async fn get(&self, _id: UserId) -> Option<User> {
        None
    }

    async fn put(&self, _id: UserId, _user: &User) {}

    async fn invalidate(&self, _id: UserId) {}

    async fn invalidate_all(&self) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn alice() -> User {
        User::new("Alice", "alice@example.com").with_id(UserId::new(1))
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = InMemoryUserCache::new();
        assert!(cache.get(UserId::new(1)).await.is_none());

        cache.put(UserId::new(1), &alice()).await;
        assert_eq!(cache.get(UserId::new(1)).await, Some(alice()));
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = InMemoryUserCache::new();
        cache.put(UserId::new(1), &alice()).await;

        let mut renamed = alice();
        renamed.name = "Alicia".to_string();
        cache.put(UserId::new(1), &renamed).await;

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(UserId::new(1)).await.unwrap().name, "Alicia");
    }

    #[tokio::test]
    async fn test_invalidate_removes_only_that_key() {
        let cache = InMemoryUserCache::new();
        let bob = User::new("Bob", "bob@example.com").with_id(UserId::new(2));
        cache.put(UserId::new(1), &alice()).await;
        cache.put(UserId::new(2), &bob).await;

        cache.invalidate(UserId::new(1)).await;
        cache.invalidate(UserId::new(99)).await;

        assert!(!cache.contains(UserId::new(1)));
        assert!(cache.contains(UserId::new(2)));
    }

    #[tokio::test]
    async fn test_invalidate_all_clears() {
        let cache = InMemoryUserCache::new();
        cache.put(UserId::new(1), &alice()).await;
        cache.put(UserId::new(2), &alice()).await;

        cache.invalidate_all().await;
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_access_on_distinct_keys() {
        let cache = Arc::new(InMemoryUserCache::new());
        let mut handles = Vec::new();

        for i in 1..=32 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                let id = UserId::new(i);
                let user = User::new(format!("user{i}"), format!("user{i}@example.com")).with_id(id);
                cache.put(id, &user).await;
                cache.get(id).await
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }
        assert_eq!(cache.len(), 32);
    }

    #[tokio::test]
    async fn test_noop_cache_always_misses() {
        let cache = NoopUserCache;
        cache.put(UserId::new(1), &alice()).await;
        assert!(cache.get(UserId::new(1)).await.is_none());
        assert!(!cache.is_enabled());
    }
}
