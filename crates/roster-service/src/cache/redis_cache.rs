//! Redis-based cache implementation.

use super::{cache_keys, UserCache};
use async_trait::async_trait;
use deadpool_redis::{
    redis::{self, AsyncCommands},
    Pool,
};
use roster_core::{RosterError, RosterResult, User, UserId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Keys requested per `SCAN` page when flushing.
const SCAN_BATCH: usize = 100;

/// Shared user cache stored in Redis as JSON.
///
/// Redis failures are logged and treated as a miss, so a broken cache only
/// costs extra store reads. Every entry carries a TTL: an invalidation lost
/// to a Redis outage leaves a stale entry for at most that long.
pub struct RedisUserCache {
    pool: Arc<Pool>,
    ttl: Duration,
}

impl RedisUserCache {
    /// Creates a cache whose entries expire after `ttl` (at least one second).
    #[must_use]
    pub fn new(pool: Arc<Pool>, ttl: Duration) -> Self {
        Self { pool, ttl }
    }

    async fn get_conn(&self) -> RosterResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| RosterError::Cache(format!("Failed to get Redis connection: {}", e)))
    }

    async fn try_get(&self, id: UserId) -> RosterResult<Option<User>> {
        let key = cache_keys::user_by_id(id);
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| RosterError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match value {
            Some(json) => {
                debug!("Cache hit for key '{}'", key);
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => {
                debug!("Cache miss for key '{}'", key);
                Ok(None)
            }
        }
    }

    async fn try_put(&self, id: UserId, user: &User) -> RosterResult<()> {
        let key = cache_keys::user_by_id(id);
        let json = serde_json::to_string(user)?;
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(&key, json, self.ttl.as_secs().max(1))
            .await
            .map_err(|e| RosterError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}'", key);
        Ok(())
    }

    async fn try_invalidate(&self, id: UserId) -> RosterResult<()> {
        let key = cache_keys::user_by_id(id);
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(&key)
            .await
            .map_err(|e| RosterError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(())
    }

    async fn try_invalidate_all(&self) -> RosterResult<()> {
        let pattern = cache_keys::all_users_pattern();
        let mut conn = self.get_conn().await?;

        let mut cursor = 0u64;
        let mut deleted = 0i64;
        loop {
            let (next, keys): (u64, Vec<String>) = scan_page(cursor, &pattern)
                .query_async(&mut conn)
                .await
                .map_err(|e| RosterError::Cache(format!("Failed to scan keys: {}", e)))?;

            if !keys.is_empty() {
                let removed: i64 = conn
                    .del(&keys)
                    .await
                    .map_err(|e| RosterError::Cache(format!("Failed to delete keys: {}", e)))?;
                deleted += removed;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        debug!("Deleted {} keys matching pattern '{}'", deleted, pattern);
        Ok(())
    }
}

/// One incremental `SCAN` step; a returned cursor of `0` ends the iteration.
fn scan_page(cursor: u64, pattern: &str) -> redis::Cmd {
    let mut cmd = redis::cmd("SCAN");
    cmd.arg(cursor)
        .arg("MATCH")
        .arg(pattern)
        .arg("COUNT")
        .arg(SCAN_BATCH);
    cmd
}

#[async_trait]
impl UserCache for RedisUserCache {
    async fn get(&self, id: UserId) -> Option<User> {
        self.try_get(id).await.unwrap_or_else(|e| {
            warn!("Cache read for user {} failed, treating as miss: {}", id, e);
            None
        })
    }

    async fn put(&self, id: UserId, user: &User) {
        if let Err(e) = self.try_put(id, user).await {
            warn!("Cache write for user {} failed: {}", id, e);
        }
    }

    async fn invalidate(&self, id: UserId) {
        if let Err(e) = self.try_invalidate(id).await {
            warn!("Cache invalidation for user {} failed: {}", id, e);
        }
    }

    async fn invalidate_all(&self) {
        if let Err(e) = self.try_invalidate_all().await {
            warn!("Cache flush failed: {}", e);
        }
    }
}

impl std::fmt::Debug for RedisUserCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisUserCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pool pointing at a port nothing listens on.
    fn unreachable_pool() -> Arc<Pool> {
        let cfg = deadpool_redis::Config::from_url("redis://127.0.0.1:1");
        Arc::new(
            cfg.create_pool(Some(deadpool_redis::Runtime::Tokio1))
                .expect("pool config is valid"),
        )
    }

    #[tokio::test]
    async fn test_unreachable_redis_degrades_to_miss() {
        let cache = RedisUserCache::new(unreachable_pool(), Duration::from_secs(60));
        let user = User::new("Alice", "alice@example.com").with_id(UserId::new(1));

        cache.put(UserId::new(1), &user).await;
        assert!(cache.get(UserId::new(1)).await.is_none());
        cache.invalidate(UserId::new(1)).await;
        cache.invalidate_all().await;
        assert!(cache.is_enabled());
    }

    #[test]
    fn test_flush_walks_keys_with_scan() {
        let packed = scan_page(0, "user:*").get_packed_command();
        let expected = b"*6\r\n$4\r\nSCAN\r\n$1\r\n0\r\n$5\r\nMATCH\r\n$6\r\nuser:*\r\n$5\r\nCOUNT\r\n$3\r\n100\r\n";
        assert_eq!(packed, expected.to_vec());
    }
}
