//! Redis pub/sub notification channel.

use super::{NotificationChannel, NotificationEvent};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use tracing::{debug, warn};

/// Publishes each notification as JSON on the Redis channel named by its
/// topic.
///
/// The PUBLISH runs on a spawned task. Failures are logged and dropped.
#[derive(Clone)]
pub struct RedisNotificationChannel {
    pool: Arc<Pool>,
}

impl RedisNotificationChannel {
    /// Creates a channel publishing through `pool`.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

async fn publish(pool: Arc<Pool>, event: NotificationEvent) {
    let message = match serde_json::to_string(&event) {
        Ok(message) => message,
        Err(e) => {
            warn!("Failed to encode notification {}: {}", event.event_id, e);
            return;
        }
    };

    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Failed to get Redis connection for notification: {}", e);
            return;
        }
    };

    match conn.publish::<_, _, i64>(&event.topic, message).await {
        Ok(receivers) => debug!(
            "Published '{}' on '{}' to {} receiver(s)",
            event.event_name, event.topic, receivers
        ),
        Err(e) => warn!(
            "Failed to publish '{}' on '{}': {}",
            event.event_name, event.topic, e
        ),
    }
}

impl NotificationChannel for RedisNotificationChannel {
    fn send(&self, topic: &str, event_name: &str, payload: &str) {
        let event = NotificationEvent::new(topic, event_name, payload);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(publish(Arc::clone(&self.pool), event));
            }
            Err(_) => warn!(
                "No async runtime, dropping notification '{}' on '{}'",
                event_name, topic
            ),
        }
    }
}

impl std::fmt::Debug for RedisNotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisNotificationChannel").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_outside_runtime_does_not_panic() {
        let cfg = deadpool_redis::Config::from_url("redis://127.0.0.1:1");
        let pool = cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .expect("pool config is valid");
        let channel = RedisNotificationChannel::new(Arc::new(pool));

        channel.send("user-events", "user.created", "User created: 1");
    }

    #[tokio::test]
    async fn test_send_returns_without_waiting_for_redis() {
        let cfg = deadpool_redis::Config::from_url("redis://127.0.0.1:1");
        let pool = cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .expect("pool config is valid");
        let channel = RedisNotificationChannel::new(Arc::new(pool));

        channel.send("user-events", "user.deleted", "User deleted: 1");
    }
}
