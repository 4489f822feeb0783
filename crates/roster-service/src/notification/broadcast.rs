//! In-process notification channel over a tokio broadcast channel.

use super::{NotificationChannel, NotificationEvent};
use tokio::sync::broadcast;
use tracing::debug;

/// Default buffer size for the broadcast channel.
/// Slow receivers lose the oldest events beyond this limit.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Delivers notifications to in-process subscribers.
///
/// Only subscribers that exist at send time receive an event. Sending with no
/// subscribers is not an error.
#[derive(Clone)]
pub struct BroadcastNotificationChannel {
    sender: broadcast::Sender<NotificationEvent>,
}

impl BroadcastNotificationChannel {
    /// Creates a channel with the default buffer size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE)
    }

    /// Creates a channel with a custom buffer size.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to events sent after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel for BroadcastNotificationChannel {
    fn send(&self, topic: &str, event_name: &str, payload: &str) {
        let event = NotificationEvent::new(topic, event_name, payload);
        let delivered = self.sender.send(event).unwrap_or_default();
        debug!("Sent '{}' on '{}' to {} subscriber(s)", event_name, topic, delivered);
    }
}

impl std::fmt::Debug for BroadcastNotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastNotificationChannel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let channel = BroadcastNotificationChannel::new();
        let mut rx = channel.subscribe();

        channel.send("user-events", "user.created", "User created: 1");

        let event = rx.recv().await.unwrap();
        assert_eq!(event.topic, "user-events");
        assert_eq!(event.event_name, "user.created");
        assert_eq!(event.payload, "User created: 1");
    }

    #[tokio::test]
    async fn test_every_subscriber_receives_event() {
        let channel = BroadcastNotificationChannel::with_capacity(8);
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();
        assert_eq!(channel.subscriber_count(), 2);

        channel.send("user-events", "user.deleted", "User deleted: 2");

        assert_eq!(first.recv().await.unwrap().payload, "User deleted: 2");
        assert_eq!(second.recv().await.unwrap().payload, "User deleted: 2");
    }

    #[test]
    fn test_send_without_subscribers_is_silent() {
        let channel = BroadcastNotificationChannel::new();
        channel.send("user-events", "user.created", "User created: 1");
        assert_eq!(channel.subscriber_count(), 0);
    }
}
