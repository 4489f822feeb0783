//! Notification channel trait and the event envelope.

use chrono::{DateTime, Utc};
use roster_core::DomainEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One-way publisher of named events on a topic.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationChannel: Send + Sync {
    /// Publishes `payload` as `event_name` on `topic`. Never blocks on
    /// delivery and never reports failure.
    fn send(&self, topic: &str, event_name: &str, payload: &str);
}

/// Typed helpers over [`NotificationChannel`].
pub trait NotificationChannelExt: NotificationChannel {
    /// Publishes a domain event on its own topic.
    fn publish<E: DomainEvent + ?Sized>(&self, event: &E) {
        self.send(event.topic(), event.event_type(), &event.payload());
    }
}

impl<T: NotificationChannel + ?Sized> NotificationChannelExt for T {}

/// A notification as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Unique, time-ordered event ID.
    pub event_id: Uuid,
    pub topic: String,
    pub event_name: String,
    pub payload: String,
    pub timestamp: DateTime<Utc>,
}

impl NotificationEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        event_name: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            topic: topic.into(),
            event_name: event_name.into(),
            payload: payload.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use roster_core::{UserEvent, UserId};

    #[test]
    fn test_publish_forwards_event_fields() {
        let mut channel = MockNotificationChannel::new();
        channel
            .expect_send()
            .with(eq("user-events"), eq("user.deleted"), eq("User deleted: 3"))
            .times(1)
            .return_const(());

        channel.publish(&UserEvent::Deleted(UserId::new(3)));
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = NotificationEvent::new("t", "e", "p");
        let b = NotificationEvent::new("t", "e", "p");
        assert_ne!(a.event_id, b.event_id);
    }

    #[test]
    fn test_event_serializes_as_json() {
        let event = NotificationEvent::new("user-events", "user.created", "User created: 1");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["topic"], "user-events");
        assert_eq!(json["event_name"], "user.created");
        assert_eq!(json["payload"], "User created: 1");
    }
}
