//! Domain events announced on the notification channel.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Topic carrying all user mutation events.
pub const USER_EVENTS_TOPIC: &str = "user-events";

/// Trait for domain events.
///
/// Domain events describe a mutation that already happened and are sent to
/// other consumers through a notification channel.
pub trait DomainEvent: Send + Sync {
    /// Returns the topic the event is published on.
    fn topic(&self) -> &'static str;

    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Returns the human-readable payload.
    fn payload(&self) -> String;
}

/// Mutation events for user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "user_id", rename_all = "snake_case")]
pub enum UserEvent {
    /// A user was persisted for the first time.
    Created(UserId),
    /// A user was deleted.
    Deleted(UserId),
}

impl UserEvent {
    /// Returns the affected user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        match self {
            Self::Created(id) | Self::Deleted(id) => *id,
        }
    }
}

impl DomainEvent for UserEvent {
    fn topic(&self) -> &'static str {
        USER_EVENTS_TOPIC
    }

    fn event_type(&self) -> &'static str {
        match self {
            Self::Created(_) => "user.created",
            Self::Deleted(_) => "user.deleted",
        }
    }

    fn payload(&self) -> String {
        match self {
            Self::Created(id) => format!("User created: {}", id),
            Self::Deleted(id) => format!("User deleted: {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_event() {
        let event = UserEvent::Created(UserId::new(1));
        assert_eq!(event.topic(), "user-events");
        assert_eq!(event.event_type(), "user.created");
        assert_eq!(event.user_id(), UserId::new(1));
        assert_eq!(event.payload(), "User created: 1");
    }

    #[test]
    fn test_deleted_event() {
        let event = UserEvent::Deleted(UserId::new(12));
        assert_eq!(event.event_type(), "user.deleted");
        assert_eq!(event.payload(), "User deleted: 12");
        assert_eq!(event.user_id(), UserId::new(12));
    }
}
