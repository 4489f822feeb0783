//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A user record.
///
/// `id` is `None` until the record store persists the user and assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier.
    pub id: Option<UserId>,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

impl User {
    /// Creates a new, not yet persisted user.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns a copy of this user carrying the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Identity comparison: two persisted users are the same record when their
    /// identifiers match, regardless of the other fields.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_not_persisted() {
        let user = User::new("Alice", "alice@example.com");
        assert!(user.id.is_none());
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn test_same_identity() {
        let a = User::new("Alice", "alice@example.com").with_id(UserId::new(1));
        let renamed = User::new("Alicia", "alice@example.com").with_id(UserId::new(1));
        let other = User::new("Alice", "alice@example.com").with_id(UserId::new(2));

        assert!(a.same_identity(&renamed));
        assert!(!a.same_identity(&other));
        assert!(!User::new("Alice", "a@b.c").same_identity(&User::new("Alice", "a@b.c")));
    }

    #[test]
    fn test_json_shape() {
        let user = User::new("Bob", "bob@example.com").with_id(UserId::new(3));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Bob");
        assert_eq!(json["email"], "bob@example.com");

        let unsaved = serde_json::to_value(User::new("Bob", "bob@example.com")).unwrap();
        assert!(unsaved["id"].is_null());
    }
}
