//! User-related DTOs.

use roster_core::validation::rules;
use roster_core::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
///
/// Unknown fields such as `id` are ignored; the store assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(custom(function = "rules::not_blank", message = "Name must not be blank"))]
    #[schema(example = "Alice")]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl CreateUserRequest {
    /// Converts the request into an unsaved user.
    #[must_use]
    pub fn into_user(self) -> User {
        User::new(self.name, self.email)
    }
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        request.into_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ValidateExt;

    #[test]
    fn test_valid_request() {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        assert!(request.validate_request().is_ok());

        let user = request.into_user();
        assert!(user.id.is_none());
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn test_blank_name_rejected() {
        let request = CreateUserRequest {
            name: "   ".to_string(),
            email: "alice@example.com".to_string(),
        };
        let err = request.validate_request().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_bad_email_rejected() {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_id_in_body_is_ignored() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"id": 99, "name": "Alice", "email": "alice@example.com"}"#)
                .unwrap();
        assert!(request.into_user().id.is_none());
    }
}
