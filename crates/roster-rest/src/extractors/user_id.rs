//! Path extractor for user identifiers.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use roster_core::{RosterError, UserId};

/// `UserId` taken from the `:id` path segment.
///
/// A segment that is not a whole number is rejected with 400.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError(RosterError::validation(e.body_text())))?;

        parse_user_id(&raw).map(UserIdPath)
    }
}

/// Parses a user ID from its textual form.
pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    UserId::parse(raw)
        .map_err(|_| AppError(RosterError::validation(format!("Invalid user ID: {}", raw))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42").unwrap(), UserId::new(42));
        assert!(parse_user_id("abc").is_err());
        assert!(parse_user_id("").is_err());
    }
}
