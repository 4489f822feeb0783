//! Error types shared by every layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for Roster.
///
/// A missing user is not an error: lookups return `Option` and the HTTP layer
/// renders the miss. Everything here is a failure of a collaborator or of the
/// request itself.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The request is malformed (bad ID, failed field validation).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The record store rejected a write that clashes with existing data.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The record store is unreachable or failed the statement.
    #[error("Database error: {0}")]
    Database(String),

    /// A cache backend failed. Never leaves the cache implementations.
    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// HTTP status and machine-readable code for this error.
    const fn classify(&self) -> (u16, &'static str) {
        match self {
            Self::Validation(_) => (400, "VALIDATION_ERROR"),
            Self::Conflict(_) => (409, "CONFLICT"),
            Self::Database(_) => (500, "DATABASE_ERROR"),
            Self::Cache(_) => (500, "CACHE_ERROR"),
            Self::Configuration(_) => (500, "CONFIGURATION_ERROR"),
            Self::Internal(_) | Self::Other(_) => (500, "INTERNAL_ERROR"),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.classify().0
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        self.classify().1
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Error body returned by the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Per-field problems, present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// One failed validation rule on one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    pub field: String,
    pub message: String,
    /// Name of the failed rule, e.g. `email` or `not_blank`.
    pub code: String,
}

impl ErrorResponse {
    /// Creates a response without field details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates the response body for a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        Self::new(error.error_code(), error.to_string())
    }

    /// Attaches field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_pairs() {
        let cases = [
            (RosterError::validation("bad id"), 400, "VALIDATION_ERROR"),
            (RosterError::conflict("duplicate"), 409, "CONFLICT"),
            (RosterError::database("down"), 500, "DATABASE_ERROR"),
            (RosterError::Cache("timeout".into()), 500, "CACHE_ERROR"),
            (RosterError::Configuration("missing".into()), 500, "CONFIGURATION_ERROR"),
            (RosterError::internal("oops"), 500, "INTERNAL_ERROR"),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status_code(), status, "{err}");
            assert_eq!(err.error_code(), code, "{err}");
        }
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: RosterError = anyhow::anyhow!("boom").into();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert_eq!(err.to_string(), "boom");
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_errors_are_database_errors() {
        let err: RosterError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, RosterError::Database(_)));

        let err: RosterError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_error_response_body() {
        let response = ErrorResponse::from_error(&RosterError::database("connection refused"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], "DATABASE_ERROR");
        assert_eq!(json["message"], "Database error: connection refused");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let response = ErrorResponse::new("VALIDATION_ERROR", "Request validation failed")
            .with_details(vec![FieldError {
                field: "email".to_string(),
                message: "Invalid email".to_string(),
                code: "email".to_string(),
            }]);

        assert_eq!(response.details.map(|d| d.len()), Some(1));
    }
}
