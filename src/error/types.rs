/**
 * API Error Types
 *
 * This module defines the closed set of error kinds used across all
 * HTTP handlers. Each kind maps deterministically to an HTTP status
 * code, and the whole taxonomy is converted to the uniform
 * `{message, data?}` JSON body at a single boundary (see conversion.rs).
 *
 * # Error Kinds
 *
 * - `Validation` - malformed client input, carries field-level violations (422)
 * - `Unauthenticated` - missing/invalid/expired bearer token (401)
 * - `Forbidden` - valid identity, wrong owner (403)
 * - `NotFound` - addressed resource does not exist (404)
 * - `Database` - storage failure (500)
 * - `Internal` - anything else unclassified (500)
 */

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// A single field-level validation violation
///
/// These are collected during request validation and returned to the
/// client as the `data` array of a 422 response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the offending request field
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// API error type returned by all handlers
///
/// Every collaborator failure is classified into one of these variants
/// at the service boundary; unclassified failures default to 500.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input failed validation (422)
    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },

    /// Missing, malformed, or expired credentials (401)
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated caller does not own the resource (403)
    #[error("{0}")]
    Forbidden(String),

    /// Addressed resource does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Storage layer failure (500)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unclassified server-side failure (500)
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a validation error from a list of field violations
    pub fn validation(message: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        Self::Validation {
            message: message.into(),
            violations,
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-visible message for this error
    ///
    /// Storage failures are collapsed to a generic message so the
    /// response never leaks query detail; the underlying error is
    /// logged at the conversion boundary instead.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Unauthenticated(message) => message.clone(),
            Self::Forbidden(message) => message.clone(),
            Self::NotFound(message) => message.clone(),
            Self::Database(_) => "Internal server error.".to_string(),
            Self::Internal { message } => message.clone(),
        }
    }

    /// Get the field violations, if this is a validation error carrying
    /// at least one
    ///
    /// A validation error with no violations reads like any other
    /// message-only error on the wire: no `data` key at all.
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            Self::Validation { violations, .. } if !violations.is_empty() => Some(violations),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let validation = ApiError::validation("Validation failed.", vec![]);
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let unauthenticated = ApiError::unauthenticated("Not authenticated.");
        assert_eq!(unauthenticated.status_code(), StatusCode::UNAUTHORIZED);

        let forbidden = ApiError::forbidden("Not yours.");
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

        let not_found = ApiError::not_found("No such post.");
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let internal = ApiError::internal("boom");
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let database = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(database.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_carries_violations() {
        let error = ApiError::validation(
            "Validation failed.",
            vec![
                FieldViolation::new("email", "Please enter a valid email."),
                FieldViolation::new("name", "Name must not be empty."),
            ],
        );

        let violations = error.violations().unwrap();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "email");
        assert_eq!(violations[1].field, "name");
    }

    #[test]
    fn test_non_validation_has_no_violations() {
        let error = ApiError::not_found("No such post.");
        assert!(error.violations().is_none());
    }

    #[test]
    fn test_empty_violation_list_is_omitted() {
        let error = ApiError::validation("Malformed multipart form.", Vec::new());
        assert!(error.violations().is_none());
    }

    #[test]
    fn test_database_message_is_generic() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.message(), "Internal server error.");
    }

    #[test]
    fn test_violation_serialization() {
        let violation = FieldViolation::new("title", "Title must be at least 5 characters.");
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "title",
                "message": "Title must be at least 5 characters."
            })
        );
    }
}
