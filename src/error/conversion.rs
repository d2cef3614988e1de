/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses. This is the single
 * centralized responder: every handler failure flows through here and
 * produces the uniform error body.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Validation failed.",
 *   "data": [{"field": "email", "message": "..."}]
 * }
 * ```
 *
 * `data` is present only for validation errors.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side failures keep their detail in the log only.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {self}");
        } else {
            tracing::debug!("Request failed ({}): {self}", status.as_u16());
        }

        let body = match self.violations() {
            Some(violations) => serde_json::json!({
                "message": self.message(),
                "data": violations,
            }),
            None => serde_json::json!({
                "message": self.message(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::FieldViolation;

    #[test]
    fn test_validation_response_status() {
        let error = ApiError::validation(
            "Validation failed.",
            vec![FieldViolation::new("email", "Email address already exists.")],
        );
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unauthenticated_response_status() {
        let response = ApiError::unauthenticated("Not authenticated.").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_response_status() {
        let response = ApiError::not_found("Unable to find post.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_without_violations_omits_data() {
        let response =
            ApiError::validation("Malformed multipart form.", Vec::new()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Malformed multipart form.");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_validation_with_violations_carries_data() {
        let response = ApiError::validation(
            "Validation failed.",
            vec![FieldViolation::new("title", "Title must be at least 5 characters.")],
        )
        .into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["data"][0]["field"], "title");
    }
}
