/**
 * Signup Handler
 *
 * Implements user registration for PUT /auth/signup.
 *
 * # Registration Process
 *
 * 1. Normalize the email (trim + lowercase)
 * 2. Validate email format, password length, and name - collecting
 *    every violation before any mutation
 * 3. Check email uniqueness against storage
 * 4. Hash the password with bcrypt
 * 5. Persist the user and return its id
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at DEFAULT_COST
 * - Plaintext passwords are never stored or logged
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{normalize_email, validate_signup, SignupRequest, SignupResponse};
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::{ApiError, FieldViolation};
use crate::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - validation failure; the response
///   `data` array lists every violated field, including a duplicate
///   email
/// * `500 Internal Server Error` - hashing or persistence failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let email = normalize_email(&request.email);
    tracing::info!("Signup request for email: {}", email);

    let mut violations = validate_signup(&request);

    // Uniqueness is only worth checking once the shape is plausible.
    if violations.iter().all(|v| v.field != "email")
        && get_user_by_email(&state.db_pool, &email).await?.is_some()
    {
        tracing::warn!("Signup rejected, email already exists: {}", email);
        violations.push(FieldViolation::new("email", "Email address already exists."));
    }

    if !violations.is_empty() {
        return Err(ApiError::validation("Validation failed.", violations));
    }

    let password_hash = hash(request.password.trim(), DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Internal server error.")
    })?;

    // Two signups can pass the uniqueness check together; the UNIQUE
    // constraint catches the loser, which gets the same 422 as a
    // sequential duplicate.
    let user = create_user(&state.db_pool, &email, &password_hash, request.name.trim())
        .await
        .map_err(duplicate_email_as_violation)?;

    tracing::info!("User created: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created.".to_string(),
            user_id: user.id.to_string(),
        }),
    ))
}

/// Classify a user-insert failure
///
/// A unique violation on the email column becomes the same field
/// violation the pre-insert check produces; everything else stays a
/// storage failure.
fn duplicate_email_as_violation(e: sqlx::Error) -> ApiError {
    let is_duplicate = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if is_duplicate {
        ApiError::validation(
            "Validation failed.",
            vec![FieldViolation::new("email", "Email address already exists.")],
        )
    } else {
        ApiError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_unique_insert_failure_stays_internal() {
        let error = duplicate_email_as_violation(sqlx::Error::RowNotFound);
        assert!(matches!(error, ApiError::Database(_)));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
