/**
 * Login Handler
 *
 * Implements user authentication for POST /auth/login.
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 with the same
 *   message, so callers cannot tell which one occurred
 * - Password verification goes through bcrypt
 * - Tokens are minted with a fixed 1-hour expiry
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use chrono::Duration;

use crate::auth::handlers::types::{normalize_email, validate_login, LoginRequest, LoginResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Session token time-to-live
const TOKEN_TTL_HOURS: i64 = 1;

/// Login handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - malformed email
/// * `401 Unauthorized` - unknown email or wrong password
///   (indistinguishable to the caller)
/// * `500 Internal Server Error` - storage, hashing, or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let violations = validate_login(&request);
    if !violations.is_empty() {
        return Err(ApiError::validation("Login validation failed.", violations));
    }

    let email = normalize_email(&request.email);
    tracing::info!("Login request for: {}", email);

    let user = get_user_by_email(&state.db_pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, no such user: {}", email);
            ApiError::unauthenticated("Invalid email or password.")
        })?;

    let valid = verify(request.password.trim(), &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("Internal server error.")
    })?;

    if !valid {
        tracing::warn!("Login failed, wrong password for: {}", email);
        return Err(ApiError::unauthenticated("Invalid email or password."));
    }

    let token = create_token(
        &state.config.jwt_secret,
        user.id,
        &user.email,
        Duration::hours(TOKEN_TTL_HOURS),
    )
    .map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Internal server error.")
    })?;

    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(LoginResponse {
        token,
        user_id: user.id.to_string(),
    }))
}
