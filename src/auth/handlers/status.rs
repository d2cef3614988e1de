/**
 * Status Handlers
 *
 * Read and update the authenticated user's status line. The identity
 * always comes from the access guard, never from the request body, so
 * a cross-user status update is structurally impossible.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{validate_status, StatusResponse, UpdateStatusRequest, UpdateStatusResponse};
use crate::auth::users::{get_user_by_id, update_user_status};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Get the authenticated user's status (GET /auth/getStatus)
///
/// # Errors
///
/// * `401 Unauthorized` - no valid identity attached (guard)
/// * `404 Not Found` - the identified user no longer exists
pub async fn get_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<StatusResponse>, ApiError> {
    let record = get_user_by_id(&state.db_pool, user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("No account exists for the logged-in user."))?;

    Ok(Json(StatusResponse {
        status: record.status,
    }))
}

/// Update the authenticated user's status (PATCH /auth/updateStatus)
///
/// # Errors
///
/// * `401 Unauthorized` - no valid identity attached (guard)
/// * `404 Not Found` - the identified user no longer exists
/// * `422 Unprocessable Entity` - empty status
pub async fn update_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, ApiError> {
    let violations = validate_status(&request.status);
    if !violations.is_empty() {
        return Err(ApiError::validation("Validation failed.", violations));
    }

    let record = update_user_status(&state.db_pool, user.user_id, request.status.trim())
        .await?
        .ok_or_else(|| ApiError::not_found("No account exists for the logged-in user."))?;

    tracing::info!("Status updated for user {}", user.user_id);

    Ok(Json(UpdateStatusResponse {
        message: "Status updated.".to_string(),
        status: record.status,
    }))
}
