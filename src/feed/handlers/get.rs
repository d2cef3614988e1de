/**
 * Single Post Handler
 *
 * GET /feed/post/{id} - fetch one post with its creator resolved.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::feed::handlers::types::{PostEnvelope, PostResponse};
use crate::feed::posts::get_post;
use crate::server::state::AppState;

/// Get post handler
///
/// # Errors
///
/// * `401 Unauthorized` - guard
/// * `404 Not Found` - no such post
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostEnvelope>, ApiError> {
    let record = get_post(&state.db_pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Unable to find post."))?;

    Ok(Json(PostEnvelope {
        message: "Post fetched.".to_string(),
        post: PostResponse::from(record),
    }))
}
