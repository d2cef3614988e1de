/**
 * Post Deletion Handler
 *
 * DELETE /feed/post/{id} - removes the post row and its image asset
 * (best-effort), then fans out a `delete` event carrying only the post
 * id. The owner's post collection needs no separate maintenance: it is
 * derived from the posts table at query time.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::feed::handlers::types::{ensure_owner, MessageResponse};
use crate::feed::images::remove_image;
use crate::feed::posts::{delete_post, get_post};
use crate::middleware::auth::AuthUser;
use crate::realtime::broadcast::{broadcast_event, FeedEvent};
use crate::server::state::AppState;

/// Delete post handler
///
/// # Errors
///
/// * `401 Unauthorized` - guard
/// * `403 Forbidden` - caller is not the post's owner
/// * `404 Not Found` - no such post
pub async fn delete_post_handler(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let existing = get_post(&state.db_pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Unable to find the post to delete."))?;

    ensure_owner(
        existing.creator_id,
        user.user_id,
        "Not authorized to delete this post.",
    )?;

    remove_image(&state.config.image_dir, &existing.image_url).await;

    delete_post(&state.db_pool, post_id).await?;

    tracing::info!("Post {} deleted by {}", post_id, user.user_id);

    broadcast_event(&state.feed_broadcast, FeedEvent::deleted(post_id));

    Ok(Json(MessageResponse {
        message: "Post deleted.".to_string(),
    }))
}
