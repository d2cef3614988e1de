/**
 * Post Update Handler
 *
 * PUT /feed/post/{id} - multipart form like creation, but the `image`
 * file part is optional. The image reference resolves in order: new
 * upload, then the text `image` field (the client echoing an existing
 * reference), then the stored reference. When the resolution changes
 * the reference, the previous asset is deleted best-effort.
 */

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::error::{ApiError, FieldViolation};
use crate::feed::handlers::form::collect_post_form;
use crate::feed::handlers::types::{
    ensure_owner, validate_post_fields, CreatorResponse, PostEnvelope, PostResponse,
};
use crate::feed::images::{extension_for, remove_image, save_image};
use crate::feed::posts::{get_post, update_post};
use crate::middleware::auth::AuthUser;
use crate::realtime::broadcast::{broadcast_event, FeedAction, FeedEvent};
use crate::server::state::AppState;

/// Update post handler
///
/// # Errors
///
/// * `401 Unauthorized` - guard
/// * `403 Forbidden` - caller is not the post's owner
/// * `404 Not Found` - no such post
/// * `422 Unprocessable Entity` - short title/content, unaccepted image
///   type, or no resolvable image reference
pub async fn update_post_handler(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<PostEnvelope>, ApiError> {
    let form = collect_post_form(multipart).await?;

    let violations = validate_post_fields(&form.title, &form.content);
    if !violations.is_empty() {
        return Err(ApiError::validation("Validation failed.", violations));
    }

    let existing = get_post(&state.db_pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Unable to find the post to update."))?;

    ensure_owner(
        existing.creator_id,
        user.user_id,
        "Not authorized to edit this post.",
    )?;

    let image_url = match form.image_file {
        Some(upload) => {
            let extension = extension_for(&upload.content_type).ok_or_else(|| {
                ApiError::validation(
                    "Validation failed.",
                    vec![FieldViolation::new(
                        "image",
                        "Only png, jpg, and jpeg images are accepted.",
                    )],
                )
            })?;
            save_image(&state.config.image_dir, &upload.bytes, extension).await?
        }
        None => form
            .image_field
            .unwrap_or_else(|| existing.image_url.clone()),
    };

    if image_url.trim().is_empty() {
        return Err(ApiError::validation(
            "Validation failed.",
            vec![FieldViolation::new("image", "No image reference could be resolved.")],
        ));
    }

    // Replacing the reference orphans the old asset; clean it up.
    if image_url != existing.image_url {
        remove_image(&state.config.image_dir, &existing.image_url).await;
    }

    let post = update_post(
        &state.db_pool,
        post_id,
        form.title.trim(),
        form.content.trim(),
        &image_url,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Unable to find the post to update."))?;

    let creator = CreatorResponse {
        id: existing.creator_id.to_string(),
        name: existing.creator_name,
    };
    let response_post = PostResponse::from_post(post, creator);

    tracing::info!("Post {} updated by {}", response_post.id, user.user_id);

    match serde_json::to_value(&response_post) {
        Ok(payload) => {
            broadcast_event(&state.feed_broadcast, FeedEvent::new(FeedAction::Update, payload));
        }
        Err(e) => tracing::error!("Failed to serialize update event: {:?}", e),
    }

    Ok(Json(PostEnvelope {
        message: "Post updated.".to_string(),
        post: response_post,
    }))
}
