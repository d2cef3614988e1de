/**
 * Post Creation Handler
 *
 * POST /feed/createPost - multipart form with `title`, `content`, and a
 * required `image` file part.
 *
 * # Ordering
 *
 * Field validation runs before the image asset is persisted and before
 * any storage write, so a rejected request leaves no trace. After the
 * post row is written, a `create` event with the full document fans out
 * to all connected viewers.
 */

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};

use crate::auth::users::get_user_by_id;
use crate::error::{ApiError, FieldViolation};
use crate::feed::handlers::form::collect_post_form;
use crate::feed::handlers::types::{validate_post_fields, CreatePostResponse, CreatorResponse, PostResponse};
use crate::feed::images::{extension_for, save_image};
use crate::feed::posts::create_post;
use crate::middleware::auth::AuthUser;
use crate::realtime::broadcast::{broadcast_event, FeedAction, FeedEvent};
use crate::server::state::AppState;

/// Create post handler
///
/// # Errors
///
/// * `401 Unauthorized` - guard
/// * `404 Not Found` - the authenticated user's account no longer exists
/// * `422 Unprocessable Entity` - short title/content, missing image
///   part, or unaccepted image type
pub async fn create_post_handler(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreatePostResponse>), ApiError> {
    let form = collect_post_form(multipart).await?;

    let violations = validate_post_fields(&form.title, &form.content);
    if !violations.is_empty() {
        return Err(ApiError::validation("Validation failed.", violations));
    }

    let upload = form.image_file.ok_or_else(|| {
        ApiError::validation(
            "Validation failed.",
            vec![FieldViolation::new("image", "Image file is required.")],
        )
    })?;

    let extension = extension_for(&upload.content_type).ok_or_else(|| {
        ApiError::validation(
            "Validation failed.",
            vec![FieldViolation::new(
                "image",
                "Only png, jpg, and jpeg images are accepted.",
            )],
        )
    })?;

    let image_url = save_image(&state.config.image_dir, &upload.bytes, extension).await?;

    let post = create_post(
        &state.db_pool,
        form.title.trim(),
        form.content.trim(),
        &image_url,
        user.user_id,
    )
    .await?;

    let creator_record = get_user_by_id(&state.db_pool, user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Unable to find the user who posted."))?;

    let creator = CreatorResponse {
        id: creator_record.id.to_string(),
        name: creator_record.name,
    };
    let response_post = PostResponse::from_post(post, creator.clone());

    tracing::info!("Post {} created by {}", response_post.id, user.user_id);

    match serde_json::to_value(&response_post) {
        Ok(payload) => {
            broadcast_event(&state.feed_broadcast, FeedEvent::new(FeedAction::Create, payload));
        }
        Err(e) => tracing::error!("Failed to serialize create event: {:?}", e),
    }

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            message: "Post created.".to_string(),
            post: response_post,
            creator,
        }),
    ))
}
