/**
 * Feed Listing Handler
 *
 * GET /feed/posts?page=N - one fixed-size page of posts, newest first,
 * each with its creator's public identity resolved. `totalItems` is the
 * full unfiltered count so clients can render pagination.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::error::ApiError;
use crate::feed::handlers::types::{parse_page, FeedPageQuery, ListPostsResponse, PostResponse};
use crate::feed::posts::{count_posts, list_posts_page};
use crate::server::state::AppState;

/// List posts handler
///
/// # Errors
///
/// * `401 Unauthorized` - guard
/// * `422 Unprocessable Entity` - non-numeric or non-positive `page`
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<FeedPageQuery>,
) -> Result<Json<ListPostsResponse>, ApiError> {
    let page = parse_page(query.page.as_deref())?;

    let total_items = count_posts(&state.db_pool).await?;
    let posts: Vec<PostResponse> = list_posts_page(&state.db_pool, page)
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    tracing::debug!("Listed {} posts (page {}, total {})", posts.len(), page, total_items);

    Ok(Json(ListPostsResponse {
        message: "Fetched posts.".to_string(),
        posts,
        total_items,
    }))
}
