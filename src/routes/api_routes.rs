/**
 * API Route Configuration
 *
 * Route tables for the HTTP surface, split into public routes (signup,
 * login, the event stream) and routes behind the access guard.
 *
 * # Routes
 *
 * ## Public
 * - `PUT /auth/signup` - user registration
 * - `POST /auth/login` - user login
 * - `GET /feed/events` - SSE feed event stream
 *
 * ## Protected (bearer token)
 * - `GET /auth/getStatus` - read own status
 * - `PATCH /auth/updateStatus` - update own status
 * - `GET /feed/posts` - paged post listing
 * - `POST /feed/createPost` - create a post (multipart)
 * - `GET/PUT/DELETE /feed/post/{post_id}` - single post operations
 */

use axum::routing::{get, patch, post, put};
use axum::{middleware, Router};

use crate::auth::handlers::{get_status, login, signup, update_status};
use crate::feed::handlers::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts, update_post_handler,
};
use crate::middleware::auth::auth_middleware;
use crate::realtime::subscription::handle_feed_subscription;
use crate::server::state::AppState;

/// Routes reachable without credentials
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", put(signup))
        .route("/auth/login", post(login))
        .route("/feed/events", get(handle_feed_subscription))
}

/// Routes behind the access guard
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/getStatus", get(get_status))
        .route("/auth/updateStatus", patch(update_status))
        .route("/feed/posts", get(list_posts))
        .route("/feed/createPost", post(create_post_handler))
        .route(
            "/feed/post/{post_id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
