/**
 * Router Assembly
 *
 * Combines the public and protected route tables, static image
 * serving, CORS, request tracing, and the JSON 404 fallback into the
 * final application router.
 */

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    // The original surface is wide open to any origin; keep that.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(public_routes())
        .merge(protected_routes(app_state.clone()))
        .nest_service("/images", ServeDir::new(&app_state.config.image_dir))
        .fallback(|| async { ApiError::not_found("Not found.") })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
