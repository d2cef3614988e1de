/**
 * Application State
 *
 * The central state container shared by all handlers: the database
 * pool, the feed broadcast sender, and the loaded configuration. The
 * broadcast sender living here - constructed once in `create_app`,
 * before the router exists - is what guarantees no handler can emit
 * into an unbound channel.
 *
 * `FromRef` impls let handlers extract just the piece they need
 * (Axum's recommended substate pattern).
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::realtime::broadcast::FeedEventBroadcast;
use crate::server::config::ServerConfig;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
    /// Broadcast channel for feed mutation events
    pub feed_broadcast: FeedEventBroadcast,
    /// Loaded server configuration (JWT secret, image directory)
    pub config: Arc<ServerConfig>,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for FeedEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.feed_broadcast.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
