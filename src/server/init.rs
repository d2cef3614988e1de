/**
 * Server Initialization
 *
 * Builds the application from loaded configuration:
 *
 * 1. Connect to the database and run migrations (mandatory)
 * 2. Create the feed broadcast channel
 * 3. Assemble the router with the shared state
 *
 * The broadcast channel is created before the router, so every
 * mutation handler holds a bound sender from the first request on.
 */

use std::sync::Arc;

use axum::Router;
use tokio::sync::broadcast;

use crate::realtime::broadcast::FeedEvent;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;

/// Broadcast channel capacity; slow subscribers past this lag and skip
const BROADCAST_CAPACITY: usize = 1000;

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing feedline server");

    let db_pool = connect_database(&config.database_url).await?;

    let (feed_broadcast, _) = broadcast::channel::<FeedEvent>(BROADCAST_CAPACITY);

    let app_state = AppState {
        db_pool,
        feed_broadcast,
        config: Arc::new(config),
    };

    tracing::info!("State and broadcast channel initialized");

    Ok(create_router(app_state))
}
