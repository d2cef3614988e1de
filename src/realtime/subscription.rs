/**
 * Feed Subscription Handler
 *
 * Server-Sent Events stream for the push channel (GET /feed/events).
 * Every content mutation is delivered under the single SSE event name
 * `posts` with payload `{action, post}`.
 *
 * # Connection Management
 *
 * - Connections are kept alive with the SSE keep-alive mechanism
 * - Lagged receivers skip missed events and keep listening
 * - No events are replayed for late joiners
 */

use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures_util::stream;

use crate::realtime::broadcast::{FeedEventBroadcast, FEED_EVENT_NAME};

/// Handle a feed event subscription (GET /feed/events)
///
/// Subscribes the caller to the process-wide feed broadcast channel and
/// relays every event as SSE. The stream ends only when the broadcast
/// channel closes (process shutdown).
pub async fn handle_feed_subscription(
    State(broadcast_tx): State<FeedEventBroadcast>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    tracing::info!("Feed subscription opened");

    let broadcast_rx = broadcast_tx.subscribe();

    let stream = stream::unfold(broadcast_rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("Failed to serialize feed event: {:?}", e);
                            continue;
                        }
                    };

                    let sse_event = Event::default().event(FEED_EVENT_NAME).data(data);
                    return Some((Ok(sse_event), rx));
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Feed subscriber lagged, skipped {} events", skipped);
                    continue;
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    tracing::debug!("Feed broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(axum::response::sse::KeepAlive::default())
}
