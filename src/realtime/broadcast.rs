/**
 * Feed Event Broadcasting
 *
 * Process-wide fan-out of content-mutation events to all connected
 * viewers. Events go through a `tokio::sync::broadcast` channel that is
 * created once in `create_app` and injected into handlers through
 * `AppState`, so it always exists before any route can emit.
 *
 * Delivery is best-effort: no buffering for listeners that connect
 * later (beyond channel capacity), no acknowledgment, and zero
 * subscribers is not an error.
 */

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

/// SSE event name all feed mutations are published under
pub const FEED_EVENT_NAME: &str = "posts";

/// The kind of content mutation an event describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedAction {
    Create,
    Update,
    Delete,
}

/// A single feed mutation event
///
/// `post` carries the full post document for create/update, or the bare
/// post id (as a JSON string) for delete.
#[derive(Clone, Debug, Serialize)]
pub struct FeedEvent {
    pub action: FeedAction,
    pub post: serde_json::Value,
}

impl FeedEvent {
    pub fn new(action: FeedAction, post: serde_json::Value) -> Self {
        Self { action, post }
    }

    /// Event for a deleted post, carrying only its identifier
    pub fn deleted(post_id: Uuid) -> Self {
        Self {
            action: FeedAction::Delete,
            post: serde_json::Value::String(post_id.to_string()),
        }
    }
}

/// Broadcast channel for feed events
///
/// Cloned into every handler that mutates content.
pub type FeedEventBroadcast = broadcast::Sender<FeedEvent>;

/// Broadcast a feed event to all subscribers
///
/// Returns the number of subscribers that received the event; zero
/// subscribers is normal and not an error.
pub fn broadcast_event(broadcast_tx: &FeedEventBroadcast, event: FeedEvent) -> usize {
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!("Feed event broadcast to {} subscribers", subscriber_count);
            subscriber_count
        }
        Err(_) => {
            tracing::debug!("No subscribers to receive feed event");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> FeedEvent {
        FeedEvent::new(
            FeedAction::Create,
            serde_json::json!({"id": "abc", "title": "hello"}),
        )
    }

    #[tokio::test]
    async fn test_broadcast_with_subscriber() {
        let (tx, mut rx) = broadcast::channel::<FeedEvent>(100);

        let count = broadcast_event(&tx, sample_event());
        assert_eq!(count, 1);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.action, FeedAction::Create);
    }

    #[tokio::test]
    async fn test_broadcast_no_subscribers() {
        let (tx, _) = broadcast::channel::<FeedEvent>(100);
        drop(tx.subscribe());

        let count = broadcast_event(&tx, sample_event());
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_broadcast_multiple_subscribers() {
        let (tx, _) = broadcast::channel::<FeedEvent>(100);
        let mut rx1 = tx.subscribe();
        let mut rx2 = tx.subscribe();
        let mut rx3 = tx.subscribe();

        let count = broadcast_event(&tx, sample_event());
        assert_eq!(count, 3);

        for rx in [&mut rx1, &mut rx2, &mut rx3] {
            let received = rx.recv().await.unwrap();
            assert_eq!(received.action, FeedAction::Create);
        }
    }

    #[test]
    fn test_action_serializes_lowercase() {
        let json = serde_json::to_value(FeedAction::Update).unwrap();
        assert_eq!(json, serde_json::json!("update"));
    }

    #[test]
    fn test_delete_event_carries_bare_id() {
        let id = Uuid::new_v4();
        let event = FeedEvent::deleted(id);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "delete", "post": id.to_string()})
        );
    }
}
