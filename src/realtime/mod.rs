//! Real-time feed event system
//!
//! - `broadcast` - the process-wide fan-out channel and event types
//! - `subscription` - the SSE endpoint that relays events to viewers

pub mod broadcast;
pub mod subscription;

pub use broadcast::{broadcast_event, FeedAction, FeedEvent, FeedEventBroadcast};
pub use subscription::handle_feed_subscription;
