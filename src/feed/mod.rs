//! Content feed
//!
//! - `posts` - post model and storage operations
//! - `images` - uploaded asset lifecycle
//! - `handlers` - HTTP handlers for the feed endpoints

pub mod handlers;
pub mod images;
pub mod posts;

pub use handlers::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts, update_post_handler,
};
