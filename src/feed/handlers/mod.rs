//! Feed endpoint handlers
//!
//! Listing, creation, retrieval, update, and deletion of posts.
//! Multipart handling lives in `form`, wire types and field validation
//! in `types`.

pub mod create;
pub mod delete;
pub mod form;
pub mod get;
pub mod list;
pub mod types;
pub mod update;

pub use create::create_post_handler;
pub use delete::delete_post_handler;
pub use get::get_post_handler;
pub use list::list_posts;
pub use update::update_post_handler;
