//! Authentication and account management
//!
//! - `sessions` - JWT issuance and verification (credential service)
//! - `users` - user model and storage operations
//! - `handlers` - HTTP handlers for signup, login, and status

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{get_status, login, signup, update_status};
pub use sessions::{create_token, verify_token, Claims};
