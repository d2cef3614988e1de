//! Request processing middleware
//!
//! Currently just the access guard that protects authenticated routes.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
