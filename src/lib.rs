//! Feedline - a small multi-user content feed backend
//!
//! A single Axum process serving account signup/login with bearer-token
//! sessions, post CRUD with image attachments, and near-real-time
//! broadcast of content mutations to connected viewers over SSE.
//! Backed by PostgreSQL via sqlx.
//!
//! # Architecture
//!
//! - **`server`** - configuration, shared state, application assembly
//! - **`routes`** - route tables and router assembly
//! - **`auth`** - credential service, user storage, account handlers
//! - **`feed`** - post storage, image asset lifecycle, feed handlers
//! - **`realtime`** - feed event broadcast and SSE subscription
//! - **`middleware`** - the access guard for protected routes
//! - **`error`** - the closed error taxonomy and its HTTP boundary
//!
//! # Control Flow
//!
//! Inbound request -> access guard (protected routes) -> handler ->
//! storage mutation -> broadcast emission (content mutations only) ->
//! response. Failures are classified into `error::ApiError` at the
//! point they occur and rendered once, at the boundary responder.

pub mod auth;
pub mod error;
pub mod feed;
pub mod middleware;
pub mod realtime;
pub mod routes;
pub mod server;
