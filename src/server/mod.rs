//! Server setup and configuration
//!
//! - `config` - environment configuration and database connection
//! - `state` - shared application state
//! - `init` - application assembly

pub mod config;
pub mod init;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
