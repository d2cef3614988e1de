//! Account endpoint handlers
//!
//! Signup, login, and status read/update. Request/response types and
//! the shared validation helpers live in `types`.

pub mod login;
pub mod signup;
pub mod status;
pub mod types;

pub use login::login;
pub use signup::signup;
pub use status::{get_status, update_status};
