//! API error types and HTTP conversion
//!
//! A closed error taxonomy (`ApiError`) constructed at the point of
//! failure and matched at a single boundary responder that emits the
//! uniform `{message, data?}` JSON error body.

pub mod conversion;
pub mod types;

pub use types::{ApiError, FieldViolation};
