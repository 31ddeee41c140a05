//! Shared API types: errors and the JSON extractor

mod error;
mod json;

pub use error::{ApiError, ErrorResponse};
pub use json::Json;
