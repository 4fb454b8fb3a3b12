//! Builder API for batch generation requests.

pub mod error;
pub mod request;

pub use error::BuildError;
pub use request::{BatchRequest, BatchRequestBuilder, DEFAULT_COUNT, DEFAULT_LENGTH};
