//! Build errors for batch requests.

use thiserror::Error;

/// Errors that can occur when building a batch request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Scramble length must be positive. Call .length(n) with n > 0")]
    ZeroLength,

    #[error("Scramble count must be positive. Call .count(n) with n > 0")]
    ZeroCount,
}
