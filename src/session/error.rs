//! Session error types.

use thiserror::Error;

/// Errors that can occur when picking scrambles from a list
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// Nothing was selected
    #[error("No scrambles selected")]
    EmptySelection,

    /// A selected index does not exist
    #[error("Scramble {index} does not exist (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
