//! Errors raised while reading scramble notation.

use thiserror::Error;

/// Errors that can occur when parsing moves and scrambles from text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("Empty move token")]
    Empty,

    #[error("Unknown face in '{token}', expected one of R L U D F B")]
    UnknownFace { token: String },

    #[error("Unknown modifier in '{token}', expected nothing, ' or 2")]
    UnknownModifier { token: String },

    #[error("Move {position}: {source}")]
    AtPosition {
        position: usize,
        #[source]
        source: Box<ParseError>,
    },
}
