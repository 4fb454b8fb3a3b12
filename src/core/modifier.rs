//! Turn modifiers appended to a face symbol.

use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rotation amount/direction suffix of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Quarter turn clockwise, written with no suffix.
    None,
    /// Quarter turn counter-clockwise, written `'`.
    Inverse,
    /// Half turn, written `2`.
    Double,
}

impl Modifier {
    /// All modifiers in the order uniform draws index into.
    pub const ALL: [Modifier; 3] = [Modifier::None, Modifier::Inverse, Modifier::Double];

    /// Suffix used in notation. Empty for [`Modifier::None`].
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::None => "",
            Modifier::Inverse => "'",
            Modifier::Double => "2",
        }
    }

    /// Parse a suffix; `token` is only used for the error message.
    pub(crate) fn from_suffix(suffix: &str, token: &str) -> Result<Modifier, ParseError> {
        match suffix {
            "" => Ok(Modifier::None),
            "'" => Ok(Modifier::Inverse),
            "2" => Ok(Modifier::Double),
            _ => Err(ParseError::UnknownModifier {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
