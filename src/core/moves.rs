//! A single face turn.

use super::error::ParseError;
use super::face::{Axis, Face};
use super::modifier::Modifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A face combined with a modifier, e.g. `R`, `U'` or `F2`.
///
/// A move has no identity beyond its notation: two moves are equal when
/// they print the same.
///
/// # Example
///
/// ```rust
/// use scrambler::core::{Face, Modifier, Move};
///
/// let mv = Move::new(Face::U, Modifier::Inverse);
/// assert_eq!(mv.to_string(), "U'");
/// assert_eq!("U'".parse::<Move>().unwrap(), mv);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    pub face: Face,
    pub modifier: Modifier,
}

impl Move {
    pub fn new(face: Face, modifier: Modifier) -> Self {
        Self { face, modifier }
    }

    pub fn axis(&self) -> Axis {
        self.face.axis()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.modifier)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let first = chars.next().ok_or(ParseError::Empty)?;
        let face = Face::from_char(first).ok_or_else(|| ParseError::UnknownFace {
            token: token.to_string(),
        })?;
        let modifier = Modifier::from_suffix(chars.as_str(), token)?;
        Ok(Move { face, modifier })
    }
}

impl TryFrom<String> for Move {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}
