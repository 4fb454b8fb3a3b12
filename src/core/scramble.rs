//! Ordered move sequences.

use super::constraint::Constraints;
use super::error::ParseError;
use super::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of moves meant to randomize a puzzle.
///
/// Scrambles are immutable once built. The external form is the
/// space-separated notation returned by `Display`.
///
/// # Example
///
/// ```rust
/// use scrambler::core::{Constraints, Scramble};
///
/// let scramble: Scramble = "R U' F2 L".parse().unwrap();
/// assert_eq!(scramble.len(), 4);
/// assert_eq!(scramble.to_string(), "R U' F2 L");
/// assert!(scramble.violations(&Constraints::new(true, true)).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scramble {
    moves: Vec<Move>,
}

/// An adjacent pair of moves breaking an active constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Index of the second move of the pair.
    pub position: usize,
    pub previous: Move,
    pub current: Move,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {} ({}) may not follow {}",
            self.position + 1,
            self.current,
            self.previous
        )
    }
}

impl Scramble {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Adjacent pairs that break `constraints`, in order.
    pub fn violations(&self, constraints: &Constraints) -> Vec<Violation> {
        self.moves
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| !constraints.allows(Some(pair[0].face), pair[1].face))
            .map(|(i, pair)| Violation {
                position: i + 1,
                previous: pair[0],
                current: pair[1],
            })
            .collect()
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Scramble {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moves = s
            .split_whitespace()
            .enumerate()
            .map(|(i, token)| {
                token.parse::<Move>().map_err(|e| ParseError::AtPosition {
                    position: i + 1,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves })
    }
}

impl TryFrom<String> for Scramble {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Scramble> for String {
    fn from(scramble: Scramble) -> Self {
        scramble.to_string()
    }
}

impl<'a> IntoIterator for &'a Scramble {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Face, Modifier};

    #[test]
    fn display_is_space_separated() {
        let scramble = Scramble::new(vec![
            Move::new(Face::R, Modifier::None),
            Move::new(Face::U, Modifier::Inverse),
            Move::new(Face::F, Modifier::Double),
        ]);
        assert_eq!(scramble.to_string(), "R U' F2");
    }

    #[test]
    fn empty_scramble_prints_nothing() {
        let scramble = Scramble::default();
        assert!(scramble.is_empty());
        assert_eq!(scramble.to_string(), "");
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        let scramble: Scramble = "  R   U'\tF2 \n".parse().unwrap();
        assert_eq!(scramble.to_string(), "R U' F2");
    }

    #[test]
    fn parse_reports_position_of_bad_token() {
        let err = "R U X2".parse::<Scramble>().unwrap_err();
        match err {
            ParseError::AtPosition { position, source } => {
                assert_eq!(position, 3);
                assert!(matches!(*source, ParseError::UnknownFace { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn violations_find_same_face_pairs() {
        let scramble: Scramble = "R R2 U L".parse().unwrap();
        let found = scramble.violations(&Constraints::new(true, false));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, 1);
        assert_eq!(found[0].previous.to_string(), "R");
        assert_eq!(found[0].current.to_string(), "R2");
    }

    #[test]
    fn violations_find_same_axis_pairs() {
        let scramble: Scramble = "R L U D F".parse().unwrap();
        let found = scramble.violations(&Constraints::new(false, true));
        let positions: Vec<usize> = found.iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn unconstrained_reports_nothing() {
        let scramble: Scramble = "R R R".parse().unwrap();
        assert!(scramble.violations(&Constraints::unconstrained()).is_empty());
    }

    #[test]
    fn violation_message_is_one_based() {
        let scramble: Scramble = "U U'".parse().unwrap();
        let found = scramble.violations(&Constraints::default());
        assert_eq!(found[0].to_string(), "move 2 (U') may not follow U");
    }

    #[test]
    fn serializes_as_notation() {
        let scramble: Scramble = "R U' F2".parse().unwrap();
        let json = serde_json::to_string(&scramble).unwrap();
        assert_eq!(json, "\"R U' F2\"");
        let back: Scramble = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scramble);
    }
}
