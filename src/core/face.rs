//! Puzzle faces and the axis groups pairing opposite faces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rotation axis shared by two opposite faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// One of the six turnable faces.
///
/// Each face belongs to exactly one [`Axis`], and every axis holds
/// exactly two faces.
///
/// # Example
///
/// ```rust
/// use scrambler::core::{Axis, Face};
///
/// assert_eq!(Face::R.axis(), Axis::X);
/// assert_eq!(Face::R.axis(), Face::L.axis());
/// assert_ne!(Face::R.axis(), Face::U.axis());
/// assert_eq!(Face::F.symbol(), "F");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    R,
    L,
    U,
    D,
    F,
    B,
}

impl Face {
    /// All faces, in the order uniform draws index into.
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    /// The axis group this face turns about.
    pub fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Single-letter notation for this face.
    pub fn symbol(self) -> &'static str {
        match self {
            Face::R => "R",
            Face::L => "L",
            Face::U => "U",
            Face::D => "D",
            Face::F => "F",
            Face::B => "B",
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Face> {
        match c {
            'R' => Some(Face::R),
            'L' => Some(Face::L),
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_axis_holds_two_faces() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let on_axis: Vec<Face> = Face::ALL
                .into_iter()
                .filter(|face| face.axis() == axis)
                .collect();
            assert_eq!(on_axis.len(), 2, "{axis}");
        }
    }

    #[test]
    fn symbols_round_trip() {
        for face in Face::ALL {
            let c = face.symbol().chars().next().unwrap();
            assert_eq!(Face::from_char(c), Some(face));
            assert_eq!(face.to_string(), face.symbol());
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        for c in ['X', 'r', 'M', ' '] {
            assert_eq!(Face::from_char(c), None);
        }
    }
}
