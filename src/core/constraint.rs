//! Adjacency constraints between consecutive moves.
//!
//! Constraints are pure predicates over the previous face and a candidate
//! face. They never look at modifiers.

use super::face::Face;
use serde::{Deserialize, Serialize};

/// Which adjacency rules are active while generating or checking a scramble.
///
/// Both rules may be active at once. With six faces over three axes at
/// most two faces are ever excluded, so at least four remain eligible.
///
/// # Example
///
/// ```rust
/// use scrambler::core::{Constraints, Face};
///
/// let rules = Constraints::new(true, true);
///
/// // The first move has no predecessor.
/// assert!(rules.allows(None, Face::R));
///
/// assert!(!rules.allows(Some(Face::R), Face::R));
/// assert!(!rules.allows(Some(Face::R), Face::L));
/// assert!(rules.allows(Some(Face::R), Face::U));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Consecutive moves may not turn the same face.
    pub avoid_same_face: bool,
    /// Consecutive moves may not turn faces on the same axis.
    pub avoid_same_axis: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            avoid_same_face: true,
            avoid_same_axis: false,
        }
    }
}

impl Constraints {
    pub fn new(avoid_same_face: bool, avoid_same_axis: bool) -> Self {
        Self {
            avoid_same_face,
            avoid_same_axis,
        }
    }

    /// No adjacency rules at all.
    pub fn unconstrained() -> Self {
        Self::new(false, false)
    }

    /// Replace a rule where an override is given; keep it otherwise.
    pub fn with_overrides(
        self,
        avoid_same_face: Option<bool>,
        avoid_same_axis: Option<bool>,
    ) -> Self {
        Self {
            avoid_same_face: avoid_same_face.unwrap_or(self.avoid_same_face),
            avoid_same_axis: avoid_same_axis.unwrap_or(self.avoid_same_axis),
        }
    }

    /// Check whether `candidate` may follow `previous`.
    ///
    /// Always true when there is no previous face.
    pub fn allows(&self, previous: Option<Face>, candidate: Face) -> bool {
        let Some(previous) = previous else {
            return true;
        };
        if self.avoid_same_face && candidate == previous {
            return false;
        }
        if self.avoid_same_axis && candidate.axis() == previous.axis() {
            return false;
        }
        true
    }

    /// Faces that may follow `previous`, in [`Face::ALL`] order.
    pub fn eligible_faces(&self, previous: Option<Face>) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|face| self.allows(previous, *face))
            .collect()
    }

    /// At least one face may follow `previous`.
    pub fn is_feasible(&self, previous: Option<Face>) -> bool {
        Face::ALL
            .into_iter()
            .any(|face| self.allows(previous, face))
    }
}
