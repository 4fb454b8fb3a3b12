//! Transient state carried while building one scramble.

use crate::core::{Constraints, Face};

/// The most recently chosen face.
///
/// Created fresh for every scramble and dropped once it is complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationContext {
    last_face: Option<Face>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_face(&self) -> Option<Face> {
        self.last_face
    }

    /// Check a candidate against the previous step (pure)
    pub fn accepts(&self, constraints: &Constraints, candidate: Face) -> bool {
        constraints.allows(self.last_face, candidate)
    }

    /// Remember `face` as the previous step.
    pub fn record(&mut self, face: Face) {
        self.last_face = Some(face);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_has_no_predecessor() {
        let ctx = GenerationContext::new();
        assert_eq!(ctx.last_face(), None);
        assert!(ctx.accepts(&Constraints::new(true, true), Face::B));
    }

    #[test]
    fn record_tracks_previous_face() {
        let mut ctx = GenerationContext::new();
        ctx.record(Face::D);
        assert_eq!(ctx.last_face(), Some(Face::D));

        let rules = Constraints::new(false, true);
        assert!(!ctx.accepts(&rules, Face::U));
        assert!(ctx.accepts(&rules, Face::R));
    }
}
