//! Move vocabulary and scramble types.
//!
//! This module contains the fixed notation of the puzzle:
//! - Faces and the axis groups pairing opposite faces
//! - Modifiers (none, inverse, double)
//! - Moves, scrambles and the adjacency constraints between moves
//!
//! Everything here is pure data and pure functions. Randomness lives in
//! [`crate::generator`].

mod constraint;
mod error;
mod face;
mod modifier;
mod moves;
mod scramble;

pub use constraint::Constraints;
pub use error::ParseError;
pub use face::{Axis, Face};
pub use modifier::Modifier;
pub use moves::Move;
pub use scramble::{Scramble, Violation};
