//! Scrambler: constrained random scramble generation for 3x3 puzzles.
//!
//! A scramble is a sequence of face turns such as `R U' F2 L`. Scrambler
//! draws them at random while keeping consecutive moves apart: optionally
//! never turning the same face twice in a row, and optionally never turning
//! two faces on the same axis in a row.
//!
//! The generator is a pure core. Randomness is always passed in as an
//! explicit source, so a seeded batch reproduces exactly.
//!
//! # Modules
//!
//! - [`core`]: faces, axes, modifiers, moves, scrambles and constraints
//! - [`generator`]: single scrambles and seeded batches
//! - [`builder`]: batch requests with a fluent builder
//! - [`limits`]: accumulating validation of user-supplied request fields
//! - [`session`]: the running list of generated scrambles
//! - [`export`]: plain-text file and clipboard formats
//! - [`config`]: TOML settings for defaults and bounds
//!
//! # Example
//!
//! ```rust
//! use scrambler::builder::BatchRequestBuilder;
//! use scrambler::generator::generate_batch;
//!
//! let request = BatchRequestBuilder::new()
//!     .count(2)
//!     .length(20)
//!     .avoid_same_axis(true)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! for scramble in generate_batch(&request) {
//!     assert_eq!(scramble.len(), 20);
//!     assert!(scramble.violations(&request.constraints).is_empty());
//! }
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod export;
pub mod generator;
pub mod limits;
pub mod session;

// Re-export commonly used types
pub use crate::builder::{BatchRequest, BatchRequestBuilder};
pub use crate::core::{Axis, Constraints, Face, Modifier, Move, Scramble};
pub use crate::generator::{generate_batch, generate_one};
