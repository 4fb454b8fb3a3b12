//! Builder for batch generation requests.

use crate::builder::error::BuildError;
use crate::core::Constraints;
use serde::{Deserialize, Serialize};

/// Default number of moves per scramble.
pub const DEFAULT_LENGTH: usize = 20;

/// Default number of scrambles per batch.
pub const DEFAULT_COUNT: usize = 10;

/// Everything needed to generate one batch of scrambles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Number of scrambles to produce.
    pub count: usize,
    /// Number of moves in each scramble.
    pub length: usize,
    /// Adjacency rules applied to every scramble.
    pub constraints: Constraints,
    /// Seed for a reproducible batch. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            length: DEFAULT_LENGTH,
            constraints: Constraints::default(),
            seed: None,
        }
    }
}

/// Builder for constructing batch requests with a fluent API.
///
/// Unset fields keep the [`BatchRequest::default`] values.
///
/// # Example
///
/// ```rust
/// use scrambler::builder::BatchRequestBuilder;
///
/// let request = BatchRequestBuilder::new()
///     .count(3)
///     .length(25)
///     .avoid_same_axis(true)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.count, 3);
/// assert!(request.constraints.avoid_same_face);
/// assert!(request.constraints.avoid_same_axis);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BatchRequestBuilder {
    request: BatchRequest,
}

impl BatchRequestBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many scrambles to generate.
    pub fn count(mut self, count: usize) -> Self {
        self.request.count = count;
        self
    }

    /// Set the number of moves per scramble.
    pub fn length(mut self, length: usize) -> Self {
        self.request.length = length;
        self
    }

    pub fn avoid_same_face(mut self, enabled: bool) -> Self {
        self.request.constraints.avoid_same_face = enabled;
        self
    }

    pub fn avoid_same_axis(mut self, enabled: bool) -> Self {
        self.request.constraints.avoid_same_axis = enabled;
        self
    }

    /// Replace both adjacency rules at once.
    pub fn constraints(mut self, constraints: Constraints) -> Self {
        self.request.constraints = constraints;
        self
    }

    /// Make the batch reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.request.seed = Some(seed);
        self
    }

    /// Drop any seed so the batch draws from OS entropy.
    pub fn unseeded(mut self) -> Self {
        self.request.seed = None;
        self
    }

    /// Build the request.
    /// Returns an error if the count or length is zero.
    pub fn build(self) -> Result<BatchRequest, BuildError> {
        if self.request.length == 0 {
            return Err(BuildError::ZeroLength);
        }
        if self.request.count == 0 {
            return Err(BuildError::ZeroCount);
        }
        Ok(self.request)
    }
}
