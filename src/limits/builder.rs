//! Builder API for input bounds.

use crate::limits::rules::Limits;

/// Builder for creating [`Limits`]
///
/// Ranges not set keep the [`Limits::default`] bounds.
#[derive(Clone, Debug, Default)]
pub struct LimitsBuilder {
    limits: Limits,
}

impl LimitsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive range of accepted scramble lengths
    pub fn length_range(mut self, min: usize, max: usize) -> Self {
        self.limits.min_length = min;
        self.limits.max_length = max;
        self
    }

    /// Set the inclusive range of accepted batch sizes
    pub fn count_range(mut self, min: usize, max: usize) -> Self {
        self.limits.min_count = min;
        self.limits.max_count = max;
        self
    }

    /// Build the limits
    pub fn build(self) -> Limits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BatchRequestBuilder;

    #[test]
    fn unset_ranges_keep_defaults() {
        assert_eq!(LimitsBuilder::new().build(), Limits::default());
    }

    #[test]
    fn custom_ranges_are_enforced() {
        let limits = LimitsBuilder::new()
            .length_range(1, 5)
            .count_range(2, 3)
            .build();

        let fits = BatchRequestBuilder::new().length(5).count(2).build().unwrap();
        assert!(limits.enforce(&fits).is_success());

        let too_long = BatchRequestBuilder::new().length(6).count(2).build().unwrap();
        assert!(limits.enforce(&too_long).is_failure());

        let too_few = BatchRequestBuilder::new().length(3).count(1).build().unwrap();
        assert!(limits.enforce(&too_few).is_failure());
    }
}
