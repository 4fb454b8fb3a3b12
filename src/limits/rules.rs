//! Bounds on request sizes, enforced with `Validation`.

use crate::builder::BatchRequest;
use crate::limits::violations::{Field, LimitErrors, LimitViolation};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Inclusive bounds a caller places on length and count.
/// Uses Validation to accumulate ALL violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub min_length: usize,
    pub max_length: usize,
    pub min_count: usize,
    pub max_count: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 200,
            min_count: 1,
            max_count: 1000,
        }
    }
}

impl Limits {
    /// Check one value against an inclusive range.
    ///
    /// Zero is always rejected, whatever `min` says: the generator needs a
    /// positive length and count.
    pub fn check_range(
        field: Field,
        value: usize,
        min: usize,
        max: usize,
    ) -> Validation<usize, NonEmptyVec<LimitViolation>> {
        if value == 0 {
            Validation::fail(LimitViolation::NotPositive { field })
        } else if (min..=max).contains(&value) {
            Validation::success(value)
        } else {
            Validation::fail(LimitViolation::OutOfRange {
                field,
                min,
                max,
                value: value as i128,
            })
        }
    }

    pub fn check_length(&self, length: usize) -> Validation<usize, NonEmptyVec<LimitViolation>> {
        Self::check_range(Field::Length, length, self.min_length, self.max_length)
    }

    pub fn check_count(&self, count: usize) -> Validation<usize, NonEmptyVec<LimitViolation>> {
        Self::check_range(Field::Count, count, self.min_count, self.max_count)
    }

    /// Enforce all bounds, accumulating ALL violations.
    /// Returns Validation::Success(()) if every bound holds.
    pub fn enforce(&self, request: &BatchRequest) -> Validation<(), NonEmptyVec<LimitViolation>> {
        let checks = vec![
            self.check_length(request.length),
            self.check_count(request.count),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`Limits::enforce`] as a `Result`.
    pub fn check(&self, request: &BatchRequest) -> Result<(), LimitErrors> {
        LimitErrors::collect(self.enforce(request))
    }
}
