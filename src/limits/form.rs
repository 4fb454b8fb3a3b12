//! Raw text input for a batch request.

use crate::builder::BatchRequest;
use crate::core::Constraints;
use crate::limits::rules::Limits;
use crate::limits::violations::{Field, LimitErrors, LimitViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The request fields as typed by a user, before any parsing.
///
/// # Example
///
/// ```rust
/// use scrambler::limits::{Limits, RequestForm};
///
/// let form = RequestForm::new("20", "5", "42");
/// let request = form.parse_request(&Limits::default()).unwrap();
///
/// assert_eq!(request.length, 20);
/// assert_eq!(request.count, 5);
/// assert_eq!(request.seed, Some(42));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub length: String,
    pub count: String,
    /// Blank means unseeded.
    pub seed: String,
    pub constraints: Constraints,
}

impl RequestForm {
    pub fn new(length: impl Into<String>, count: impl Into<String>, seed: impl Into<String>) -> Self {
        Self {
            length: length.into(),
            count: count.into(),
            seed: seed.into(),
            constraints: Constraints::default(),
        }
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Parse and bound every field, accumulating ALL violations.
    pub fn parse(&self, limits: &Limits) -> Validation<BatchRequest, NonEmptyVec<LimitViolation>> {
        let length = parse_bounded(
            Field::Length,
            &self.length,
            limits.min_length,
            limits.max_length,
        );
        let count = parse_bounded(Field::Count, &self.count, limits.min_count, limits.max_count);
        let seed = parse_seed(&self.seed);

        if let (Validation::Success(length), Validation::Success(count), Validation::Success(seed)) =
            (&length, &count, &seed)
        {
            return Validation::success(BatchRequest {
                count: *count,
                length: *length,
                constraints: self.constraints,
                seed: *seed,
            });
        }

        // At least one field failed, so all_vec yields the collected failures.
        let checks = vec![length.map(|_| ()), count.map(|_| ()), seed.map(|_| ())];
        Validation::all_vec(checks).map(|_| BatchRequest::default())
    }

    /// [`RequestForm::parse`] as a `Result`.
    pub fn parse_request(&self, limits: &Limits) -> Result<BatchRequest, LimitErrors> {
        LimitErrors::collect(self.parse(limits))
    }
}

fn parse_bounded(
    field: Field,
    raw: &str,
    min: usize,
    max: usize,
) -> Validation<usize, NonEmptyVec<LimitViolation>> {
    let trimmed = raw.trim();
    let Ok(value) = trimmed.parse::<i128>() else {
        return Validation::fail(LimitViolation::NotAnInteger {
            field,
            value: trimmed.to_string(),
        });
    };

    match usize::try_from(value) {
        Ok(value) => Limits::check_range(field, value, min, max),
        Err(_) => Validation::fail(LimitViolation::OutOfRange {
            field,
            min,
            max,
            value,
        }),
    }
}

fn parse_seed(raw: &str) -> Validation<Option<u64>, NonEmptyVec<LimitViolation>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Validation::success(None);
    }
    match seed_value(trimmed) {
        Some(seed) => Validation::success(Some(seed)),
        None => Validation::fail(LimitViolation::InvalidSeed {
            value: trimmed.to_string(),
        }),
    }
}

/// Any integer that fits in 64 bits is a seed. Negative values keep their
/// two's-complement bits, so `-1` and `18446744073709551615` name the
/// same source.
fn seed_value(text: &str) -> Option<u64> {
    text.parse::<u64>()
        .ok()
        .or_else(|| text.parse::<i64>().ok().map(|seed| seed as u64))
}
