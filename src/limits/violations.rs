//! Violations found while validating user input.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A request field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Count,
    Seed,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Length => "Scramble length",
            Field::Count => "Scramble count",
            Field::Seed => "Seed",
        };
        f.write_str(name)
    }
}

/// Errors found while checking a request against [`super::Limits`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LimitViolation {
    #[error("{field} must be an integer (got '{value}')")]
    NotAnInteger { field: Field, value: String },

    #[error("{field} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        field: Field,
        min: usize,
        max: usize,
        value: i128,
    },

    #[error("{field} must be positive")]
    NotPositive { field: Field },

    #[error("Seed must be blank or an integer (got '{value}')")]
    InvalidSeed { value: String },
}

impl LimitViolation {
    pub fn field(&self) -> Field {
        match self {
            Self::NotAnInteger { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::NotPositive { field } => *field,
            Self::InvalidSeed { .. } => Field::Seed,
        }
    }
}

/// Every violation found in one validation pass.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{}", render(.0))]
pub struct LimitErrors(pub Vec<LimitViolation>);

fn render(violations: &[LimitViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LimitErrors {
    /// Convert an accumulated validation into a `Result`.
    pub fn collect<T>(validation: Validation<T, NonEmptyVec<LimitViolation>>) -> Result<T, Self> {
        match validation {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => Err(Self(errors.iter().cloned().collect())),
        }
    }

    pub fn violations(&self) -> &[LimitViolation] {
        &self.0
    }
}
