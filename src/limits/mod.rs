//! Caller-side validation of batch requests.
//!
//! The generator assumes it is handed a sensible positive length and count.
//! This module is where those values are checked before they reach it, using
//! Stillwater's `Validation` type so every bad field is reported in one pass
//! instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use scrambler::limits::{Limits, RequestForm};
//!
//! let form = RequestForm::new("5", "0", "abc");
//! let errors = form.parse_request(&Limits::default()).unwrap_err();
//!
//! // Length, count and seed are all reported together.
//! assert_eq!(errors.violations().len(), 3);
//! ```

pub mod builder;
pub mod form;
pub mod rules;
pub mod violations;

pub use builder::LimitsBuilder;
pub use form::RequestForm;
pub use rules::Limits;
pub use violations::{Field, LimitErrors, LimitViolation};
