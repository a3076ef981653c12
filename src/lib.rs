//! # Vetting
//!
//! Composable validations that report every violation of a value as a
//! human-readable message.
//!
//! ## Overview
//!
//! A [`Validation<T, E>`] is a pure function from a value to the ordered list
//! of errors describing why the value is invalid; an empty list means valid.
//! Small rules built from predicates compose into larger ones:
//!
//! - [`Validation::and`] keeps the errors of both sides (accumulation)
//! - [`Validation::or`] passes if either side passes, otherwise keeps both
//! - [`check_all`] lifts an item rule over a slice, isolating faults per item
//!   and removing duplicate messages
//!
//! ## Core Types
//!
//! - [`Validation`]: the composable rule
//! - [`Fault`]: a predicate or error producer could not be evaluated
//! - [`BuildError`]: a rule was constructed without a required part
//! - [`CheckedFn`](checked::CheckedFn): a function that may raise a [`Fault`]
//!
//! ## Example
//!
//! ```rust
//! use vetting::{check_all, check_with, Validation};
//!
//! let positive = check_with(|i: &i32| *i > 0, |i| format!("{} should be > 0", i));
//! assert_eq!(positive.validate(&-1), vec!["-1 should be > 0"]);
//! assert!(positive.validate(&5).is_empty());
//!
//! let all_positive: Validation<[i32], String> = check_all(positive);
//! assert_eq!(
//!     all_positive.validate(&[-1, 0, 1, -1]),
//!     vec!["-1 should be > 0", "0 should be > 0"]
//! );
//! ```

pub mod builders;
pub mod checked;
pub mod error;
pub mod validation;

pub use builders::{
    check, check_all, check_all_sequential, check_all_with, check_equal, check_in_range,
    check_integer, check_max, check_max_len, check_min, check_min_len, check_non_null,
    check_non_null_message, check_positive, check_present, check_string, check_string_len,
    check_string_matches, check_string_not_empty, check_string_not_empty_message, check_with,
    try_check, try_check_with, CheckAllOptions, CheckBuilder, Evaluation,
};
pub use error::{BuildError, Fault};
pub use validation::Validation;

/// Type alias for the outcome of [`Validation::try_validate`].
pub type ValidationResult<E> = Result<Vec<E>, Fault>;
