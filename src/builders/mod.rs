//! Validation builders.
//!
//! This module turns predicates into [`Validation`](crate::Validation) values:
//! - [`check`] / [`check_with`]: a predicate plus a fixed or computed error
//! - [`try_check`] / [`try_check_with`]: the same with checked (fallible) parts
//! - [`CheckBuilder`]: piecewise construction that rejects missing parts
//! - presence and equality: [`check_non_null`], [`check_present`], [`check_equal`]
//! - string and number shortcuts
//! - [`check_all`]: lift an item validation over a slice
//!
//! # Example
//!
//! ```rust
//! use vetting::{check_non_null, check_present};
//!
//! let rule = check_non_null::<i32>().and(check_present(|i: &i32| *i < 10, |_| "too big".to_string()));
//!
//! // Absence does not stop the second rule from running.
//! assert_eq!(rule.validate(&None), vec!["target should not be null", "too big"]);
//! assert_eq!(rule.validate(&Some(12)), vec!["too big"]);
//! assert!(rule.validate(&Some(3)).is_empty());
//! ```

mod all;
mod check;
mod numeric;
mod presence;
mod string;

pub use all::{
    check_all, check_all_sequential, check_all_with, CheckAllOptions, Evaluation,
    DEFAULT_PARALLEL_THRESHOLD,
};
pub use check::{check, check_with, try_check, try_check_with, CheckBuilder};
pub use numeric::{check_in_range, check_integer, check_max, check_min, check_positive};
pub use presence::{
    check_equal, check_non_null, check_non_null_message, check_present, NON_NULL_MESSAGE,
};
pub use string::{
    check_max_len, check_min_len, check_string, check_string_len, check_string_matches,
    check_string_not_empty, check_string_not_empty_message, STRING_NOT_EMPTY_MESSAGE,
};
