//! Builders for optional values and equality.
//!
//! Absence is modeled as `Option<T>`. A "must not be null" rule is an ordinary
//! validation over `Option<T>`, and rules about the inner value decide
//! explicitly that an absent value fails.

use std::fmt::Debug;

use crate::validation::Validation;

use super::check::{check, check_with};

/// Default message for [`check_non_null`].
pub const NON_NULL_MESSAGE: &str = "target should not be null";

/// Validates that an optional value is present.
///
/// # Example
///
/// ```rust
/// use vetting::check_non_null;
///
/// let v = check_non_null::<i32>();
/// assert_eq!(v.validate(&None), vec!["target should not be null"]);
/// assert!(v.validate(&Some(1)).is_empty());
/// ```
pub fn check_non_null<T: 'static>() -> Validation<Option<T>, String> {
    check_non_null_message(NON_NULL_MESSAGE)
}

/// Validates that an optional value is present, with a custom message.
pub fn check_non_null_message<T: 'static>(
    message: impl Into<String>,
) -> Validation<Option<T>, String> {
    check(|value: &Option<T>| value.is_some(), message.into())
}

/// Validates the inner value of an option; an absent value always fails.
///
/// The error function receives `None` for an absent value, so the message
/// can say so instead of the check raising a fault.
///
/// # Example
///
/// ```rust
/// use vetting::check_present;
///
/// let v = check_present(
///     |i: &i32| *i < 10,
///     |i: Option<&i32>| match i {
///         Some(i) => format!("{} should be smaller than ten", i),
///         None => "null should be smaller than ten".to_string(),
///     },
/// );
/// assert_eq!(v.validate(&Some(11)), vec!["11 should be smaller than ten"]);
/// assert_eq!(v.validate(&None), vec!["null should be smaller than ten"]);
/// assert!(v.validate(&Some(3)).is_empty());
/// ```
pub fn check_present<T, E, P, F>(predicate: P, error_fn: F) -> Validation<Option<T>, E>
where
    T: 'static,
    E: Clone + Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    F: Fn(Option<&T>) -> E + Send + Sync + 'static,
{
    check_with(
        move |value: &Option<T>| value.as_ref().is_some_and(|inner| predicate(inner)),
        move |value: &Option<T>| error_fn(value.as_ref()),
    )
}

/// Validates that a value equals `expected`.
///
/// Equality is structural, so for `Option` values two absent values are
/// equal. The message names both the expected and the actual value.
///
/// # Example
///
/// ```rust
/// use vetting::check_equal;
///
/// let v = check_equal("abc".to_string());
/// assert_eq!(
///     v.validate(&"asd".to_string()),
///     vec![r#"target should equal to "abc", but actual is "asd""#]
/// );
/// ```
pub fn check_equal<T>(expected: T) -> Validation<T, String>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    Validation::from_fn(move |actual: &T| {
        if *actual == expected {
            Vec::new()
        } else {
            vec![format!(
                "target should equal to {:?}, but actual is {:?}",
                expected, actual
            )]
        }
    })
}
