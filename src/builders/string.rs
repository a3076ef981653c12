//! String validation builders.
//!
//! Rules over optional strings (`Option<String>`) treat an absent string as a
//! failure. Rules over `str` assume presence and can be lifted onto larger
//! values with [`Validation::contramap`].

use regex::Regex;

use crate::validation::Validation;

use super::check::{check, check_with};
use super::presence::check_present;

/// Default message for [`check_string_not_empty`].
pub const STRING_NOT_EMPTY_MESSAGE: &str = "target string should not be empty";

/// Validates an optional string with a predicate; an absent string fails.
///
/// The error function receives `None` for an absent string.
///
/// # Example
///
/// ```rust
/// use vetting::check_string;
///
/// let v = check_string(
///     |address| address.contains("China"),
///     |address| format!("address should contain China, but actual is {}", address.unwrap_or("null")),
/// );
/// assert_eq!(
///     v.validate(&Some("US".to_string())),
///     vec!["address should contain China, but actual is US"]
/// );
/// assert_eq!(v.validate(&None), vec!["address should contain China, but actual is null"]);
/// ```
pub fn check_string<P, F>(predicate: P, error_fn: F) -> Validation<Option<String>, String>
where
    P: Fn(&str) -> bool + Send + Sync + 'static,
    F: Fn(Option<&str>) -> String + Send + Sync + 'static,
{
    check_present(
        move |value: &String| predicate(value.as_str()),
        move |value: Option<&String>| error_fn(value.map(String::as_str)),
    )
}

/// Validates that an optional string is present and non-empty.
///
/// # Example
///
/// ```rust
/// use vetting::check_string_not_empty;
///
/// let v = check_string_not_empty();
/// assert_eq!(v.validate(&None), vec!["target string should not be empty"]);
/// assert_eq!(v.validate(&Some(String::new())), vec!["target string should not be empty"]);
/// assert!(v.validate(&Some("x".to_string())).is_empty());
/// ```
pub fn check_string_not_empty() -> Validation<Option<String>, String> {
    check_string_not_empty_message(STRING_NOT_EMPTY_MESSAGE)
}

/// Validates that an optional string is present and non-empty, with a
/// custom message.
pub fn check_string_not_empty_message(
    message: impl Into<String>,
) -> Validation<Option<String>, String> {
    check(
        |value: &Option<String>| value.as_deref().is_some_and(|s| !s.is_empty()),
        message.into(),
    )
}

/// Validates that a string has at least `min` characters.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn check_min_len(min: usize) -> Validation<str, String> {
    check_with(
        move |value: &str| value.chars().count() >= min,
        move |value: &str| {
            format!(
                "length must be at least {}, got {}",
                min,
                value.chars().count()
            )
        },
    )
}

/// Validates that a string has at most `max` characters.
pub fn check_max_len(max: usize) -> Validation<str, String> {
    check_with(
        move |value: &str| value.chars().count() <= max,
        move |value: &str| {
            format!(
                "length must be at most {}, got {}",
                max,
                value.chars().count()
            )
        },
    )
}

/// Validates that a string has between `min` and `max` characters inclusive.
///
/// # Example
///
/// ```rust
/// use vetting::check_string_len;
///
/// let v = check_string_len(3, 5);
/// assert!(v.validate("abcd").is_empty());
/// assert_eq!(v.validate("ab"), vec!["length must be at least 3, got 2"]);
/// assert_eq!(v.validate("abcdef"), vec!["length must be at most 5, got 6"]);
/// ```
pub fn check_string_len(min: usize, max: usize) -> Validation<str, String> {
    check_min_len(min).and(check_max_len(max))
}

/// Validates that a string matches a regular expression.
///
/// # Errors
///
/// Returns the regex compilation error if `pattern` is invalid, so a bad
/// pattern is rejected when the rule is built rather than when it runs.
///
/// # Example
///
/// ```rust
/// use vetting::check_string_matches;
///
/// let digits = check_string_matches(r"^\d+$").unwrap();
/// assert!(digits.validate("12345").is_empty());
/// assert_eq!(digits.validate("12a"), vec![r"must match pattern '^\d+$', got '12a'"]);
///
/// assert!(check_string_matches("(unclosed").is_err());
/// ```
pub fn check_string_matches(pattern: &str) -> Result<Validation<str, String>, regex::Error> {
    let regex = Regex::new(pattern)?;
    let shown = regex.clone();
    Ok(check_with(
        move |value: &str| regex.is_match(value),
        move |value: &str| format!("must match pattern '{}', got '{}'", shown.as_str(), value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_string_absent_fails() {
        let v = check_string(|s| s == "John", |s| format!("got {:?}", s));
        assert_eq!(v.validate(&None), vec!["got None"]);
        assert_eq!(v.validate(&Some("Jack".to_string())), vec!["got Some(\"Jack\")"]);
        assert!(v.validate(&Some("John".to_string())).is_empty());
    }

    #[test]
    fn test_not_empty_custom_message() {
        let v = check_string_not_empty_message("input is required");
        assert_eq!(v.validate(&None), vec!["input is required"]);
    }

    #[test]
    fn test_length_counts_chars() {
        let v = check_max_len(3);
        assert!(v.validate("日本語").is_empty());
        assert_eq!(v.validate("日本語だ"), vec!["length must be at most 3, got 4"]);
    }

    #[test]
    fn test_len_accumulates_both_bounds() {
        // An inverted range makes every string violate one bound or both.
        let v = check_string_len(5, 2);
        assert_eq!(
            v.validate("abc"),
            vec!["length must be at least 5, got 3", "length must be at most 2, got 3"]
        );
    }

    #[test]
    fn test_matches_applies_to_owned_strings() {
        let v = check_string_matches("^[a-z]+$").unwrap();
        let owned = String::from("abc");
        assert!(v.validate(&owned).is_empty());
    }
}
