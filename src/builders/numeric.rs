//! Numeric validation builders.

use std::fmt::Display;

use crate::validation::Validation;

use super::check::check_with;
use super::presence::check_present;

/// Validates an optional integer with a predicate; an absent integer fails.
///
/// The error function receives `None` for an absent integer.
///
/// # Example
///
/// ```rust
/// use vetting::check_integer;
///
/// let v = check_integer(
///     |i| i > 0,
///     |i| match i {
///         Some(i) => format!("{} should be greater than zero", i),
///         None => "null should be greater than zero".to_string(),
///     },
/// );
/// assert_eq!(v.validate(&Some(-1)), vec!["-1 should be greater than zero"]);
/// assert_eq!(v.validate(&None), vec!["null should be greater than zero"]);
/// assert!(v.validate(&Some(1)).is_empty());
/// ```
pub fn check_integer<P, F>(predicate: P, error_fn: F) -> Validation<Option<i64>, String>
where
    P: Fn(i64) -> bool + Send + Sync + 'static,
    F: Fn(Option<i64>) -> String + Send + Sync + 'static,
{
    check_present(
        move |value: &i64| predicate(*value),
        move |value: Option<&i64>| error_fn(value.copied()),
    )
}

/// Validates that a number is strictly greater than zero.
///
/// Zero is `N::default()`.
///
/// # Example
///
/// ```rust
/// use vetting::check_positive;
///
/// let v = check_positive::<i32>();
/// assert!(v.validate(&3).is_empty());
/// assert_eq!(v.validate(&0), vec!["must be positive, got 0"]);
/// ```
pub fn check_positive<N>() -> Validation<N, String>
where
    N: PartialOrd + Default + Display + Send + Sync + 'static,
{
    check_with(
        |value: &N| *value > N::default(),
        |value: &N| format!("must be positive, got {}", value),
    )
}

/// Validates that a number is at least `min`.
pub fn check_min<N>(min: N) -> Validation<N, String>
where
    N: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    let bound = min.clone();
    check_with(
        move |value: &N| *value >= min,
        move |value: &N| format!("must be at least {}, got {}", bound, value),
    )
}

/// Validates that a number is at most `max`.
pub fn check_max<N>(max: N) -> Validation<N, String>
where
    N: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    let bound = max.clone();
    check_with(
        move |value: &N| *value <= max,
        move |value: &N| format!("must be at most {}, got {}", bound, value),
    )
}

/// Validates that a number lies within `min..=max`.
///
/// Both bounds are always checked, so an inverted range reports both.
///
/// # Example
///
/// ```rust
/// use vetting::check_in_range;
///
/// let percent = check_in_range(0.0, 100.0);
/// assert!(percent.validate(&42.5).is_empty());
/// assert_eq!(percent.validate(&120.0), vec!["must be at most 100, got 120"]);
/// ```
pub fn check_in_range<N>(min: N, max: N) -> Validation<N, String>
where
    N: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    check_min(min).and(check_max(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_error_sees_absence() {
        let v = check_integer(|i| i < 10, |i| format!("{:?} should be smaller than ten", i));
        assert_eq!(v.validate(&None), vec!["None should be smaller than ten"]);
        assert_eq!(v.validate(&Some(11)), vec!["Some(11) should be smaller than ten"]);
    }

    #[test]
    fn test_positive_rejects_negative_floats() {
        let v = check_positive::<f64>();
        assert_eq!(v.validate(&-0.5), vec!["must be positive, got -0.5"]);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let v = check_in_range(1, 3);
        assert!(v.validate(&1).is_empty());
        assert!(v.validate(&3).is_empty());
        assert_eq!(v.validate(&0), vec!["must be at least 1, got 0"]);
        assert_eq!(v.validate(&4), vec!["must be at most 3, got 4"]);
    }

    #[test]
    fn test_inverted_range_reports_both_bounds() {
        let v = check_in_range(10, 1);
        assert_eq!(
            v.validate(&5),
            vec!["must be at least 10, got 5", "must be at most 1, got 5"]
        );
    }
}
