//! Property-based tests for the validation laws.

use proptest::prelude::*;
use stillwater::Semigroup;
use vetting::{check, check_all_sequential, check_all_with, check_with, CheckAllOptions, Validation};

fn above(bound: i32) -> Validation<i32, String> {
    check_with(move |i: &i32| *i > bound, move |i| format!("{} should be > {}", i, bound))
}

fn below(bound: i32) -> Validation<i32, String> {
    check_with(move |i: &i32| *i < bound, move |i| format!("{} should be < {}", i, bound))
}

proptest! {
    #[test]
    fn prop_check_fails_iff_predicate_false(value in any::<i32>(), bound in any::<i32>()) {
        let errors = check(move |i: &i32| *i > bound, "error".to_string()).validate(&value);
        if value > bound {
            prop_assert!(errors.is_empty());
        } else {
            prop_assert_eq!(errors, vec!["error".to_string()]);
        }
    }

    #[test]
    fn prop_check_with_uses_error_fn(value in any::<i32>(), bound in any::<i32>()) {
        let errors = above(bound).validate(&value);
        if value > bound {
            prop_assert!(errors.is_empty());
        } else {
            prop_assert_eq!(errors, vec![format!("{} should be > {}", value, bound)]);
        }
    }

    #[test]
    fn prop_and_is_associative(
        value in any::<i32>(),
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>()
    ) {
        let left = above(a).and(below(b)).and(above(c));
        let right = above(a).and(below(b).and(above(c)));
        prop_assert_eq!(left.validate(&value), right.validate(&value));
    }

    #[test]
    fn prop_combine_matches_and(value in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        let combined = above(a).combine(below(b));
        let anded = above(a).and(below(b));
        prop_assert_eq!(combined.validate(&value), anded.validate(&value));
    }

    #[test]
    fn prop_and_valid_is_noop(value in any::<i32>(), bound in any::<i32>()) {
        let v = above(bound);
        let right = v.clone().and(Validation::<i32, String>::valid());
        let left = Validation::<i32, String>::valid().and(v.clone());
        prop_assert_eq!(right.validate(&value), v.validate(&value));
        prop_assert_eq!(left.validate(&value), v.validate(&value));
    }

    #[test]
    fn prop_or_valid_always_passes(value in any::<i32>(), bound in any::<i32>()) {
        let v = above(bound).or(Validation::<i32, String>::valid());
        prop_assert!(v.validate(&value).is_empty());
    }

    #[test]
    fn prop_or_empty_iff_any_side_empty(value in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        let left = above(a).validate(&value);
        let right = below(b).validate(&value);
        let either = above(a).or(below(b)).validate(&value);
        if left.is_empty() || right.is_empty() {
            prop_assert!(either.is_empty());
        } else {
            prop_assert_eq!(either, [left, right].concat());
        }
    }

    #[test]
    fn prop_check_all_is_distinct_union(values in prop::collection::vec(-20i32..20, 0..200)) {
        let errors = check_all_sequential(above(0)).validate(&values);

        let mut expected: Vec<String> = Vec::new();
        for value in &values {
            for error in above(0).validate(value) {
                if !expected.contains(&error) {
                    expected.push(error);
                }
            }
        }
        prop_assert_eq!(errors, expected);
    }

    #[test]
    fn prop_check_all_parallel_matches_sequential(
        values in prop::collection::vec(any::<i16>().prop_map(i32::from), 0..300)
    ) {
        let parallel = check_all_with(
            above(0),
            CheckAllOptions::new().with_parallel_threshold(0),
        );
        let sequential = check_all_sequential(above(0));
        prop_assert_eq!(parallel.validate(&values), sequential.validate(&values));
    }
}
