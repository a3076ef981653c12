//! Integration tests for the validation builders.

use vetting::checked::{self, CheckedFnExt};
use vetting::{
    check, check_equal, check_in_range, check_non_null, check_non_null_message, check_positive,
    check_string_matches, check_string_not_empty, check_string_not_empty_message, check_with,
    try_check, BuildError, CheckBuilder, Fault,
};

#[test]
fn test_check_fixed_error_scenario() {
    let v = check(|i: &i32| *i > 0, "should be greater than zero".to_string());
    assert_eq!(v.validate(&-1), vec!["should be greater than zero"]);
    assert!(v.validate(&1).is_empty());
}

#[test]
fn test_check_with_references_value() {
    let v = check_with(|s: &str| s.starts_with("sss"), |s| format!("{} should start with sss", s));
    assert_eq!(v.validate("abc"), vec!["abc should start with sss"]);
}

#[test]
fn test_builder_missing_predicate_fails_at_construction() {
    let result = CheckBuilder::<i32, String>::new()
        .error_with(|i| format!("{} is wrong", i))
        .build();
    assert_eq!(result.unwrap_err(), BuildError::InvalidArgument("predicate"));
}

#[test]
fn test_builder_missing_error_fails_at_construction() {
    let result = CheckBuilder::<i32, String>::new().predicate(|_| true).build();
    let err = result.unwrap_err();
    assert_eq!(err, BuildError::InvalidArgument("error message"));
    assert_eq!(err.to_string(), "error message is required");
}

#[test]
fn test_builder_last_error_source_wins() {
    let v = CheckBuilder::<i32, String>::new()
        .predicate(|i| *i > 0)
        .error("fixed".to_string())
        .error_with(|i| format!("computed {}", i))
        .build()
        .unwrap();
    assert_eq!(v.validate(&0), vec!["computed 0"]);
}

#[test]
fn test_non_null_default_and_custom() {
    assert_eq!(
        check_non_null::<String>().validate(&None),
        vec!["target should not be null"]
    );
    assert_eq!(
        check_non_null_message::<String>("id is required").validate(&None),
        vec!["id is required"]
    );
    assert!(check_non_null::<String>().validate(&Some(String::new())).is_empty());
}

#[test]
fn test_check_equal_embeds_expected_and_actual() {
    let v = check_equal("abc".to_string());
    assert_eq!(
        v.validate(&"asd".to_string()),
        vec!["target should equal to \"abc\", but actual is \"asd\""]
    );
    assert!(v.validate(&"abc".to_string()).is_empty());
}

#[test]
fn test_check_equal_is_absence_safe() {
    let v = check_equal::<Option<String>>(None);
    assert!(v.validate(&None).is_empty());
    assert_eq!(v.validate(&Some("a".to_string())).len(), 1);
}

#[test]
fn test_string_not_empty() {
    let v = check_string_not_empty();
    assert_eq!(v.validate(&None), vec!["target string should not be empty"]);
    assert_eq!(
        v.validate(&Some(String::new())),
        vec!["target string should not be empty"]
    );
    let custom = check_string_not_empty_message("input is required");
    assert_eq!(custom.validate(&None), vec!["input is required"]);
}

#[test]
fn test_string_matches_rejects_bad_pattern() {
    assert!(check_string_matches("[").is_err());
}

#[test]
fn test_string_matches_message() {
    let v = check_string_matches("^[a-z]+$").unwrap();
    assert_eq!(v.validate("AB"), vec!["must match pattern '^[a-z]+$', got 'AB'"]);
}

#[test]
fn test_numeric_shortcuts() {
    let age = check_positive::<i64>().and(check_in_range(0, 150));
    assert!(age.validate(&30).is_empty());
    assert_eq!(age.validate(&0), vec!["must be positive, got 0"]);
    assert_eq!(
        age.validate(&-1),
        vec!["must be positive, got -1", "must be at least 0, got -1"]
    );
    assert_eq!(age.validate(&200), vec!["must be at most 150, got 200"]);
}

#[test]
fn test_try_check_with_composed_checked_predicate() {
    let parse = |s: &str| -> Result<i32, Fault> { s.parse::<i32>().map_err(|e| Fault::from_error(&e)) };
    let positive_number = parse.and_then(|n: &i32| -> Result<bool, Fault> { Ok(*n > 0) });
    let v = try_check(positive_number, "must be a positive number".to_string());

    assert_eq!(v.try_validate("5"), Ok(vec![]));
    assert_eq!(
        v.try_validate("-5"),
        Ok(vec!["must be a positive number".to_string()])
    );
    assert_eq!(
        v.try_validate("five"),
        Err(Fault::new("invalid digit found in string"))
    );
}

#[test]
fn test_try_check_with_checked_equality() {
    let v = try_check(
        checked::is_equal(Some(3)).or(checked::is_equal(None)),
        "must be 3 or absent",
    );
    assert!(v.validate(&Some(3)).is_empty());
    assert!(v.validate(&None).is_empty());
    assert_eq!(v.validate(&Some(4)), vec!["must be 3 or absent"]);
}

#[test]
#[should_panic(expected = "validation fault")]
fn test_direct_validate_propagates_fault() {
    let v = try_check(
        |_: &i32| -> Result<bool, Fault> { Err(Fault::new("cannot evaluate")) },
        "unused",
    );
    let _ = v.validate(&1);
}
