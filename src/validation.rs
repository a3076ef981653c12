//! The composable validation type.
//!
//! This module provides [`Validation`], a pure function from a candidate value
//! to the ordered list of messages describing why the value is invalid. Small
//! rules compose into larger ones with [`Validation::and`] (accumulate every
//! violation) and [`Validation::or`] (pass if either side passes).

use std::fmt;
use std::sync::Arc;

use stillwater::Semigroup;

use crate::error::Fault;
use crate::ValidationResult;

/// Type alias for the evaluation function stored in a validation.
pub(crate) type EvalFn<T, E> = Arc<dyn Fn(&T) -> Result<Vec<E>, Fault> + Send + Sync>;

/// A reusable rule that maps a value to the violations it contains.
///
/// `validate` returns an empty vector when the value is valid and one message
/// per violated rule otherwise. Validations are immutable: every combinator
/// returns a new validation sharing the operands it was built from, so
/// cloning is cheap and a validation can be evaluated from many threads at
/// once with identical results.
///
/// # Example
///
/// ```rust
/// use vetting::{check, check_with};
///
/// let positive = check_with(|i: &i32| *i > 0, |i| format!("{} should be > 0", i));
/// let small = check(|i: &i32| *i < 10, "too big".to_string());
/// let rule = positive.and(small);
///
/// assert_eq!(rule.validate(&5), Vec::<String>::new());
/// assert_eq!(rule.validate(&-1), vec!["-1 should be > 0"]);
/// assert_eq!(rule.validate(&11), vec!["too big"]);
/// ```
pub struct Validation<T: ?Sized, E> {
    eval: EvalFn<T, E>,
}

impl<T: ?Sized + 'static, E: 'static> Validation<T, E> {
    /// Returns the identity validation, which accepts every value.
    ///
    /// `valid()` is the neutral element of [`and`](Self::and) and the usual
    /// starting point when folding many rules together.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::Validation;
    ///
    /// let v = Validation::<str, String>::valid();
    /// assert!(v.validate("anything").is_empty());
    /// ```
    pub fn valid() -> Self {
        Self::from_fn(|_: &T| Vec::new())
    }

    /// Wraps a closure that returns the violations for a value.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> Vec<E> + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(move |t: &T| -> Result<Vec<E>, Fault> { Ok(f(t)) }),
        }
    }

    /// Wraps a closure that may raise a [`Fault`] instead of answering.
    pub fn try_from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> Result<Vec<E>, Fault> + Send + Sync + 'static,
    {
        Self { eval: Arc::new(f) }
    }

    /// Evaluates the validation, returning every violation in order.
    ///
    /// # Panics
    ///
    /// Panics with the fault message if a fallible predicate or error producer
    /// raises a [`Fault`]. Use [`try_validate`](Self::try_validate) to receive
    /// the fault as a value instead.
    pub fn validate(&self, value: &T) -> Vec<E> {
        match (self.eval)(value) {
            Ok(errors) => errors,
            Err(fault) => panic!("validation fault: {}", fault),
        }
    }

    /// Evaluates the validation, surfacing faults instead of panicking.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::{try_check, Fault};
    ///
    /// let numeric = try_check(
    ///     |s: &String| s.parse::<i32>().map(|_| true).map_err(|e| Fault::from_error(&e)),
    ///     "unreachable".to_string(),
    /// );
    /// assert_eq!(numeric.try_validate(&"12".to_string()), Ok(vec![]));
    /// assert!(numeric.try_validate(&"x".to_string()).is_err());
    /// ```
    pub fn try_validate(&self, value: &T) -> ValidationResult<E> {
        (self.eval)(value)
    }

    /// Returns `true` if the value produces no violations.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`validate`](Self::validate).
    pub fn is_valid(&self, value: &T) -> bool {
        self.validate(value).is_empty()
    }

    /// Combines two validations, keeping the violations of both.
    ///
    /// Both sides are always evaluated; the result lists this validation's
    /// violations followed by `other`'s. Passing `None` behaves like
    /// [`valid()`](Self::valid). `and` is associative.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::check;
    ///
    /// let a = check(|s: &str| s.len() > 3, "too short".to_string());
    /// let b = check(|s: &str| s.starts_with('x'), "must start with x".to_string());
    /// assert_eq!(a.and(b).validate("ab"), vec!["too short", "must start with x"]);
    /// ```
    pub fn and(self, other: impl Into<Option<Validation<T, E>>>) -> Self {
        let Some(other) = other.into() else {
            return self;
        };
        let (left, right) = (self.eval, other.eval);
        Self {
            eval: Arc::new(move |t: &T| -> Result<Vec<E>, Fault> {
                let mut errors = left(t)?;
                errors.extend(right(t)?);
                Ok(errors)
            }),
        }
    }

    /// Combines two validations, passing if either side passes.
    ///
    /// Both sides are always evaluated. If either produces no violations the
    /// result is valid; otherwise the violations of both sides are returned,
    /// this validation's first. Passing `None` behaves like
    /// [`valid()`](Self::valid), which makes the result always valid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::check;
    ///
    /// let negative = check(|i: &i32| *i < 0, "should be < 0".to_string());
    /// let large = check(|i: &i32| *i > 10, "should be > 10".to_string());
    /// let rule = negative.or(large);
    ///
    /// assert!(rule.validate(&-1).is_empty());
    /// assert!(rule.validate(&11).is_empty());
    /// assert_eq!(rule.validate(&5), vec!["should be < 0", "should be > 10"]);
    /// ```
    pub fn or(self, other: impl Into<Option<Validation<T, E>>>) -> Self {
        let Some(other) = other.into() else {
            return Self::valid();
        };
        let (left, right) = (self.eval, other.eval);
        Self {
            eval: Arc::new(move |t: &T| -> Result<Vec<E>, Fault> {
                let mut errors = left(t)?;
                let others = right(t)?;
                if errors.is_empty() || others.is_empty() {
                    return Ok(Vec::new());
                }
                errors.extend(others);
                Ok(errors)
            }),
        }
    }

    /// Runs this validation on a value derived from a larger one.
    ///
    /// This is how rules for individual fields become a rule for a record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::{check_with, Validation};
    ///
    /// struct Person { name: String, age: u32 }
    ///
    /// let name = check_with(|n: &String| n == "John", |n| format!("name should be John, got {}", n));
    /// let age = check_with(|a: &u32| *a > 18, |a| format!("age should be > 18, got {}", a));
    ///
    /// let person = Validation::<Person, String>::valid()
    ///     .and(name.contramap(|p: &Person| p.name.clone()))
    ///     .and(age.contramap(|p: &Person| p.age));
    ///
    /// let errors = person.validate(&Person { name: "Jack".into(), age: 12 });
    /// assert_eq!(errors, vec!["name should be John, got Jack", "age should be > 18, got 12"]);
    /// ```
    pub fn contramap<U, F>(self, f: F) -> Validation<U, E>
    where
        U: ?Sized + 'static,
        T: Sized,
        F: Fn(&U) -> T + Send + Sync + 'static,
    {
        let eval = self.eval;
        Validation {
            eval: Arc::new(move |u: &U| eval(&f(u))),
        }
    }

    /// Transforms every violation this validation produces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::check_string_not_empty;
    ///
    /// let name = check_string_not_empty().map_errors(|e| format!("person.name: {}", e));
    /// assert_eq!(name.validate(&None), vec!["person.name: target string should not be empty"]);
    /// ```
    pub fn map_errors<E2, F>(self, f: F) -> Validation<T, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let eval = self.eval;
        Validation {
            eval: Arc::new(move |t: &T| -> Result<Vec<E2>, Fault> {
                Ok(eval(t)?.into_iter().map(&f).collect())
            }),
        }
    }

    /// Folds validations together with [`and`](Self::and), starting from
    /// [`valid()`](Self::valid).
    pub fn all<I>(validations: I) -> Self
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        validations
            .into_iter()
            .fold(Self::valid(), |acc, next| acc.and(next))
    }

    /// Evaluates the validation as a stillwater `Validation`.
    ///
    /// Produces `Success(())` when there are no violations and
    /// `Failure(errors)` otherwise, so results can be combined with other
    /// accumulating stillwater pipelines.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`validate`](Self::validate).
    pub fn verdict(&self, value: &T) -> stillwater::Validation<(), Vec<E>> {
        let errors = self.validate(value);
        if errors.is_empty() {
            stillwater::Validation::Success(())
        } else {
            stillwater::Validation::Failure(errors)
        }
    }
}

impl<T: ?Sized, E> Clone for Validation<T, E> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for Validation<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static, E: 'static> Default for Validation<T, E> {
    fn default() -> Self {
        Self::valid()
    }
}

/// `combine` is [`Validation::and`].
impl<T: ?Sized + 'static, E: 'static> Semigroup for Validation<T, E> {
    fn combine(self, other: Self) -> Self {
        self.and(other)
    }
}

// The evaluation function is Send + Sync, so validations can be shared
// across threads regardless of T and E.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validation<str, String>>();
    assert_sync::<Validation<str, String>>();
};
