//! Predicate-based validation builders.
//!
//! Every builder in this crate bottoms out here: a predicate paired with an
//! error source. When the predicate holds the value is valid; otherwise the
//! validation yields exactly one error, either a fixed value or one computed
//! from the offending input.

use std::sync::Arc;

use crate::checked::CheckedFn;
use crate::error::{BuildError, Fault};
use crate::validation::Validation;

type CheckedPredicateFn<T> = Arc<dyn CheckedFn<T, bool>>;
type CheckedErrorFn<T, E> = Arc<dyn CheckedFn<T, E>>;

/// Where the error for a failed check comes from.
enum ErrorSource<T: ?Sized, E> {
    Fixed(E),
    Computed(CheckedErrorFn<T, E>),
}

impl<T: ?Sized, E: Clone> ErrorSource<T, E> {
    fn produce(&self, value: &T) -> Result<E, Fault> {
        match self {
            ErrorSource::Fixed(error) => Ok(error.clone()),
            ErrorSource::Computed(f) => f.apply(value),
        }
    }
}

fn rule<T, E>(predicate: CheckedPredicateFn<T>, error: ErrorSource<T, E>) -> Validation<T, E>
where
    T: ?Sized + 'static,
    E: Clone + Send + Sync + 'static,
{
    Validation::try_from_fn(move |value: &T| {
        if predicate.apply(value)? {
            Ok(Vec::new())
        } else {
            Ok(vec![error.produce(value)?])
        }
    })
}

/// Creates a validation from a predicate and a fixed error.
///
/// # Example
///
/// ```rust
/// use vetting::check;
///
/// let v = check(|i: &i32| *i > 0, "should be greater than zero".to_string());
/// assert_eq!(v.validate(&-1), vec!["should be greater than zero"]);
/// assert!(v.validate(&1).is_empty());
/// ```
pub fn check<T, E, P>(predicate: P, error: E) -> Validation<T, E>
where
    T: ?Sized + 'static,
    E: Clone + Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    rule(
        Arc::new(move |value: &T| -> Result<bool, Fault> { Ok(predicate(value)) }),
        ErrorSource::Fixed(error),
    )
}

/// Creates a validation from a predicate and an error computed from the
/// offending value.
///
/// # Example
///
/// ```rust
/// use vetting::check_with;
///
/// let v = check_with(|s: &str| s.starts_with("sss"), |s| format!("{} should start with sss", s));
/// assert_eq!(v.validate("abc"), vec!["abc should start with sss"]);
/// ```
pub fn check_with<T, E, P, F>(predicate: P, error_fn: F) -> Validation<T, E>
where
    T: ?Sized + 'static,
    E: Clone + Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    F: Fn(&T) -> E + Send + Sync + 'static,
{
    rule(
        Arc::new(move |value: &T| -> Result<bool, Fault> { Ok(predicate(value)) }),
        ErrorSource::Computed(Arc::new(move |value: &T| -> Result<E, Fault> {
            Ok(error_fn(value))
        })),
    )
}

/// Creates a validation from a checked predicate and a fixed error.
///
/// A fault raised by the predicate is reported by
/// [`Validation::try_validate`] and isolated per item by
/// [`check_all`](crate::check_all).
pub fn try_check<T, E, P>(predicate: P, error: E) -> Validation<T, E>
where
    T: ?Sized + 'static,
    E: Clone + Send + Sync + 'static,
    P: CheckedFn<T, bool> + 'static,
{
    rule(Arc::new(predicate), ErrorSource::Fixed(error))
}

/// Creates a validation from a checked predicate and a checked error
/// producer.
pub fn try_check_with<T, E, P, F>(predicate: P, error_fn: F) -> Validation<T, E>
where
    T: ?Sized + 'static,
    E: Clone + Send + Sync + 'static,
    P: CheckedFn<T, bool> + 'static,
    F: CheckedFn<T, E> + 'static,
{
    rule(Arc::new(predicate), ErrorSource::Computed(Arc::new(error_fn)))
}

/// Step-by-step construction of a check.
///
/// Unlike [`check`], which requires both parts up front, the builder can be
/// handed its predicate and error source separately (for example from
/// optional configuration). [`build`](Self::build) fails with
/// [`BuildError::InvalidArgument`] if either part is missing, so a
/// misconstructed rule is caught before it is ever evaluated.
///
/// # Example
///
/// ```rust
/// use vetting::{BuildError, CheckBuilder};
///
/// let v = CheckBuilder::<i32, String>::new()
///     .predicate(|i| *i > 0)
///     .error_with(|i| format!("{} should be > 0", i))
///     .build()
///     .unwrap();
/// assert_eq!(v.validate(&-1), vec!["-1 should be > 0"]);
///
/// let missing = CheckBuilder::<i32, String>::new().error("oops".to_string()).build();
/// assert_eq!(missing.unwrap_err(), BuildError::InvalidArgument("predicate"));
/// ```
pub struct CheckBuilder<T: ?Sized, E> {
    predicate: Option<CheckedPredicateFn<T>>,
    error: Option<ErrorSource<T, E>>,
}

impl<T, E> CheckBuilder<T, E>
where
    T: ?Sized + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Creates a builder with neither a predicate nor an error source.
    pub fn new() -> Self {
        Self {
            predicate: None,
            error: None,
        }
    }

    /// Sets the predicate.
    pub fn predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(move |value: &T| -> Result<bool, Fault> {
            Ok(predicate(value))
        }));
        self
    }

    /// Sets a predicate that may fault.
    pub fn try_predicate<P>(mut self, predicate: P) -> Self
    where
        P: CheckedFn<T, bool> + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Sets a fixed error.
    pub fn error(mut self, error: E) -> Self {
        self.error = Some(ErrorSource::Fixed(error));
        self
    }

    /// Sets an error computed from the offending value.
    pub fn error_with<F>(mut self, error_fn: F) -> Self
    where
        F: Fn(&T) -> E + Send + Sync + 'static,
    {
        self.error = Some(ErrorSource::Computed(Arc::new(
            move |value: &T| -> Result<E, Fault> { Ok(error_fn(value)) },
        )));
        self
    }

    /// Sets an error producer that may fault.
    pub fn try_error_with<F>(mut self, error_fn: F) -> Self
    where
        F: CheckedFn<T, E> + 'static,
    {
        self.error = Some(ErrorSource::Computed(Arc::new(error_fn)));
        self
    }

    /// Builds the validation.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidArgument("predicate")` if no predicate was
    /// set, or `BuildError::InvalidArgument("error message")` if no error
    /// source was set. The predicate is checked first.
    pub fn build(self) -> Result<Validation<T, E>, BuildError> {
        let predicate = self
            .predicate
            .ok_or(BuildError::InvalidArgument("predicate"))?;
        let error = self
            .error
            .ok_or(BuildError::InvalidArgument("error message"))?;
        Ok(rule(predicate, error))
    }
}

impl<T, E> Default for CheckBuilder<T, E>
where
    T: ?Sized + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
