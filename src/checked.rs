//! Fallible functions and predicates.
//!
//! A [`CheckedFn`] is a function that may raise a [`Fault`] instead of
//! returning. One trait covers every role: a checked predicate is a
//! `CheckedFn<T, bool>`, a checked error producer is a `CheckedFn<T, E>`, and
//! a checked consumer is a `CheckedFn<T, ()>`. Any closure of shape
//! `Fn(&T) -> Result<R, Fault>` implements it.
//!
//! # Example
//!
//! ```rust
//! use vetting::checked::{CheckedFn, CheckedFnExt};
//! use vetting::Fault;
//!
//! let parse = |s: &str| s.parse::<i32>().map_err(|e| Fault::from_error(&e));
//! let positive = parse.and_then(|n: &i32| Ok::<_, Fault>(*n > 0));
//!
//! assert_eq!(positive.apply("5"), Ok(true));
//! assert_eq!(positive.apply("-5"), Ok(false));
//! assert!(positive.apply("five").is_err());
//! ```

use crate::error::Fault;

/// A function from `&T` to `R` that may raise a [`Fault`].
pub trait CheckedFn<T: ?Sized, R>: Send + Sync {
    /// Applies the function.
    fn apply(&self, value: &T) -> Result<R, Fault>;
}

impl<T: ?Sized, R, F> CheckedFn<T, R> for F
where
    F: Fn(&T) -> Result<R, Fault> + Send + Sync,
{
    #[inline]
    fn apply(&self, value: &T) -> Result<R, Fault> {
        self(value)
    }
}

/// Combinators for [`CheckedFn`].
///
/// Predicate combinators short-circuit: the right-hand side of `and` is not
/// evaluated when the left is false, so it cannot fault either.
pub trait CheckedFnExt<T: ?Sized, R>: CheckedFn<T, R> + Sized {
    /// Feeds the output of this function into `next`.
    ///
    /// A fault from either stage is returned as-is.
    fn and_then<R2, G>(self, next: G) -> AndThen<Self, G, R>
    where
        G: CheckedFn<R, R2>,
    {
        AndThen {
            first: self,
            next,
            _marker: std::marker::PhantomData,
        }
    }

    /// Inverts a checked predicate.
    fn negate(self) -> Negate<Self>
    where
        Self: CheckedFn<T, bool>,
    {
        Negate(self)
    }

    /// True when both checked predicates are true.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: CheckedFn<T, bool>,
        P: CheckedFn<T, bool>,
    {
        And(self, other)
    }

    /// True when either checked predicate is true.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: CheckedFn<T, bool>,
        P: CheckedFn<T, bool>,
    {
        Or(self, other)
    }
}

impl<T: ?Sized, R, F: CheckedFn<T, R>> CheckedFnExt<T, R> for F {}

/// Composition of two checked functions.
pub struct AndThen<F, G, R> {
    first: F,
    next: G,
    _marker: std::marker::PhantomData<fn() -> R>,
}

impl<T: ?Sized, R, R2, F, G> CheckedFn<T, R2> for AndThen<F, G, R>
where
    F: CheckedFn<T, R>,
    G: CheckedFn<R, R2>,
{
    fn apply(&self, value: &T) -> Result<R2, Fault> {
        let intermediate = self.first.apply(value)?;
        self.next.apply(&intermediate)
    }
}

/// Negation of a checked predicate.
#[derive(Clone, Copy, Debug)]
pub struct Negate<P>(pub P);

impl<T: ?Sized, P: CheckedFn<T, bool>> CheckedFn<T, bool> for Negate<P> {
    fn apply(&self, value: &T) -> Result<bool, Fault> {
        Ok(!self.0.apply(value)?)
    }
}

/// Short-circuiting conjunction of checked predicates.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1, P2> CheckedFn<T, bool> for And<P1, P2>
where
    P1: CheckedFn<T, bool>,
    P2: CheckedFn<T, bool>,
{
    fn apply(&self, value: &T) -> Result<bool, Fault> {
        Ok(self.0.apply(value)? && self.1.apply(value)?)
    }
}

/// Short-circuiting disjunction of checked predicates.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1, P2> CheckedFn<T, bool> for Or<P1, P2>
where
    P1: CheckedFn<T, bool>,
    P2: CheckedFn<T, bool>,
{
    fn apply(&self, value: &T) -> Result<bool, Fault> {
        Ok(self.0.apply(value)? || self.1.apply(value)?)
    }
}

/// Lifts an infallible function into a [`CheckedFn`] that never faults.
pub fn lift<T: ?Sized, R, F>(f: F) -> impl CheckedFn<T, R>
where
    F: Fn(&T) -> R + Send + Sync,
{
    move |value: &T| -> Result<R, Fault> { Ok(f(value)) }
}

/// Checked predicate that is true when the value equals `expected`.
///
/// With `Option` values two absent values are equal.
pub fn is_equal<T>(expected: T) -> impl CheckedFn<T, bool>
where
    T: PartialEq + Send + Sync,
{
    move |value: &T| -> Result<bool, Fault> { Ok(*value == expected) }
}
