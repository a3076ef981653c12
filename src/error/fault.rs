//! Faults raised while evaluating a validation.

use std::any::Any;

/// A fault raised by a predicate or error producer during evaluation.
///
/// A fault is not a validation failure: it means the rule could not be
/// evaluated at all (a parse error inside a predicate, a panic in an error
/// closure). Fallible builders such as [`try_check`](crate::try_check)
/// surface faults through [`Validation::try_validate`](crate::Validation::try_validate),
/// and [`check_all`](crate::check_all) turns each one into a synthetic error
/// message for the offending item.
///
/// # Example
///
/// ```rust
/// use vetting::Fault;
///
/// let fault = "abc".parse::<i32>().map_err(|e| Fault::from_error(&e)).unwrap_err();
/// assert_eq!(fault.message(), "invalid digit found in string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Creates a fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates a fault from any error, keeping its display text.
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self::new(error.to_string())
    }

    /// Creates a fault from a panic payload caught with `catch_unwind`.
    ///
    /// `panic!` payloads are either `&'static str` or `String`; anything else
    /// is reported with a generic message.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "panic with a non-string payload".to_string(),
            },
        };
        Self { message }
    }

    /// Returns the fault message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Fault>();
    assert_sync::<Fault>();
};
