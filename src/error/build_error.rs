//! Construction-time errors.

/// Errors raised while constructing a validation.
///
/// These are reported by [`CheckBuilder::build`](crate::CheckBuilder::build)
/// when a required part of the rule was never supplied. They are returned at
/// construction time, never at first use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A required argument was absent.
    #[error("{0} is required")]
    InvalidArgument(&'static str),
}
