//! Error types for building and evaluating validations.
//!
//! Validation failures themselves are not errors: they are the messages a
//! [`Validation`](crate::Validation) returns. This module covers the two
//! conditions that are: misconstructed validations ([`BuildError`]) and faults
//! raised while a predicate or error producer runs ([`Fault`]).

mod build_error;
mod fault;

pub use build_error::BuildError;
pub use fault::Fault;
