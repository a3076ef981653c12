//! Lifting a per-item validation over a slice of items.
//!
//! [`check_all`] runs an item validation against every element, isolates
//! faults so one bad element cannot abort the batch, and returns the distinct
//! error messages across all elements.

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use indexmap::IndexSet;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::Fault;
use crate::validation::Validation;

/// Batches shorter than this are evaluated sequentially by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32;

/// How the items of a batch are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    /// Evaluate items on the rayon thread pool.
    #[default]
    Parallel,
    /// Evaluate items one after another on the calling thread.
    Sequential,
}

/// Configuration for [`check_all_with`].
///
/// Either strategy returns the same messages in the same order: results are
/// joined in input order before duplicates are removed.
///
/// # Example
///
/// ```rust
/// use vetting::{CheckAllOptions, Evaluation};
///
/// let options = CheckAllOptions::new().with_parallel_threshold(1_000);
/// assert_eq!(options.evaluation(), Evaluation::Parallel);
/// assert!(!options.runs_parallel(10));
/// assert!(options.runs_parallel(5_000));
///
/// assert!(!CheckAllOptions::sequential().runs_parallel(5_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckAllOptions {
    evaluation: Evaluation,
    parallel_threshold: usize,
}

impl CheckAllOptions {
    /// Parallel evaluation with the default threshold.
    pub fn new() -> Self {
        Self {
            evaluation: Evaluation::Parallel,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sequential evaluation regardless of batch size.
    pub fn sequential() -> Self {
        Self::new().with_evaluation(Evaluation::Sequential)
    }

    /// Sets the evaluation strategy.
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Sets the minimum batch size for parallel evaluation.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns the evaluation strategy.
    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Returns the minimum batch size for parallel evaluation.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns `true` if a batch of `len` items is evaluated in parallel.
    pub fn runs_parallel(&self, len: usize) -> bool {
        self.evaluation == Evaluation::Parallel && len >= self.parallel_threshold
    }
}

impl Default for CheckAllOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of evaluating one item of a batch.
#[derive(Debug, PartialEq)]
enum ItemOutcome {
    /// The item was evaluated; these are its violations.
    Checked(Vec<String>),
    /// Evaluating the item raised a fault or panicked.
    Faulted(Fault),
}

impl ItemOutcome {
    fn evaluate<T>(item: &Validation<T, String>, value: &T) -> Self
    where
        T: 'static,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| item.try_validate(value))) {
            Ok(Ok(errors)) => ItemOutcome::Checked(errors),
            Ok(Err(fault)) => ItemOutcome::Faulted(fault),
            Err(payload) => ItemOutcome::Faulted(Fault::from_panic(payload)),
        }
    }

    fn into_errors<T: Debug>(self, value: &T) -> Vec<String> {
        match self {
            ItemOutcome::Checked(errors) => errors,
            ItemOutcome::Faulted(fault) => {
                warn!(fault = %fault, item = ?value, "item validation faulted");
                vec![format!("got error {} when validate {:?}", fault, value)]
            }
        }
    }
}

fn errors_for<T>(item: &Validation<T, String>, value: &T) -> Vec<String>
where
    T: Debug + 'static,
{
    ItemOutcome::evaluate(item, value).into_errors(value)
}

/// Lifts a per-item validation over a slice, evaluating in parallel.
///
/// Every element is validated; the result holds each distinct message once,
/// in the order it was first produced. If evaluating an element faults or
/// panics, that element contributes the single message
/// `"got error <message> when validate <item>"` and the other elements are
/// unaffected.
///
/// # Example
///
/// ```rust
/// use vetting::{check_all, check_with};
///
/// let all_positive = check_all(check_with(|i: &i32| *i > 0, |i| format!("{} should be > 0", i)));
/// assert_eq!(
///     all_positive.validate(&[-1, 0, 1, -1]),
///     vec!["-1 should be > 0", "0 should be > 0"]
/// );
/// ```
pub fn check_all<T>(item: Validation<T, String>) -> Validation<[T], String>
where
    T: Debug + Sync + 'static,
{
    check_all_with(item, CheckAllOptions::default())
}

/// Lifts a per-item validation over a slice, evaluating items in order on
/// the calling thread.
pub fn check_all_sequential<T>(item: Validation<T, String>) -> Validation<[T], String>
where
    T: Debug + Sync + 'static,
{
    check_all_with(item, CheckAllOptions::sequential())
}

/// Lifts a per-item validation over a slice with explicit options.
pub fn check_all_with<T>(
    item: Validation<T, String>,
    options: CheckAllOptions,
) -> Validation<[T], String>
where
    T: Debug + Sync + 'static,
{
    Validation::from_fn(move |values: &[T]| {
        let parallel = options.runs_parallel(values.len());
        let per_item: Vec<Vec<String>> = if parallel {
            values
                .par_iter()
                .map(|value| errors_for(&item, value))
                .collect()
        } else {
            values.iter().map(|value| errors_for(&item, value)).collect()
        };

        let distinct: IndexSet<String> = per_item.into_iter().flatten().collect();
        debug!(
            items = values.len(),
            parallel,
            errors = distinct.len(),
            "validated all items"
        );
        distinct.into_iter().collect()
    })
}
