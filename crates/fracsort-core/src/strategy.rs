//! Sort strategy trait and its two implementations.
//!
//! Both strategies borrow the input immutably and sort a private working
//! copy, so any number of them can run over the same shared slice.

use tracing::debug;

use crate::cancel::CancellationToken;
use crate::error::FracError;
use crate::fraction::BigFraction;
use crate::heap::heap_sort_cancellable;

/// A whole-collection ordering of big fractions.
pub trait SortStrategy: Send + Sync {
    /// Return a new vector holding `input` in ascending order.
    fn sort(
        &self,
        input: &[BigFraction],
        cancel: &CancellationToken,
    ) -> Result<Vec<BigFraction>, FracError>;

    /// Get the name of this strategy.
    fn name(&self) -> &'static str;
}

/// General-purpose comparison sort (pattern-defeating quicksort).
#[derive(Debug, Default, Clone, Copy)]
pub struct ComparisonSort;

impl ComparisonSort {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SortStrategy for ComparisonSort {
    fn sort(
        &self,
        input: &[BigFraction],
        cancel: &CancellationToken,
    ) -> Result<Vec<BigFraction>, FracError> {
        cancel.check_cancelled()?;
        debug!(len = input.len(), "comparison sort started");

        let mut sorted = input.to_vec();
        sorted.sort_unstable();

        debug!(len = sorted.len(), "comparison sort finished");
        Ok(sorted)
    }

    fn name(&self) -> &'static str {
        "ComparisonSort"
    }
}

/// Explicit binary-heap sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSort;

impl HeapSort {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SortStrategy for HeapSort {
    fn sort(
        &self,
        input: &[BigFraction],
        cancel: &CancellationToken,
    ) -> Result<Vec<BigFraction>, FracError> {
        debug!(len = input.len(), "heap sort started");

        let mut sorted = input.to_vec();
        heap_sort_cancellable(&mut sorted, cancel, BigFraction::lt)?;

        debug!(len = sorted.len(), "heap sort finished");
        Ok(sorted)
    }

    fn name(&self) -> &'static str {
        "HeapSort"
    }
}
