//! Orchestration interfaces.

use std::time::Duration;

use fracsort_core::error::FracError;
use fracsort_core::fraction::BigFraction;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the winning ordering of a race.
    fn present_sorted(&self, outcome: &RaceOutcome);

    /// Present a verification run.
    fn present_comparison(&self, results: &[SortRunResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// The ordering adopted from the strategy that settled first.
#[derive(Debug, Clone)]
pub struct RaceOutcome {
    /// Winning strategy name.
    pub algorithm: String,
    /// Label of the worker thread that produced the ordering.
    pub worker: String,
    /// Time the winning strategy spent sorting.
    pub duration: Duration,
    /// The values in ascending order.
    pub sorted: Vec<BigFraction>,
}

/// Result of running a single strategy to completion.
#[derive(Debug, Clone)]
pub struct SortRunResult {
    /// Strategy name.
    pub algorithm: String,
    /// The ordering or a structured error.
    pub outcome: Result<Vec<BigFraction>, FracError>,
    /// Sort duration.
    pub duration: Duration,
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_sorted(&self, _outcome: &RaceOutcome) {}
    fn present_comparison(&self, _results: &[SortRunResult]) {}
    fn present_error(&self, _error: &str) {}
}
