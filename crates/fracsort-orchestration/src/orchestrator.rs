//! Core orchestration: racing strategies and cross-checking them.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use fracsort_core::cancel::CancellationToken;
use fracsort_core::error::FracError;
use fracsort_core::fraction::BigFraction;
use fracsort_core::strategy::SortStrategy;

use crate::interfaces::{RaceOutcome, ResultPresenter, SortRunResult};
use crate::race::{catch_panic, worker_label, RaceExecutor, RaceTask};

/// Options controlling a race.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaceOptions {
    /// Give up if no strategy settles within this duration.
    pub timeout: Option<Duration>,
    /// Cancel the shared token once a winner is known so cooperative
    /// losers stop early. Losers are otherwise left to finish.
    pub cancel_losers: bool,
}

/// Race every strategy over `values` and present the first ordering to settle.
///
/// Each strategy sorts its own copy of the shared input on the executor's
/// pool. The winning ordering goes to `presenter` before it is returned;
/// losing strategies are never awaited.
pub fn race_sort(
    executor: &RaceExecutor,
    strategies: &[Arc<dyn SortStrategy>],
    values: Arc<[BigFraction]>,
    options: &RaceOptions,
    cancel: &CancellationToken,
    presenter: &dyn ResultPresenter,
) -> Result<RaceOutcome, FracError> {
    let tasks: Vec<RaceTask<RaceOutcome>> = strategies
        .iter()
        .map(|strategy| {
            let strategy = Arc::clone(strategy);
            let values = Arc::clone(&values);
            let cancel = cancel.clone();
            Box::new(move || -> Result<RaceOutcome, FracError> {
                let start = Instant::now();
                let sorted = catch_panic(strategy.name(), || strategy.sort(&values, &cancel))?;
                Ok(RaceOutcome {
                    algorithm: strategy.name().to_string(),
                    worker: worker_label(),
                    duration: start.elapsed(),
                    sorted,
                })
            }) as RaceTask<RaceOutcome>
        })
        .collect();

    let settled = match options.timeout {
        Some(limit) => executor.race_within(tasks, limit),
        None => executor.race_indexed(tasks),
    };
    if options.cancel_losers {
        cancel.cancel();
    }
    let (_, outcome) = settled?;

    info!(
        algorithm = %outcome.algorithm,
        worker = %outcome.worker,
        duration = ?outcome.duration,
        len = outcome.sorted.len(),
        "race won"
    );
    presenter.present_sorted(&outcome);
    Ok(outcome)
}

/// Run every strategy to completion in parallel.
pub fn compare_sorts(
    strategies: &[Arc<dyn SortStrategy>],
    values: &[BigFraction],
    cancel: &CancellationToken,
) -> Vec<SortRunResult> {
    strategies
        .par_iter()
        .map(|strategy| {
            let start = Instant::now();
            let outcome = catch_panic(strategy.name(), || strategy.sort(values, cancel));
            SortRunResult {
                algorithm: strategy.name().to_string(),
                outcome,
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// Check that every successful ordering is numerically identical.
pub fn analyze_comparison_results(results: &[SortRunResult]) -> Result<(), FracError> {
    let valid: Vec<(&str, &Vec<BigFraction>)> = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok().map(|v| (r.algorithm.as_str(), v)))
        .collect();

    let Some(&(first_name, first)) = valid.first() else {
        return Err(FracError::strategy_failure("verify", "no valid results"));
    };

    for &(name, sorted) in &valid[1..] {
        if sorted != first {
            warn!(first = first_name, other = name, "strategies disagree");
            return Err(FracError::Mismatch);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crossbeam_channel::bounded;
    use parking_lot::Mutex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use fracsort_core::generator::{make_big_fractions, sample_fractions};
    use fracsort_core::strategy::{ComparisonSort, HeapSort};

    use crate::interfaces::NullPresenter;

    fn frac(n: i64, d: i64) -> BigFraction {
        BigFraction::value_of(n, d, false).unwrap()
    }

    fn both() -> Vec<Arc<dyn SortStrategy>> {
        vec![Arc::new(ComparisonSort::new()), Arc::new(HeapSort::new())]
    }

    fn run(values: Vec<BigFraction>) -> Result<RaceOutcome, FracError> {
        race_sort(
            &RaceExecutor::new(2).unwrap(),
            &both(),
            values.into(),
            &RaceOptions::default(),
            &CancellationToken::new(),
            &NullPresenter,
        )
    }

    #[derive(Default)]
    struct RecordingPresenter {
        sorted: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl ResultPresenter for RecordingPresenter {
        fn present_sorted(&self, outcome: &RaceOutcome) {
            self.calls.fetch_add(1, Ordering::Relaxed);
            *self.sorted.lock() = outcome.sorted.iter().map(BigFraction::to_mixed_string).collect();
        }
        fn present_comparison(&self, _results: &[SortRunResult]) {}
        fn present_error(&self, _error: &str) {}
    }

    /// Never settles until the test drops its release handle.
    struct StuckSort {
        release: crossbeam_channel::Receiver<()>,
    }

    impl SortStrategy for StuckSort {
        fn sort(
            &self,
            input: &[BigFraction],
            _cancel: &CancellationToken,
        ) -> Result<Vec<BigFraction>, FracError> {
            let _ = self.release.recv();
            Ok(input.to_vec())
        }

        fn name(&self) -> &'static str {
            "Stuck"
        }
    }

    struct FailingSort;

    impl SortStrategy for FailingSort {
        fn sort(
            &self,
            _input: &[BigFraction],
            _cancel: &CancellationToken,
        ) -> Result<Vec<BigFraction>, FracError> {
            Err(FracError::strategy_failure("Failing", "out of memory"))
        }

        fn name(&self) -> &'static str {
            "Failing"
        }
    }

    struct PanickingSort;

    impl SortStrategy for PanickingSort {
        fn sort(
            &self,
            _input: &[BigFraction],
            _cancel: &CancellationToken,
        ) -> Result<Vec<BigFraction>, FracError> {
            panic!("comparator exploded")
        }

        fn name(&self) -> &'static str {
            "Panicking"
        }
    }

    #[test]
    fn race_sorts_samples() {
        let outcome = run(sample_fractions()).unwrap();
        assert!(["ComparisonSort", "HeapSort"].contains(&outcome.algorithm.as_str()));
        let mixed: Vec<String> = outcome.sorted.iter().map(BigFraction::to_mixed_string).collect();
        assert_eq!(mixed, ["609136/913704", "4", "4 1/2"]);
        assert!(outcome.worker.starts_with("race-worker-"));
    }

    #[test]
    fn race_sorts_random_values() {
        let values = make_big_fractions(&mut StdRng::seed_from_u64(11), 25, 1024, true);
        let outcome = run(values.clone()).unwrap();
        let mut expected = values;
        expected.sort();
        assert_eq!(outcome.sorted, expected);
    }

    #[test]
    fn race_empty_input() {
        assert!(run(Vec::new()).unwrap().sorted.is_empty());
    }

    #[test]
    fn race_without_strategies() {
        let result = race_sort(
            &RaceExecutor::new(1).unwrap(),
            &[],
            Vec::new().into(),
            &RaceOptions::default(),
            &CancellationToken::new(),
            &NullPresenter,
        );
        assert!(matches!(result, Err(FracError::EmptyRace)));
    }

    #[test]
    fn presenter_receives_winner() {
        let presenter = RecordingPresenter::default();
        race_sort(
            &RaceExecutor::new(2).unwrap(),
            &both(),
            sample_fractions().into(),
            &RaceOptions::default(),
            &CancellationToken::new(),
            &presenter,
        )
        .unwrap();
        assert_eq!(presenter.calls.load(Ordering::Relaxed), 1);
        assert_eq!(*presenter.sorted.lock(), ["609136/913704", "4", "4 1/2"]);
    }

    #[test]
    fn stuck_strategy_does_not_block_race() {
        let (_hold, release) = bounded::<()>(0);
        let strategies: Vec<Arc<dyn SortStrategy>> =
            vec![Arc::new(StuckSort { release }), Arc::new(HeapSort::new())];
        let start = Instant::now();
        let outcome = race_sort(
            &RaceExecutor::new(2).unwrap(),
            &strategies,
            sample_fractions().into(),
            &RaceOptions::default(),
            &CancellationToken::new(),
            &NullPresenter,
        )
        .unwrap();
        assert_eq!(outcome.algorithm, "HeapSort");
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn first_settled_failure_fails_race() {
        let (_hold, release) = bounded::<()>(0);
        let strategies: Vec<Arc<dyn SortStrategy>> =
            vec![Arc::new(StuckSort { release }), Arc::new(FailingSort)];
        let presenter = RecordingPresenter::default();
        let result = race_sort(
            &RaceExecutor::new(2).unwrap(),
            &strategies,
            sample_fractions().into(),
            &RaceOptions::default(),
            &CancellationToken::new(),
            &presenter,
        );
        assert!(matches!(result, Err(FracError::StrategyFailure { .. })));
        assert_eq!(presenter.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn panicking_strategy_is_named_in_failure() {
        let strategies: Vec<Arc<dyn SortStrategy>> = vec![Arc::new(PanickingSort)];
        let result = race_sort(
            &RaceExecutor::new(1).unwrap(),
            &strategies,
            sample_fractions().into(),
            &RaceOptions::default(),
            &CancellationToken::new(),
            &NullPresenter,
        );
        assert_eq!(
            result.map(|o| o.algorithm),
            Err(FracError::strategy_failure("Panicking", "comparator exploded"))
        );
    }

    #[test]
    fn compare_reports_panicking_strategy() {
        let strategies: Vec<Arc<dyn SortStrategy>> =
            vec![Arc::new(HeapSort::new()), Arc::new(PanickingSort)];
        let results = compare_sorts(&strategies, &sample_fractions(), &CancellationToken::new());
        assert!(results[0].outcome.is_ok());
        assert_eq!(
            results[1].outcome,
            Err(FracError::strategy_failure("Panicking", "comparator exploded"))
        );
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn race_times_out() {
        let (_hold, release) = bounded::<()>(0);
        let strategies: Vec<Arc<dyn SortStrategy>> = vec![Arc::new(StuckSort { release })];
        let options = RaceOptions {
            timeout: Some(Duration::from_millis(20)),
            cancel_losers: false,
        };
        let result = race_sort(
            &RaceExecutor::new(1).unwrap(),
            &strategies,
            sample_fractions().into(),
            &options,
            &CancellationToken::new(),
            &NullPresenter,
        );
        assert!(matches!(result, Err(FracError::Timeout(_))));
    }

    #[test]
    fn cancel_losers_cancels_token() {
        let cancel = CancellationToken::new();
        let options = RaceOptions {
            timeout: None,
            cancel_losers: true,
        };
        race_sort(
            &RaceExecutor::new(2).unwrap(),
            &both(),
            sample_fractions().into(),
            &options,
            &cancel,
            &NullPresenter,
        )
        .unwrap();
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn detached_by_default() {
        let cancel = CancellationToken::new();
        race_sort(
            &RaceExecutor::new(2).unwrap(),
            &both(),
            sample_fractions().into(),
            &RaceOptions::default(),
            &cancel,
            &NullPresenter,
        )
        .unwrap();
        assert!(!cancel.is_cancelled());
    }

    #[test]
    fn compare_runs_every_strategy() {
        let values = make_big_fractions(&mut StdRng::seed_from_u64(5), 12, 256, false);
        let results = compare_sorts(&both(), &values, &CancellationToken::new());
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(r.outcome.is_ok(), "{} failed", r.algorithm);
        }
        assert!(analyze_comparison_results(&results).is_ok());
    }

    fn result(name: &str, outcome: Result<Vec<BigFraction>, FracError>) -> SortRunResult {
        SortRunResult {
            algorithm: name.into(),
            outcome,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn analyze_numerically_equal_orderings() {
        // 1/2 and 2/4 are the same value in different terms.
        let results = vec![
            result("A", Ok(vec![frac(1, 3), frac(1, 2)])),
            result("B", Ok(vec![frac(1, 3), frac(2, 4)])),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_orderings() {
        let results = vec![
            result("A", Ok(vec![frac(1, 3), frac(1, 2)])),
            result("B", Ok(vec![frac(1, 2), frac(1, 3)])),
        ];
        assert_eq!(
            analyze_comparison_results(&results),
            Err(FracError::Mismatch)
        );
    }

    #[test]
    fn analyze_ignores_failures() {
        let results = vec![
            result("A", Ok(vec![frac(1, 2)])),
            result("B", Err(FracError::Cancelled)),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_no_valid_results() {
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(FracError::StrategyFailure { .. })
        ));
        let results = vec![result("A", Err(FracError::Cancelled))];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(FracError::StrategyFailure { .. })
        ));
    }
}
