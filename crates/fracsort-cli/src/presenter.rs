//! CLI result presenter.

use fracsort_orchestration::interfaces::{RaceOutcome, ResultPresenter, SortRunResult};

use crate::output::{prefix_worker, render_comparison, render_quiet, render_sorted};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_sorted(&self, outcome: &RaceOutcome) {
        if self.quiet {
            if !outcome.sorted.is_empty() {
                println!("{}", render_quiet(&outcome.sorted, self.verbose));
            }
            return;
        }

        println!(
            "{}",
            prefix_worker(&outcome.worker, &render_sorted(outcome, self.verbose))
        );
    }

    fn present_comparison(&self, results: &[SortRunResult]) {
        if self.quiet {
            return;
        }

        println!("{}", render_comparison(results));
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
