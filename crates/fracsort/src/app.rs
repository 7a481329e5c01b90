//! Application entry point and dispatch.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use fracsort_cli::presenter::CLIResultPresenter;
use fracsort_core::cancel::CancellationToken;
use fracsort_core::fraction::BigFraction;
use fracsort_core::generator::{make_big_fractions, parse_fraction, sample_fractions};
use fracsort_core::registry::DefaultRegistry;
use fracsort_orchestration::interfaces::ResultPresenter;
use fracsort_orchestration::orchestrator::{
    analyze_comparison_results, compare_sorts, race_sort, RaceOptions,
};
use fracsort_orchestration::race::RaceExecutor;
use fracsort_orchestration::strategy_selection::get_strategies_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fracsort_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let registry = DefaultRegistry::new();
    let strategies = get_strategies_to_run(&config.algo, &registry)?;
    let timeout = config.timeout_duration()?;
    let values = collect_values(config, &presenter);

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    if config.verify {
        let results = compare_sorts(&strategies, &values, &cancel);
        presenter.present_comparison(&results);
        analyze_comparison_results(&results)?;
        if !config.quiet {
            println!(
                "All {} strategies agree on {} values",
                results.len(),
                values.len()
            );
        }
        return Ok(());
    }

    let executor = RaceExecutor::new(config.worker_threads(strategies.len()))?;
    let options = RaceOptions {
        timeout,
        cancel_losers: config.cancel_losers,
    };
    race_sort(
        &executor,
        &strategies,
        values.into(),
        &options,
        &cancel,
        &presenter,
    )
    .context("sort race failed")?;
    Ok(())
}

/// Build the input: random fractions, then samples, then literals.
///
/// Literals that fail to parse are reported and skipped.
pub fn collect_values(config: &AppConfig, presenter: &dyn ResultPresenter) -> Vec<BigFraction> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut values = make_big_fractions(&mut rng, config.count, config.bits, config.reduced);

    if config.samples {
        values.extend(sample_fractions());
    }

    for literal in &config.literals {
        match parse_fraction(literal) {
            Ok(value) if config.reduced => values.push(value.reduce()),
            Ok(value) => values.push(value),
            Err(e) => {
                warn!(%literal, error = %e, "skipping literal");
                presenter.present_error(&format!("skipping literal {literal:?}: {e}"));
            }
        }
    }

    info!(count = values.len(), "values ready");
    values
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        warn!(error = %e, "Ctrl+C handler not installed");
    }
}
