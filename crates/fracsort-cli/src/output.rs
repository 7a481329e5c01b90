//! CLI output formatting.

use std::fmt::Write as _;
use std::time::Duration;

use num_traits::{Signed, Zero};

use fracsort_core::fraction::BigFraction;
use fracsort_orchestration::interfaces::{RaceOutcome, SortRunResult};

/// Digit strings longer than this are elided unless verbose.
const MAX_DIGITS: usize = 100;

/// Digits kept on each side of an elided digit string.
const EDGE_DIGITS: usize = 20;

/// Indentation of each value under a result header.
const VALUE_INDENT: &str = "     ";

/// Shorten a long digit string, e.g. `"12345...67890 (150 digits)"`.
#[must_use]
pub fn format_digits(digits: &str, verbose: bool) -> String {
    if verbose || digits.len() <= MAX_DIGITS {
        return digits.to_string();
    }
    let (sign, body) = digits
        .strip_prefix('-')
        .map_or(("", digits), |rest| ("-", rest));
    format!(
        "{sign}{}...{} ({} digits)",
        &body[..EDGE_DIGITS],
        &body[body.len() - EDGE_DIGITS..],
        body.len()
    )
}

/// Render a fraction as a mixed number, eliding long terms unless verbose.
///
/// Matches [`BigFraction::to_mixed_string`] whenever no term is elided.
#[must_use]
pub fn format_mixed(value: &BigFraction, verbose: bool) -> String {
    let (whole, remainder) = value.mixed_parts();
    let term = |n: &num_bigint::BigInt| format_digits(&n.to_string(), verbose);

    if remainder.is_zero() {
        term(&whole)
    } else if whole.is_zero() {
        format!("{}/{}", term(value.numerator()), term(value.denominator()))
    } else {
        format!(
            "{} {}/{}",
            term(&whole),
            term(&remainder.abs()),
            term(value.denominator())
        )
    }
}

/// Render the winning ordering: a header followed by one value per line.
#[must_use]
pub fn render_sorted(outcome: &RaceOutcome, verbose: bool) -> String {
    let mut out = format!(
        "{} sorted {} values in {}",
        outcome.algorithm,
        outcome.sorted.len(),
        format_duration(outcome.duration)
    );
    for value in &outcome.sorted {
        let _ = write!(out, "\n{VALUE_INDENT}{}", format_mixed(value, verbose));
    }
    out
}

/// Render just the mixed values, one per line.
#[must_use]
pub fn render_quiet(sorted: &[BigFraction], verbose: bool) -> String {
    sorted
        .iter()
        .map(|value| format_mixed(value, verbose))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the per-strategy table shown after a verification run.
#[must_use]
pub fn render_comparison(results: &[SortRunResult]) -> String {
    let mut out = format!("\nComparison Results:\n{:-<60}", "");
    for result in results {
        let status = match &result.outcome {
            Ok(_) => "OK".to_string(),
            Err(e) => format!("ERROR: {e}"),
        };
        let _ = write!(
            out,
            "\n  {:<20} {:>10} [{}]",
            result.algorithm,
            format_duration(result.duration),
            status,
        );
    }
    out
}

/// Prefix `text` with the worker that produced it.
#[must_use]
pub fn prefix_worker(worker: &str, text: &str) -> String {
    format!("[{worker}] {text}")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}
