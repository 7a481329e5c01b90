//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use fracsort_core::constants::{DEFAULT_FRACTION_COUNT, DEFAULT_RANDOM_BITS};
use fracsort_core::error::FracError;

/// FracSort: race two sort strategies over big fractions and keep the
/// first ordering to finish.
#[derive(Parser, Debug)]
#[command(name = "fracsort", version, about)]
pub struct AppConfig {
    /// Number of random fractions to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_FRACTION_COUNT, env = "FRACSORT_COUNT")]
    pub count: usize,

    /// Bit length of each random numerator.
    #[arg(long, default_value_t = DEFAULT_RANDOM_BITS)]
    pub bits: u64,

    /// Seed for the random source (OS entropy if omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reduce every fraction to lowest terms on construction.
    #[arg(long)]
    pub reduced: bool,

    /// Extra fraction literal to sort, e.g. "62675744/15668936" (repeatable).
    #[arg(short = 'l', long = "literal", value_name = "NUM/DEN", allow_hyphen_values = true)]
    pub literals: Vec<String>,

    /// Include the built-in sample fractions.
    #[arg(long)]
    pub samples: bool,

    /// Strategy to race: comparison (alias quick), heap, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Run every strategy to completion and check that they agree.
    #[arg(long)]
    pub verify: bool,

    /// Cancel losing strategies once a winner is known.
    #[arg(long)]
    pub cancel_losers: bool,

    /// Worker threads in the race pool (0 = one per strategy).
    #[arg(long, default_value = "0")]
    pub threads: usize,

    /// Give up if no strategy finishes in time (e.g. "500ms", "30s", "5m").
    #[arg(long, default_value = "")]
    pub timeout: String,

    /// Print every digit instead of eliding long terms.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only the sorted values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The race deadline, if one was configured.
    pub fn timeout_duration(&self) -> Result<Option<Duration>, FracError> {
        if self.timeout.trim().is_empty() {
            return Ok(None);
        }
        parse_duration(&self.timeout)
            .map(Some)
            .ok_or_else(|| FracError::Config(format!("invalid timeout: {:?}", self.timeout)))
    }

    /// Worker threads for the race pool given how many strategies will run.
    #[must_use]
    pub fn worker_threads(&self, strategies: usize) -> usize {
        if self.threads == 0 {
            strategies.max(1)
        } else {
            self.threads
        }
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
