//! Error type shared by every FracSort crate.

/// Error type for fraction construction, sorting, and racing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FracError {
    /// A fraction literal could not be parsed.
    #[error("malformed fraction literal: {0:?}")]
    MalformedLiteral(String),

    /// A fraction would have a zero denominator.
    #[error("zero denominator")]
    ZeroDenominator,

    /// A race was started without any tasks.
    #[error("race started with no tasks")]
    EmptyRace,

    /// A sort strategy failed unexpectedly.
    #[error("strategy {strategy} failed: {reason}")]
    StrategyFailure {
        /// Name of the failing strategy.
        strategy: String,
        /// What went wrong.
        reason: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Work was cancelled.
    #[error("sort cancelled")]
    Cancelled,

    /// The race did not settle in time.
    #[error("race timed out after {0}")]
    Timeout(String),

    /// Outputs from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}

impl FracError {
    /// Build a `StrategyFailure` for the named strategy.
    pub fn strategy_failure(strategy: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StrategyFailure {
            strategy: strategy.into(),
            reason: reason.into(),
        }
    }
}
