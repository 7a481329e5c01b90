//! Error handling and exit codes.

use fracsort_core::constants::exit_codes;
use fracsort_core::error::FracError;

/// Map a FracSort error to its process exit code.
pub fn handle_error(err: &FracError) -> i32 {
    match err {
        FracError::MalformedLiteral(_)
        | FracError::ZeroDenominator
        | FracError::EmptyRace
        | FracError::StrategyFailure { .. } => exit_codes::ERROR_GENERIC,
        FracError::Config(_) => exit_codes::ERROR_CONFIG,
        FracError::Cancelled => exit_codes::ERROR_CANCELED,
        FracError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        FracError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application error, looking through any added context.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FracError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
