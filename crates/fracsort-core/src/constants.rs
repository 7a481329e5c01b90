//! Constants for value generation and configuration.

/// Default number of random fractions generated per run.
pub const DEFAULT_FRACTION_COUNT: usize = 10;

/// Default bit length of randomly generated numerators.
pub const DEFAULT_RANDOM_BITS: u64 = 150_000;

/// Smallest numerator bit length accepted by the generator.
///
/// With the top bit forced on, an 8-bit numerator is at least 128, so
/// dividing it by the largest divisor still leaves a non-zero denominator.
pub const MIN_RANDOM_BITS: u64 = 8;

/// Largest divisor used to derive a denominator from a random numerator.
pub const MAX_DENOMINATOR_DIVISOR: u32 = 10;

/// Sample literal that reduces to exactly 4.
pub const SAMPLE_LITERAL_WHOLE: &str = "62675744/15668936";

/// Sample literal that reduces to 2/3.
pub const SAMPLE_LITERAL_PROPER: &str = "609136/913704";

/// Numerator of the large sample fraction (reduces to 9/2).
pub const SAMPLE_BIG_NUMERATOR: &str = "846122553600669882";

/// Denominator of the large sample fraction.
pub const SAMPLE_BIG_DENOMINATOR: &str = "188027234133482196";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The race did not settle before the configured deadline.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Strategy outputs disagreed during verification.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
