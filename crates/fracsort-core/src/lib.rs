//! # fracsort-core
//!
//! Core library for FracSort: arbitrary-precision fractions, random and
//! literal value generation, and the sort strategies raced by orchestration.

pub mod cancel;
pub mod constants;
pub mod error;
pub mod fraction;
pub mod generator;
pub mod heap;
pub mod registry;
pub mod strategy;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{exit_codes, DEFAULT_FRACTION_COUNT, DEFAULT_RANDOM_BITS, MIN_RANDOM_BITS};
pub use error::FracError;
pub use fraction::BigFraction;
pub use generator::{make_big_fraction, make_big_fractions, parse_fraction, sample_fractions};
pub use registry::{DefaultRegistry, StrategyRegistry};
pub use strategy::{ComparisonSort, HeapSort, SortStrategy};

