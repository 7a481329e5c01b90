//! Value generation: random big fractions and literal parsing.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;
use tracing::debug;

use crate::constants::{
    MAX_DENOMINATOR_DIVISOR, MIN_RANDOM_BITS, SAMPLE_BIG_DENOMINATOR, SAMPLE_BIG_NUMERATOR,
    SAMPLE_LITERAL_PROPER, SAMPLE_LITERAL_WHOLE,
};
use crate::error::FracError;
use crate::fraction::BigFraction;

/// Make a large random fraction from the caller's random source.
///
/// The numerator is a `bits`-bit integer with its top bit set; the
/// denominator is the numerator divided by a random divisor in
/// `1..=10`, so it is never zero and never exceeds the numerator.
#[must_use]
pub fn make_big_fraction<R: Rng + ?Sized>(rng: &mut R, bits: u64, reduced: bool) -> BigFraction {
    let bits = bits.max(MIN_RANDOM_BITS);
    let numerator = rng.gen_biguint(bits) | (BigUint::one() << (bits - 1));
    let divisor = rng.gen_range(1..=MAX_DENOMINATOR_DIVISOR);
    let denominator = &numerator / divisor;

    BigFraction::value_of(BigInt::from(numerator), BigInt::from(denominator), reduced)
        .expect("denominator of a top-bit numerator over a small divisor is non-zero")
}

/// Make `count` random fractions.
#[must_use]
pub fn make_big_fractions<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    bits: u64,
    reduced: bool,
) -> Vec<BigFraction> {
    debug!(count, bits, reduced, "generating random fractions");
    (0..count)
        .map(|_| make_big_fraction(rng, bits, reduced))
        .collect()
}

/// Parse a `"numerator/denominator"` literal, keeping the terms as written.
pub fn parse_fraction(literal: &str) -> Result<BigFraction, FracError> {
    literal.parse()
}

/// Parse a `"numerator/denominator"` literal and reduce it.
pub fn parse_reduced_fraction(literal: &str) -> Result<BigFraction, FracError> {
    parse_fraction(literal).map(|f| f.reduce())
}

/// The fixed sample set: two unreduced literals and one large reduced fraction.
#[must_use]
pub fn sample_fractions() -> Vec<BigFraction> {
    let big_numerator: BigInt = SAMPLE_BIG_NUMERATOR
        .parse()
        .expect("sample numerator is a valid integer");
    let big_denominator: BigInt = SAMPLE_BIG_DENOMINATOR
        .parse()
        .expect("sample denominator is a valid integer");

    vec![
        parse_fraction(SAMPLE_LITERAL_WHOLE).expect("sample literal is valid"),
        parse_fraction(SAMPLE_LITERAL_PROPER).expect("sample literal is valid"),
        BigFraction::value_of(big_numerator, big_denominator, true)
            .expect("sample denominator is non-zero"),
    ]
}
