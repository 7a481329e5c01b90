//! Arbitrary-precision fractions with an exact total order.
//!
//! `BigFraction` keeps its denominator strictly positive, so ordering by
//! cross-multiplication never needs a sign correction and never loses
//! precision to division.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::FracError;

/// Immutable fraction of two `BigInt`s.
#[derive(Debug, Clone)]
pub struct BigFraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl BigFraction {
    /// Construct `numerator / denominator`, reducing by the gcd if `reduced` is set.
    ///
    /// # Example
    /// ```
    /// use fracsort_core::BigFraction;
    ///
    /// let half = BigFraction::value_of(4, 8, true).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    /// assert!(BigFraction::value_of(1, 0, false).is_err());
    /// ```
    pub fn value_of(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
        reduced: bool,
    ) -> Result<Self, FracError> {
        let mut numerator = numerator.into();
        let mut denominator = denominator.into();

        if denominator.is_zero() {
            return Err(FracError::ZeroDenominator);
        }
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        let fraction = Self {
            numerator,
            denominator,
        };
        Ok(if reduced { fraction.reduce() } else { fraction })
    }

    /// Numerator as stored (carries the sign).
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator as stored (always positive).
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Return a copy divided through by the gcd of both terms.
    #[must_use]
    pub fn reduce(&self) -> Self {
        let gcd = self.numerator.gcd(&self.denominator);
        if gcd.is_one() || gcd.is_zero() {
            return self.clone();
        }
        Self {
            numerator: &self.numerator / &gcd,
            denominator: &self.denominator / &gcd,
        }
    }

    /// Whether the terms share no common factor greater than one.
    #[must_use]
    pub fn is_reduced(&self) -> bool {
        self.numerator.gcd(&self.denominator).is_one()
    }

    /// Whole part and remainder under truncating division.
    #[must_use]
    pub fn mixed_parts(&self) -> (BigInt, BigInt) {
        self.numerator.div_rem(&self.denominator)
    }

    /// Render as whole part plus proper remainder, e.g. `"4 1/2"`.
    ///
    /// Exact integers render as just the whole part; proper fractions render
    /// as the plain literal.
    ///
    /// # Example
    /// ```
    /// use fracsort_core::BigFraction;
    ///
    /// assert_eq!(BigFraction::value_of(9, 2, false).unwrap().to_mixed_string(), "4 1/2");
    /// assert_eq!(BigFraction::value_of(8, 2, false).unwrap().to_mixed_string(), "4");
    /// assert_eq!(BigFraction::value_of(2, 3, false).unwrap().to_mixed_string(), "2/3");
    /// ```
    #[must_use]
    pub fn to_mixed_string(&self) -> String {
        let (whole, remainder) = self.mixed_parts();
        if remainder.is_zero() {
            whole.to_string()
        } else if whole.is_zero() {
            self.to_string()
        } else {
            format!("{whole} {}/{}", remainder.abs(), self.denominator)
        }
    }
}

impl PartialEq for BigFraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigFraction {}

impl PartialOrd for BigFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFraction {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for BigFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for BigFraction {
    type Err = FracError;

    /// Parse a `"numerator/denominator"` literal without reducing it.
    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let malformed = || FracError::MalformedLiteral(literal.to_string());

        let mut parts = literal.trim().split('/');
        let (Some(num), Some(den), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        if !is_integer_literal(num) || !is_integer_literal(den) {
            return Err(malformed());
        }
        let numerator: BigInt = num.parse().map_err(|_| malformed())?;
        let denominator: BigInt = den.parse().map_err(|_| malformed())?;

        Self::value_of(numerator, denominator, false)
    }
}

/// An optional sign followed by one or more ASCII digits.
///
/// `BigInt::from_str` also skips `_` separators, which literals must not contain.
fn is_integer_literal(side: &str) -> bool {
    let digits = side.strip_prefix(['+', '-']).unwrap_or(side);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
