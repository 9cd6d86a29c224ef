//! Rational number type for exact rate and time representation.

use crate::error::TimecodeError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::warn;

/// A rational number represented as a numerator and denominator.
///
/// Used for frame rates, frame durations and real-time values where
/// floating point would accumulate error. The denominator is always
/// positive. A fraction is not reduced automatically, so a media time such
/// as `3003/90000` keeps its timescale; equality, ordering and hashing
/// compare values, not representations.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Zero.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// One.
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Create a new fraction.
    ///
    /// # Panics
    ///
    /// Panics if denominator is zero. Use [`Fraction::try_new`] for
    /// untrusted input.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::try_new(numerator, denominator).expect("Denominator cannot be zero")
    }

    /// Create a new fraction, returning `None` for a zero denominator.
    #[must_use]
    pub fn try_new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        if denominator < 0 {
            Some(Self {
                numerator: numerator.checked_neg()?,
                denominator: denominator.checked_neg()?,
            })
        } else {
            Some(Self {
                numerator,
                denominator,
            })
        }
    }

    /// Create a fraction from an integer.
    #[must_use]
    pub const fn from_int(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Build a fraction from wide intermediate values, reducing it so it
    /// fits. Values that still overflow `i64` collapse to zero.
    pub(crate) fn from_i128(numerator: i128, denominator: i128) -> Self {
        if denominator == 0 {
            warn!("fraction with zero denominator; substituting zero");
            return Self::ZERO;
        }
        let (mut num, mut den) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let g = gcd_u128(num.unsigned_abs(), den.unsigned_abs());
        if g > 1 {
            num /= g as i128;
            den /= g as i128;
        }
        match (i64::try_from(num), i64::try_from(den)) {
            (Ok(numerator), Ok(denominator)) => Self {
                numerator,
                denominator,
            },
            _ => {
                warn!(%num, %den, "fraction overflow; substituting zero");
                Self::ZERO
            }
        }
    }

    /// The numerator.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The denominator (always positive).
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Check if this fraction is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Check if this fraction is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Reduce the fraction to its simplest form.
    #[must_use]
    pub fn reduced(&self) -> Self {
        if self.numerator == 0 {
            return Self::ZERO;
        }
        let g = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        Self {
            numerator: self.numerator / g as i64,
            denominator: self.denominator / g as i64,
        }
    }

    /// Returns `true` if numerator and denominator share no common factor.
    #[must_use]
    pub fn is_reduced(&self) -> bool {
        let reduced = self.reduced();
        reduced.numerator == self.numerator && reduced.denominator == self.denominator
    }

    /// Returns `true` if both fractions have the same numerator and
    /// denominator, not merely the same value.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }

    /// Convert to f64.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Get the reciprocal, or `None` for zero.
    #[must_use]
    pub fn recip(&self) -> Option<Self> {
        Self::try_new(self.denominator, self.numerator)
    }

    /// Express this value over `timescale`, rounding the numerator to the
    /// nearest integer (half away from zero).
    ///
    /// The result is deliberately left unreduced.
    #[must_use]
    pub fn rescaled(&self, timescale: i64) -> Self {
        if timescale <= 0 {
            warn!(timescale, "non-positive timescale; substituting zero");
            return Self::ZERO;
        }
        let num = round_div(
            self.numerator as i128 * timescale as i128,
            self.denominator as i128,
        );
        match i64::try_from(num) {
            Ok(numerator) => Self {
                numerator,
                denominator: timescale,
            },
            Err(_) => {
                warn!(%num, timescale, "rescaled fraction overflow; substituting zero");
                Self::ZERO
            }
        }
    }
}

/// Integer division rounding half away from zero. `den` must be positive.
pub(crate) fn round_div(num: i128, den: i128) -> i128 {
    if num >= 0 {
        (2 * num + den) / (2 * den)
    } else {
        -((2 * -num + den) / (2 * den))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduced();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let num = self.numerator as i128 * rhs.denominator as i128
            + rhs.numerator as i128 * self.denominator as i128;
        let den = self.denominator as i128 * rhs.denominator as i128;
        Self::from_i128(num, den)
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_i128(
            self.numerator as i128 * rhs.numerator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }
}

impl Div for Fraction {
    type Output = Self;

    /// Division by zero yields zero.
    fn div(self, rhs: Self) -> Self::Output {
        Self::from_i128(
            self.numerator as i128 * rhs.denominator as i128,
            self.denominator as i128 * rhs.numerator as i128,
        )
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_i128(-(self.numerator as i128), self.denominator as i128)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_int(n as i64)
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = TimecodeError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Self::try_new(numerator, denominator)
            .ok_or_else(|| TimecodeError::invalid_format("fraction denominator cannot be zero"))
    }
}

impl From<Fraction> for (i64, i64) {
    fn from(f: Fraction) -> Self {
        (f.numerator, f.denominator)
    }
}

/// Calculate the greatest common divisor using Euclidean algorithm.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.max(1)
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.max(1)
}
