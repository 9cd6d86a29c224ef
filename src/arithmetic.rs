//! Timecode arithmetic.
//!
//! All operations work on elapsed subframe counts. Operands at another
//! frame rate are converted to the receiver's rate first; the result is
//! resolved under the caller's [`ValidationRule`].
//!
//! The `std::ops` operators wrap around the upper limit and never fail.

use crate::error::{Result, TimecodeError};
use crate::frame_count::FrameCount;
use crate::interval::TimecodeInterval;
use crate::source::{resolve_frame_count, SourceValue, TimecodeSource};
use crate::timecode::Timecode;
use crate::validation::{self, ValidationRule};
use std::ops::{AddAssign, Div, Mul, Sub, SubAssign};

impl Timecode {
    /// Add `other` in place.
    ///
    /// # Errors
    ///
    /// [`TimecodeError::InvalidComponents`] under [`ValidationRule::Exact`]
    /// when the sum is out of range. `self` is unchanged on error.
    pub fn add(&mut self, other: impl TimecodeSource, rule: ValidationRule) -> Result<()> {
        *self = self.adding(other, rule)?;
        Ok(())
    }

    /// The sum of `self` and `other`.
    pub fn adding(&self, other: impl TimecodeSource, rule: ValidationRule) -> Result<Self> {
        let rhs = resolve_frame_count(&other, &self.properties())?;
        self.with_frame_count(self.frame_count() + rhs, rule)
    }

    /// Subtract `other` in place.
    pub fn subtract(&mut self, other: impl TimecodeSource, rule: ValidationRule) -> Result<()> {
        *self = self.subtracting(other, rule)?;
        Ok(())
    }

    /// The difference of `self` and `other`.
    pub fn subtracting(&self, other: impl TimecodeSource, rule: ValidationRule) -> Result<Self> {
        let rhs = resolve_frame_count(&other, &self.properties())?;
        self.with_frame_count(self.frame_count() - rhs, rule)
    }

    /// Multiply in place by a real factor.
    pub fn multiply(&mut self, factor: f64, rule: ValidationRule) -> Result<()> {
        *self = self.multiplying(factor, rule)?;
        Ok(())
    }

    /// `self` scaled by a real factor. Results that overflow collapse to
    /// zero; see [`checked_multiplying`](Self::checked_multiplying).
    pub fn multiplying(&self, factor: f64, rule: ValidationRule) -> Result<Self> {
        self.with_frame_count(self.frame_count().mul_f64(factor), rule)
    }

    /// Divide in place by a real divisor.
    pub fn divide(&mut self, divisor: f64, rule: ValidationRule) -> Result<()> {
        *self = self.dividing(divisor, rule)?;
        Ok(())
    }

    /// `self` divided by a real divisor. Division by zero collapses to
    /// zero; see [`checked_dividing`](Self::checked_dividing).
    pub fn dividing(&self, divisor: f64, rule: ValidationRule) -> Result<Self> {
        self.multiplying(1.0 / divisor, rule)
    }

    /// Like [`multiplying`](Self::multiplying), but reports overflow.
    ///
    /// # Errors
    ///
    /// [`TimecodeError::Overflow`] when the scaled count is not finite or
    /// exceeds the integer frame domain.
    pub fn checked_multiplying(&self, factor: f64, rule: ValidationRule) -> Result<Self> {
        let scaled = self
            .frame_count()
            .checked_mul_f64(factor)
            .ok_or(TimecodeError::Overflow)?;
        self.with_frame_count(scaled, rule)
    }

    /// Like [`dividing`](Self::dividing), but reports overflow and
    /// division by zero.
    pub fn checked_dividing(&self, divisor: f64, rule: ValidationRule) -> Result<Self> {
        self.checked_multiplying(1.0 / divisor, rule)
    }

    /// Offset in place by a signed interval, wrapping around the upper
    /// limit.
    pub fn offset(&mut self, interval: &TimecodeInterval) {
        *self = self.offsetting(interval);
    }

    /// `self` offset by a signed interval, wrapping around the upper
    /// limit.
    #[must_use]
    pub fn offsetting(&self, interval: &TimecodeInterval) -> Self {
        self.wrapped(self.frame_count() + interval.frame_count_at(&self.properties()))
    }

    /// The signed interval from `self` to `other`.
    #[must_use]
    pub fn interval(&self, other: &Timecode) -> TimecodeInterval {
        TimecodeInterval::between(self, other)
    }

    pub(crate) fn with_frame_count(&self, count: FrameCount, rule: ValidationRule) -> Result<Self> {
        let mut result = *self;
        let properties = self.properties();
        result.set_components(validation::apply(
            SourceValue::FrameCount(count),
            &properties,
            rule,
        )?);
        Ok(result)
    }

    pub(crate) fn wrapped(&self, count: FrameCount) -> Self {
        let properties = self.properties();
        let wrapped = validation::wrap_frame_count(&count, &properties);
        let mut result = *self;
        result.set_components(crate::convert::frame_count_to_components(
            &wrapped,
            properties.frame_rate,
        ));
        result
    }
}

// path-qualified: with `Add` in scope, `tc.add(..)` picks the by-value
// `Add::add` before autoref reaches the inherent `&mut self` method
impl std::ops::Add for Timecode {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.wrapped(self.frame_count() + rhs.frame_count_at(&self.properties()))
    }
}

impl Sub for Timecode {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapped(self.frame_count() - rhs.frame_count_at(&self.properties()))
    }
}

impl AddAssign for Timecode {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Timecode {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Timecode {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.wrapped(self.frame_count().mul_f64(rhs))
    }
}

impl Div<f64> for Timecode {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.wrapped(self.frame_count().mul_f64(1.0 / rhs))
    }
}

/// The ratio of two elapsed times.
impl Div for Timecode {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.rational_value().to_f64() / rhs.rational_value().to_f64()
    }
}
