//! Signed timecode intervals.

use crate::convert;
use crate::fraction::Fraction;
use crate::frame_count::FrameCount;
use crate::properties::TimecodeProperties;
use crate::timecode::Timecode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// Direction of an interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Forward in time.
    #[default]
    Plus,
    /// Backward in time.
    Minus,
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }
}

/// A signed span of time: an absolute timecode magnitude plus a sign.
///
/// ```rust
/// use timecode_engine::{FrameRate, Timecode, TimecodeInterval};
///
/// let start = Timecode::exactly("01:00:00:00", FrameRate::Fps23_976).unwrap();
/// let end = Timecode::exactly("01:04:37:15", FrameRate::Fps23_976).unwrap();
///
/// let back = TimecodeInterval::between(&end, &start);
/// assert_eq!(back.to_string(), "-00:04:37:15");
/// assert_eq!(back.flattened().to_string(), "23:55:22:09");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecodeInterval {
    absolute: Timecode,
    sign: Sign,
}

impl TimecodeInterval {
    /// Create an interval from a magnitude and a sign.
    #[must_use]
    pub fn new(absolute: Timecode, sign: Sign) -> Self {
        Self { absolute, sign }
    }

    /// A forward interval.
    #[must_use]
    pub fn positive(absolute: Timecode) -> Self {
        Self::new(absolute, Sign::Plus)
    }

    /// A backward interval.
    #[must_use]
    pub fn negative(absolute: Timecode) -> Self {
        Self::new(absolute, Sign::Minus)
    }

    /// The interval from `start` to `end`, at `start`'s properties.
    #[must_use]
    pub fn between(start: &Timecode, end: &Timecode) -> Self {
        let properties = start.properties();
        let delta = end.frame_count_at(&properties) - start.frame_count();
        let sign = if delta.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        let mut absolute = *start;
        absolute.set_components(convert::frame_count_to_components(
            &delta.abs(),
            properties.frame_rate,
        ));
        Self { absolute, sign }
    }

    /// The unsigned magnitude.
    #[must_use]
    pub fn absolute_interval(&self) -> Timecode {
        self.absolute
    }

    /// The direction.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns `true` for backward intervals.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// The signed elapsed frame count.
    #[must_use]
    pub fn frame_count(&self) -> FrameCount {
        self.signed(self.absolute.frame_count())
    }

    pub(crate) fn frame_count_at(&self, properties: &TimecodeProperties) -> FrameCount {
        self.signed(self.absolute.frame_count_at(properties))
    }

    fn signed(&self, count: FrameCount) -> FrameCount {
        match self.sign {
            Sign::Plus => count,
            Sign::Minus => -count,
        }
    }

    /// The interval as a point in time: negative intervals wrap down from
    /// the upper limit.
    #[must_use]
    pub fn flattened(&self) -> Timecode {
        self.absolute.wrapped(self.frame_count())
    }

    /// `base` moved by this interval, wrapping around the upper limit.
    #[must_use]
    pub fn offsetting(&self, base: &Timecode) -> Timecode {
        base.offsetting(self)
    }

    /// Signed real (wall-clock) time in seconds.
    #[must_use]
    pub fn real_time_value(&self) -> f64 {
        match self.sign {
            Sign::Plus => self.absolute.real_time_value(),
            Sign::Minus => -self.absolute.real_time_value(),
        }
    }

    /// Signed exact time in seconds.
    #[must_use]
    pub fn rational_value(&self) -> Fraction {
        match self.sign {
            Sign::Plus => self.absolute.rational_value(),
            Sign::Minus => -self.absolute.rational_value(),
        }
    }
}

impl Neg for TimecodeInterval {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            absolute: self.absolute,
            sign: -self.sign,
        }
    }
}

impl fmt::Display for TimecodeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Components;
    use crate::frame_rate::FrameRate;
    use pretty_assertions::assert_eq;

    fn tc(text: &str, rate: FrameRate) -> Timecode {
        Timecode::exactly(text, rate).unwrap()
    }

    #[test]
    fn test_between() {
        let start = tc("01:00:00:00", FrameRate::Fps23_976);
        let end = tc("01:04:37:15", FrameRate::Fps23_976);

        let forward = TimecodeInterval::between(&start, &end);
        assert_eq!(forward.sign(), Sign::Plus);
        assert_eq!(forward.absolute_interval().components(), Components::hmsf(0, 4, 37, 15));
        assert_eq!(forward.flattened().components(), Components::hmsf(0, 4, 37, 15));

        let backward = start.interval(&end).neg();
        assert!(backward.is_negative());
        assert_eq!(backward.flattened().components(), Components::hmsf(23, 55, 22, 9));
        assert_eq!(backward, TimecodeInterval::between(&end, &start));
    }

    #[test]
    fn test_zero_interval_is_positive() {
        let a = tc("10:00:00:00", FrameRate::Fps25);
        let interval = TimecodeInterval::between(&a, &a);
        assert_eq!(interval.sign(), Sign::Plus);
        assert!(interval.absolute_interval().is_zero());
    }

    #[test]
    fn test_signed_values() {
        let magnitude = tc("00:00:02:00", FrameRate::Fps24);
        let interval = TimecodeInterval::negative(magnitude);
        assert_eq!(interval.frame_count().whole_frames(), -48);
        assert_eq!(interval.real_time_value(), -2.0);
        assert_eq!(interval.rational_value(), Fraction::from_int(-2));
        assert_eq!(interval.to_string(), "-00:00:02:00");
        assert_eq!((-interval).to_string(), "00:00:02:00");
    }

    #[test]
    fn test_offsetting() {
        let interval = TimecodeInterval::positive(tc("00:00:10:00", FrameRate::Fps24));
        let base = tc("23:59:55:00", FrameRate::Fps24);
        assert_eq!(interval.offsetting(&base).components(), Components::hmsf(0, 0, 5, 0));

        let base = tc("00:00:05:00", FrameRate::Fps24);
        assert_eq!(
            TimecodeInterval::negative(interval.absolute_interval())
                .offsetting(&base)
                .components(),
            Components::hmsf(23, 59, 55, 0)
        );
    }

    #[test]
    fn test_interval_as_source() {
        let interval = TimecodeInterval::negative(tc("00:00:01:00", FrameRate::Fps25));
        let base = tc("00:00:03:00", FrameRate::Fps24);
        let result = base
            .adding(interval, crate::validation::ValidationRule::Exact)
            .unwrap();
        assert_eq!(result.components(), Components::hmsf(0, 0, 2, 0));
    }
}
