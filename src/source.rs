//! Values a timecode can be constructed from or set to.

use crate::components::Components;
use crate::convert;
use crate::error::Result;
use crate::fraction::Fraction;
use crate::frame_count::{FrameCount, FrameCountValue};
use crate::interval::TimecodeInterval;
use crate::properties::TimecodeProperties;
use crate::string;
use crate::timecode::Timecode;
use serde::{Deserialize, Serialize};

/// A candidate value, before a validation rule is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceValue {
    /// Structured components, possibly out of range.
    Components(Components),
    /// An elapsed frame count, possibly negative or beyond the upper limit.
    FrameCount(FrameCount),
}

/// Anything that can be resolved to a timecode value against a set of
/// properties.
///
/// Resolution is infallible for every numeric source. Only text can fail,
/// with [`TimecodeError::InvalidFormat`](crate::TimecodeError::InvalidFormat).
pub trait TimecodeSource {
    /// Resolve to a candidate value at `properties`.
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue>;
}

impl<T: TimecodeSource + ?Sized> TimecodeSource for &T {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        (**self).resolve(properties)
    }
}

impl TimecodeSource for Components {
    fn resolve(&self, _properties: &TimecodeProperties) -> Result<SourceValue> {
        Ok(SourceValue::Components(*self))
    }
}

impl TimecodeSource for str {
    fn resolve(&self, _properties: &TimecodeProperties) -> Result<SourceValue> {
        string::parse_components(self).map(SourceValue::Components)
    }
}

impl TimecodeSource for String {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        self.as_str().resolve(properties)
    }
}

impl TimecodeSource for FrameCount {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        Ok(SourceValue::FrameCount(self.rebased(properties.sub_frames_base)))
    }
}

impl TimecodeSource for FrameCountValue {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        Ok(SourceValue::FrameCount(FrameCount::new(
            *self,
            properties.sub_frames_base,
        )))
    }
}

/// Real (wall-clock) time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct RealTime(pub f64);

impl TimecodeSource for RealTime {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        Ok(SourceValue::FrameCount(convert::real_time_to_frame_count(
            self.0,
            properties.frame_rate,
            properties.sub_frames_base,
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum SampleValue {
    Whole(i64),
    Fractional(f64),
}

/// An audio sample position at a sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Samples {
    value: SampleValue,
    sample_rate: u32,
}

impl Samples {
    /// A whole sample position.
    #[must_use]
    pub const fn new(samples: i64, sample_rate: u32) -> Self {
        Self {
            value: SampleValue::Whole(samples),
            sample_rate,
        }
    }

    /// A fractional sample position.
    #[must_use]
    pub const fn fractional(samples: f64, sample_rate: u32) -> Self {
        Self {
            value: SampleValue::Fractional(samples),
            sample_rate,
        }
    }

    /// Samples per second.
    #[must_use]
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The position as a real number of samples.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self.value {
            SampleValue::Whole(samples) => samples as f64,
            SampleValue::Fractional(samples) => samples,
        }
    }
}

impl TimecodeSource for Samples {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        let rate = properties.frame_rate;
        let base = properties.sub_frames_base;
        let count = match self.value {
            SampleValue::Whole(samples) => {
                convert::samples_to_frame_count(samples, self.sample_rate, rate, base)
            }
            SampleValue::Fractional(samples) => {
                convert::samples_f64_to_frame_count(samples, self.sample_rate, rate, base)
            }
        };
        Ok(SourceValue::FrameCount(count))
    }
}

/// An exact time value in seconds.
impl TimecodeSource for Fraction {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        Ok(SourceValue::FrameCount(convert::rational_to_frame_count(
            *self,
            properties.frame_rate,
            properties.sub_frames_base,
        )))
    }
}

/// Same rate and base: the components are taken verbatim. Otherwise the
/// exact time value is converted.
impl TimecodeSource for Timecode {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        if self.frame_rate() == properties.frame_rate
            && self.sub_frames_base() == properties.sub_frames_base
        {
            Ok(SourceValue::Components(self.components()))
        } else {
            Ok(SourceValue::FrameCount(self.frame_count_at(properties)))
        }
    }
}

/// The signed length of the interval.
impl TimecodeSource for TimecodeInterval {
    fn resolve(&self, properties: &TimecodeProperties) -> Result<SourceValue> {
        Ok(SourceValue::FrameCount(self.frame_count_at(properties)))
    }
}

/// Resolve any source straight to a frame count at `properties`.
pub(crate) fn resolve_frame_count(
    source: &(impl TimecodeSource + ?Sized),
    properties: &TimecodeProperties,
) -> Result<FrameCount> {
    Ok(match source.resolve(properties)? {
        SourceValue::Components(components) => convert::components_to_frame_count(
            &components,
            properties.frame_rate,
            properties.sub_frames_base,
        ),
        SourceValue::FrameCount(count) => count,
    })
}
