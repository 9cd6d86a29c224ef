//! The timecode value type.

use crate::components::{Component, Components};
use crate::convert;
use crate::error::{Result, TimecodeError};
use crate::fraction::Fraction;
use crate::frame_count::FrameCount;
use crate::frame_rate::FrameRate;
use crate::properties::{SubFramesBase, TimecodeProperties, UpperLimit};
use crate::source::TimecodeSource;
use crate::string::StringFormat;
use crate::validation::{self, ValidationRule};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// A timecode: structured components tied to a frame rate, subframes base
/// and upper limit.
///
/// The properties are fixed at construction. The components are validated
/// by the [`ValidationRule`] of each constructor or mutator; values stored
/// with [`ValidationRule::AllowingInvalid`] (or through
/// [`set_components`](Self::set_components) or deserialization) can be out
/// of range and are only normalized by an explicit
/// [`clamp_components`](Self::clamp_components).
///
/// Equality and ordering compare elapsed time: frame counts at the same
/// rate, exact time values across rates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timecode {
    properties: TimecodeProperties,
    components: Components,
}

impl Timecode {
    /// Create a timecode from `source` under `rule`.
    ///
    /// # Errors
    ///
    /// [`TimecodeError::InvalidComponents`] under [`ValidationRule::Exact`]
    /// when the value is out of range; [`TimecodeError::InvalidFormat`] when
    /// `source` is unparseable text.
    pub fn new(
        source: impl TimecodeSource,
        properties: impl Into<TimecodeProperties>,
        rule: ValidationRule,
    ) -> Result<Self> {
        let properties = properties.into();
        let components = validation::apply(source.resolve(&properties)?, &properties, rule)?;
        Ok(Self {
            properties,
            components,
        })
    }

    /// Create a timecode, rejecting out-of-range values.
    pub fn exactly(
        source: impl TimecodeSource,
        properties: impl Into<TimecodeProperties>,
    ) -> Result<Self> {
        Self::new(source, properties, ValidationRule::Exact)
    }

    /// Create a timecode, clamping the whole value into range.
    pub fn clamping(
        source: impl TimecodeSource,
        properties: impl Into<TimecodeProperties>,
    ) -> Result<Self> {
        Self::new(source, properties, ValidationRule::Clamping)
    }

    /// Create a timecode, clamping each component into its own range.
    pub fn clamping_components(
        source: impl TimecodeSource,
        properties: impl Into<TimecodeProperties>,
    ) -> Result<Self> {
        Self::new(source, properties, ValidationRule::ClampingComponents)
    }

    /// Create a timecode, wrapping around the upper limit.
    pub fn wrapping(
        source: impl TimecodeSource,
        properties: impl Into<TimecodeProperties>,
    ) -> Result<Self> {
        Self::new(source, properties, ValidationRule::Wrapping)
    }

    /// Create a timecode, storing the value verbatim.
    pub fn allowing_invalid(
        source: impl TimecodeSource,
        properties: impl Into<TimecodeProperties>,
    ) -> Result<Self> {
        Self::new(source, properties, ValidationRule::AllowingInvalid)
    }

    /// A zero timecode.
    #[must_use]
    pub fn zero(properties: impl Into<TimecodeProperties>) -> Self {
        Self {
            properties: properties.into(),
            components: Components::ZERO,
        }
    }

    /// The properties.
    #[must_use]
    pub fn properties(&self) -> TimecodeProperties {
        self.properties
    }

    /// Frame rate.
    #[must_use]
    pub fn frame_rate(&self) -> FrameRate {
        self.properties.frame_rate
    }

    /// Subframes per frame.
    #[must_use]
    pub fn sub_frames_base(&self) -> SubFramesBase {
        self.properties.sub_frames_base
    }

    /// Maximum span.
    #[must_use]
    pub fn upper_limit(&self) -> UpperLimit {
        self.properties.upper_limit
    }

    /// The components, as stored.
    #[must_use]
    pub fn components(&self) -> Components {
        self.components
    }

    /// Replace the components without validation.
    pub fn set_components(&mut self, components: Components) {
        self.components = components;
    }

    /// Set the value from `source` under `rule`.
    ///
    /// # Errors
    ///
    /// Same as [`Timecode::new`]. On error `self` is left unchanged.
    pub fn set(&mut self, source: impl TimecodeSource, rule: ValidationRule) -> Result<()> {
        self.components = self.setting(source, rule)?.components;
        Ok(())
    }

    /// A copy of `self` set from `source` under `rule`.
    pub fn setting(&self, source: impl TimecodeSource, rule: ValidationRule) -> Result<Self> {
        Self::new(source, self.properties, rule)
    }

    /// Total elapsed frames.
    #[must_use]
    pub fn frame_count(&self) -> FrameCount {
        convert::components_to_frame_count(
            &self.components,
            self.properties.frame_rate,
            self.properties.sub_frames_base,
        )
    }

    /// Elapsed frames expressed at other properties; the rate and base
    /// conversions are exact, truncating to a whole subframe.
    pub(crate) fn frame_count_at(&self, properties: &TimecodeProperties) -> FrameCount {
        if self.frame_rate() == properties.frame_rate {
            self.frame_count().rebased(properties.sub_frames_base)
        } else {
            convert::rational_to_frame_count(
                self.rational_value(),
                properties.frame_rate,
                properties.sub_frames_base,
            )
        }
    }

    /// Elapsed real (wall-clock) time in seconds.
    #[must_use]
    pub fn real_time_value(&self) -> f64 {
        convert::frame_count_to_real_time(&self.frame_count(), self.frame_rate())
    }

    /// Elapsed audio samples at `sample_rate`, rounded to the nearest
    /// sample.
    #[must_use]
    pub fn samples_value(&self, sample_rate: u32) -> i64 {
        convert::frame_count_to_samples(&self.frame_count(), self.frame_rate(), sample_rate)
    }

    /// Elapsed audio samples at `sample_rate`, unrounded.
    #[must_use]
    pub fn samples_value_f64(&self, sample_rate: u32) -> f64 {
        convert::frame_count_to_samples_f64(&self.frame_count(), self.frame_rate(), sample_rate)
    }

    /// Exact elapsed time in seconds, reduced.
    #[must_use]
    pub fn rational_value(&self) -> Fraction {
        convert::frame_count_to_rational(&self.frame_count(), self.frame_rate())
    }

    /// Elapsed time as a fraction over `timescale`, rounded to the nearest
    /// tick and left unreduced, the way media containers store it.
    #[must_use]
    pub fn media_time(&self, timescale: i64) -> Fraction {
        self.rational_value().rescaled(timescale)
    }

    /// Returns `true` if every component is within its range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid_components().is_empty()
    }

    /// Components outside their valid range, most significant first.
    #[must_use]
    pub fn invalid_components(&self) -> Vec<Component> {
        validation::invalid_components(&self.components, &self.properties)
    }

    /// Clamp each component into its own range.
    pub fn clamp_components(&mut self) {
        self.components = validation::clamp_components(&self.components, &self.properties);
    }

    /// The valid range of `component` given the current value of the other
    /// components.
    #[must_use]
    pub fn valid_range(&self, component: Component) -> RangeInclusive<i32> {
        validation::valid_range(component, &self.components, &self.properties)
    }

    /// Returns `true` if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.components.is_zero()
    }

    /// Convert to another frame rate.
    ///
    /// With `preserving_values` the components are kept and reinterpreted
    /// at the new rate. Otherwise the elapsed time is kept, truncated to a
    /// whole subframe.
    ///
    /// # Errors
    ///
    /// [`TimecodeError::InvalidComponents`] when the result does not fit
    /// the new rate.
    pub fn converted(&self, frame_rate: FrameRate, preserving_values: bool) -> Result<Self> {
        let properties = self.properties.with_frame_rate(frame_rate);
        debug!(
            from = %self.frame_rate(),
            to = %frame_rate,
            preserving_values,
            "converting timecode"
        );
        if preserving_values {
            Self::exactly(self.components, properties)
        } else {
            Self::exactly(self.frame_count_at(&properties), properties)
        }
    }

    /// Apply an edit exactly, for text-field style collaborators.
    ///
    /// On rejection `self` is unchanged and `on_reject` is called with the
    /// validation error. Returns `true` when the edit was applied.
    pub fn try_edit(
        &mut self,
        components: Components,
        on_reject: impl FnOnce(&TimecodeError),
    ) -> bool {
        match self.set(components, ValidationRule::Exact) {
            Ok(()) => true,
            Err(err) => {
                on_reject(&err);
                false
            }
        }
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timecode {}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.frame_rate() == other.frame_rate() {
            self.frame_count().cmp(&other.frame_count())
        } else {
            self.rational_value().cmp(&other.rational_value())
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_value(StringFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_count::FrameCountValue;
    use crate::source::{RealTime, Samples};
    use pretty_assertions::assert_eq;

    fn props(rate: FrameRate) -> TimecodeProperties {
        TimecodeProperties::new(rate)
    }

    #[test]
    fn test_timecode_new() {
        let tc = Timecode::exactly(Components::hmsf(1, 2, 3, 4), FrameRate::Fps23_976).unwrap();
        assert_eq!(tc.components(), Components::hmsf(1, 2, 3, 4));
        assert_eq!(tc.frame_rate(), FrameRate::Fps23_976);
        assert_eq!(tc.sub_frames_base(), SubFramesBase::MAX_80);
        assert_eq!(tc.upper_limit(), UpperLimit::Max24Hours);
        assert!(tc.is_valid());
    }

    #[test]
    fn test_timecode_validation() {
        let err = Timecode::exactly(Components::hmsf(24, 0, 0, 0), FrameRate::Fps24).unwrap_err();
        assert_eq!(err, TimecodeError::invalid_components([Component::Hours]));

        let err = Timecode::exactly(Components::hmsf(0, 1, 0, 0), FrameRate::Fps29_97d).unwrap_err();
        assert_eq!(err, TimecodeError::invalid_components([Component::Frames]));

        assert!(Timecode::exactly(Components::hmsf(0, 10, 0, 0), FrameRate::Fps29_97d).is_ok());
    }

    #[test]
    fn test_set_leaves_value_on_error() {
        let mut tc = Timecode::exactly("01:00:00:00", FrameRate::Fps24).unwrap();
        assert!(tc.set("01:00:00:24", ValidationRule::Exact).is_err());
        assert!(tc.set("garbage", ValidationRule::Clamping).is_err());
        assert_eq!(tc.components(), Components::hmsf(1, 0, 0, 0));

        tc.set("01:00:00:24", ValidationRule::Clamping).unwrap();
        assert_eq!(tc.components(), Components::hmsf(1, 0, 1, 0));
    }

    #[test]
    fn test_allowing_invalid_and_clamp_components() {
        let mut tc = Timecode::allowing_invalid(Components::hmsf(50, 70, 20, 14), FrameRate::Fps24).unwrap();
        assert_eq!(tc.invalid_components(), vec![Component::Hours, Component::Minutes]);
        assert!(!tc.is_valid());

        tc.clamp_components();
        assert_eq!(tc.components(), Components::hmsf(23, 59, 20, 14));
        assert!(tc.is_valid());
    }

    #[test]
    fn test_set_components_is_raw() {
        let mut tc = Timecode::zero(FrameRate::Fps25);
        assert!(tc.is_zero());
        tc.set_components(Components::hmsf(0, 0, 0, 30));
        assert_eq!(tc.invalid_components(), vec![Component::Frames]);
        assert_eq!(tc.valid_range(Component::Frames), 0..=24);
    }

    #[test]
    fn test_real_time_value() {
        let tc = Timecode::exactly("01:00:00;00", FrameRate::Fps29_97d).unwrap();
        assert!((tc.real_time_value() - 3599.9964).abs() < 1e-9);

        let back = Timecode::exactly(RealTime(tc.real_time_value()), FrameRate::Fps29_97d).unwrap();
        assert_eq!(back, tc);
    }

    #[test]
    fn test_samples_value() {
        let tc = Timecode::exactly("00:00:01:00", FrameRate::Fps24).unwrap();
        assert_eq!(tc.samples_value(48_000), 48_000);
        assert_eq!(tc.samples_value_f64(44_100), 44_100.0);

        let back = Timecode::exactly(Samples::new(48_000, 48_000), FrameRate::Fps24).unwrap();
        assert_eq!(back, tc);
    }

    #[test]
    fn test_rational_and_media_time() {
        let tc = Timecode::exactly("00:00:00;01", FrameRate::Fps29_97d).unwrap();
        assert!(tc.rational_value().is_identical(&Fraction::new(1001, 30000)));

        let media = tc.media_time(600);
        assert_eq!(media.denominator(), 600);
        assert_eq!(media.numerator(), 20);

        let back = Timecode::exactly(tc.rational_value(), FrameRate::Fps29_97d).unwrap();
        assert_eq!(back.components(), tc.components());
    }

    #[test]
    fn test_frame_count() {
        let tc = Timecode::exactly(FrameCountValue::Frames(670_907), FrameRate::Fps30).unwrap();
        assert_eq!(tc.components(), Components::hmsf(6, 12, 43, 17));
        assert_eq!(tc.frame_count().whole_frames(), 670_907);
    }

    #[test]
    fn test_comparison() {
        let a = Timecode::exactly("00:00:01:00", FrameRate::Fps24).unwrap();
        let b = Timecode::exactly("00:00:00:23", FrameRate::Fps24).unwrap();
        let c = Timecode::exactly("00:00:01:00", FrameRate::Fps25).unwrap();
        assert!(a > b);
        assert_eq!(a, c);
        assert!(Timecode::exactly("00:00:00:24", FrameRate::Fps25).unwrap() < c);
    }

    #[test]
    fn test_converted() {
        let tc = Timecode::exactly("00:00:01:00", FrameRate::Fps24).unwrap();
        let converted = tc.converted(FrameRate::Fps50, false).unwrap();
        assert_eq!(converted.components(), Components::hmsf(0, 0, 1, 0));
        assert_eq!(converted.frame_rate(), FrameRate::Fps50);

        let tc = Timecode::exactly("01:00:00:29", FrameRate::Fps30).unwrap();
        assert!(tc.converted(FrameRate::Fps25, true).is_err());
        let kept = tc.converted(FrameRate::Fps29_97, true).unwrap();
        assert_eq!(kept.components(), tc.components());
    }

    #[test]
    fn test_try_edit() {
        let mut tc = Timecode::zero(FrameRate::Fps24);
        let mut rejected = None;
        assert!(!tc.try_edit(Components::hmsf(0, 0, 0, 24), |err| rejected = Some(err.clone())));
        assert_eq!(rejected, Some(TimecodeError::invalid_components([Component::Frames])));
        assert!(tc.is_zero());

        assert!(tc.try_edit(Components::hmsf(0, 0, 0, 23), |_| panic!("valid edit rejected")));
        assert_eq!(tc.components(), Components::hmsf(0, 0, 0, 23));
    }

    #[test]
    fn test_timecode_serialization() {
        let tc = Timecode::exactly("01:02:03:04", props(FrameRate::Fps29_97d)).unwrap();
        let json = serde_json::to_string(&tc).unwrap();
        let decoded: Timecode = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.components(), tc.components());
        assert_eq!(decoded.properties(), tc.properties());
    }
}
