//! Component ranges and validation policies.
//!
//! Every constructor and mutator funnels its candidate value through
//! [`apply`], so the five policies behave the same everywhere.

use crate::components::{Component, Components};
use crate::convert::{components_to_frame_count, frame_count_to_components};
use crate::error::{Result, TimecodeError};
use crate::frame_count::FrameCount;
use crate::properties::TimecodeProperties;
use crate::source::SourceValue;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::trace;

/// Hours in a day, highest valid value.
pub const MAX_HOURS: i32 = 23;
/// Minutes in an hour, highest valid value.
pub const MAX_MINUTES: i32 = 59;
/// Seconds in a minute, highest valid value.
pub const MAX_SECONDS: i32 = 59;

/// How out-of-range values are treated when constructing or mutating a
/// timecode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationRule {
    /// Reject invalid values with [`TimecodeError::InvalidComponents`].
    #[default]
    Exact,
    /// Clamp the whole value to `0..=upper limit` in the frame-count domain.
    Clamping,
    /// Clamp each component to its own range.
    ClampingComponents,
    /// Wrap around the upper limit; negative values wrap from the top.
    Wrapping,
    /// Store the value verbatim.
    AllowingInvalid,
}

/// The valid range of `component`, given the other fields of `components`.
///
/// Only frames depend on the other fields: at the start of a drop-affected
/// minute the dropped frame numbers are excluded.
#[must_use]
pub fn valid_range(
    component: Component,
    components: &Components,
    properties: &TimecodeProperties,
) -> RangeInclusive<i32> {
    match component {
        Component::Days => 0..=properties.upper_limit.max_days_expressible() as i32,
        Component::Hours => 0..=MAX_HOURS,
        Component::Minutes => 0..=MAX_MINUTES,
        Component::Seconds => 0..=MAX_SECONDS,
        Component::Frames => {
            let rate = properties.frame_rate;
            let min = if rate.is_drop()
                && components.seconds == 0
                && components.minutes.rem_euclid(10) != 0
            {
                rate.frames_dropped_per_minute() as i32
            } else {
                0
            };
            min..=rate.max_frame_number_displayable() as i32
        }
        Component::SubFrames => {
            let max = properties.sub_frames_base.max_sub_frames_expressible();
            0..=i32::try_from(max).unwrap_or(i32::MAX)
        }
    }
}

/// Components outside their valid range, most significant first.
#[must_use]
pub fn invalid_components(
    components: &Components,
    properties: &TimecodeProperties,
) -> Vec<Component> {
    Component::ALL
        .into_iter()
        .filter(|c| !valid_range(*c, components, properties).contains(&components.get(*c)))
        .collect()
}

/// Clamp each component into its own range.
///
/// Fields are clamped most significant first so that the frames range is
/// computed from the already clamped minutes and seconds.
#[must_use]
pub fn clamp_components(components: &Components, properties: &TimecodeProperties) -> Components {
    let mut clamped = *components;
    for component in Component::ALL {
        let range = valid_range(component, &clamped, properties);
        let value = clamped.get(component).clamp(*range.start(), *range.end());
        clamped.set(component, value);
    }
    clamped
}

/// Clamp a frame count to `0..=` the highest expressible subframe count.
#[must_use]
pub fn clamp_frame_count(frame_count: &FrameCount, properties: &TimecodeProperties) -> FrameCount {
    let base = properties.sub_frames_base;
    let count = frame_count.rebased(base).sub_frame_count();
    let clamped = count.clamp(0, properties.max_sub_frame_count_expressible());
    if clamped != count {
        trace!(count, clamped, "clamped frame count");
    }
    FrameCount::from_sub_frame_count(clamped, base)
}

/// Wrap a frame count around the upper limit. Negative counts wrap down
/// from the top.
#[must_use]
pub fn wrap_frame_count(frame_count: &FrameCount, properties: &TimecodeProperties) -> FrameCount {
    let base = properties.sub_frames_base;
    let count = frame_count.rebased(base).sub_frame_count();
    let modulus = properties
        .frame_rate
        .max_total_sub_frames(properties.upper_limit, base);
    let wrapped = count.rem_euclid(modulus.max(1));
    if wrapped != count {
        trace!(count, wrapped, "wrapped frame count");
    }
    FrameCount::from_sub_frame_count(wrapped, base)
}

/// Resolve a candidate value to components under `rule`.
///
/// # Errors
///
/// Returns [`TimecodeError::InvalidComponents`] when `rule` is
/// [`ValidationRule::Exact`] and the candidate is out of range.
pub fn apply(
    candidate: SourceValue,
    properties: &TimecodeProperties,
    rule: ValidationRule,
) -> Result<Components> {
    let rate = properties.frame_rate;
    let base = properties.sub_frames_base;

    let components = match candidate {
        SourceValue::Components(components) => match rule {
            ValidationRule::Exact => exact(components, properties)?,
            ValidationRule::AllowingInvalid => components,
            ValidationRule::ClampingComponents => clamp_components(&components, properties),
            ValidationRule::Clamping | ValidationRule::Wrapping => {
                if invalid_components(&components, properties).is_empty() {
                    components
                } else {
                    let count = components_to_frame_count(&components, rate, base);
                    let normalized = if rule == ValidationRule::Clamping {
                        clamp_frame_count(&count, properties)
                    } else {
                        wrap_frame_count(&count, properties)
                    };
                    frame_count_to_components(&normalized, rate)
                }
            }
        },
        SourceValue::FrameCount(count) => {
            let count = count.rebased(base);
            match rule {
                ValidationRule::Exact => exact(frame_count_to_components(&count, rate), properties)?,
                ValidationRule::AllowingInvalid => frame_count_to_components(&count, rate),
                ValidationRule::ClampingComponents => {
                    clamp_components(&frame_count_to_components(&count, rate), properties)
                }
                ValidationRule::Clamping => {
                    frame_count_to_components(&clamp_frame_count(&count, properties), rate)
                }
                ValidationRule::Wrapping => {
                    frame_count_to_components(&wrap_frame_count(&count, properties), rate)
                }
            }
        }
    };
    Ok(components)
}

fn exact(components: Components, properties: &TimecodeProperties) -> Result<Components> {
    let invalid = invalid_components(&components, properties);
    if invalid.is_empty() {
        Ok(components)
    } else {
        Err(TimecodeError::invalid_components(invalid))
    }
}
