//! Per-timecode configuration: frame rate, subframes base and upper limit.

use crate::frame_rate::FrameRate;
use serde::{Deserialize, Serialize};

/// Number of subframe units that make up one frame.
///
/// A base of zero is raised to one so that the valid subframes range
/// `0..=base - 1` can never underflow. Bases above [`SubFramesBase::MAX`]
/// are lowered to it so that every subframes value fits an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct SubFramesBase(u32);

impl SubFramesBase {
    /// 80 subframes per frame (common in audio workstations).
    pub const MAX_80: Self = Self(80);
    /// 100 subframes per frame.
    pub const MAX_100: Self = Self(100);
    /// Quarter frames.
    pub const QUARTER_FRAMES: Self = Self(4);

    /// The widest base: subframes `0..=i32::MAX`.
    pub const MAX: Self = Self(i32::MAX as u32 + 1);

    /// Create a base, raising zero to one and capping at [`Self::MAX`].
    #[must_use]
    pub const fn new(subframes_per_frame: u32) -> Self {
        if subframes_per_frame == 0 {
            Self(1)
        } else if subframes_per_frame > Self::MAX.0 {
            Self::MAX
        } else {
            Self(subframes_per_frame)
        }
    }

    /// Subframes per frame.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The highest valid subframes value.
    #[must_use]
    pub const fn max_sub_frames_expressible(self) -> u32 {
        self.0.saturating_sub(1)
    }

    /// Width of the subframes field when formatted.
    #[must_use]
    pub fn number_of_digits(self) -> usize {
        self.max_sub_frames_expressible().to_string().len()
    }
}

impl Default for SubFramesBase {
    fn default() -> Self {
        Self::MAX_80
    }
}

impl From<u32> for SubFramesBase {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<SubFramesBase> for u32 {
    fn from(base: SubFramesBase) -> Self {
        base.0
    }
}

/// Maximum span a timecode can express.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UpperLimit {
    /// Up to 23:59:59:xx; the days field must be zero.
    #[default]
    Max24Hours,
    /// Up to 99 23:59:59:xx.
    Max100Days,
}

impl UpperLimit {
    /// Number of whole days in the span.
    #[must_use]
    pub const fn max_days(&self) -> u32 {
        match self {
            Self::Max24Hours => 1,
            Self::Max100Days => 100,
        }
    }

    /// The highest valid days value.
    #[must_use]
    pub const fn max_days_expressible(&self) -> u32 {
        self.max_days() - 1
    }
}

/// The immutable properties a [`Timecode`](crate::Timecode) is computed
/// against.
///
/// Deserializes with defaults for missing fields, so a host configuration
/// only needs to name what differs:
///
/// ```rust
/// use timecode_engine::{FrameRate, TimecodeProperties, UpperLimit};
///
/// let props: TimecodeProperties = serde_json::from_str(r#"{"frame_rate": "29.97d"}"#).unwrap();
/// assert_eq!(props.frame_rate, FrameRate::Fps29_97d);
/// assert_eq!(props.upper_limit, UpperLimit::Max24Hours);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TimecodeProperties {
    /// Frame rate.
    pub frame_rate: FrameRate,
    /// Subframes per frame.
    pub sub_frames_base: SubFramesBase,
    /// Maximum span.
    pub upper_limit: UpperLimit,
}

impl TimecodeProperties {
    /// Properties at `frame_rate` with the default base and limit.
    #[must_use]
    pub fn new(frame_rate: FrameRate) -> Self {
        Self {
            frame_rate,
            ..Self::default()
        }
    }

    /// Replace the subframes base.
    #[must_use]
    pub fn with_sub_frames_base(mut self, base: SubFramesBase) -> Self {
        self.sub_frames_base = base;
        self
    }

    /// Replace the upper limit.
    #[must_use]
    pub fn with_upper_limit(mut self, limit: UpperLimit) -> Self {
        self.upper_limit = limit;
        self
    }

    /// Replace the frame rate.
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: FrameRate) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// The highest subframe count representable with these properties.
    #[must_use]
    pub fn max_sub_frame_count_expressible(&self) -> i64 {
        self.frame_rate
            .max_sub_frame_count_expressible(self.upper_limit, self.sub_frames_base)
    }
}

impl From<FrameRate> for TimecodeProperties {
    fn from(frame_rate: FrameRate) -> Self {
        Self::new(frame_rate)
    }
}
