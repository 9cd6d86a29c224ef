//! Total elapsed frames.

use crate::properties::SubFramesBase;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use tracing::warn;

/// The ways an elapsed frame count can be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrameCountValue {
    /// Whole frames.
    Frames(i64),
    /// Whole frames plus subframes in the target base.
    Split {
        /// Whole frames.
        frames: i64,
        /// Subframes.
        sub_frames: i64,
    },
    /// Frames and fraction of a frame as one real number.
    Combined(f64),
    /// Whole frames plus a fraction of a frame in `0.0..1.0`.
    SplitUnitInterval {
        /// Whole frames.
        frames: i64,
        /// Fraction of one frame.
        sub_frames_unit_interval: f64,
    },
}

/// A total elapsed frame count, stored as a single subframe count.
///
/// `sub_frame_count = frames × base + sub_frames`. Counts computed against
/// different bases compare by value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameCount {
    sub_frame_count: i64,
    sub_frames_base: SubFramesBase,
}

impl FrameCount {
    /// Zero frames.
    #[must_use]
    pub const fn zero(base: SubFramesBase) -> Self {
        Self {
            sub_frame_count: 0,
            sub_frames_base: base,
        }
    }

    /// Create a frame count from any supported shape.
    ///
    /// Overflow and non-finite real values collapse to zero.
    #[must_use]
    pub fn new(value: FrameCountValue, base: SubFramesBase) -> Self {
        let b = base.get() as i64;
        let sub_frame_count = match value {
            FrameCountValue::Frames(frames) => frames.checked_mul(b),
            FrameCountValue::Split { frames, sub_frames } => frames
                .checked_mul(b)
                .and_then(|whole| whole.checked_add(sub_frames)),
            FrameCountValue::Combined(frames) => quantize_sub_frames(frames * b as f64),
            FrameCountValue::SplitUnitInterval {
                frames,
                sub_frames_unit_interval,
            } => frames.checked_mul(b).and_then(|whole| {
                quantize_sub_frames(sub_frames_unit_interval * b as f64)
                    .and_then(|sub| whole.checked_add(sub))
            }),
        };
        Self {
            sub_frame_count: failsafe(sub_frame_count, "frame count"),
            sub_frames_base: base,
        }
    }

    /// Create a frame count directly from a subframe count.
    #[must_use]
    pub const fn from_sub_frame_count(sub_frame_count: i64, base: SubFramesBase) -> Self {
        Self {
            sub_frame_count,
            sub_frames_base: base,
        }
    }

    /// Whole frames.
    #[must_use]
    pub fn from_frames(frames: i64, base: SubFramesBase) -> Self {
        Self::new(FrameCountValue::Frames(frames), base)
    }

    /// Total subframes.
    #[must_use]
    pub const fn sub_frame_count(&self) -> i64 {
        self.sub_frame_count
    }

    /// The base the subframe count is expressed in.
    #[must_use]
    pub const fn sub_frames_base(&self) -> SubFramesBase {
        self.sub_frames_base
    }

    /// Whole elapsed frames, truncated toward zero.
    #[must_use]
    pub fn whole_frames(&self) -> i64 {
        self.sub_frame_count / self.sub_frames_base.get() as i64
    }

    /// Subframes beyond the whole frames; negative for negative counts.
    #[must_use]
    pub fn sub_frames(&self) -> i64 {
        self.sub_frame_count % self.sub_frames_base.get() as i64
    }

    /// Frames and fraction of a frame as one real number.
    #[must_use]
    pub fn double_value(&self) -> f64 {
        self.sub_frame_count as f64 / self.sub_frames_base.get() as f64
    }

    /// The subframes as a fraction of one frame.
    #[must_use]
    pub fn sub_frames_unit_interval(&self) -> f64 {
        self.sub_frames() as f64 / self.sub_frames_base.get() as f64
    }

    /// The count in the [`FrameCountValue::Split`] shape.
    #[must_use]
    pub fn value(&self) -> FrameCountValue {
        FrameCountValue::Split {
            frames: self.whole_frames(),
            sub_frames: self.sub_frames(),
        }
    }

    /// Returns `true` for counts below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sub_frame_count < 0
    }

    /// The absolute count.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sub_frame_count: failsafe(self.sub_frame_count.checked_abs(), "frame count"),
            sub_frames_base: self.sub_frames_base,
        }
    }

    /// Re-express the count in another base, truncating toward zero.
    #[must_use]
    pub fn rebased(&self, base: SubFramesBase) -> Self {
        if base == self.sub_frames_base {
            return *self;
        }
        let scaled = self.sub_frame_count as i128 * base.get() as i128
            / self.sub_frames_base.get() as i128;
        Self {
            sub_frame_count: failsafe(i64::try_from(scaled).ok(), "rebased frame count"),
            sub_frames_base: base,
        }
    }

    /// Add, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let rhs = rhs.rebased(self.sub_frames_base);
        Some(Self {
            sub_frame_count: self.sub_frame_count.checked_add(rhs.sub_frame_count)?,
            sub_frames_base: self.sub_frames_base,
        })
    }

    /// Subtract, returning `None` on overflow.
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let rhs = rhs.rebased(self.sub_frames_base);
        Some(Self {
            sub_frame_count: self.sub_frame_count.checked_sub(rhs.sub_frame_count)?,
            sub_frames_base: self.sub_frames_base,
        })
    }

    /// Scale by a real factor, returning `None` when the result is not a
    /// finite value within `i64`.
    #[must_use]
    pub fn checked_mul_f64(&self, factor: f64) -> Option<Self> {
        Some(Self {
            sub_frame_count: quantize_sub_frames(self.sub_frame_count as f64 * factor)?,
            sub_frames_base: self.sub_frames_base,
        })
    }

    /// Scale by a real factor; overflow collapses to zero.
    #[must_use]
    pub fn mul_f64(&self, factor: f64) -> Self {
        Self {
            sub_frame_count: failsafe(
                self.checked_mul_f64(factor).map(|fc| fc.sub_frame_count),
                "scaled frame count",
            ),
            sub_frames_base: self.sub_frames_base,
        }
    }
}

/// Convert a real subframe value to an integer count, truncating toward
/// zero. Values within rounding noise of a whole subframe snap to it, so
/// that `1.9999999999` counts as 2.
pub(crate) fn quantize_sub_frames(raw: f64) -> Option<i64> {
    if !raw.is_finite() {
        return None;
    }
    let nearest = raw.round();
    let tolerance = 1e-6_f64.max(raw.abs() * 1e-13);
    let value = if (raw - nearest).abs() < tolerance {
        nearest
    } else {
        raw.trunc()
    };
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Integer overflow degrades to zero rather than trapping.
pub(crate) fn failsafe(value: Option<i64>, what: &str) -> i64 {
    value.unwrap_or_else(|| {
        warn!(what, "integer overflow; substituting zero");
        0
    })
}

impl PartialEq for FrameCount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrameCount {}

impl PartialOrd for FrameCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrameCount {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.sub_frame_count as i128 * other.sub_frames_base.get() as i128;
        let rhs = other.sub_frame_count as i128 * self.sub_frames_base.get() as i128;
        lhs.cmp(&rhs)
    }
}

impl Add for FrameCount {
    type Output = Self;

    /// Overflow collapses to zero.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs)
            .unwrap_or_else(|| Self::from_sub_frame_count(failsafe(None, "frame count sum"), self.sub_frames_base))
    }
}

impl Sub for FrameCount {
    type Output = Self;

    /// Overflow collapses to zero.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).unwrap_or_else(|| {
            Self::from_sub_frame_count(failsafe(None, "frame count difference"), self.sub_frames_base)
        })
    }
}

impl Neg for FrameCount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            sub_frame_count: failsafe(self.sub_frame_count.checked_neg(), "negated frame count"),
            sub_frames_base: self.sub_frames_base,
        }
    }
}

impl fmt::Display for FrameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs_frames = self.whole_frames().unsigned_abs();
        let abs_sub = self.sub_frames().unsigned_abs();
        write!(f, "{sign}{abs_frames}.{abs_sub}/{}", self.sub_frames_base.get())
    }
}
