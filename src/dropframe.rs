//! Drop-frame timecode arithmetic.
//!
//! Drop-frame timecode compensates for fractional rates (29.97, 59.94,
//! 119.88) by skipping frame *numbers*, never actual frames, so that the
//! displayed time tracks wall-clock time. The rules are:
//! - Skip the first `n` frame numbers at the start of each minute
//!   (`n` = 2 at 30 fps, 4 at 60 fps, 8 at 120 fps)
//! - Except for minutes 0, 10, 20, 30, 40, 50
//!
//! Non-drop rates count every frame number and pass through the same entry
//! points unchanged.

use crate::components::Components;
use crate::frame_rate::FrameRate;
use serde::{Deserialize, Serialize};

/// Drop-frame configuration for a frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Frame numbers dropped per minute (except every 10th minute)
    pub frames_dropped_per_minute: i64,
    /// Frame numbers per timecode second
    pub max_frames: i64,
    /// Frames per 10 minutes (accounting for drops)
    pub frames_per_10_minutes: i64,
    /// Frames per minute (accounting for drops, for non-10th minutes)
    pub frames_per_minute: i64,
}

impl DropFrameConfig {
    const fn new(max_frames: i64, frames_dropped_per_minute: i64) -> Self {
        Self {
            frames_dropped_per_minute,
            max_frames,
            frames_per_10_minutes: max_frames * 60 * 10 - 9 * frames_dropped_per_minute,
            frames_per_minute: max_frames * 60 - frames_dropped_per_minute,
        }
    }

    /// Get the configuration for a frame rate, if it is a drop rate.
    #[must_use]
    pub fn for_frame_rate(frame_rate: FrameRate) -> Option<Self> {
        frame_rate.is_drop().then(|| {
            Self::new(
                frame_rate.max_frames() as i64,
                frame_rate.frames_dropped_per_minute() as i64,
            )
        })
    }
}

/// Elapsed whole frames for `components` at `frame_rate`.
///
/// Subframes are ignored. Components may be negative or out of range; the
/// result is the linear frame position those values describe.
#[must_use]
pub fn elapsed_frames(components: &Components, frame_rate: FrameRate) -> i64 {
    let max_frames = frame_rate.max_frames() as i64;
    let total_minutes = components.days as i64 * 1440
        + components.hours as i64 * 60
        + components.minutes as i64;
    let total_seconds = total_minutes * 60 + components.seconds as i64;
    let raw_frames = total_seconds * max_frames + components.frames as i64;

    match DropFrameConfig::for_frame_rate(frame_rate) {
        Some(config) => raw_frames - frames_dropped_until(total_minutes, config),
        None => raw_frames,
    }
}

/// Frame numbers skipped before the start of minute `total_minutes`.
#[must_use]
pub fn frames_dropped_until(total_minutes: i64, config: DropFrameConfig) -> i64 {
    config.frames_dropped_per_minute * (total_minutes - total_minutes.div_euclid(10))
}

/// Convert a non-negative elapsed frame count into the frame *number* a
/// clock without drops would show, by adding back the skipped numbers.
///
/// The result divides by `max_frames` into plain days/hours/minutes/
/// seconds/frames. Returns `None` when the frame number does not fit an
/// `i64`.
#[must_use]
pub fn display_frame_number(elapsed: i64, frame_rate: FrameRate) -> Option<i64> {
    let Some(config) = DropFrameConfig::for_frame_rate(frame_rate) else {
        return Some(elapsed);
    };
    let drop = config.frames_dropped_per_minute;

    let ten_minute_blocks = elapsed / config.frames_per_10_minutes;
    let remainder = elapsed % config.frames_per_10_minutes;

    // the first minute of each block keeps all of its frame numbers
    let extra_minutes = if remainder > drop {
        (remainder - drop) / config.frames_per_minute
    } else {
        0
    };

    elapsed
        .checked_add(drop * 9 * ten_minute_blocks)?
        .checked_add(drop * extra_minutes)
}

/// Check if a position names a frame number skipped by drop-frame counting.
#[must_use]
pub fn is_dropped_frame(minutes: i32, seconds: i32, frames: i32, frame_rate: FrameRate) -> bool {
    match DropFrameConfig::for_frame_rate(frame_rate) {
        Some(config) => {
            seconds == 0
                && minutes.rem_euclid(10) != 0
                && (frames as i64) < config.frames_dropped_per_minute
        }
        None => false,
    }
}
