//! Interface for media collaborators.
//!
//! Container parsing lives outside this crate. A collaborator reports what
//! it read through [`MediaTimecodeSource`] and accepts what to write
//! through [`MediaTimecodeSink`]; failures surface as
//! [`TimecodeError::MediaParse`] and [`TimecodeError::MediaWrite`].

use crate::error::{Result, TimecodeError};
use crate::fraction::Fraction;
use crate::frame_count::FrameCountValue;
use crate::frame_rate::FrameRate;
use crate::properties::{SubFramesBase, TimecodeProperties, UpperLimit};
use crate::timecode::Timecode;
use crate::validation::ValidationRule;
use std::fmt;
use tracing::debug;

/// Timecode metadata read from a media container.
pub trait MediaTimecodeSource {
    /// Duration of one frame in seconds, e.g. `1001/30000`.
    ///
    /// Build it from raw container fields with [`Fraction::try_new`] and
    /// report `None` for a zero denominator.
    fn frame_duration(&self) -> Option<Fraction>;

    /// Whether the timecode track counts in drop-frame.
    fn is_drop_frame(&self) -> bool;

    /// The first frame of the timecode track.
    fn start_frame(&self) -> Option<i64>;
}

/// A media container timecode can be written to.
pub trait MediaTimecodeSink {
    /// Error reported by the container.
    type Error: fmt::Display;

    /// Write a timecode track starting at `start_frame`.
    fn write_start_frame(
        &mut self,
        frame_duration: Fraction,
        drop_frame: bool,
        start_frame: i64,
    ) -> std::result::Result<(), Self::Error>;
}

/// The frame rate a media source describes.
///
/// # Errors
///
/// [`TimecodeError::MediaParse`] when the source has no frame duration or
/// it matches no known rate.
pub fn frame_rate_from_media(source: &impl MediaTimecodeSource) -> Result<FrameRate> {
    let duration = source
        .frame_duration()
        .ok_or_else(|| TimecodeError::media_parse("missing frame duration"))?;
    let drop = source.is_drop_frame();
    let rate = FrameRate::try_from_frame_duration(duration, drop).map_err(|err| {
        TimecodeError::media_parse(format!(
            "{err} ({})",
            if drop { "drop-frame" } else { "non-drop" }
        ))
    })?;
    debug!(%duration, drop, %rate, "read media frame rate");
    Ok(rate)
}

/// The start timecode a media source describes.
///
/// # Errors
///
/// [`TimecodeError::MediaParse`] when the frame rate or start frame is
/// missing, or the start frame is rejected by `rule`.
pub fn timecode_from_media(
    source: &impl MediaTimecodeSource,
    sub_frames_base: SubFramesBase,
    upper_limit: UpperLimit,
    rule: ValidationRule,
) -> Result<Timecode> {
    let frame_rate = frame_rate_from_media(source)?;
    let start_frame = source
        .start_frame()
        .ok_or_else(|| TimecodeError::media_parse("missing start frame"))?;
    let properties = TimecodeProperties::new(frame_rate)
        .with_sub_frames_base(sub_frames_base)
        .with_upper_limit(upper_limit);
    Timecode::new(FrameCountValue::Frames(start_frame), properties, rule)
        .map_err(|err| TimecodeError::media_parse(format!("start frame {start_frame}: {err}")))
}

/// Write `timecode` as the start of a media timecode track.
///
/// # Errors
///
/// [`TimecodeError::MediaWrite`] when `timecode` is out of range or the
/// sink fails.
pub fn write_timecode_to_media(
    sink: &mut impl MediaTimecodeSink,
    timecode: &Timecode,
) -> Result<()> {
    if !timecode.is_valid() {
        return Err(TimecodeError::media_write(format!(
            "timecode {timecode} has invalid components"
        )));
    }
    let frame_rate = timecode.frame_rate();
    sink.write_start_frame(
        frame_rate.frame_duration(),
        frame_rate.is_drop(),
        timecode.frame_count().whole_frames(),
    )
    .map_err(|err| TimecodeError::media_write(err.to_string()))
}
