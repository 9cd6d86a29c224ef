//! SMPTE/EBU Timecode Engine
//!
//! This crate provides precise timecode values for film, video and audio
//! timelines:
//!
//! - **Frame rates**: 23 industry rates, including drop-frame 29.97, 59.94
//!   and 119.88 fps, with exact rational rates
//! - **Conversions**: components ↔ elapsed frames ↔ real time ↔ exact
//!   fractions ↔ audio samples, with subframes
//! - **Validation policies**: exact, clamping, per-component clamping,
//!   wrapping or raw values, applied the same way by every operation
//! - **Arithmetic**: add, subtract, multiply, divide and signed intervals
//! - **Text**: `[D ]HH:MM:SS:FF[.SF]` parsing and formatting
//!
//! # Quick Start
//!
//! ```rust
//! use timecode_engine::{FrameRate, StringFormat, Timecode, ValidationRule};
//!
//! let tc = Timecode::exactly("01:02:03:04", FrameRate::Fps23_976).unwrap();
//! assert_eq!(tc.to_string(), "01:02:03:04");
//!
//! // Out-of-range input is handled by the chosen policy
//! assert!(Timecode::exactly("50:05:20:14", FrameRate::Fps24).is_err());
//! let clamped = Timecode::clamping("50:05:20:14", FrameRate::Fps24).unwrap();
//! assert_eq!(clamped.to_string(), "23:59:59:23");
//! let per_field = Timecode::clamping_components("50:05:20:14", FrameRate::Fps24).unwrap();
//! assert_eq!(per_field.to_string(), "23:05:20:14");
//!
//! // Arithmetic in the frame-count domain
//! let later = tc.adding("00:00:00:20", ValidationRule::Exact).unwrap();
//! assert_eq!(later.string_value(StringFormat::default()), "01:02:04:00");
//! ```
//!
//! # Drop-Frame Timecode
//!
//! Drop-frame rates skip frame *numbers* at the start of every minute
//! except each tenth, so that displayed time tracks wall-clock time:
//!
//! ```rust
//! use timecode_engine::{FrameCountValue, FrameRate, Timecode};
//!
//! let tc = Timecode::exactly(FrameCountValue::Frames(1800), FrameRate::Fps29_97d).unwrap();
//! assert_eq!(tc.to_string(), "00:01:00;02");
//!
//! // A full day at 29.97d is 2,589,408 frames
//! let max = FrameRate::Fps29_97d.max_total_frames(Default::default());
//! assert_eq!(max, 2_589_408);
//! ```
//!
//! # Audio Samples
//!
//! ```rust
//! use timecode_engine::{FrameRate, Samples, Timecode, TimecodeProperties, UpperLimit};
//!
//! let props = TimecodeProperties::new(FrameRate::Fps29_97d).with_upper_limit(UpperLimit::Max100Days);
//! let one_day = Timecode::exactly("1 00:00:00;00", props).unwrap();
//! assert_eq!(one_day.samples_value(48_000), 4_147_195_853);
//!
//! let back = Timecode::exactly(Samples::new(4_147_195_853, 48_000), props).unwrap();
//! assert_eq!(back, one_day);
//! ```
//!
//! # Concurrency
//!
//! All types are plain data and `Send + Sync`. Nothing is internally
//! synchronized; callers serialize writes to a shared `Timecode`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

mod arithmetic;
pub mod components;
pub mod convert;
pub mod dropframe;
pub mod error;
pub mod fraction;
pub mod frame_count;
pub mod frame_rate;
pub mod interval;
pub mod media;
pub mod properties;
mod rounding;
pub mod source;
pub mod string;
pub mod timecode;
pub mod validation;

pub use components::{Component, Components};
pub use error::{Result, TimecodeError};
pub use fraction::Fraction;
pub use frame_count::{FrameCount, FrameCountValue};
pub use frame_rate::{CompatibleGroup, FrameRate};
pub use interval::{Sign, TimecodeInterval};
pub use media::{MediaTimecodeSink, MediaTimecodeSource};
pub use properties::{SubFramesBase, TimecodeProperties, UpperLimit};
pub use source::{RealTime, Samples, SourceValue, TimecodeSource};
pub use string::{StringFormat, TimecodeSegment};
pub use timecode::Timecode;
pub use validation::{ValidationRule, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};

/// Create a timecode from hours, minutes, seconds and frames, rejecting
/// out-of-range values.
///
/// # Example
///
/// ```rust
/// use timecode_engine::{timecode, FrameRate};
///
/// let tc = timecode(1, 0, 0, 2, FrameRate::Fps29_97d).unwrap();
/// assert_eq!(tc.to_string(), "01:00:00;02");
/// ```
pub fn timecode(
    hours: i32,
    minutes: i32,
    seconds: i32,
    frames: i32,
    frame_rate: FrameRate,
) -> Result<Timecode> {
    Timecode::exactly(Components::hmsf(hours, minutes, seconds, frames), frame_rate)
}
