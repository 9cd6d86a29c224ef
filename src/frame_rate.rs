//! Timecode frame rates.
//!
//! Every property of a [`FrameRate`] is an exhaustive `match` over the
//! closed set of variants, so adding a rate fails to compile until every
//! table below accounts for it.

use crate::components::Components;
use crate::dropframe;
use crate::error::TimecodeError;
use crate::fraction::Fraction;
use crate::properties::{SubFramesBase, UpperLimit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Industry-standard timecode frame rates.
///
/// Drop-frame variants carry a `d` suffix. Fractional NTSC rates
/// (`x/1.001`) are listed by their conventional decimal names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FrameRate {
    /// 23.976 fps (24000/1001)
    Fps23_976,
    /// 24 fps (film)
    Fps24,
    /// 24.98 fps (25000/1001)
    Fps24_98,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps non-drop (30000/1001)
    Fps29_97,
    /// 29.97 fps drop-frame (30000/1001)
    Fps29_97d,
    /// 30 fps
    Fps30,
    /// 30 fps drop-frame
    Fps30d,
    /// 47.952 fps (48000/1001)
    Fps47_952,
    /// 48 fps (HFR film)
    Fps48,
    /// 50 fps
    Fps50,
    /// 59.94 fps non-drop (60000/1001)
    Fps59_94,
    /// 59.94 fps drop-frame (60000/1001)
    Fps59_94d,
    /// 60 fps
    Fps60,
    /// 60 fps drop-frame
    Fps60d,
    /// 90 fps
    Fps90,
    /// 95.904 fps (96000/1001)
    Fps95_904,
    /// 96 fps
    Fps96,
    /// 100 fps
    Fps100,
    /// 119.88 fps non-drop (120000/1001)
    Fps119_88,
    /// 119.88 fps drop-frame (120000/1001)
    Fps119_88d,
    /// 120 fps
    Fps120,
    /// 120 fps drop-frame
    Fps120d,
}

/// Groups of frame rates whose HH:MM:SS values align at the same wall-clock
/// instant; only the frames field differs between members of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibleGroup {
    /// Fractional (`x/1.001`) non-drop rates.
    Ntsc,
    /// Fractional drop-frame rates.
    NtscDrop,
    /// Whole-number non-drop rates.
    Whole,
    /// Whole-number drop-frame rates.
    WholeDrop,
}

impl CompatibleGroup {
    /// All groups.
    pub const ALL: [Self; 4] = [Self::Ntsc, Self::NtscDrop, Self::Whole, Self::WholeDrop];

    /// The frame rates in this group.
    #[must_use]
    pub fn frame_rates(&self) -> &'static [FrameRate] {
        use FrameRate::*;
        match self {
            Self::Ntsc => &[
                Fps23_976, Fps24_98, Fps29_97, Fps47_952, Fps59_94, Fps95_904, Fps119_88,
            ],
            Self::NtscDrop => &[Fps29_97d, Fps59_94d, Fps119_88d],
            Self::Whole => &[Fps24, Fps25, Fps30, Fps48, Fps50, Fps60, Fps90, Fps96, Fps100, Fps120],
            Self::WholeDrop => &[Fps30d, Fps60d, Fps120d],
        }
    }
}

impl FrameRate {
    /// Every frame rate, in ascending order.
    pub const ALL: [Self; 23] = [
        Self::Fps23_976,
        Self::Fps24,
        Self::Fps24_98,
        Self::Fps25,
        Self::Fps29_97,
        Self::Fps29_97d,
        Self::Fps30,
        Self::Fps30d,
        Self::Fps47_952,
        Self::Fps48,
        Self::Fps50,
        Self::Fps59_94,
        Self::Fps59_94d,
        Self::Fps60,
        Self::Fps60d,
        Self::Fps90,
        Self::Fps95_904,
        Self::Fps96,
        Self::Fps100,
        Self::Fps119_88,
        Self::Fps119_88d,
        Self::Fps120,
        Self::Fps120d,
    ];

    /// The exact frame rate as a fraction (frames per second).
    #[must_use]
    pub fn rate(&self) -> Fraction {
        let (num, den) = match self {
            Self::Fps23_976 => (24000, 1001),
            Self::Fps24 => (24, 1),
            Self::Fps24_98 => (25000, 1001),
            Self::Fps25 => (25, 1),
            Self::Fps29_97 | Self::Fps29_97d => (30000, 1001),
            Self::Fps30 | Self::Fps30d => (30, 1),
            Self::Fps47_952 => (48000, 1001),
            Self::Fps48 => (48, 1),
            Self::Fps50 => (50, 1),
            Self::Fps59_94 | Self::Fps59_94d => (60000, 1001),
            Self::Fps60 | Self::Fps60d => (60, 1),
            Self::Fps90 => (90, 1),
            Self::Fps95_904 => (96000, 1001),
            Self::Fps96 => (96, 1),
            Self::Fps100 => (100, 1),
            Self::Fps119_88 | Self::Fps119_88d => (120000, 1001),
            Self::Fps120 | Self::Fps120d => (120, 1),
        };
        Fraction::new(num, den)
    }

    /// The exact duration of a single frame in seconds.
    #[must_use]
    pub fn frame_duration(&self) -> Fraction {
        let rate = self.rate();
        Fraction::new(rate.denominator(), rate.numerator())
    }

    /// Returns `true` for drop-frame rates.
    #[must_use]
    pub fn is_drop(&self) -> bool {
        match self {
            Self::Fps29_97d
            | Self::Fps30d
            | Self::Fps59_94d
            | Self::Fps60d
            | Self::Fps119_88d
            | Self::Fps120d => true,
            Self::Fps23_976
            | Self::Fps24
            | Self::Fps24_98
            | Self::Fps25
            | Self::Fps29_97
            | Self::Fps30
            | Self::Fps47_952
            | Self::Fps48
            | Self::Fps50
            | Self::Fps59_94
            | Self::Fps60
            | Self::Fps90
            | Self::Fps95_904
            | Self::Fps96
            | Self::Fps100
            | Self::Fps119_88
            | Self::Fps120 => false,
        }
    }

    /// Number of frame numbers per timecode second.
    #[must_use]
    pub fn max_frames(&self) -> u32 {
        match self {
            Self::Fps23_976 | Self::Fps24 => 24,
            Self::Fps24_98 | Self::Fps25 => 25,
            Self::Fps29_97 | Self::Fps29_97d | Self::Fps30 | Self::Fps30d => 30,
            Self::Fps47_952 | Self::Fps48 => 48,
            Self::Fps50 => 50,
            Self::Fps59_94 | Self::Fps59_94d | Self::Fps60 | Self::Fps60d => 60,
            Self::Fps90 => 90,
            Self::Fps95_904 | Self::Fps96 => 96,
            Self::Fps100 => 100,
            Self::Fps119_88 | Self::Fps119_88d | Self::Fps120 | Self::Fps120d => 120,
        }
    }

    /// The highest frame number shown in the frames field.
    #[must_use]
    pub fn max_frame_number_displayable(&self) -> u32 {
        self.max_frames() - 1
    }

    /// Frame numbers skipped at the start of each non-tenth minute.
    ///
    /// Zero for non-drop rates; only drop-frame code paths consult it.
    #[must_use]
    pub fn frames_dropped_per_minute(&self) -> u32 {
        match self {
            Self::Fps29_97d | Self::Fps30d => 2,
            Self::Fps59_94d | Self::Fps60d => 4,
            Self::Fps119_88d | Self::Fps120d => 8,
            Self::Fps23_976
            | Self::Fps24
            | Self::Fps24_98
            | Self::Fps25
            | Self::Fps29_97
            | Self::Fps30
            | Self::Fps47_952
            | Self::Fps48
            | Self::Fps50
            | Self::Fps59_94
            | Self::Fps60
            | Self::Fps90
            | Self::Fps95_904
            | Self::Fps96
            | Self::Fps100
            | Self::Fps119_88
            | Self::Fps120 => 0,
        }
    }

    /// Width of the frames field when formatted.
    #[must_use]
    pub fn number_of_digits(&self) -> usize {
        match self {
            Self::Fps23_976
            | Self::Fps24
            | Self::Fps24_98
            | Self::Fps25
            | Self::Fps29_97
            | Self::Fps29_97d
            | Self::Fps30
            | Self::Fps30d
            | Self::Fps47_952
            | Self::Fps48
            | Self::Fps50
            | Self::Fps59_94
            | Self::Fps59_94d
            | Self::Fps60
            | Self::Fps60d
            | Self::Fps90
            | Self::Fps95_904
            | Self::Fps96 => 2,
            Self::Fps100
            | Self::Fps119_88
            | Self::Fps119_88d
            | Self::Fps120
            | Self::Fps120d => 3,
        }
    }

    /// Timecode frames counted per wall-clock second when converting
    /// components to elapsed frames.
    ///
    /// Non-drop rates count every frame number, so fractional rates use
    /// their whole `max_frames` here. Drop rates count `max_frames × 0.999`
    /// on average over ten minutes.
    #[must_use]
    pub fn frame_rate_for_elapsed_frames_calculation(&self) -> f64 {
        match self {
            Self::Fps29_97d | Self::Fps30d => 29.97,
            Self::Fps59_94d | Self::Fps60d => 59.94,
            Self::Fps119_88d | Self::Fps120d => 119.88,
            Self::Fps23_976
            | Self::Fps24
            | Self::Fps24_98
            | Self::Fps25
            | Self::Fps29_97
            | Self::Fps30
            | Self::Fps47_952
            | Self::Fps48
            | Self::Fps50
            | Self::Fps59_94
            | Self::Fps60
            | Self::Fps90
            | Self::Fps95_904
            | Self::Fps96
            | Self::Fps100
            | Self::Fps119_88
            | Self::Fps120 => self.max_frames() as f64,
        }
    }

    /// Frames per wall-clock second used when converting elapsed frames to
    /// real time. This is the exact rate, e.g. `30 / 1.001` for 29.97.
    #[must_use]
    pub fn frame_rate_for_real_time_calculation(&self) -> f64 {
        self.rate().to_f64()
    }

    /// Canonical string form, e.g. `"29.97d"`.
    #[must_use]
    pub fn string_value(&self) -> &'static str {
        match self {
            Self::Fps23_976 => "23.976",
            Self::Fps24 => "24",
            Self::Fps24_98 => "24.98",
            Self::Fps25 => "25",
            Self::Fps29_97 => "29.97",
            Self::Fps29_97d => "29.97d",
            Self::Fps30 => "30",
            Self::Fps30d => "30d",
            Self::Fps47_952 => "47.952",
            Self::Fps48 => "48",
            Self::Fps50 => "50",
            Self::Fps59_94 => "59.94",
            Self::Fps59_94d => "59.94d",
            Self::Fps60 => "60",
            Self::Fps60d => "60d",
            Self::Fps90 => "90",
            Self::Fps95_904 => "95.904",
            Self::Fps96 => "96",
            Self::Fps100 => "100",
            Self::Fps119_88 => "119.88",
            Self::Fps119_88d => "119.88d",
            Self::Fps120 => "120",
            Self::Fps120d => "120d",
        }
    }

    /// The group of rates that share HH:MM:SS alignment with this one.
    #[must_use]
    pub fn compatible_group(&self) -> CompatibleGroup {
        match self {
            Self::Fps23_976
            | Self::Fps24_98
            | Self::Fps29_97
            | Self::Fps47_952
            | Self::Fps59_94
            | Self::Fps95_904
            | Self::Fps119_88 => CompatibleGroup::Ntsc,
            Self::Fps29_97d | Self::Fps59_94d | Self::Fps119_88d => CompatibleGroup::NtscDrop,
            Self::Fps24
            | Self::Fps25
            | Self::Fps30
            | Self::Fps48
            | Self::Fps50
            | Self::Fps60
            | Self::Fps90
            | Self::Fps96
            | Self::Fps100
            | Self::Fps120 => CompatibleGroup::Whole,
            Self::Fps30d | Self::Fps60d | Self::Fps120d => CompatibleGroup::WholeDrop,
        }
    }

    /// Returns `true` if both rates belong to the same compatible group.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.compatible_group() == other.compatible_group()
    }

    /// Total frames in the span covered by `limit` (one day or 100 days),
    /// after drop-frame loss.
    #[must_use]
    pub fn max_total_frames(&self, limit: UpperLimit) -> i64 {
        let span = Components {
            days: limit.max_days() as i32,
            ..Components::ZERO
        };
        dropframe::elapsed_frames(&span, *self)
    }

    /// The highest elapsed frame number representable within `limit`.
    #[must_use]
    pub fn max_total_frames_expressible(&self, limit: UpperLimit) -> i64 {
        self.max_total_frames(limit) - 1
    }

    /// Total subframes in the span covered by `limit`.
    #[must_use]
    pub fn max_total_sub_frames(&self, limit: UpperLimit, base: SubFramesBase) -> i64 {
        self.max_total_frames(limit) * base.get() as i64
    }

    /// The highest subframe count representable within `limit`.
    #[must_use]
    pub fn max_sub_frame_count_expressible(&self, limit: UpperLimit, base: SubFramesBase) -> i64 {
        self.max_total_sub_frames(limit, base) - 1
    }

    /// Match a raw floating-point rate such as `29.97` or `23.976023976`.
    ///
    /// Rates shared by a drop and a non-drop variant resolve to the drop
    /// variant only when `favor_drop` is set.
    #[must_use]
    pub fn from_raw_fps(fps: f64, favor_drop: bool) -> Option<Self> {
        const TOLERANCE: f64 = 0.01;
        if !fps.is_finite() {
            return None;
        }
        let mut candidates = Self::ALL
            .iter()
            .copied()
            .filter(|rate| (rate.frame_rate_for_real_time_calculation() - fps).abs() < TOLERANCE);
        let first = candidates.next()?;
        let matched = match candidates.find(|rate| rate.is_drop() != first.is_drop()) {
            Some(other) if other.is_drop() == favor_drop => other,
            Some(_) => first,
            None => first,
        };
        debug!(fps, favor_drop, rate = %matched, "matched raw frame rate");
        Some(matched)
    }

    /// Match an exact rate. A fraction cannot express drop status, so the
    /// caller supplies it.
    #[must_use]
    pub fn from_rate(rate: Fraction, drop: bool) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.rate() == rate && candidate.is_drop() == drop)
    }

    /// Match an exact frame duration, as reported by media containers.
    #[must_use]
    pub fn from_frame_duration(duration: Fraction, drop: bool) -> Option<Self> {
        Self::from_rate(duration.recip()?, drop)
    }

    /// Like [`from_rate`](Self::from_rate), reporting a miss as
    /// [`TimecodeError::InvalidFrameRate`].
    pub fn try_from_rate(rate: Fraction, drop: bool) -> Result<Self, TimecodeError> {
        Self::from_rate(rate, drop)
            .ok_or_else(|| TimecodeError::invalid_frame_rate(rate.numerator(), rate.denominator()))
    }

    /// Like [`from_frame_duration`](Self::from_frame_duration), reporting a
    /// miss as [`TimecodeError::InvalidFrameRate`] with the implied rate.
    pub fn try_from_frame_duration(duration: Fraction, drop: bool) -> Result<Self, TimecodeError> {
        Self::from_frame_duration(duration, drop).ok_or_else(|| {
            TimecodeError::invalid_frame_rate(duration.denominator(), duration.numerator())
        })
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::Fps24
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.string_value())
    }
}

impl FromStr for FrameRate {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|rate| rate.string_value().eq_ignore_ascii_case(s))
            .ok_or_else(|| TimecodeError::invalid_format(format!("Unknown frame rate: {s}")))
    }
}

impl TryFrom<String> for FrameRate {
    type Error = TimecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FrameRate> for String {
    fn from(rate: FrameRate) -> Self {
        rate.string_value().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_rates_are_distinct() {
        for (i, a) in FrameRate::ALL.iter().enumerate() {
            for b in &FrameRate::ALL[i + 1..] {
                assert!(a != b);
                assert!(a.string_value() != b.string_value());
            }
        }
    }

    #[test]
    fn test_rate_and_duration() {
        assert_eq!(FrameRate::Fps23_976.rate(), Fraction::new(24000, 1001));
        assert_eq!(FrameRate::Fps29_97d.rate(), Fraction::new(30000, 1001));
        assert_eq!(FrameRate::Fps30d.rate(), Fraction::new(30, 1));
        assert_eq!(FrameRate::Fps29_97.frame_duration(), Fraction::new(1001, 30000));
        assert_eq!(FrameRate::Fps25.frame_duration(), Fraction::new(1, 25));
    }

    #[test]
    fn test_elapsed_frames_constants() {
        let expected = [
            (FrameRate::Fps23_976, 24.0),
            (FrameRate::Fps24, 24.0),
            (FrameRate::Fps24_98, 25.0),
            (FrameRate::Fps25, 25.0),
            (FrameRate::Fps29_97, 30.0),
            (FrameRate::Fps29_97d, 29.97),
            (FrameRate::Fps30, 30.0),
            (FrameRate::Fps30d, 29.97),
            (FrameRate::Fps47_952, 48.0),
            (FrameRate::Fps48, 48.0),
            (FrameRate::Fps50, 50.0),
            (FrameRate::Fps59_94, 60.0),
            (FrameRate::Fps59_94d, 59.94),
            (FrameRate::Fps60, 60.0),
            (FrameRate::Fps60d, 59.94),
            (FrameRate::Fps90, 90.0),
            (FrameRate::Fps95_904, 96.0),
            (FrameRate::Fps96, 96.0),
            (FrameRate::Fps100, 100.0),
            (FrameRate::Fps119_88, 120.0),
            (FrameRate::Fps119_88d, 119.88),
            (FrameRate::Fps120, 120.0),
            (FrameRate::Fps120d, 119.88),
        ];
        for (rate, fps) in expected {
            assert_eq!(rate.frame_rate_for_elapsed_frames_calculation(), fps, "{rate}");
        }
    }

    #[test]
    fn test_real_time_constants() {
        assert!((FrameRate::Fps29_97d.frame_rate_for_real_time_calculation() - 30.0 / 1.001).abs() < 1e-12);
        assert!((FrameRate::Fps23_976.frame_rate_for_real_time_calculation() - 24.0 / 1.001).abs() < 1e-12);
        assert_eq!(FrameRate::Fps30d.frame_rate_for_real_time_calculation(), 30.0);
    }

    #[test]
    fn test_drop_properties() {
        for rate in FrameRate::ALL {
            assert_eq!(rate.is_drop(), rate.frames_dropped_per_minute() > 0, "{rate}");
        }
        assert_eq!(FrameRate::Fps29_97d.frames_dropped_per_minute(), 2);
        assert_eq!(FrameRate::Fps59_94d.frames_dropped_per_minute(), 4);
        assert_eq!(FrameRate::Fps120d.frames_dropped_per_minute(), 8);
    }

    #[test]
    fn test_number_of_digits() {
        assert_eq!(FrameRate::Fps96.number_of_digits(), 2);
        assert_eq!(FrameRate::Fps100.number_of_digits(), 3);
        assert_eq!(FrameRate::Fps119_88d.number_of_digits(), 3);
    }

    #[test]
    fn test_max_total_frames() {
        assert_eq!(FrameRate::Fps24.max_total_frames(UpperLimit::Max24Hours), 2_073_600);
        assert_eq!(FrameRate::Fps29_97d.max_total_frames(UpperLimit::Max24Hours), 2_589_408);
        assert_eq!(FrameRate::Fps30d.max_total_frames(UpperLimit::Max24Hours), 2_589_408);
        assert_eq!(FrameRate::Fps59_94d.max_total_frames(UpperLimit::Max24Hours), 5_178_816);
        assert_eq!(FrameRate::Fps119_88d.max_total_frames(UpperLimit::Max24Hours), 10_357_632);
        assert_eq!(FrameRate::Fps30.max_total_frames(UpperLimit::Max100Days), 259_200_000);
        assert_eq!(
            FrameRate::Fps30.max_total_sub_frames(UpperLimit::Max24Hours, SubFramesBase::MAX_80),
            2_592_000 * 80
        );
        assert_eq!(
            FrameRate::Fps30.max_sub_frame_count_expressible(UpperLimit::Max24Hours, SubFramesBase::MAX_80),
            2_592_000 * 80 - 1
        );
    }

    #[test]
    fn test_from_raw_fps() {
        assert_eq!(FrameRate::from_raw_fps(23.976, false), Some(FrameRate::Fps23_976));
        assert_eq!(FrameRate::from_raw_fps(24.98, false), Some(FrameRate::Fps24_98));
        assert_eq!(FrameRate::from_raw_fps(29.97, false), Some(FrameRate::Fps29_97));
        assert_eq!(FrameRate::from_raw_fps(29.97, true), Some(FrameRate::Fps29_97d));
        assert_eq!(FrameRate::from_raw_fps(30.0, true), Some(FrameRate::Fps30d));
        assert_eq!(FrameRate::from_raw_fps(25.0, true), Some(FrameRate::Fps25));
        assert_eq!(FrameRate::from_raw_fps(119.88, true), Some(FrameRate::Fps119_88d));
        assert_eq!(FrameRate::from_raw_fps(31.0, false), None);
        assert_eq!(FrameRate::from_raw_fps(f64::NAN, false), None);
    }

    #[test]
    fn test_from_rate() {
        assert_eq!(
            FrameRate::from_rate(Fraction::new(60000, 2002), true),
            Some(FrameRate::Fps29_97d)
        );
        assert_eq!(
            FrameRate::from_rate(Fraction::new(30, 1), false),
            Some(FrameRate::Fps30)
        );
        assert_eq!(FrameRate::from_rate(Fraction::new(25, 1), true), None);
        assert_eq!(FrameRate::from_rate(Fraction::new(31, 1), false), None);
        assert_eq!(
            FrameRate::from_frame_duration(Fraction::new(1001, 24000), false),
            Some(FrameRate::Fps23_976)
        );
        assert_eq!(FrameRate::from_frame_duration(Fraction::ZERO, false), None);
    }

    #[test]
    fn test_try_from_rate() {
        assert_eq!(
            FrameRate::try_from_rate(Fraction::new(24000, 1001), false),
            Ok(FrameRate::Fps23_976)
        );
        assert_eq!(
            FrameRate::try_from_rate(Fraction::new(25, 1), true),
            Err(TimecodeError::invalid_frame_rate(25, 1))
        );
        assert_eq!(
            FrameRate::try_from_frame_duration(Fraction::new(1, 27), false),
            Err(TimecodeError::invalid_frame_rate(27, 1))
        );
        assert_eq!(
            FrameRate::try_from_frame_duration(Fraction::ZERO, false),
            Err(TimecodeError::invalid_frame_rate(1, 0))
        );
    }

    #[test]
    fn test_compatible_groups() {
        for group in CompatibleGroup::ALL {
            for rate in group.frame_rates() {
                assert_eq!(rate.compatible_group(), group, "{rate}");
            }
        }
        let total: usize = CompatibleGroup::ALL.iter().map(|g| g.frame_rates().len()).sum();
        assert_eq!(total, FrameRate::ALL.len());

        assert!(FrameRate::Fps30.is_compatible(&FrameRate::Fps60));
        assert!(!FrameRate::Fps30.is_compatible(&FrameRate::Fps29_97));
        assert!(!FrameRate::Fps29_97.is_compatible(&FrameRate::Fps29_97d));
    }

    #[test]
    fn test_string_roundtrip() {
        for rate in FrameRate::ALL {
            assert_eq!(rate.to_string().parse::<FrameRate>().unwrap(), rate);
        }
        assert!("29.98".parse::<FrameRate>().is_err());
    }

    #[test]
    fn test_frame_rate_serialization() {
        let json = serde_json::to_string(&FrameRate::Fps59_94d).unwrap();
        assert_eq!(json, "\"59.94d\"");
        let decoded: FrameRate = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, FrameRate::Fps59_94d);
    }
}
