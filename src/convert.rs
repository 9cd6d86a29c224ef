//! Conversions between components, frame counts, real time, rational time
//! and audio samples.
//!
//! All functions are pure. Integer overflow never traps: it degrades to a
//! zero result and logs a warning.

use crate::components::Components;
use crate::dropframe;
use crate::fraction::{round_div, Fraction};
use crate::frame_count::{failsafe, quantize_sub_frames, FrameCount};
use crate::frame_rate::FrameRate;
use crate::properties::SubFramesBase;
use tracing::warn;

/// Bias, in samples, added before truncating a sample position to a
/// subframe.
///
/// A timecode converted to samples rounds to the nearest sample, which can
/// land up to half a sample before the exact subframe boundary. Shifting by
/// half a sample before truncating puts that sample back inside its
/// subframe, so timecode → samples → timecode is stable whenever a subframe
/// spans more than one sample.
pub const SAMPLES_ROUNDING_BIAS: f64 = 0.5;

/// Components to elapsed frames, including subframes.
#[must_use]
pub fn components_to_frame_count(
    components: &Components,
    frame_rate: FrameRate,
    base: SubFramesBase,
) -> FrameCount {
    let whole = dropframe::elapsed_frames(components, frame_rate);
    let count = whole
        .checked_mul(base.get() as i64)
        .and_then(|sub| sub.checked_add(components.sub_frames as i64));
    FrameCount::from_sub_frame_count(failsafe(count, "components frame count"), base)
}

/// Elapsed frames to components.
///
/// Days are never folded into hours, so a count beyond the upper limit
/// yields a days value outside the limit's range. A negative count negates
/// only the most significant nonzero component.
#[must_use]
pub fn frame_count_to_components(frame_count: &FrameCount, frame_rate: FrameRate) -> Components {
    let base = frame_count.sub_frames_base().get() as i64;
    let abs = failsafe(frame_count.sub_frame_count().checked_abs(), "frame count magnitude");

    let Some(number) = dropframe::display_frame_number(abs / base, frame_rate) else {
        warn!(frame_rate = %frame_rate, "frame number overflow; substituting zero");
        return Components::ZERO;
    };
    let sub_frames = abs % base;

    let max_frames = frame_rate.max_frames() as i64;
    let frames_per_day = max_frames * 86_400;
    let frames_per_hour = max_frames * 3_600;
    let frames_per_minute = max_frames * 60;

    let days = number / frames_per_day;
    let mut remainder = number % frames_per_day;
    let hours = remainder / frames_per_hour;
    remainder %= frames_per_hour;
    let minutes = remainder / frames_per_minute;
    remainder %= frames_per_minute;
    let seconds = remainder / max_frames;
    let frames = remainder % max_frames;

    let Ok(days) = i32::try_from(days) else {
        warn!(days, "days component overflow; substituting zero");
        return Components::ZERO;
    };

    // every other field is bounded by its radix, subframes by the base cap
    let components = Components::new(
        days,
        hours as i32,
        minutes as i32,
        seconds as i32,
        frames as i32,
        sub_frames as i32,
    );

    if frame_count.is_negative() {
        components.negated_most_significant()
    } else {
        components
    }
}

/// Elapsed frames to real (wall-clock) seconds at the exact frame rate.
#[must_use]
pub fn frame_count_to_real_time(frame_count: &FrameCount, frame_rate: FrameRate) -> f64 {
    let rate = frame_rate.rate();
    let num = frame_count.sub_frame_count() as i128 * rate.denominator() as i128;
    let den = frame_count.sub_frames_base().get() as i128 * rate.numerator() as i128;
    num as f64 / den as f64
}

/// Real (wall-clock) seconds to elapsed frames at the exact frame rate.
#[must_use]
pub fn real_time_to_frame_count(
    seconds: f64,
    frame_rate: FrameRate,
    base: SubFramesBase,
) -> FrameCount {
    let rate = frame_rate.rate();
    let raw = seconds * (rate.numerator() as f64 * base.get() as f64) / rate.denominator() as f64;
    FrameCount::from_sub_frame_count(failsafe(quantize_sub_frames(raw), "real time frame count"), base)
}

/// Elapsed frames to an exact, reduced time value in seconds.
#[must_use]
pub fn frame_count_to_rational(frame_count: &FrameCount, frame_rate: FrameRate) -> Fraction {
    let rate = frame_rate.rate();
    Fraction::from_i128(
        frame_count.sub_frame_count() as i128 * rate.denominator() as i128,
        frame_count.sub_frames_base().get() as i128 * rate.numerator() as i128,
    )
}

/// An exact time value in seconds to elapsed frames, truncating toward zero
/// to a whole subframe.
#[must_use]
pub fn rational_to_frame_count(
    time: Fraction,
    frame_rate: FrameRate,
    base: SubFramesBase,
) -> FrameCount {
    let rate = frame_rate.rate();
    let num = time.numerator() as i128 * rate.numerator() as i128 * base.get() as i128;
    let den = time.denominator() as i128 * rate.denominator() as i128;
    let count = i64::try_from(num / den).ok();
    FrameCount::from_sub_frame_count(failsafe(count, "rational frame count"), base)
}

/// Elapsed frames to a whole audio sample position, rounded to the nearest
/// sample.
#[must_use]
pub fn frame_count_to_samples(
    frame_count: &FrameCount,
    frame_rate: FrameRate,
    sample_rate: u32,
) -> i64 {
    let rate = frame_rate.rate();
    let num = frame_count.sub_frame_count() as i128
        * rate.denominator() as i128
        * sample_rate as i128;
    let den = frame_count.sub_frames_base().get() as i128 * rate.numerator() as i128;
    failsafe(i64::try_from(round_div(num, den)).ok(), "sample count")
}

/// Elapsed frames to a fractional audio sample position.
#[must_use]
pub fn frame_count_to_samples_f64(
    frame_count: &FrameCount,
    frame_rate: FrameRate,
    sample_rate: u32,
) -> f64 {
    frame_count_to_real_time(frame_count, frame_rate) * sample_rate as f64
}

/// A whole audio sample position to elapsed frames.
///
/// Applies [`SAMPLES_ROUNDING_BIAS`] in exact integer arithmetic, then
/// truncates toward zero to a whole subframe.
#[must_use]
pub fn samples_to_frame_count(
    samples: i64,
    sample_rate: u32,
    frame_rate: FrameRate,
    base: SubFramesBase,
) -> FrameCount {
    if sample_rate == 0 {
        warn!("zero sample rate; substituting zero frame count");
        return FrameCount::zero(base);
    }
    let rate = frame_rate.rate();
    // (|samples| + 1/2) × rate × base / sample_rate
    let num = (2 * samples.unsigned_abs() as i128 + 1)
        * rate.numerator() as i128
        * base.get() as i128;
    let den = 2 * sample_rate as i128 * rate.denominator() as i128;
    let magnitude = num / den;
    let signed = if samples < 0 { -magnitude } else { magnitude };
    FrameCount::from_sub_frame_count(failsafe(i64::try_from(signed).ok(), "sample frame count"), base)
}

/// A fractional audio sample position to elapsed frames.
///
/// Same rounding policy as [`samples_to_frame_count`], in floating point.
#[must_use]
pub fn samples_f64_to_frame_count(
    samples: f64,
    sample_rate: u32,
    frame_rate: FrameRate,
    base: SubFramesBase,
) -> FrameCount {
    if sample_rate == 0 || !samples.is_finite() {
        warn!(samples, sample_rate, "unusable sample position; substituting zero frame count");
        return FrameCount::zero(base);
    }
    let rate = frame_rate.rate();
    let magnitude = ((samples.abs() + SAMPLES_ROUNDING_BIAS)
        * (rate.numerator() as f64 * base.get() as f64)
        / (sample_rate as f64 * rate.denominator() as f64))
        .floor();
    let signed = if samples < 0.0 { -magnitude } else { magnitude };
    let count = (signed.abs() < i64::MAX as f64).then_some(signed as i64);
    FrameCount::from_sub_frame_count(failsafe(count, "sample frame count"), base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: SubFramesBase = SubFramesBase::MAX_80;

    fn fc(frames: i64) -> FrameCount {
        FrameCount::from_frames(frames, BASE)
    }

    #[test]
    fn test_frame_count_to_components() {
        let c = frame_count_to_components(&fc(670_907), FrameRate::Fps30);
        assert_eq!(c, Components::hmsf(6, 12, 43, 17));

        let c = frame_count_to_components(&fc(1800), FrameRate::Fps29_97d);
        assert_eq!(c, Components::hmsf(0, 1, 0, 2));

        let c = frame_count_to_components(
            &FrameCount::from_sub_frame_count(86400 * 24 * 80 + 12, BASE),
            FrameRate::Fps24,
        );
        assert_eq!(c, Components::new(0, 1, 0, 0, 0, 12));
    }

    #[test]
    fn test_days_are_not_wrapped() {
        let c = frame_count_to_components(&fc(2_592_000 * 3 + 30), FrameRate::Fps30);
        assert_eq!(c, Components::new(3, 0, 0, 1, 0, 0));
    }

    #[test]
    fn test_negative_count_negates_most_significant_only() {
        let c = frame_count_to_components(&fc(-1801), FrameRate::Fps30);
        assert_eq!(c, Components::hmsf(0, -1, 0, 1));

        let c = frame_count_to_components(&fc(-5), FrameRate::Fps30);
        assert_eq!(c, Components::hmsf(0, 0, 0, -5));

        let c = frame_count_to_components(&FrameCount::from_sub_frame_count(-3, BASE), FrameRate::Fps30);
        assert_eq!(c, Components::new(0, 0, 0, 0, 0, -3));
    }

    #[test]
    fn test_components_to_frame_count() {
        let count = components_to_frame_count(&Components::new(0, 0, 0, 1, 2, 40), FrameRate::Fps25, BASE);
        assert_eq!(count.sub_frame_count(), (25 + 2) * 80 + 40);

        let count = components_to_frame_count(&Components::hmsf(0, 0, 0, -1), FrameRate::Fps30, BASE);
        assert_eq!(count.sub_frame_count(), -80);
    }

    #[test]
    fn test_components_overflow_failsafe() {
        let huge = Components::new(i32::MAX, 0, 0, 0, 0, 0);
        let count = components_to_frame_count(&huge, FrameRate::Fps120, SubFramesBase::new(u32::MAX));
        assert_eq!(count.sub_frame_count(), 0);
    }

    #[test]
    fn test_drop_frame_overflow_failsafe() {
        let base = SubFramesBase::new(1);
        for rate in [FrameRate::Fps29_97d, FrameRate::Fps59_94d, FrameRate::Fps119_88d] {
            let max = FrameCount::from_sub_frame_count(i64::MAX, base);
            assert_eq!(frame_count_to_components(&max, rate), Components::ZERO);
            let min = FrameCount::from_sub_frame_count(-i64::MAX, base);
            assert_eq!(frame_count_to_components(&min, rate), Components::ZERO);
        }
    }

    #[test]
    fn test_widest_sub_frames_base_keeps_sub_frames() {
        let base = SubFramesBase::new(u32::MAX);
        let count = FrameCount::from_sub_frame_count(3_000_000_000, base);
        let c = frame_count_to_components(&count, FrameRate::Fps24);
        assert_eq!(base.get(), 1 << 31);
        assert_eq!(c, Components::new(0, 0, 0, 0, 1, 852_516_352));
        assert_eq!(components_to_frame_count(&c, FrameRate::Fps24, base), count);
    }

    #[test]
    fn test_real_time() {
        let seconds = frame_count_to_real_time(&fc(107_892), FrameRate::Fps29_97d);
        assert!((seconds - 3599.9964).abs() < 1e-9);

        let seconds = frame_count_to_real_time(&fc(48), FrameRate::Fps24);
        assert_eq!(seconds, 2.0);

        let back = real_time_to_frame_count(seconds, FrameRate::Fps24, BASE);
        assert_eq!(back, fc(48));
    }

    #[test]
    fn test_real_time_roundtrip_fractional_rate() {
        for frames in [1, 29, 1798, 17_982, 2_589_407] {
            let seconds = frame_count_to_real_time(&fc(frames), FrameRate::Fps29_97d);
            assert_eq!(real_time_to_frame_count(seconds, FrameRate::Fps29_97d, BASE), fc(frames));
        }
    }

    #[test]
    fn test_rational() {
        let time = frame_count_to_rational(&fc(1), FrameRate::Fps29_97d);
        assert!(time.is_identical(&Fraction::new(1001, 30000)));

        let time = frame_count_to_rational(&fc(24), FrameRate::Fps24);
        assert!(time.is_identical(&Fraction::ONE));

        let back = rational_to_frame_count(Fraction::new(1001, 30000), FrameRate::Fps29_97d, BASE);
        assert_eq!(back, fc(1));

        let back = rational_to_frame_count(Fraction::new(-1, 2), FrameRate::Fps30, BASE);
        assert_eq!(back, fc(-15));
    }

    #[test]
    fn test_one_day_drop_frame_samples() {
        let samples = frame_count_to_samples(&fc(2_589_408), FrameRate::Fps29_97d, 48_000);
        assert_eq!(samples, 4_147_195_853);

        let fractional = frame_count_to_samples_f64(&fc(2_589_408), FrameRate::Fps29_97d, 48_000);
        assert!((fractional - 4_147_195_852.8).abs() < 1e-3);
    }

    #[test]
    fn test_samples_to_frame_count() {
        // 24 fps at 48kHz: 2000 samples per frame, 25 per subframe
        assert_eq!(samples_to_frame_count(2000, 48_000, FrameRate::Fps24, BASE), fc(1));
        assert_eq!(
            samples_to_frame_count(2024, 48_000, FrameRate::Fps24, BASE).sub_frame_count(),
            80
        );
        assert_eq!(
            samples_to_frame_count(2025, 48_000, FrameRate::Fps24, BASE).sub_frame_count(),
            81
        );
        assert_eq!(samples_to_frame_count(-2000, 48_000, FrameRate::Fps24, BASE), fc(-1));
        assert_eq!(samples_to_frame_count(2000, 0, FrameRate::Fps24, BASE), fc(0));

        assert_eq!(samples_f64_to_frame_count(2000.0, 48_000, FrameRate::Fps24, BASE), fc(1));
        assert_eq!(samples_f64_to_frame_count(f64::NAN, 48_000, FrameRate::Fps24, BASE), fc(0));
    }

    #[test]
    fn test_samples_roundtrip_across_subframes() {
        let base = SubFramesBase::MAX_100;
        for rate in FrameRate::ALL {
            let start = 2_000_000 * base.get() as i64;
            for sub in 0..base.get() as i64 {
                let count = FrameCount::from_sub_frame_count(start + sub, base);
                let samples = frame_count_to_samples(&count, rate, 48_000);
                let back = samples_to_frame_count(samples, 48_000, rate, base);
                assert_eq!(back, count, "{rate} subframe {sub}");
            }
        }
    }
}
