//! Timecode text: parsing and formatting.
//!
//! Grammar: `[D ]HH:MM:SS:FF[.SF]`. The day separator may be a space or a
//! colon; the frames separator may be a colon or a semicolon regardless of
//! the frame rate. Fields may have any number of digits.

use crate::components::{Component, Components};
use crate::error::{Result, TimecodeError};
use crate::timecode::Timecode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static TIMECODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(\d+)[ :])?(\d+)[:;](\d+)[:;](\d+)[:;](\d+)(?:\.(\d+))?\s*$")
        .expect("timecode pattern is valid")
});

/// Formatting options for [`Timecode::string_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StringFormat {
    /// Append `.SF`.
    pub show_sub_frames: bool,
    /// Prefix the days field even when it is zero.
    pub always_show_days: bool,
    /// Replace `:`, `;` and the day separator with `-`.
    pub filename_compatible: bool,
}

impl StringFormat {
    /// Show subframes.
    #[must_use]
    pub fn with_sub_frames(mut self) -> Self {
        self.show_sub_frames = true;
        self
    }

    /// Always show days.
    #[must_use]
    pub fn with_days(mut self) -> Self {
        self.always_show_days = true;
        self
    }

    /// Use only filename-safe separators.
    #[must_use]
    pub fn filename_compatible(mut self) -> Self {
        self.filename_compatible = true;
        self
    }
}

/// One piece of formatted timecode text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecodeSegment {
    /// The text.
    pub text: String,
    /// The component the text shows, or `None` for a separator.
    pub component: Option<Component>,
    /// Whether the component is out of range.
    pub is_invalid: bool,
}

/// Parse timecode text into raw, unvalidated components.
///
/// # Errors
///
/// [`TimecodeError::InvalidFormat`] when the text does not match the
/// grammar or a field does not fit in an `i32`.
pub fn parse_components(text: &str) -> Result<Components> {
    let captures = TIMECODE_PATTERN.captures(text).ok_or_else(|| {
        TimecodeError::invalid_format(format!("expected [D ]HH:MM:SS:FF[.SF], got {text:?}"))
    })?;

    let field = |index: usize, component: Component| -> Result<i32> {
        match captures.get(index) {
            None => Ok(0),
            Some(m) => m.as_str().parse().map_err(|_| {
                TimecodeError::invalid_format(format!("{component} out of range: {}", m.as_str()))
            }),
        }
    };

    Ok(Components::new(
        field(1, Component::Days)?,
        field(2, Component::Hours)?,
        field(3, Component::Minutes)?,
        field(4, Component::Seconds)?,
        field(5, Component::Frames)?,
        field(6, Component::SubFrames)?,
    ))
}

impl Timecode {
    /// Format as text.
    ///
    /// ```rust
    /// use timecode_engine::{FrameRate, StringFormat, Timecode};
    ///
    /// let tc = Timecode::exactly("01:00:00;02.40", FrameRate::Fps29_97d).unwrap();
    /// assert_eq!(tc.string_value(StringFormat::default()), "01:00:00;02");
    /// assert_eq!(tc.string_value(StringFormat::default().with_sub_frames()), "01:00:00;02.40");
    /// assert_eq!(
    ///     tc.string_value(StringFormat::default().with_days().filename_compatible()),
    ///     "0-01-00-00-02"
    /// );
    /// ```
    #[must_use]
    pub fn string_value(&self, format: StringFormat) -> String {
        self.string_value_validated(format)
            .into_iter()
            .map(|segment| segment.text)
            .collect()
    }

    /// Format as text split into segments, marking out-of-range
    /// components.
    #[must_use]
    pub fn string_value_validated(&self, format: StringFormat) -> Vec<TimecodeSegment> {
        let components = self.components();
        let invalid = self.invalid_components();
        let frame_rate = self.frame_rate();

        let separator = |text: &str| TimecodeSegment {
            text: if format.filename_compatible {
                "-".to_string()
            } else {
                text.to_string()
            },
            component: None,
            is_invalid: false,
        };
        let value = |component: Component, width: usize| TimecodeSegment {
            text: format!("{:0width$}", components.get(component)),
            component: Some(component),
            is_invalid: invalid.contains(&component),
        };

        let mut segments = Vec::with_capacity(11);
        if format.always_show_days || components.days != 0 {
            segments.push(value(Component::Days, 1));
            segments.push(separator(" "));
        }
        segments.push(value(Component::Hours, 2));
        segments.push(separator(":"));
        segments.push(value(Component::Minutes, 2));
        segments.push(separator(":"));
        segments.push(value(Component::Seconds, 2));
        segments.push(separator(if frame_rate.is_drop() { ";" } else { ":" }));
        segments.push(value(Component::Frames, frame_rate.number_of_digits()));
        if format.show_sub_frames {
            // the subframes point is kept in filename mode
            segments.push(TimecodeSegment {
                text: ".".to_string(),
                component: None,
                is_invalid: false,
            });
            segments.push(value(
                Component::SubFrames,
                self.sub_frames_base().number_of_digits(),
            ));
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_rate::FrameRate;
    use crate::properties::{SubFramesBase, TimecodeProperties, UpperLimit};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_components() {
        assert_eq!(parse_components("01:02:03:04").unwrap(), Components::hmsf(1, 2, 3, 4));
        assert_eq!(parse_components("01:02:03;04").unwrap(), Components::hmsf(1, 2, 3, 4));
        assert_eq!(
            parse_components("2 01:02:03:04.05").unwrap(),
            Components::new(2, 1, 2, 3, 4, 5)
        );
        assert_eq!(
            parse_components("2:01:02:03:04").unwrap(),
            Components::new(2, 1, 2, 3, 4, 0)
        );
        assert_eq!(
            parse_components("  50:05:20:14 ").unwrap(),
            Components::hmsf(50, 5, 20, 14)
        );
        assert_eq!(parse_components("1:2:3:100").unwrap(), Components::hmsf(1, 2, 3, 100));
    }

    #[test]
    fn test_parse_errors() {
        for text in ["", "01:02:03", "1:2:3:4:5:6", "aa:bb:cc:dd", "01:02:03:-4", "01.02.03.04"] {
            let err = parse_components(text).unwrap_err();
            assert!(err.is_parse(), "{text:?}");
        }
        let err = parse_components("99999999999:00:00:00").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_string_value() {
        let tc = Timecode::exactly("01:02:03:04", FrameRate::Fps23_976).unwrap();
        assert_eq!(tc.string_value(StringFormat::default()), "01:02:03:04");
        assert_eq!(tc.to_string(), "01:02:03:04");
        assert_eq!(
            tc.string_value(StringFormat::default().with_sub_frames()),
            "01:02:03:04.00"
        );
        assert_eq!(
            tc.string_value(StringFormat::default().with_days()),
            "0 01:02:03:04"
        );
    }

    #[test]
    fn test_string_value_widths() {
        let props = TimecodeProperties::new(FrameRate::Fps120)
            .with_sub_frames_base(SubFramesBase::QUARTER_FRAMES)
            .with_upper_limit(UpperLimit::Max100Days);
        let tc = Timecode::exactly(Components::new(12, 1, 2, 3, 4, 3), props).unwrap();
        assert_eq!(
            tc.string_value(StringFormat::default().with_sub_frames()),
            "12 01:02:03:004.3"
        );
        assert_eq!(
            tc.string_value(StringFormat::default().filename_compatible()),
            "12-01-02-03-004"
        );
    }

    #[test]
    fn test_filename_compatible_keeps_sub_frames_point() {
        let tc = Timecode::exactly("01:00:00;02.40", FrameRate::Fps29_97d).unwrap();
        let format = StringFormat::default().with_sub_frames().filename_compatible();
        assert_eq!(tc.string_value(format), "01-00-00-02.40");
        assert_eq!(tc.string_value(format.with_days()), "0-01-00-00-02.40");
    }

    #[test]
    fn test_string_roundtrip() {
        let props = TimecodeProperties::new(FrameRate::Fps59_94d).with_upper_limit(UpperLimit::Max100Days);
        let tc = Timecode::exactly(Components::new(3, 10, 11, 12, 13, 14), props).unwrap();
        let text = tc.string_value(StringFormat::default().with_sub_frames());
        assert_eq!(text, "3 10:11:12;13.14");
        let parsed = Timecode::exactly(text.as_str(), props).unwrap();
        assert_eq!(parsed.components(), tc.components());
    }

    #[test]
    fn test_string_value_validated() {
        let tc = Timecode::allowing_invalid("01:75:03:30", FrameRate::Fps30).unwrap();
        let segments = tc.string_value_validated(StringFormat::default());
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["01", ":", "75", ":", "03", ":", "30"]);

        let invalid: Vec<Component> = segments
            .iter()
            .filter(|s| s.is_invalid)
            .filter_map(|s| s.component)
            .collect();
        assert_eq!(invalid, vec![Component::Minutes, Component::Frames]);
        assert!(segments[1].component.is_none());
    }

    #[test]
    fn test_string_format_serialization() {
        let format: StringFormat = serde_json::from_str(r#"{"show_sub_frames": true}"#).unwrap();
        assert_eq!(format, StringFormat::default().with_sub_frames());
    }
}
