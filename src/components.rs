//! Structured timecode components.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field of a timecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    /// Days
    Days,
    /// Hours (0-23)
    Hours,
    /// Minutes (0-59)
    Minutes,
    /// Seconds (0-59)
    Seconds,
    /// Frames
    Frames,
    /// Subframes
    SubFrames,
}

impl Component {
    /// All components, most significant first.
    pub const ALL: [Self; 6] = [
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Frames,
        Self::SubFrames,
    ];

    /// Components less significant than this one.
    #[must_use]
    pub fn less_significant(&self) -> &'static [Component] {
        static ORDER: [Component; 6] = Component::ALL;
        let index = ORDER.iter().position(|c| c == self).unwrap_or(0);
        &ORDER[index + 1..]
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Frames => "frames",
            Self::SubFrames => "subframes",
        };
        f.write_str(name)
    }
}

/// The six fields of a timecode.
///
/// Values carry no inherent validity: fields may be negative or exceed
/// their usual range, which is how raw intermediate values and relative
/// offsets (`frames: -1`) are expressed. Ordering compares fields from most
/// to least significant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Components {
    /// Days
    pub days: i32,
    /// Hours
    pub hours: i32,
    /// Minutes
    pub minutes: i32,
    /// Seconds
    pub seconds: i32,
    /// Frames
    pub frames: i32,
    /// Subframes
    pub sub_frames: i32,
}

impl Components {
    /// All fields zero.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        frames: 0,
        sub_frames: 0,
    };

    /// Create components from all six fields.
    #[must_use]
    pub const fn new(
        days: i32,
        hours: i32,
        minutes: i32,
        seconds: i32,
        frames: i32,
        sub_frames: i32,
    ) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
            frames,
            sub_frames,
        }
    }

    /// Create components from hours, minutes, seconds and frames.
    #[must_use]
    pub const fn hmsf(hours: i32, minutes: i32, seconds: i32, frames: i32) -> Self {
        Self::new(0, hours, minutes, seconds, frames, 0)
    }

    /// Read a single field.
    #[must_use]
    pub fn get(&self, component: Component) -> i32 {
        match component {
            Component::Days => self.days,
            Component::Hours => self.hours,
            Component::Minutes => self.minutes,
            Component::Seconds => self.seconds,
            Component::Frames => self.frames,
            Component::SubFrames => self.sub_frames,
        }
    }

    /// Write a single field.
    pub fn set(&mut self, component: Component, value: i32) {
        let field = match component {
            Component::Days => &mut self.days,
            Component::Hours => &mut self.hours,
            Component::Minutes => &mut self.minutes,
            Component::Seconds => &mut self.seconds,
            Component::Frames => &mut self.frames,
            Component::SubFrames => &mut self.sub_frames,
        };
        *field = value;
    }

    /// Returns `true` if every field is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The most significant field holding a nonzero value.
    #[must_use]
    pub fn most_significant_nonzero(&self) -> Option<Component> {
        Component::ALL.into_iter().find(|c| self.get(*c) != 0)
    }

    /// Negate only the most significant nonzero field.
    ///
    /// This is how a negative elapsed frame count is expressed as
    /// components: `-00:01:00:01` becomes `minutes: -1, frames: 1`.
    #[must_use]
    pub fn negated_most_significant(mut self) -> Self {
        if let Some(component) = self.most_significant_nonzero() {
            self.set(component, -self.get(component));
        }
        self
    }
}
