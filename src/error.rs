//! Error types for timecode operations.

use crate::components::Component;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
///
/// Only [`ValidationRule::Exact`](crate::ValidationRule::Exact) produces
/// [`TimecodeError::InvalidComponents`]. The clamping, wrapping and
/// allowing-invalid rules always yield a value; they can still fail when the
/// source itself is malformed (an unparseable string, for instance).
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// One or more components fall outside their valid range.
    #[error("Invalid timecode components: {}", join_components(.components))]
    InvalidComponents {
        /// The offending components, most significant first.
        components: Vec<Component>,
    },

    /// Input text does not match the timecode grammar.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// A rate or frame duration did not match any known frame rate.
    #[error("Invalid frame rate: {numerator}/{denominator}")]
    InvalidFrameRate {
        /// Frame rate numerator.
        numerator: i64,
        /// Frame rate denominator.
        denominator: i64,
    },

    /// The result of an operation does not fit the integer frame domain.
    #[error("Timecode overflow")]
    Overflow,

    /// Frame rate or timecode could not be read from a media source.
    #[error("Media parse error: {message}")]
    MediaParse {
        /// Description of the failure.
        message: String,
    },

    /// Timecode could not be written to a media destination.
    #[error("Media write error: {message}")]
    MediaWrite {
        /// Description of the failure.
        message: String,
    },
}

fn join_components(components: &[Component]) -> String {
    components
        .iter()
        .map(Component::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl TimecodeError {
    /// Create an invalid components error.
    pub fn invalid_components(components: impl Into<Vec<Component>>) -> Self {
        Self::InvalidComponents {
            components: components.into(),
        }
    }

    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(numerator: i64, denominator: i64) -> Self {
        Self::InvalidFrameRate {
            numerator,
            denominator,
        }
    }

    /// Create a media parse error.
    pub fn media_parse(message: impl Into<String>) -> Self {
        Self::MediaParse {
            message: message.into(),
        }
    }

    /// Create a media write error.
    pub fn media_write(message: impl Into<String>) -> Self {
        Self::MediaWrite {
            message: message.into(),
        }
    }

    /// Returns `true` for errors raised by range validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidComponents { .. })
    }

    /// Returns `true` for errors raised while parsing text.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
