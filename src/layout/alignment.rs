//! Horizontal text alignment

use std::str::FromStr;
use thiserror::Error;

/// Horizontal placement of a line inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    /// Stretch the words of every line except the last to fill the width.
    Justified,
    /// Writing-direction default. Text is laid out left-to-right.
    #[default]
    Natural,
}

/// Error returned when an alignment name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text alignment {0:?}")]
pub struct ParseAlignmentError(pub String);

impl TextAlignment {
    /// X offset of a line of `line_width` inside a box of `box_width`.
    ///
    /// Lines wider than the box keep their anchor, so centered and
    /// right-aligned overflow extends past the left edge.
    pub fn offset(self, box_width: f32, line_width: f32) -> f32 {
        match self {
            Self::Left | Self::Natural | Self::Justified => 0.0,
            Self::Center => (box_width - line_width) * 0.5,
            Self::Right => box_width - line_width,
        }
    }
}

impl FromStr for TextAlignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "justified" | "justify" => Ok(Self::Justified),
            "natural" => Ok(Self::Natural),
            _ => Err(ParseAlignmentError(s.to_string())),
        }
    }
}
