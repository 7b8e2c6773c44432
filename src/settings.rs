//! Typesetting settings
//!
//! Configuration shared by the drawing and fitting operations.

use crate::color::Color;
use crate::layout::LineBreakMode;

/// Settings for a [`Typesetter`](crate::draw::Typesetter).
#[derive(Debug, Clone, PartialEq)]
pub struct TypesetSettings {
    /// Smallest size the fitting search returns.
    pub min_font_size: f32,
    /// Largest size the fitting search considers. `None` searches upward
    /// until a size no longer fits.
    pub max_font_size: Option<f32>,
    /// Granularity of the fitting search, in points.
    pub size_step: f32,
    /// Where wrapped text may break.
    pub line_break: LineBreakMode,
    /// Multiplier applied to the font's line height.
    pub line_spacing: f32,
    /// Tolerance used when wrapped drawing picks its font size.
    pub wrap_tolerance: f32,
    /// Color used by centered drawing.
    pub default_color: Color,
}

impl Default for TypesetSettings {
    fn default() -> Self {
        Self {
            min_font_size: 1.0,
            max_font_size: None,
            size_step: 1.0,
            line_break: LineBreakMode::WordWrap,
            line_spacing: 1.0,
            wrap_tolerance: 0.0,
            default_color: Color::BLACK,
        }
    }
}

impl TypesetSettings {
    /// Create new settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size range searched when fitting.
    pub fn font_size_range(mut self, min: f32, max: f32) -> Self {
        self.min_font_size = min;
        self.max_font_size = Some(max);
        self
    }

    /// Set the smallest fitted size, leaving the maximum open.
    pub fn min_font_size(mut self, min: f32) -> Self {
        self.min_font_size = min;
        self.max_font_size = None;
        self
    }

    /// Set the fitting granularity.
    pub fn size_step(mut self, step: f32) -> Self {
        self.size_step = step;
        self
    }

    /// Set the line break mode.
    pub fn line_break(mut self, mode: LineBreakMode) -> Self {
        self.line_break = mode;
        self
    }

    /// Set the line spacing multiplier.
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the tolerance used by wrapped drawing.
    pub fn wrap_tolerance(mut self, tolerance: f32) -> Self {
        self.wrap_tolerance = tolerance;
        self
    }

    /// Set the color used by centered drawing.
    pub fn default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Copy with unusable values replaced by defaults.
    ///
    /// Guarantees `0 < size_step <= min_font_size`, and `min_font_size <= max`
    /// for a finite, positive `max_font_size` when one is set.
    /// A non-finite or non-positive maximum removes the cap.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };

        let size_step = positive(self.size_step, defaults.size_step);
        let min_font_size = positive(self.min_font_size, defaults.min_font_size).max(size_step);
        let max_font_size = self
            .max_font_size
            .filter(|max| max.is_finite() && *max > 0.0)
            .map(|max| max.max(min_font_size));
        let wrap_tolerance = if self.wrap_tolerance.is_finite() {
            self.wrap_tolerance
        } else {
            0.0
        };

        Self {
            min_font_size,
            max_font_size,
            size_step,
            line_break: self.line_break,
            line_spacing: positive(self.line_spacing, defaults.line_spacing),
            wrap_tolerance,
            default_color: self.default_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let settings = TypesetSettings::new()
            .font_size_range(6.0, 72.0)
            .line_break(LineBreakMode::CharWrap)
            .wrap_tolerance(2.0);
        assert_eq!(settings.min_font_size, 6.0);
        assert_eq!(settings.max_font_size, Some(72.0));
        assert_eq!(settings.line_break, LineBreakMode::CharWrap);
        assert_eq!(settings.wrap_tolerance, 2.0);
        assert_eq!(settings.sanitized(), settings);
    }

    #[test]
    fn test_sanitized() {
        let settings = TypesetSettings::new()
            .font_size_range(40.0, 10.0)
            .size_step(f32::NAN)
            .line_spacing(-1.0)
            .wrap_tolerance(f32::INFINITY)
            .sanitized();
        assert_eq!(settings.size_step, 1.0);
        assert_eq!(settings.min_font_size, 40.0);
        assert_eq!(settings.max_font_size, Some(40.0));
        assert_eq!(settings.line_spacing, 1.0);
        assert_eq!(settings.wrap_tolerance, 0.0);
    }

    #[test]
    fn test_default_size_range_is_open() {
        let settings = TypesetSettings::default().sanitized();
        assert_eq!(settings.max_font_size, None);

        let settings = TypesetSettings::new()
            .font_size_range(2.0, f32::INFINITY)
            .sanitized();
        assert_eq!(settings.min_font_size, 2.0);
        assert_eq!(settings.max_font_size, None);

        let settings = TypesetSettings::new().min_font_size(4.0);
        assert_eq!(settings.max_font_size, None);
    }
}
