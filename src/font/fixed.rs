//! Fixed-ratio font metrics
//!
//! Metrics expressed as fractions of the em size. Deterministic and
//! independent of installed fonts, which makes them suitable for headless
//! layout and tests.

use super::FontMetrics;

/// Metrics where every glyph advance is a fixed fraction of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Advance of a visible character, in ems.
    pub advance: f32,
    /// Advance of a whitespace character, in ems.
    pub space_advance: f32,
    /// Ascent, in ems.
    pub ascent: f32,
    /// Descent, in ems.
    pub descent: f32,
    /// Line gap, in ems.
    pub leading: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            space_advance: 0.25,
            ascent: 0.8,
            descent: 0.2,
            leading: 0.0,
        }
    }
}

impl FixedMetrics {
    /// Create metrics with the given glyph advance and default vertical metrics.
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            ..Self::default()
        }
    }

    /// Monospaced metrics: whitespace advances as far as any glyph.
    pub fn monospace(advance: f32) -> Self {
        Self {
            advance,
            space_advance: advance,
            ..Self::default()
        }
    }

    pub fn with_space_advance(mut self, space_advance: f32) -> Self {
        self.space_advance = space_advance;
        self
    }

    pub fn with_ascent(mut self, ascent: f32) -> Self {
        self.ascent = ascent;
        self
    }

    pub fn with_descent(mut self, descent: f32) -> Self {
        self.descent = descent;
        self
    }

    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }
}

impl FontMetrics for FixedMetrics {
    fn advance(&self, ch: char, size: f32) -> f32 {
        if ch.is_control() {
            0.0
        } else if ch.is_whitespace() {
            self.space_advance * size
        } else {
            self.advance * size
        }
    }

    fn ascent(&self, size: f32) -> f32 {
        self.ascent * size
    }

    fn descent(&self, size: f32) -> f32 {
        self.descent * size
    }

    fn leading(&self, size: f32) -> f32 {
        self.leading * size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_scale_with_size() {
        let metrics = FixedMetrics::default();
        assert_eq!(metrics.advance('a', 10.0), 5.0);
        assert_eq!(metrics.advance('a', 20.0), 10.0);
        assert_eq!(metrics.advance(' ', 20.0), 5.0);
        assert_eq!(metrics.advance('\n', 20.0), 0.0);
    }

    #[test]
    fn test_run_width() {
        let metrics = FixedMetrics::monospace(0.6);
        assert!((metrics.run_width("a b", 10.0) - 18.0).abs() < 1e-4);
    }
}
