//! Fonts
//!
//! A [`Font`] is a face name at a point size backed by shared
//! [`FontMetrics`]. Face names are turned into fonts by a [`FontResolver`],
//! which callers pass explicitly to the operations that need one.

pub mod fixed;
pub mod registry;

pub use fixed::FixedMetrics;
pub use registry::FontRegistry;

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors from font resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FontError {
    #[error("unknown font face {face:?}")]
    UnknownFace { face: String },
    #[error("invalid font size {size}")]
    InvalidSize { size: f32 },
}

/// Glyph metrics of a font face, queried at a given point size.
///
/// Implementations are expected to scale with `size`; the fitting search
/// relies on larger sizes never producing narrower or shorter text.
pub trait FontMetrics: Send + Sync + fmt::Debug {
    /// Horizontal advance of a single character.
    fn advance(&self, ch: char, size: f32) -> f32;

    /// Distance from the top of the line box to the baseline.
    fn ascent(&self, size: f32) -> f32;

    /// Distance from the baseline to the bottom of the glyphs.
    fn descent(&self, size: f32) -> f32;

    /// Extra spacing between lines.
    fn leading(&self, _size: f32) -> f32 {
        0.0
    }

    /// Advance width of a whole run.
    fn run_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }
}

/// A resolved font: face name, size and metrics.
#[derive(Clone)]
pub struct Font {
    face: Arc<str>,
    size: f32,
    metrics: Arc<dyn FontMetrics>,
}

impl Font {
    /// Create a font from a face name, size and metrics.
    pub fn new(face: impl Into<Arc<str>>, size: f32, metrics: Arc<dyn FontMetrics>) -> Self {
        Self {
            face: face.into(),
            size,
            metrics,
        }
    }

    pub fn face(&self) -> &str {
        &self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn metrics(&self) -> &Arc<dyn FontMetrics> {
        &self.metrics
    }

    /// The same face at another size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            face: Arc::clone(&self.face),
            size,
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Advance of one character. Never negative.
    pub fn advance(&self, ch: char) -> f32 {
        non_negative(self.metrics.advance(ch, self.size))
    }

    /// Advance width of a run. Never negative.
    pub fn measure(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        non_negative(self.metrics.run_width(text, self.size))
    }

    pub fn ascent(&self) -> f32 {
        non_negative(self.metrics.ascent(self.size))
    }

    pub fn descent(&self) -> f32 {
        non_negative(self.metrics.descent(self.size))
    }

    pub fn leading(&self) -> f32 {
        non_negative(self.metrics.leading(self.size))
    }

    /// Height of one line box.
    pub fn line_height(&self) -> f32 {
        self.ascent() + self.descent() + self.leading()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.face == other.face && self.size == other.size
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("face", &self.face)
            .field("size", &self.size)
            .finish()
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Resolves face names to fonts.
pub trait FontResolver {
    /// Resolve `face` at `size`.
    fn resolve(&self, face: &str, size: f32) -> Result<Font, FontError>;

    /// A font that is always available, used when resolution fails.
    fn fallback(&self, size: f32) -> Font;

    /// Resolve `face`, falling back to the default font on failure.
    fn resolve_or_fallback(&self, face: &str, size: f32) -> Font {
        match self.resolve(face, size) {
            Ok(font) => font,
            Err(err) => {
                tracing::warn!("{}, using fallback font", err);
                self.fallback(size)
            }
        }
    }
}

impl<R: FontResolver + ?Sized> FontResolver for &R {
    fn resolve(&self, face: &str, size: f32) -> Result<Font, FontError> {
        (**self).resolve(face, size)
    }

    fn fallback(&self, size: f32) -> Font {
        (**self).fallback(size)
    }
}

impl<R: FontResolver + ?Sized> FontResolver for Arc<R> {
    fn resolve(&self, face: &str, size: f32) -> Result<Font, FontError> {
        (**self).resolve(face, size)
    }

    fn fallback(&self, size: f32) -> Font {
        (**self).fallback(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct BrokenMetrics;

    impl FontMetrics for BrokenMetrics {
        fn advance(&self, _ch: char, _size: f32) -> f32 {
            -3.0
        }

        fn ascent(&self, _size: f32) -> f32 {
            f32::NAN
        }

        fn descent(&self, size: f32) -> f32 {
            size * 0.25
        }
    }

    #[test]
    fn test_font_clamps_bad_metrics() {
        let font = Font::new("Broken", 10.0, Arc::new(BrokenMetrics));
        assert_eq!(font.advance('a'), 0.0);
        assert_eq!(font.measure("abc"), 0.0);
        assert_eq!(font.ascent(), 0.0);
        assert_eq!(font.line_height(), 2.5);
    }

    #[test]
    fn test_with_size_keeps_face() {
        let font = Font::new("Fixed", 12.0, Arc::new(FixedMetrics::default()));
        let bigger = font.with_size(24.0);
        assert_eq!(bigger.face(), "Fixed");
        assert_eq!(bigger.size(), 24.0);
        assert!((bigger.line_height() - 2.0 * font.line_height()).abs() < 1e-4);
        assert_ne!(font, bigger);
        assert_eq!(font, font.with_size(12.0));
    }

    #[test]
    fn test_resolve_or_fallback() {
        let registry = FontRegistry::new();
        let font = registry.resolve_or_fallback("NoSuchFace", 14.0);
        assert_eq!(font.face(), registry.default_face());
        assert_eq!(font.size(), 14.0);
    }
}
