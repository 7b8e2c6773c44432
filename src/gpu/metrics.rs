//! System font metrics
//!
//! Resolves face names against the fonts glyphon's `FontSystem` discovered
//! and measures text by shaping it.

use crate::font::{Font, FontError, FontMetrics, FontResolver};
use glyphon::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Face name used for the generic sans-serif family.
pub const SANS_SERIF: &str = "sans-serif";

/// Line height as a multiple of the font size.
const LINE_HEIGHT_RATIO: f32 = 1.2;

/// A `FontSystem` shared between the resolver, its fonts and the canvas.
pub type SharedFontSystem = Arc<Mutex<FontSystem>>;

pub(crate) fn lock(font_system: &SharedFontSystem) -> MutexGuard<'_, FontSystem> {
    font_system.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn family(face: &str) -> Family<'_> {
    if face.eq_ignore_ascii_case(SANS_SERIF) {
        Family::SansSerif
    } else {
        Family::Name(face)
    }
}

/// Shaped metrics of one system font family.
pub struct GlyphonMetrics {
    font_system: SharedFontSystem,
    face: String,
}

impl GlyphonMetrics {
    pub fn new(font_system: SharedFontSystem, face: impl Into<String>) -> Self {
        Self {
            font_system,
            face: face.into(),
        }
    }

    /// Shape `text` on one unbounded line and return (width, ascent).
    fn shape(&self, text: &str, size: f32) -> (f32, f32) {
        let mut font_system = lock(&self.font_system);
        let metrics = Metrics::new(size, size * LINE_HEIGHT_RATIO);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        buffer.set_size(&mut font_system, None, None);
        buffer.set_text(
            &mut font_system,
            text,
            &Attrs::new().family(family(&self.face)),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut font_system, false);

        buffer
            .layout_runs()
            .next()
            .map(|run| (run.line_w, run.line_y - run.line_top))
            .unwrap_or((0.0, size * 0.8))
    }
}

impl fmt::Debug for GlyphonMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphonMetrics")
            .field("face", &self.face)
            .finish()
    }
}

impl FontMetrics for GlyphonMetrics {
    fn advance(&self, ch: char, size: f32) -> f32 {
        if ch.is_control() {
            return 0.0;
        }
        let mut buf = [0u8; 4];
        self.shape(ch.encode_utf8(&mut buf), size).0
    }

    fn ascent(&self, size: f32) -> f32 {
        self.shape("M", size).1
    }

    fn descent(&self, size: f32) -> f32 {
        size * LINE_HEIGHT_RATIO - self.ascent(size)
    }

    fn run_width(&self, text: &str, size: f32) -> f32 {
        self.shape(text, size).0
    }
}

/// Resolves face names to installed system fonts.
#[derive(Clone)]
pub struct GlyphonFontResolver {
    font_system: SharedFontSystem,
    default_face: String,
}

impl GlyphonFontResolver {
    /// Create a resolver over the system font database.
    pub fn new() -> Self {
        Self::with_font_system(Arc::new(Mutex::new(FontSystem::new())))
    }

    /// Create a resolver over an existing font system, e.g. the one a
    /// [`GpuCanvas`](super::GpuCanvas) renders with.
    pub fn with_font_system(font_system: SharedFontSystem) -> Self {
        Self {
            font_system,
            default_face: SANS_SERIF.to_string(),
        }
    }

    /// Use `face` for fallback fonts instead of the generic sans-serif family.
    pub fn default_face(mut self, face: impl Into<String>) -> Self {
        self.default_face = face.into();
        self
    }

    pub fn font_system(&self) -> &SharedFontSystem {
        &self.font_system
    }

    /// Whether a family named `face` is installed.
    pub fn has_face(&self, face: &str) -> bool {
        if face.eq_ignore_ascii_case(SANS_SERIF) {
            return true;
        }
        let font_system = lock(&self.font_system);
        let found = font_system.db().faces().any(|info| {
            info.families
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(face))
        });
        found
    }

    fn font(&self, face: &str, size: f32) -> Font {
        let metrics = GlyphonMetrics::new(Arc::clone(&self.font_system), face);
        Font::new(face, size, Arc::new(metrics))
    }
}

impl Default for GlyphonFontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GlyphonFontResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphonFontResolver")
            .field("default_face", &self.default_face)
            .finish()
    }
}

impl FontResolver for GlyphonFontResolver {
    fn resolve(&self, face: &str, size: f32) -> Result<Font, FontError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(FontError::InvalidSize { size });
        }
        if !self.has_face(face) {
            return Err(FontError::UnknownFace {
                face: face.to_string(),
            });
        }
        Ok(self.font(face, size))
    }

    fn fallback(&self, size: f32) -> Font {
        let size = if size.is_finite() && size > 0.0 {
            size
        } else {
            crate::font::registry::DEFAULT_FONT_SIZE
        };
        self.font(&self.default_face, size)
    }
}
