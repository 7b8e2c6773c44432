//! Draw targets
//!
//! A [`Canvas`] receives positioned [`TextRun`]s. Drawing operations take
//! the canvas as an explicit `&mut` parameter, so a target is only ever
//! drawn into by one caller at a time.

use crate::color::Color;
use crate::font::Font;
use crate::geometry::Rect;
use glam::Vec2;

/// A single line (or word, for justified text) placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Top-left corner of the run's line box.
    pub origin: Vec2,
    /// Baseline y coordinate.
    pub baseline: f32,
    pub font: Font,
    pub color: Color,
    /// Pixels outside this rectangle must not be touched.
    pub clip: Option<Rect>,
}

impl TextRun {
    /// Advance width of the run.
    pub fn width(&self) -> f32 {
        self.font.measure(&self.text)
    }

    /// The run's line box.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, Vec2::new(self.width(), self.font.line_height()))
    }
}

/// A surface text runs are drawn onto.
pub trait Canvas {
    /// Draw one run.
    fn fill_text(&mut self, run: &TextRun);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_text(&mut self, run: &TextRun) {
        (**self).fill_text(run)
    }
}

/// A headless canvas that records every run it is asked to draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    runs: Vec<TextRun>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs drawn so far, in draw order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Take the recorded runs, leaving the canvas empty.
    pub fn take(&mut self) -> Vec<TextRun> {
        std::mem::take(&mut self.runs)
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    /// Concatenated text of all runs, one run per line.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for RecordingCanvas {
    fn fill_text(&mut self, run: &TextRun) {
        tracing::trace!(text = %run.text, x = run.origin.x, y = run.origin.y, "fill_text");
        self.runs.push(run.clone());
    }
}
