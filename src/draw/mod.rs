//! String drawing
//!
//! Measuring, drawing and fitting operations over an explicit [`Canvas`].
//!
//! Operations that start from a face name need a [`FontResolver`]; they are
//! methods of [`Typesetter`], which pairs a resolver with
//! [`TypesetSettings`]. Free functions with default settings are provided
//! for every operation.
//!
//! Nothing here fails: empty strings and empty rectangles draw nothing, and
//! unknown faces fall back to the resolver's default font.

pub mod fit;

use crate::canvas::{Canvas, TextRun};
use crate::color::Color;
use crate::font::{Font, FontResolver};
use crate::geometry::Rect;
use crate::layout::{self, TextAlignment, TextLayout};
use crate::settings::TypesetSettings;
use glam::Vec2;

/// Width of each character of `text` rendered with `font`.
///
/// One entry per `char`; empty text gives an empty vector.
pub fn width_array_for_string(text: &str, font: &Font) -> Vec<f32> {
    layout::char_widths(text, font)
}

/// Draw `text` as one line at the top of `rect`, clipped to `rect`.
pub fn draw_string_in_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    rect: Rect,
    font: &Font,
    alignment: TextAlignment,
    color: Color,
) {
    if skip(text, &rect) {
        return;
    }
    let layout = TextLayout::single_line(text, font, 1.0);
    draw_layout(canvas, &layout, font, rect, alignment, color, Some(rect));
}

/// Draw `text` as one line centered in `rect`, in black.
pub fn draw_string_centered_in_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    font: &Font,
    rect: Rect,
) {
    draw_centered(canvas, text, font, rect, Color::BLACK);
}

/// [`Typesetter::draw_wrapped_string_in_rect`] with default settings.
pub fn draw_wrapped_string_in_rect<C: Canvas + ?Sized, R: FontResolver>(
    canvas: &mut C,
    resolver: &R,
    text: &str,
    rect: Rect,
    face: &str,
    alignment: TextAlignment,
    color: Color,
) {
    Typesetter::new(resolver).draw_wrapped_string_in_rect(
        canvas,
        text,
        rect,
        face,
        alignment,
        color,
    );
}

/// [`Typesetter::draw_unwrapped_string_in_rect`] with default settings.
pub fn draw_unwrapped_string_in_rect<C: Canvas + ?Sized, R: FontResolver>(
    canvas: &mut C,
    resolver: &R,
    text: &str,
    rect: Rect,
    face: &str,
    alignment: TextAlignment,
    color: Color,
) {
    Typesetter::new(resolver).draw_unwrapped_string_in_rect(
        canvas,
        text,
        rect,
        face,
        alignment,
        color,
    );
}

/// [`Typesetter::font_for_wrapped_string`] with default settings.
pub fn font_for_wrapped_string<R: FontResolver>(
    resolver: &R,
    text: &str,
    face: &str,
    rect: Rect,
    tolerance: f32,
) -> Font {
    Typesetter::new(resolver).font_for_wrapped_string(text, face, rect, tolerance)
}

/// [`Typesetter::font_for_unwrapped_string`] with default settings.
pub fn font_for_unwrapped_string<R: FontResolver>(
    resolver: &R,
    text: &str,
    face: &str,
    rect: Rect,
) -> Font {
    Typesetter::new(resolver).font_for_unwrapped_string(text, face, rect)
}

/// A font resolver plus the settings used to draw and fit with it.
#[derive(Debug, Clone)]
pub struct Typesetter<R> {
    resolver: R,
    settings: TypesetSettings,
}

impl<R: FontResolver> Typesetter<R> {
    /// Create a typesetter with default settings.
    pub fn new(resolver: R) -> Self {
        Self::with_settings(resolver, TypesetSettings::default())
    }

    /// Create a typesetter with custom settings. Unusable values are replaced
    /// by defaults.
    pub fn with_settings(resolver: R, settings: TypesetSettings) -> Self {
        Self {
            resolver,
            settings: settings.sanitized(),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn settings(&self) -> &TypesetSettings {
        &self.settings
    }

    /// Resolve `face` at `size`, falling back to the default font.
    pub fn font(&self, face: &str, size: f32) -> Font {
        self.resolver.resolve_or_fallback(face, size)
    }

    /// See [`width_array_for_string`].
    pub fn width_array_for_string(&self, text: &str, font: &Font) -> Vec<f32> {
        width_array_for_string(text, font)
    }

    /// See [`draw_string_in_rect`].
    pub fn draw_string_in_rect<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        rect: Rect,
        font: &Font,
        alignment: TextAlignment,
        color: Color,
    ) {
        if skip(text, &rect) {
            return;
        }
        let layout = TextLayout::single_line(text, font, self.settings.line_spacing);
        draw_layout(canvas, &layout, font, rect, alignment, color, Some(rect));
    }

    /// Draw `text` wrapped to the width of `rect`.
    ///
    /// The font size is the one [`font_for_wrapped_string`](Self::font_for_wrapped_string)
    /// picks with the configured `wrap_tolerance`. Lines are stacked from the
    /// top of `rect` and clipped to it.
    pub fn draw_wrapped_string_in_rect<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        rect: Rect,
        face: &str,
        alignment: TextAlignment,
        color: Color,
    ) {
        if skip(text, &rect) {
            return;
        }
        let font = self.font_for_wrapped_string(text, face, rect, self.settings.wrap_tolerance);
        let layout = TextLayout::wrapped(
            text,
            &font,
            rect.width(),
            self.settings.line_break,
            self.settings.line_spacing,
        );
        draw_layout(canvas, &layout, &font, rect, alignment, color, Some(rect));
    }

    /// Draw `text` as exactly one line, at the largest size that fits `rect`.
    ///
    /// The line is never broken and never clipped; at the minimum size it may
    /// overflow `rect`.
    pub fn draw_unwrapped_string_in_rect<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        rect: Rect,
        face: &str,
        alignment: TextAlignment,
        color: Color,
    ) {
        if skip(text, &rect) {
            return;
        }
        let font = self.font_for_unwrapped_string(text, face, rect);
        let layout = TextLayout::single_line(text, &font, self.settings.line_spacing);
        draw_layout(canvas, &layout, &font, rect, alignment, color, None);
    }

    /// Draw `text` as one line centered in `rect`, in the default color.
    pub fn draw_string_centered_in_rect<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        font: &Font,
        rect: Rect,
    ) {
        draw_centered(canvas, text, font, rect, self.settings.default_color);
    }

    /// Largest font of `face` whose text, wrapped to `rect.width()`, is at
    /// most `rect.height() + tolerance` tall.
    ///
    /// One more size step would exceed that height, unless the result is
    /// already the configured maximum. When even the minimum size does not
    /// fit, the minimum-size font is returned.
    pub fn font_for_wrapped_string(
        &self,
        text: &str,
        face: &str,
        rect: Rect,
        tolerance: f32,
    ) -> Font {
        fit::fit_wrapped(&self.resolver, &self.settings, text, face, &rect, tolerance)
    }

    /// Largest font of `face` at which `text` fits `rect` as one line.
    pub fn font_for_unwrapped_string(&self, text: &str, face: &str, rect: Rect) -> Font {
        fit::fit_unwrapped(&self.resolver, &self.settings, text, face, &rect)
    }
}

fn skip(text: &str, rect: &Rect) -> bool {
    if text.is_empty() {
        return true;
    }
    if rect.is_empty() {
        tracing::trace!(?rect, "skipping draw into empty rect");
        return true;
    }
    false
}

fn draw_centered<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    font: &Font,
    rect: Rect,
    color: Color,
) {
    if skip(text, &rect) {
        return;
    }
    let layout = TextLayout::single_line(text, font, 1.0);
    let centered = Rect::new(
        rect.x(),
        rect.y() + (rect.height() - layout.height()) * 0.5,
        rect.width(),
        layout.height(),
    );
    draw_layout(canvas, &layout, font, centered, TextAlignment::Center, color, None);
}

/// Emit the runs of `layout`, stacked from the top of `rect`.
fn draw_layout<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &TextLayout,
    font: &Font,
    rect: Rect,
    alignment: TextAlignment,
    color: Color,
    clip: Option<Rect>,
) {
    let bottom = rect.max().y;
    let last = layout.lines.len().saturating_sub(1);

    for (i, line) in layout.lines.iter().enumerate() {
        let top = rect.y() + i as f32 * layout.line_height;
        if clip.is_some() && top >= bottom {
            break;
        }
        if line.text.is_empty() {
            continue;
        }

        let mut emit = |text: String, x: f32| {
            canvas.fill_text(&TextRun {
                text,
                origin: Vec2::new(x, top),
                baseline: top + layout.ascent,
                font: font.clone(),
                color,
                clip,
            });
        };

        let justify = alignment == TextAlignment::Justified && i < last && !line.ends_paragraph;
        let justified = if justify {
            layout::justify(line, font, rect.width())
        } else {
            None
        };

        match justified {
            Some(words) => {
                for (word, offset) in words {
                    emit(word, rect.x() + offset);
                }
            }
            None => emit(
                line.text.clone(),
                rect.x() + alignment.offset(rect.width(), line.width),
            ),
        }
    }
}
