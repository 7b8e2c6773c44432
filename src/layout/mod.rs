//! Text layout
//!
//! Measures strings and breaks them into lines. Layout is pure: it turns a
//! string and a [`Font`] into [`Line`]s and never touches a canvas.

pub mod alignment;

pub use alignment::{ParseAlignmentError, TextAlignment};

use crate::font::Font;
use std::borrow::Cow;

/// Where lines may be broken when wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineBreakMode {
    /// Break at whitespace. Words wider than a line are split between characters.
    #[default]
    WordWrap,
    /// Break between any two characters.
    CharWrap,
}

/// One laid-out line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    /// Advance width of `text`.
    pub width: f32,
    /// Last line of a paragraph (followed by a newline or the end of text).
    pub ends_paragraph: bool,
}

impl Line {
    fn measured(text: String, font: &Font) -> Self {
        let width = font.measure(&text);
        Self {
            text,
            width,
            ends_paragraph: false,
        }
    }
}

/// Lines plus the vertical metrics needed to stack them.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<Line>,
    /// Distance between consecutive line tops.
    pub line_height: f32,
    /// Distance from a line top to its baseline.
    pub ascent: f32,
}

impl TextLayout {
    /// Wrap `text` to `max_width`.
    pub fn wrapped(
        text: &str,
        font: &Font,
        max_width: f32,
        mode: LineBreakMode,
        line_spacing: f32,
    ) -> Self {
        Self::from_lines(wrap_lines(text, font, max_width, mode), font, line_spacing)
    }

    /// Lay out `text` as exactly one line.
    pub fn single_line(text: &str, font: &Font, line_spacing: f32) -> Self {
        let mut line = Line::measured(single_line_text(text).into_owned(), font);
        line.ends_paragraph = true;
        Self::from_lines(vec![line], font, line_spacing)
    }

    fn from_lines(lines: Vec<Line>, font: &Font, line_spacing: f32) -> Self {
        let spacing = if line_spacing.is_finite() && line_spacing > 0.0 {
            line_spacing
        } else {
            1.0
        };
        Self {
            lines,
            line_height: font.line_height() * spacing,
            ascent: font.ascent(),
        }
    }

    /// Total height. An empty string still occupies one line box.
    pub fn height(&self) -> f32 {
        self.lines.len().max(1) as f32 * self.line_height
    }

    /// Width of the widest line.
    pub fn width(&self) -> f32 {
        self.lines.iter().map(|l| l.width).fold(0.0, f32::max)
    }
}

/// Width of every character of `text`, in order.
pub fn char_widths(text: &str, font: &Font) -> Vec<f32> {
    text.chars().map(|ch| font.advance(ch)).collect()
}

/// Replace line separators so `text` renders as a single line.
pub fn single_line_text(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r']) {
        Cow::Owned(
            text.replace("\r\n", " ")
                .replace(['\n', '\r'], " "),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// Explicit newlines always end a line. Every line holds at least one
/// character, so a line may still overflow when a single character is wider
/// than `max_width`. The result is never empty.
pub fn wrap_lines(text: &str, font: &Font, max_width: f32, mode: LineBreakMode) -> Vec<Line> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        match mode {
            LineBreakMode::WordWrap => wrap_words(paragraph, font, max_width, &mut lines),
            LineBreakMode::CharWrap => wrap_chars(paragraph, font, max_width, &mut lines),
        }
        if let Some(last) = lines.last_mut() {
            last.ends_paragraph = true;
        }
    }
    lines
}

struct LineBuilder<'a> {
    font: &'a Font,
    max_width: f32,
    text: String,
    width: f32,
}

impl<'a> LineBuilder<'a> {
    fn new(font: &'a Font, max_width: f32) -> Self {
        Self {
            font,
            max_width,
            text: String::new(),
            width: 0.0,
        }
    }

    // A NaN width never forces a break.
    fn fits(&self, extra: f32) -> bool {
        !(self.width + extra > self.max_width)
    }

    fn push_str(&mut self, s: &str, width: f32) {
        self.text.push_str(s);
        self.width += width;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.width = 0.0;
    }

    fn push(&mut self, ch: char, width: f32) {
        self.text.push(ch);
        self.width += width;
    }

    fn finish(&mut self, lines: &mut Vec<Line>) {
        let mut text = std::mem::take(&mut self.text);
        let trimmed = text.trim_end().len();
        text.truncate(trimmed);
        lines.push(Line::measured(text, self.font));
        self.width = 0.0;
    }

    /// Append `word` one character at a time, breaking where it overflows.
    fn push_broken(&mut self, word: &str, lines: &mut Vec<Line>) {
        for ch in word.chars() {
            let w = self.font.advance(ch);
            if !self.text.is_empty() && !self.fits(w) {
                self.finish(lines);
            }
            self.push(ch, w);
        }
    }
}

fn wrap_words(paragraph: &str, font: &Font, max_width: f32, lines: &mut Vec<Line>) {
    let mut line = LineBuilder::new(font, max_width);
    let mut pending_space = "";

    for (token, is_space) in split_words(paragraph) {
        if is_space {
            pending_space = token;
            continue;
        }

        let word_width = font.measure(token);
        let space_width = font.measure(pending_space);
        if !line.text.is_empty() && !line.fits(space_width + word_width) {
            line.finish(lines);
        } else {
            // Leading indentation is kept; whitespace at a break is dropped.
            line.push_str(pending_space, space_width);
        }
        pending_space = "";

        // Indentation with no room left for the word is dropped.
        if !line.fits(word_width) && line.text.trim().is_empty() {
            line.clear();
        }
        if line.fits(word_width) {
            line.push_str(token, word_width);
        } else {
            line.push_broken(token, lines);
        }
    }

    line.finish(lines);
}

fn wrap_chars(paragraph: &str, font: &Font, max_width: f32, lines: &mut Vec<Line>) {
    let mut line = LineBuilder::new(font, max_width);
    let mut broke = false;

    for ch in paragraph.chars() {
        if broke && line.text.is_empty() && ch.is_whitespace() {
            continue;
        }
        let w = font.advance(ch);
        if !line.text.is_empty() && !line.fits(w) {
            line.finish(lines);
            broke = true;
            if ch.is_whitespace() {
                continue;
            }
        }
        line.push(ch, w);
    }

    line.finish(lines);
}

/// Split into alternating runs of whitespace and non-whitespace.
fn split_words(text: &str) -> impl Iterator<Item = (&str, bool)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|&(_, c)| c.is_whitespace() != is_space)
            .map_or(rest.len(), |(i, _)| i);
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some((token, is_space))
    })
}

/// Word positions for a justified line: each word with its x offset.
///
/// Returns `None` when the line has fewer than two words or is already
/// wider than `target_width`, in which case it is placed like left-aligned
/// text.
pub fn justify(line: &Line, font: &Font, target_width: f32) -> Option<Vec<(String, f32)>> {
    let words: Vec<&str> = line.text.split_whitespace().collect();
    if words.len() < 2 || !(line.width < target_width) {
        return None;
    }
    let widths: Vec<f32> = words.iter().map(|w| font.measure(w)).collect();
    let total: f32 = widths.iter().sum();
    let gap = (target_width - total) / (words.len() - 1) as f32;

    let mut x = 0.0;
    let placed = words
        .iter()
        .zip(&widths)
        .map(|(word, width)| {
            let item = (word.to_string(), x);
            x += width + gap;
            item
        })
        .collect();
    Some(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FixedMetrics, Font};
    use std::sync::Arc;

    // 10pt: glyphs advance 5, spaces 2.5, line height 10.
    fn font() -> Font {
        Font::new("Fixed", 10.0, Arc::new(FixedMetrics::default()))
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_char_widths() {
        let widths = char_widths("a b", &font());
        assert_eq!(widths, vec![5.0, 2.5, 5.0]);
        assert!(char_widths("", &font()).is_empty());
    }

    #[test]
    fn test_char_widths_counts_chars_not_bytes() {
        let text = "héllo wörld ✓";
        assert_eq!(char_widths(text, &font()).len(), text.chars().count());
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        let lines = wrap_lines("hello world", &font(), 100.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["hello world"]);
        assert_eq!(lines[0].width, 52.5);
    }

    #[test]
    fn test_wrap_at_word_boundaries() {
        // "hello" = 25, "hello world" = 52.5
        let lines = wrap_lines("hello world again", &font(), 40.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["hello", "world", "again"]);
    }

    #[test]
    fn test_wrap_packs_words() {
        let lines = wrap_lines("a b c d e", &font(), 20.0, LineBreakMode::WordWrap);
        // "a b c" = 20 fits exactly
        assert_eq!(texts(&lines), vec!["a b c", "d e"]);
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        let lines = wrap_lines("abcdefgh", &font(), 20.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_long_word_after_short_one() {
        let lines = wrap_lines("ab abcdefgh", &font(), 20.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_marks_paragraph_ends() {
        let lines = wrap_lines("hello world\nab", &font(), 40.0, LineBreakMode::WordWrap);
        let ends: Vec<bool> = lines.iter().map(|l| l.ends_paragraph).collect();
        assert_eq!(ends, vec![false, true, true]);
    }

    #[test]
    fn test_wrap_hard_newlines() {
        let lines = wrap_lines("one\r\n\ntwo", &font(), 1000.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_keeps_indent_drops_trailing_space() {
        let lines = wrap_lines("  ab   ", &font(), 1000.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["  ab"]);
    }

    #[test]
    fn test_wrap_drops_indent_that_cannot_fit() {
        // Ten spaces are 25 wide, more than the line holds.
        let lines = wrap_lines("          ab", &font(), 20.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["ab"]);

        let lines = wrap_lines("  abcdefgh", &font(), 20.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["abcd", "efgh"]);

        let lines = wrap_lines("    ab", &font(), 20.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["    ab"]);
    }

    #[test]
    fn test_wrap_empty_string_has_one_line() {
        let lines = wrap_lines("", &font(), 100.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec![""]);
        assert_eq!(lines[0].width, 0.0);
    }

    #[test]
    fn test_wrap_zero_width_terminates() {
        let lines = wrap_lines("abc", &font(), 0.0, LineBreakMode::WordWrap);
        assert_eq!(texts(&lines), vec!["a", "b", "c"]);

        let lines = wrap_lines("abc", &font(), f32::NAN, LineBreakMode::CharWrap);
        assert_eq!(texts(&lines), vec!["abc"]);
    }

    #[test]
    fn test_char_wrap() {
        let lines = wrap_lines("hello world", &font(), 20.0, LineBreakMode::CharWrap);
        assert_eq!(texts(&lines), vec!["hell", "o wo", "rld"]);
    }

    #[test]
    fn test_layout_height() {
        let layout = TextLayout::wrapped(
            "hello world",
            &font(),
            30.0,
            LineBreakMode::WordWrap,
            1.0,
        );
        assert_eq!(layout.lines.len(), 2);
        assert_eq!(layout.height(), 20.0);
        assert_eq!(layout.width(), 25.0);

        let spaced = TextLayout::wrapped(
            "hello world",
            &font(),
            30.0,
            LineBreakMode::WordWrap,
            1.5,
        );
        assert_eq!(spaced.height(), 30.0);
    }

    #[test]
    fn test_single_line_never_breaks() {
        let layout = TextLayout::single_line("one\ntwo three", &font(), 1.0);
        assert_eq!(texts(&layout.lines), vec!["one two three"]);
        assert_eq!(layout.height(), 10.0);
    }

    #[test]
    fn test_justify() {
        let line = Line::measured("ab cd ef".to_string(), &font());
        let placed = justify(&line, &font(), 60.0).unwrap();
        // words are 10 wide, two gaps share 30
        assert_eq!(
            placed,
            vec![
                ("ab".to_string(), 0.0),
                ("cd".to_string(), 25.0),
                ("ef".to_string(), 50.0)
            ]
        );

        let single = Line::measured("word".to_string(), &font());
        assert_eq!(justify(&single, &font(), 60.0), None);
    }
}
