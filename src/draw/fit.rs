//! Font size fitting
//!
//! Finds the largest size on the settings' size grid at which a string fits
//! a rectangle. Without a configured maximum the grid index is doubled until
//! a size fails; the bracket is then bisected and walked forward one step at
//! a time until the next size no longer fits, so the result is a local
//! maximum even for metrics that do not grow perfectly monotonically.

use crate::font::{Font, FontResolver};
use crate::geometry::Rect;
use crate::layout::TextLayout;
use crate::settings::TypesetSettings;

/// Highest grid index searched. Past 2^24 steps an `f32` size can no longer
/// tell neighbouring grid points apart.
const MAX_GRID_INDEX: u64 = 1 << 24;

/// Largest grid size for which `fits` holds.
///
/// Returns `min_font_size` when nothing fits. Sizes that overflow to
/// infinity never fit. `settings` must be sanitized.
pub(crate) fn largest_fitting_size(
    settings: &TypesetSettings,
    mut fits: impl FnMut(f32) -> bool,
) -> f32 {
    let min = settings.min_font_size;
    let step = settings.size_step;
    let cap = settings
        .max_font_size
        .map(|max| ((max - min) / step).floor().min(MAX_GRID_INDEX as f32) as u64)
        .unwrap_or(MAX_GRID_INDEX);
    let size_at = |k: u64| min + k as f32 * step;
    let mut fits_at = |k: u64| {
        let size = size_at(k);
        size.is_finite() && fits(size)
    };

    if !fits_at(0) {
        return min;
    }

    // Grow until a failing index brackets the answer.
    let mut lo = 0;
    let mut hi = None;
    let mut next = 1;
    while lo < cap {
        let k = next.min(cap);
        if fits_at(k) {
            lo = k;
            next = k.saturating_mul(2);
        } else {
            hi = Some(k);
            break;
        }
    }

    let Some(mut hi) = hi else {
        return size_at(lo);
    };
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if fits_at(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    while lo < cap && fits_at(lo + 1) {
        lo += 1;
    }

    size_at(lo)
}

/// Height of `text` wrapped into `rect` with `font`.
pub(crate) fn wrapped_height(
    text: &str,
    font: &Font,
    rect: &Rect,
    settings: &TypesetSettings,
) -> f32 {
    TextLayout::wrapped(
        text,
        font,
        rect.width(),
        settings.line_break,
        settings.line_spacing,
    )
    .height()
}

/// Largest font of `face` whose wrapped text is at most
/// `rect.height() + tolerance` tall.
pub(crate) fn fit_wrapped<R: FontResolver + ?Sized>(
    resolver: &R,
    settings: &TypesetSettings,
    text: &str,
    face: &str,
    rect: &Rect,
    tolerance: f32,
) -> Font {
    let tolerance = if tolerance.is_finite() { tolerance } else { 0.0 };
    let limit = rect.height() + tolerance;
    let base = resolver.resolve_or_fallback(face, settings.min_font_size);

    let size = largest_fitting_size(settings, |size| {
        wrapped_height(text, &base.with_size(size), rect, settings) <= limit
    });
    tracing::debug!(face = base.face(), size, limit, "fitted wrapped string");
    base.with_size(size)
}

/// Largest font of `face` at which `text` fits `rect` as one unbroken line.
pub(crate) fn fit_unwrapped<R: FontResolver + ?Sized>(
    resolver: &R,
    settings: &TypesetSettings,
    text: &str,
    face: &str,
    rect: &Rect,
) -> Font {
    let base = resolver.resolve_or_fallback(face, settings.min_font_size);

    let size = largest_fitting_size(settings, |size| {
        let font = base.with_size(size);
        let layout = TextLayout::single_line(text, &font, settings.line_spacing);
        layout.width() <= rect.width() && layout.height() <= rect.height()
    });
    tracing::debug!(face = base.face(), size, "fitted unwrapped string");
    base.with_size(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FixedMetrics, FontRegistry};

    fn registry() -> FontRegistry {
        FontRegistry::new().face("Arial", FixedMetrics::default())
    }

    fn fit(settings: &TypesetSettings, text: &str, rect: &Rect, tolerance: f32) -> Font {
        fit_wrapped(&registry(), settings, text, "Arial", rect, tolerance)
    }

    #[test]
    fn test_largest_fitting_size_threshold() {
        let settings = TypesetSettings::default();
        assert_eq!(largest_fitting_size(&settings, |s| s <= 37.0), 37.0);
        assert_eq!(largest_fitting_size(&settings, |s| s <= 37.5), 37.0);
        assert_eq!(largest_fitting_size(&settings, |s| s <= 5000.0), 5000.0);
        assert_eq!(largest_fitting_size(&settings, |_| false), 1.0);
    }

    #[test]
    fn test_largest_fitting_size_capped() {
        let settings = TypesetSettings::new().font_size_range(1.0, 512.0);
        assert_eq!(largest_fitting_size(&settings, |_| true), 512.0);
        assert_eq!(largest_fitting_size(&settings, |s| s <= 100.0), 100.0);
    }

    #[test]
    fn test_largest_fitting_size_always_fits_terminates() {
        let settings = TypesetSettings::default();
        let size = largest_fitting_size(&settings, |_| true);
        assert_eq!(size, 1.0 + MAX_GRID_INDEX as f32);
    }

    #[test]
    fn test_largest_fitting_size_huge_maximum() {
        let settings = TypesetSettings::new()
            .font_size_range(1.0, f32::MAX)
            .sanitized();
        assert_eq!(largest_fitting_size(&settings, |s| s <= 40.0), 40.0);

        let settings = TypesetSettings::new()
            .font_size_range(1.0, f32::MAX)
            .size_step(f32::MAX)
            .sanitized();
        assert_eq!(largest_fitting_size(&settings, |_| true), f32::MAX);
    }

    #[test]
    fn test_largest_fitting_size_fractional_step() {
        let settings = TypesetSettings::new()
            .font_size_range(2.0, 10.0)
            .size_step(0.5)
            .sanitized();
        assert_eq!(largest_fitting_size(&settings, |s| s < 7.2), 7.0);
    }

    #[test]
    fn test_largest_fitting_size_walks_past_dips() {
        // Fits below 10 and again at exactly 12. Whichever side the search
        // lands on, the next size must not fit.
        let settings = TypesetSettings::new().font_size_range(1.0, 16.0);
        let fits = |s: f32| s < 10.0 || s == 12.0;
        let size = largest_fitting_size(&settings, fits);
        assert!(fits(size));
        assert!(!fits(size + 1.0));
    }

    #[test]
    fn test_fit_wrapped_hello() {
        // Glyphs advance 0.5em and lines are 1em tall. "Hello" stays on one
        // line up to 40pt; at 41pt it breaks and needs two lines.
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let settings = TypesetSettings::default();
        let font = fit(&settings, "Hello", &rect, 1.0);
        assert_eq!(font.face(), "Arial");
        assert_eq!(font.size(), 40.0);
        assert!(wrapped_height("Hello", &font, &rect, &settings) <= 51.0);
        assert!(wrapped_height("Hello", &font.with_size(41.0), &rect, &settings) > 51.0);
    }

    #[test]
    fn test_fit_wrapped_with_unbounded_maximum() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let settings = TypesetSettings::new()
            .font_size_range(1.0, f32::MAX)
            .sanitized();
        assert_eq!(fit(&settings, "Hello", &rect, 1.0).size(), 40.0);
    }

    #[test]
    fn test_fit_wrapped_large_rect() {
        // "Hi" is 1em wide and 1em tall: the height is the only limit.
        let rect = Rect::new(0.0, 0.0, 2000.0, 1000.0);
        let settings = TypesetSettings::default();
        let font = fit(&settings, "Hi", &rect, 0.0);
        assert_eq!(font.size(), 1000.0);
        assert!(wrapped_height("Hi", &font.with_size(1001.0), &rect, &settings) > 1000.0);
    }

    #[test]
    fn test_fit_wrapped_multiline() {
        let rect = Rect::new(0.0, 0.0, 60.0, 100.0);
        let settings = TypesetSettings::default();
        let text = "the quick brown fox jumps over the lazy dog";
        let font = fit(&settings, text, &rect, 0.0);
        let next = font.with_size(font.size() + 1.0);
        assert!(wrapped_height(text, &font, &rect, &settings) <= 100.0);
        assert!(wrapped_height(text, &next, &rect, &settings) > 100.0);
    }

    #[test]
    fn test_fit_wrapped_tolerance_allows_larger() {
        let rect = Rect::new(0.0, 0.0, 1000.0, 50.0);
        let settings = TypesetSettings::default();
        assert_eq!(fit(&settings, "Hi", &rect, 0.0).size(), 50.0);
        assert_eq!(fit(&settings, "Hi", &rect, 10.0).size(), 60.0);
    }

    #[test]
    fn test_fit_wrapped_nothing_fits() {
        let rect = Rect::new(0.0, 0.0, 100.0, 0.5);
        let font = fit(&TypesetSettings::default(), "Hello", &rect, 0.0);
        assert_eq!(font.size(), 1.0);
    }

    #[test]
    fn test_fit_unknown_face_falls_back() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let settings = TypesetSettings::default();
        let font = fit_wrapped(&registry(), &settings, "Hello", "Nope", &rect, 1.0);
        assert_eq!(font.face(), "System");
        assert_eq!(font.size(), 40.0);
    }

    #[test]
    fn test_fit_unwrapped() {
        let settings = TypesetSettings::default();

        // "Hello world" is 5.25em wide: 105pt width allows 20pt, 50pt height
        // does not constrain.
        let rect = Rect::new(0.0, 0.0, 105.0, 50.0);
        let font = fit_unwrapped(&registry(), &settings, "Hello world", "Arial", &rect);
        assert_eq!(font.size(), 20.0);

        // Height-bound.
        let rect = Rect::new(0.0, 0.0, 1000.0, 12.5);
        let font = fit_unwrapped(&registry(), &settings, "Hello world", "Arial", &rect);
        assert_eq!(font.size(), 12.0);
    }
}
