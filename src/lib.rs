//! glyphkit
//!
//! Text measuring, drawing and font fitting over explicit capabilities.
//!
//! # Architecture
//!
//! 1. **geometry**, **color** - plain value types
//! 2. **font** - `Font`, the `FontMetrics` and `FontResolver` traits, an in-memory registry
//! 3. **layout** - character widths, line wrapping, alignment
//! 4. **canvas** - the `Canvas` draw target and a recording implementation
//! 5. **draw** - the drawing and fitting operations, and `Typesetter`
//! 6. **settings** - `TypesetSettings`
//! 7. **gpu** - glyphon/wgpu resolver and canvas (feature = "gpu")
//!
//! No operation touches global state: fonts come from the resolver passed in,
//! pixels go to the canvas passed in.
//!
//! ```
//! use glyphkit::{Color, FontRegistry, Rect, RecordingCanvas, TextAlignment, Typesetter};
//!
//! let typesetter = Typesetter::new(FontRegistry::new());
//! let mut canvas = RecordingCanvas::new();
//! let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
//!
//! let font = typesetter.font_for_wrapped_string("Hello", "System", rect, 1.0);
//! assert!(font.size() > 1.0);
//!
//! typesetter.draw_wrapped_string_in_rect(
//!     &mut canvas,
//!     "Hello",
//!     rect,
//!     "System",
//!     TextAlignment::Center,
//!     Color::BLACK,
//! );
//! assert_eq!(canvas.runs().len(), 1);
//! ```

pub mod canvas;
pub mod color;
pub mod draw;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod settings;

#[cfg(feature = "gpu")]
pub mod context;

#[cfg(feature = "gpu")]
pub mod gpu;

pub use canvas::{Canvas, RecordingCanvas, TextRun};
pub use color::{Color, ParseColorError};
pub use draw::{
    draw_string_centered_in_rect, draw_string_in_rect, draw_unwrapped_string_in_rect,
    draw_wrapped_string_in_rect, font_for_unwrapped_string, font_for_wrapped_string,
    width_array_for_string, Typesetter,
};
pub use font::{FixedMetrics, Font, FontError, FontMetrics, FontRegistry, FontResolver};
pub use geometry::Rect;
pub use layout::{LineBreakMode, TextAlignment, TextLayout};
pub use settings::TypesetSettings;

#[cfg(feature = "gpu")]
pub use context::WgpuContext;

// Re-export glam for convenience
pub use glam;
