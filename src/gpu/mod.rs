//! GPU backend
//!
//! System font resolution and a wgpu render target, both built on glyphon.
//! The resolver and canvas should share one `FontSystem` so measured and
//! rendered text agree:
//!
//! ```no_run
//! use glyphkit::gpu::{GlyphonFontResolver, GpuCanvas};
//! use glyphkit::{Color, Rect, TextAlignment, Typesetter, WgpuContext};
//!
//! # fn run(view: &wgpu::TextureView) -> anyhow::Result<()> {
//! let ctx = WgpuContext::new_blocking(None)?;
//! let resolver = GlyphonFontResolver::new();
//! let mut canvas = GpuCanvas::new(
//!     &ctx,
//!     wgpu::TextureFormat::Rgba8UnormSrgb,
//!     resolver.font_system().clone(),
//! );
//!
//! let typesetter = Typesetter::new(resolver);
//! let rect = Rect::new(10.0, 10.0, 200.0, 80.0);
//! typesetter.draw_wrapped_string_in_rect(
//!     &mut canvas,
//!     "Hello",
//!     rect,
//!     "DejaVu Sans",
//!     TextAlignment::Center,
//!     Color::WHITE,
//! );
//! canvas.render(&ctx, view, 640, 480)?;
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod metrics;

pub use canvas::GpuCanvas;
pub use metrics::{GlyphonFontResolver, GlyphonMetrics, SharedFontSystem, SANS_SERIF};
