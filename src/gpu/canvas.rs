//! GPU canvas
//!
//! Queues text runs and renders them with glyphon.

use super::metrics::{family, lock, SharedFontSystem};
use crate::canvas::{Canvas, TextRun};
use crate::context::WgpuContext;
use glyphon::{
    Attrs, Buffer, Cache, Color, Metrics, Resolution, Shaping, SwashCache, TextArea, TextAtlas,
    TextBounds, TextRenderer, Viewport,
};

struct QueuedRun {
    buffer: Buffer,
    left: f32,
    top: f32,
    clip: Option<TextBounds>,
    color: Color,
}

/// A [`Canvas`] that renders into a wgpu texture view.
///
/// Runs are shaped when they are drawn and uploaded by [`render`](Self::render).
pub struct GpuCanvas {
    font_system: SharedFontSystem,
    swash_cache: SwashCache,
    #[allow(dead_code)]
    cache: Cache,
    atlas: TextAtlas,
    renderer: TextRenderer,
    viewport: Viewport,
    queued: Vec<QueuedRun>,
}

impl GpuCanvas {
    /// Create a canvas sharing `font_system` with the resolver that produces
    /// its fonts.
    pub fn new(
        ctx: &WgpuContext,
        format: wgpu::TextureFormat,
        font_system: SharedFontSystem,
    ) -> Self {
        let swash_cache = SwashCache::new();
        let cache = Cache::new(&ctx.device);
        let mut atlas = TextAtlas::new(&ctx.device, &ctx.queue, &cache, format);
        let renderer = TextRenderer::new(
            &mut atlas,
            &ctx.device,
            wgpu::MultisampleState::default(),
            None,
        );
        let viewport = Viewport::new(&ctx.device, &cache);

        Self {
            font_system,
            swash_cache,
            cache,
            atlas,
            renderer,
            viewport,
            queued: Vec::new(),
        }
    }

    /// Number of runs waiting to be rendered.
    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    /// Render all queued runs over the existing contents of `view`, then
    /// clear the queue.
    pub fn render(
        &mut self,
        ctx: &WgpuContext,
        view: &wgpu::TextureView,
        width: u32,
        height: u32,
    ) -> anyhow::Result<()> {
        if self.queued.is_empty() {
            return Ok(());
        }

        self.viewport
            .update(&ctx.queue, Resolution { width, height });

        let full = TextBounds {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        };
        let text_areas = self.queued.iter().map(|run| TextArea {
            buffer: &run.buffer,
            left: run.left,
            top: run.top,
            scale: 1.0,
            bounds: run.clip.unwrap_or(full),
            default_color: run.color,
            custom_glyphs: &[],
        });

        {
            let mut font_system = lock(&self.font_system);
            self.renderer.prepare(
                &ctx.device,
                &ctx.queue,
                &mut font_system,
                &mut self.atlas,
                &self.viewport,
                text_areas,
                &mut self.swash_cache,
            )?;
        }

        let mut encoder = ctx.create_encoder(Some("glyphkit text encoder"));
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("glyphkit text pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.renderer
                .render(&self.atlas, &self.viewport, &mut pass)?;
        }
        ctx.submit([encoder.finish()]);

        tracing::debug!(runs = self.queued.len(), "rendered text runs");
        self.queued.clear();
        Ok(())
    }

    /// Trim the atlas to free unused space.
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}

impl Canvas for GpuCanvas {
    fn fill_text(&mut self, run: &TextRun) {
        let [r, g, b, a] = run.color.to_rgba8();
        let color = Color::rgba(r, g, b, a);
        let line_height = run.font.line_height().max(1.0);

        let buffer = {
            let mut font_system = lock(&self.font_system);
            let metrics = Metrics::new(run.font.size(), line_height);
            let mut buffer = Buffer::new(&mut font_system, metrics);
            buffer.set_size(&mut font_system, None, None);
            buffer.set_text(
                &mut font_system,
                &run.text,
                &Attrs::new().family(family(run.font.face())).color(color),
                Shaping::Advanced,
                None,
            );
            buffer.shape_until_scroll(&mut font_system, false);
            buffer
        };

        let clip = run.clip.map(|rect| {
            let max = rect.max();
            TextBounds {
                left: rect.x().floor() as i32,
                top: rect.y().floor() as i32,
                right: max.x.ceil() as i32,
                bottom: max.y.ceil() as i32,
            }
        });

        self.queued.push(QueuedRun {
            buffer,
            left: run.origin.x,
            top: run.origin.y,
            clip,
            color,
        });
    }
}
