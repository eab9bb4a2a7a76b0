// File: crates/chartlet-skia/src/renderer.rs
// Summary: SkiaRenderer draws chartlet primitives onto a CPU raster surface and encodes PNGs.

use anyhow::{anyhow, Result};
use chartlet_core::{Color, PlotError, PlotResult, Renderer, TextureId, UvRect, Vec2};
use skia_safe as skia;

/// Stroke width for segment lists, in pixels.
pub const STROKE_WIDTH: f32 = 1.5;

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    surface: skia::Surface,
    textures: Vec<skia::Image>,
}

impl SkiaRenderer {
    /// Raster surface of `width` x `height` cleared to `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        surface.canvas().clear(to_skia(background));
        Ok(Self { surface, textures: Vec::new() })
    }

    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    /// Make `image` available to `draw_textured_quad`.
    pub fn register_texture(&mut self, image: skia::Image) -> TextureId {
        self.textures.push(image);
        TextureId((self.textures.len() - 1) as u32)
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Renderer for SkiaRenderer {
    fn draw_segments(&mut self, points: &[Vec2], color: Color) -> PlotResult<()> {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(STROKE_WIDTH);
        stroke.set_color(to_skia(color));

        let canvas = self.surface.canvas();
        for pair in points.chunks_exact(2) {
            canvas.draw_line((pair[0].x, pair[0].y), (pair[1].x, pair[1].y), &stroke);
        }
        Ok(())
    }

    fn draw_quad(&mut self, position: Vec2, size: Vec2, color: Color) -> PlotResult<()> {
        let mut fill = skia::Paint::default();
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_skia(color));
        let rect = skia::Rect::from_xywh(position.x, position.y, size.x, size.y);
        self.surface.canvas().draw_rect(rect, &fill);
        Ok(())
    }

    fn draw_textured_quad(
        &mut self,
        position: Vec2,
        size: Vec2,
        texture: TextureId,
        uv: UvRect,
        color: Color,
    ) -> PlotResult<()> {
        let image = self
            .textures
            .get(texture.0 as usize)
            .ok_or_else(|| PlotError::render(format!("unknown texture {}", texture.0)))?;
        let (w, h) = (image.width() as f32, image.height() as f32);
        let src = skia::Rect::from_ltrb(uv.u0 * w, uv.v0 * h, uv.u1 * w, uv.v1 * h);
        let dst = skia::Rect::from_xywh(position.x, position.y, size.x, size.y);

        let mut sample = skia::Paint::default();
        sample.set_anti_alias(true);
        let mut tint = skia::Paint::default();
        tint.set_color(to_skia(color));
        tint.set_blend_mode(skia::BlendMode::SrcIn);

        // The atlas is white on transparent; SrcIn inside a layer recolors only the glyph coverage.
        let canvas = self.surface.canvas();
        canvas.save_layer(&skia::canvas::SaveLayerRec::default());
        canvas.draw_image_rect(image, Some((&src, skia::canvas::SrcRectConstraint::Strict)), dst, &sample);
        canvas.draw_rect(dst, &tint);
        canvas.restore();
        Ok(())
    }
}
