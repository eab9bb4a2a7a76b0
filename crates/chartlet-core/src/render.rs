// File: crates/chartlet-core/src/render.rs
// Summary: Backend-facing traits: a renderer that accepts primitives and a glyph provider for labels.

use crate::error::PlotResult;
use crate::geometry::Vec2;
use crate::types::Color;

/// Opaque handle to a texture registered with a renderer backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Normalized texture coordinates, `0.0..=1.0` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    pub const FULL: UvRect = UvRect { u0: 0.0, v0: 0.0, u1: 1.0, v1: 1.0 };

    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }
}

/// Atlas entry for one character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub uv: UvRect,
    /// Quad size in pixels at the provider's native line height.
    pub size: Vec2,
    /// Horizontal pen advance in pixels at the native line height.
    pub advance: f32,
}

/// Host rendering API. Implementations issue the primitives immediately.
pub trait Renderer {
    /// `points` is a line list: each consecutive pair is one independent segment.
    fn draw_segments(&mut self, points: &[Vec2], color: Color) -> PlotResult<()>;

    /// Solid axis-aligned quad with its top-left corner at `position`.
    fn draw_quad(&mut self, position: Vec2, size: Vec2, color: Color) -> PlotResult<()>;

    /// Textured axis-aligned quad, tinted with `color`.
    fn draw_textured_quad(
        &mut self,
        position: Vec2,
        size: Vec2,
        texture: TextureId,
        uv: UvRect,
        color: Color,
    ) -> PlotResult<()>;
}

/// Source of label glyphs packed in a single texture.
pub trait GlyphProvider {
    fn texture(&self) -> TextureId;
    /// Native line height in pixels; labels scale relative to it.
    fn line_height(&self) -> f32;
    fn glyph(&self, c: char) -> Option<GlyphMetrics>;
}
