// File: crates/chartlet-core/tests/common/mod.rs
// Purpose: Recording renderer and fixed-metric glyph provider shared by integration tests.

#![allow(dead_code)]

use chartlet_core::{Color, GlyphMetrics, GlyphProvider, PlotError, PlotResult, Renderer, TextureId, UvRect, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Segments { points: Vec<Vec2>, color: Color },
    Quad { position: Vec2, size: Vec2, color: Color },
    Glyph { position: Vec2, size: Vec2, texture: TextureId, uv: UvRect, color: Color },
}

/// Records every primitive; optionally fails on the first quad.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
    pub fail_on_quad: bool,
}

impl Renderer for RecordingRenderer {
    fn draw_segments(&mut self, points: &[Vec2], color: Color) -> PlotResult<()> {
        self.calls.push(Call::Segments { points: points.to_vec(), color });
        Ok(())
    }

    fn draw_quad(&mut self, position: Vec2, size: Vec2, color: Color) -> PlotResult<()> {
        if self.fail_on_quad {
            return Err(PlotError::render("quad rejected"));
        }
        self.calls.push(Call::Quad { position, size, color });
        Ok(())
    }

    fn draw_textured_quad(&mut self, position: Vec2, size: Vec2, texture: TextureId, uv: UvRect, color: Color) -> PlotResult<()> {
        self.calls.push(Call::Glyph { position, size, texture, uv, color });
        Ok(())
    }
}

/// Digits, '.', and '-' at 6x10 px with a 10 px line; everything else is missing.
pub struct FixedGlyphs;

pub const GLYPH_TEXTURE: TextureId = TextureId(7);

impl GlyphProvider for FixedGlyphs {
    fn texture(&self) -> TextureId { GLYPH_TEXTURE }
    fn line_height(&self) -> f32 { 10.0 }
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        let idx = "0123456789.-".find(c)? as f32;
        Some(GlyphMetrics {
            uv: UvRect::new(idx / 12.0, 0.0, (idx + 1.0) / 12.0, 1.0),
            size: Vec2::new(6.0, 10.0),
            advance: 6.0,
        })
    }
}
