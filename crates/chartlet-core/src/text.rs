// File: crates/chartlet-core/src/text.rs
// Summary: Numeric label formatting and glyph-quad layout against a GlyphProvider.

use log::debug;

use crate::geometry::Vec2;
use crate::queue::TextAlign;
use crate::render::{GlyphProvider, UvRect};

/// One positioned glyph, ready for `Renderer::draw_textured_quad`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphQuad {
    pub position: Vec2,
    pub size: Vec2,
    pub uv: UvRect,
}

/// Format `value` with at most `precision` decimals, trimming trailing zeros.
pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    let mut s = format!("{value:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Lay `text` out on a baseline at `anchor`, scaled so one line is `size` pixels tall.
///
/// Characters the provider does not know advance the pen by half a line and
/// produce no quad.
pub fn layout_label(
    glyphs: &dyn GlyphProvider,
    text: &str,
    anchor: Vec2,
    size: f32,
    align: TextAlign,
) -> Vec<GlyphQuad> {
    let native = glyphs.line_height().max(1.0);
    let scale = size / native;

    let mut pen = 0.0f32;
    let mut quads = Vec::with_capacity(text.len());
    for c in text.chars() {
        match glyphs.glyph(c) {
            Some(g) => {
                let glyph_size = g.size * scale;
                // quads hang from the line top; the anchor is the baseline
                quads.push(GlyphQuad { position: Vec2::new(pen, -size), size: glyph_size, uv: g.uv });
                pen += g.advance * scale;
            }
            None => {
                debug!("no glyph for {c:?}");
                pen += size * 0.5;
            }
        }
    }

    let shift = match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => pen * 0.5,
        TextAlign::Right => pen,
    };
    for q in &mut quads {
        q.position = anchor + q.position - Vec2::new(shift, 0.0);
    }
    quads
}

/// Total pen advance of `text` at `size`, matching [`layout_label`].
pub fn measure_width(glyphs: &dyn GlyphProvider, text: &str, size: f32) -> f32 {
    let scale = size / glyphs.line_height().max(1.0);
    text.chars()
        .map(|c| glyphs.glyph(c).map_or(size * 0.5, |g| g.advance * scale))
        .sum()
}
