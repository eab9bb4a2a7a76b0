// File: crates/chartlet-skia/src/atlas.rs
// Summary: Rasterizes a label charset into a single white-on-transparent strip texture.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chartlet_core::{GlyphMetrics, GlyphProvider, TextureId, UvRect, Vec2};
use log::{debug, warn};
use skia_safe as skia;

use crate::renderer::SkiaRenderer;

/// Characters needed for numeric labels (including `NaN`/`inf`) and short captions.
pub const DEFAULT_CHARSET: &str =
    "0123456789.-+eE NaNinf abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ()=/*^,";

// room around each cell so bilinear sampling never bleeds into a neighbour
const PAD: f32 = 2.0;

pub struct GlyphAtlas {
    image: skia::Image,
    texture: Option<TextureId>,
    line_height: f32,
    glyphs: HashMap<char, GlyphMetrics>,
}

impl GlyphAtlas {
    /// Render every distinct character of `charset` at `font_size` into one strip.
    pub fn build(font_size: f32, charset: &str) -> Result<Self> {
        let font = make_font(font_size.max(1.0));
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(skia::Color::WHITE);

        let (_, metrics) = font.metrics();
        let ascent = -metrics.ascent;
        let cell_h = (ascent + metrics.descent).ceil().max(1.0) + PAD;

        let mut chars: Vec<char> = Vec::new();
        for c in charset.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        let cells: Vec<(char, f32, f32)> = chars
            .into_iter()
            .map(|c| {
                let (advance, _) = font.measure_str(c.to_string(), Some(&paint));
                (c, advance, advance.ceil() + PAD)
            })
            .collect();
        let strip_w = cells.iter().map(|&(_, _, w)| w).sum::<f32>().max(1.0);

        let mut surface = skia::surfaces::raster_n32_premul((strip_w as i32, cell_h as i32))
            .ok_or_else(|| anyhow!("failed to create glyph atlas surface {strip_w}x{cell_h}"))?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);

        let mut glyphs = HashMap::with_capacity(cells.len());
        let mut x = 0.0f32;
        for (c, advance, cell_w) in cells {
            canvas.draw_str(c.to_string(), (x + PAD * 0.5, PAD * 0.5 + ascent), &font, &paint);
            glyphs.insert(
                c,
                GlyphMetrics {
                    uv: UvRect::new(x / strip_w, 0.0, (x + cell_w) / strip_w, 1.0),
                    size: Vec2::new(cell_w, cell_h),
                    advance,
                },
            );
            x += cell_w;
        }
        debug!("glyph atlas: {} glyphs in {}x{} px", glyphs.len(), strip_w, cell_h);

        Ok(Self { image: surface.image_snapshot(), texture: None, line_height: cell_h, glyphs })
    }

    /// Upload the strip to `renderer`. Flushing labels before this fails with an unknown texture.
    pub fn register(&mut self, renderer: &mut SkiaRenderer) -> TextureId {
        let id = renderer.register_texture(self.image.clone());
        self.texture = Some(id);
        id
    }

    pub fn image(&self) -> &skia::Image { &self.image }
    pub fn len(&self) -> usize { self.glyphs.len() }
    pub fn is_empty(&self) -> bool { self.glyphs.is_empty() }
}

impl GlyphProvider for GlyphAtlas {
    fn texture(&self) -> TextureId {
        // unregistered atlases point at an id no renderer hands out
        self.texture.unwrap_or(TextureId(u32::MAX))
    }
    fn line_height(&self) -> f32 { self.line_height }
    fn glyph(&self, c: char) -> Option<GlyphMetrics> { self.glyphs.get(&c).copied() }
}

fn make_font(size: f32) -> skia::Font {
    match skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::default()) {
        Some(typeface) => skia::Font::from_typeface(typeface, size),
        None => {
            warn!("no system typeface found; labels may render empty");
            let mut font = skia::Font::default();
            font.set_size(size);
            font
        }
    }
}
