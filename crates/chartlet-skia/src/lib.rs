// File: crates/chartlet-skia/src/lib.rs
// Summary: Skia CPU raster backend for chartlet-core: renderer, glyph atlas and PNG output.

pub mod atlas;
pub mod renderer;

pub use atlas::{GlyphAtlas, DEFAULT_CHARSET};
pub use renderer::SkiaRenderer;
