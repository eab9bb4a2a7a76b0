// File: crates/chartlet-core/src/types.rs
// Summary: Shared types and constants (colors, insets, default label metrics).

/// Default label height in pixels.
pub const LABEL_SIZE: f32 = 12.0;
/// Default scatter point edge length in pixels.
pub const POINT_SIZE: f32 = 4.0;

/// RGBA8 color, straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
    pub const fn is_opaque(&self) -> bool { self.a == 255 }
}

/// Screen margins between the chart rectangle and its plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room on the left and bottom for numeric tick labels.
    fn default() -> Self {
        Self::new(48, 12, 12, 24)
    }
}
