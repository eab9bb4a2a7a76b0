// File: crates/chartlet-core/src/transform.rs
// Summary: Linear mapping between user (data) space and the plot area's pixel space.

use crate::geometry::{DataPoint, RectF, Vec2};
use crate::sampler::Interval;

/// Maps a data-space window onto a pixel rectangle; y grows downward on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTransform {
    pub plot: RectF,
    pub x: Interval,
    pub y: Interval,
}

impl LinearTransform {
    pub fn new(plot: RectF, x: Interval, y: Interval) -> Self {
        Self { plot, x, y }
    }

    // clamp zero spans so the division stays finite
    #[inline]
    fn x_span(&self) -> f64 { self.x.width().max(1e-12) }
    #[inline]
    fn y_span(&self) -> f64 { self.y.width().max(1e-12) }

    #[inline]
    pub fn to_screen_x(&self, x: f64) -> f32 {
        self.plot.left + ((x - self.x.min) / self.x_span()) as f32 * self.plot.width()
    }
    #[inline]
    pub fn to_screen_y(&self, y: f64) -> f32 {
        self.plot.bottom - ((y - self.y.min) / self.y_span()) as f32 * self.plot.height()
    }
    pub fn to_screen(&self, p: DataPoint) -> Vec2 {
        Vec2::new(self.to_screen_x(p.x), self.to_screen_y(p.y))
    }

    pub fn to_data(&self, px: Vec2) -> DataPoint {
        let w = self.plot.width().max(1.0) as f64;
        let h = self.plot.height().max(1.0) as f64;
        DataPoint::new(
            self.x.min + (px.x - self.plot.left) as f64 / w * self.x_span(),
            self.y.min + (self.plot.bottom - px.y) as f64 / h * self.y_span(),
        )
    }

    /// Data-space length of one horizontal pixel.
    pub fn data_per_pixel_x(&self) -> f64 {
        self.x_span() / self.plot.width().max(1.0) as f64
    }
}
