// File: crates/chartlet-core/src/context.rs
// Summary: ChartContext owns one chart's layout, axes and deferred draw queue for a frame.

use log::debug;

use crate::axis::Axis;
use crate::error::PlotResult;
use crate::geometry::{DataPoint, RectF, Vec2};
use crate::grid::axis_ticks;
use crate::queue::{DrawCommand, DrawQueue, TextAlign};
use crate::render::{GlyphProvider, Renderer};
use crate::sampler::{self, Bounds, Interval, SamplerOptions, Step};
use crate::text::{format_number, layout_label};
use crate::theme::Theme;
use crate::transform::LinearTransform;
use crate::types::{Color, Insets, LABEL_SIZE, POINT_SIZE};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Margins between the chart rectangle and the plot area.
    pub insets: Insets,
    pub theme: Theme,
    /// Label line height in pixels.
    pub label_size: f32,
    /// Maximum decimals printed by numeric labels.
    pub label_precision: usize,
    /// Edge length of scatter point quads in pixels.
    pub point_size: f32,
    /// Ticks per axis drawn by `axis_labels`.
    pub tick_count: usize,
    /// Function sampling step in data units; `None` samples once per pixel.
    pub step: Option<f64>,
    pub sampler: SamplerOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::default(),
            label_size: LABEL_SIZE,
            label_precision: 2,
            point_size: POINT_SIZE,
            tick_count: 5,
            step: None,
            sampler: SamplerOptions::default(),
        }
    }
}

/// Primitive counts submitted by one `flush`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushStats {
    pub segments: usize,
    pub quads: usize,
    pub glyphs: usize,
}

/// One chart being drawn this frame.
///
/// Drawing calls only enqueue; nothing reaches the renderer until `flush`.
pub struct ChartContext {
    rect: RectF,
    plot: RectF,
    x_axis: Axis,
    y_axis: Axis,
    bounds: Bounds,
    transform: LinearTransform,
    options: ChartOptions,
    queue: DrawQueue,
}

impl ChartContext {
    /// Set up a chart in the pixel rectangle `rect` showing `x_axis` by `y_axis`.
    pub fn new(rect: RectF, x_axis: Axis, y_axis: Axis, options: ChartOptions) -> PlotResult<Self> {
        let bounds = Bounds::new(x_axis.range()?, y_axis.range()?);
        let plot = rect.inset(&options.insets);
        let transform = LinearTransform::new(plot, bounds.x, bounds.y);
        Ok(Self { rect, plot, x_axis, y_axis, bounds, transform, options, queue: DrawQueue::new() })
    }

    pub fn rect(&self) -> RectF { self.rect }
    pub fn plot_area(&self) -> RectF { self.plot }
    pub fn bounds(&self) -> &Bounds { &self.bounds }
    pub fn transform(&self) -> &LinearTransform { &self.transform }
    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn queue(&self) -> &DrawQueue { &self.queue }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }

    /// Fill the plot area with the theme background.
    pub fn background(&mut self) {
        self.queue.push_quad(self.plot.origin(), self.plot.size(), self.options.theme.background);
    }

    /// Outline the plot area.
    pub fn frame(&mut self) {
        let RectF { left, top, right, bottom } = self.plot;
        let (tl, tr) = (Vec2::new(left, top), Vec2::new(right, top));
        let (bl, br) = (Vec2::new(left, bottom), Vec2::new(right, bottom));
        self.queue.push_segments(vec![tl, tr, tr, br, br, bl, bl, tl], self.options.theme.frame);
    }

    /// Numeric tick labels along both axes plus the axis captions.
    pub fn axis_labels(&mut self) {
        let size = self.options.label_size;
        let color = self.options.theme.label;
        let precision = self.options.label_precision;

        for t in axis_ticks(&self.bounds.x, self.options.tick_count) {
            let at = Vec2::new(self.transform.to_screen_x(t), self.plot.bottom + size + 4.0);
            self.queue.push_label(format_number(t, precision), at, size, color, TextAlign::Center);
        }
        for t in axis_ticks(&self.bounds.y, self.options.tick_count) {
            let at = Vec2::new(self.plot.left - 4.0, self.transform.to_screen_y(t) + size * 0.5);
            self.queue.push_label(format_number(t, precision), at, size, color, TextAlign::Right);
        }

        let x_caption = Vec2::new(self.plot.right - 4.0, self.plot.bottom - 4.0);
        self.queue.push_label(self.x_axis.label.clone(), x_caption, size, color, TextAlign::Right);
        let y_caption = Vec2::new(self.plot.left + 4.0, self.plot.top + size + 2.0);
        self.queue.push_label(self.y_axis.label.clone(), y_caption, size, color, TextAlign::Left);
    }

    /// Connect `data` in order. Returns the number of segments enqueued.
    pub fn line_chart(&mut self, data: &[DataPoint], color: Color) -> usize {
        let pixels: Vec<Vec2> = data.iter().map(|&p| self.transform.to_screen(p)).collect();
        let points = sampler::line_list(&pixels);
        let n = points.len() / 2;
        self.queue.push_segments(points, color);
        n
    }

    /// One centered square per point inside the plot area. Returns how many were enqueued.
    pub fn points(&mut self, data: &[DataPoint], color: Color) -> usize {
        let size = Vec2::splat(self.options.point_size);
        let half = size * 0.5;
        let mut n = 0;
        for &p in data {
            let center = self.transform.to_screen(p);
            if !self.plot.contains(center) {
                continue;
            }
            self.queue.push_quad(center - half, size, color);
            n += 1;
        }
        n
    }

    /// Sample `f` over `domain`, clip to the visible range and enqueue the graph.
    ///
    /// Returns the number of segments enqueued. On error nothing is enqueued.
    pub fn function<F>(&mut self, f: F, domain: Interval, color: Color) -> PlotResult<usize>
    where
        F: Fn(f64) -> f64,
    {
        let step = match self.options.step {
            Some(h) => Step::Fixed(h),
            None => Step::PerPixel(self.plot.width()),
        };
        let sampled = sampler::sample(f, domain, &self.bounds, step, &self.options.sampler)?;
        let points: Vec<Vec2> = sampled
            .segments()
            .iter()
            .map(|s| self.transform.to_screen(s.point()))
            .collect();
        let n = points.len() / 2;
        self.queue.push_segments(points, color);
        Ok(n)
    }

    /// Numeric label with its baseline centered on the data point `at`.
    pub fn number(&mut self, value: f64, at: DataPoint, color: Color) {
        let text = format_number(value, self.options.label_precision);
        let position = self.transform.to_screen(at);
        self.queue.push_label(text, position, self.options.label_size, color, TextAlign::Center);
    }

    /// Free text at a pixel position.
    pub fn label(&mut self, text: impl Into<String>, at: Vec2, color: Color, align: TextAlign) {
        self.queue.push_label(text, at, self.options.label_size, color, align);
    }

    /// Submit every queued command to `renderer` in order and empty the queue.
    ///
    /// The first renderer error stops the flush; commands not yet submitted are discarded.
    pub fn flush<R>(&mut self, renderer: &mut R, glyphs: &dyn GlyphProvider) -> PlotResult<FlushStats>
    where
        R: Renderer + ?Sized,
    {
        let mut stats = FlushStats::default();
        for cmd in self.queue.drain() {
            match cmd {
                DrawCommand::Segments { points, color } => {
                    renderer.draw_segments(&points, color)?;
                    stats.segments += points.len() / 2;
                }
                DrawCommand::Quad { position, size, color } => {
                    renderer.draw_quad(position, size, color)?;
                    stats.quads += 1;
                }
                DrawCommand::Label { text, position, size, color, align } => {
                    let texture = glyphs.texture();
                    for q in layout_label(glyphs, &text, position, size, align) {
                        renderer.draw_textured_quad(q.position, q.size, texture, q.uv, color)?;
                        stats.glyphs += 1;
                    }
                }
            }
        }
        debug!(
            "flushed chart: {} segments, {} quads, {} glyphs",
            stats.segments, stats.quads, stats.glyphs
        );
        Ok(stats)
    }
}
