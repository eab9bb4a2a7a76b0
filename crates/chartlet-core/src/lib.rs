// File: crates/chartlet-core/src/lib.rs
// Summary: Core library entry point; exports the sampler, chart context and backend traits.

pub mod axis;
pub mod context;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod queue;
pub mod render;
pub mod sampler;
pub mod text;
pub mod theme;
pub mod transform;
pub mod types;

pub use axis::Axis;
pub use context::{ChartContext, ChartOptions, FlushStats};
pub use error::{PlotError, PlotResult};
pub use geometry::{DataPoint, RectF, Vec2};
pub use queue::{DrawCommand, DrawQueue, TextAlign};
pub use render::{GlyphMetrics, GlyphProvider, Renderer, TextureId, UvRect};
pub use sampler::{sample, Bounds, Interval, Sample, SampleKind, SampledFunction, SamplerOptions, Step, UpperExit, VisibleRange};
pub use text::{format_number, layout_label};
pub use theme::Theme;
pub use transform::LinearTransform;
pub use types::{Color, Insets};
