// File: crates/chartlet-core/src/sampler.rs
// Summary: Function-to-polyline sampling with clipping against the visible vertical range.
//
// Samples are grouped into runs. A run is a connected stretch of the graph;
// leaving the visible range below (or above, with `UpperExit::Reenter`) closes
// the current run so no segment is drawn across the gap.

use log::{debug, warn};

use crate::error::{PlotError, PlotResult};
use crate::geometry::{clamp, DataPoint};

/// Closed interval `[min, max]` on one axis of user space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

/// Vertical bounds outside which samples are never emitted directly.
pub type VisibleRange = Interval;

impl Interval {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidInterval { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn width(&self) -> f64 { self.max - self.min }

    /// Inclusive on both ends.
    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }

    /// Overlap of two intervals, `None` when they are disjoint.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(Interval { min, max })
    }
}

/// Visible rectangle in user space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: Interval,
    pub y: VisibleRange,
}

impl Bounds {
    pub fn new(x: Interval, y: VisibleRange) -> Self { Self { x, y } }
}

/// Distance between consecutive samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Explicit step in domain units.
    Fixed(f64),
    /// One sample per horizontal pixel of a plot this many pixels wide.
    PerPixel(f32),
}

impl Step {
    /// Resolve to a concrete step for `domain`.
    pub fn resolve(&self, domain: &Interval) -> PlotResult<f64> {
        match *self {
            Step::Fixed(h) => {
                if h.is_finite() && h > 0.0 { Ok(h) } else { Err(PlotError::InvalidStep(h)) }
            }
            Step::PerPixel(px) => {
                let px = px as f64;
                if !(px.is_finite() && px > 0.0) {
                    return Err(PlotError::InvalidStep(px));
                }
                // A single-point domain samples once whatever the step is.
                if domain.width() <= 0.0 { return Ok(1.0); }
                Step::Fixed(domain.width() / px).resolve(domain)
            }
        }
    }
}

/// What happens once the graph leaves the visible range through the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UpperExit {
    /// Emit the crossing and stop sampling altogether.
    #[default]
    Stop,
    /// Clip like the bottom edge: close the run and resume on re-entry.
    Reenter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerOptions {
    pub upper_exit: UpperExit,
    /// Upper bound on evaluations per call; guards against tiny steps.
    pub max_samples: usize,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self { upper_exit: UpperExit::Stop, max_samples: 1_000_000 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleKind {
    /// `f` evaluated on the step grid.
    Evaluated,
    /// Interpolated point where the graph meets a range boundary.
    Crossing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub kind: SampleKind,
}

impl Sample {
    pub const fn evaluated(x: f64, y: f64) -> Self { Self { x, y, kind: SampleKind::Evaluated } }
    pub const fn crossing(x: f64, y: f64) -> Self { Self { x, y, kind: SampleKind::Crossing } }
    pub fn point(&self) -> DataPoint { DataPoint::new(self.x, self.y) }
}

/// Output of [`sample`]: emitted samples grouped into connected runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledFunction {
    runs: Vec<Vec<Sample>>,
}

impl SampledFunction {
    pub fn runs(&self) -> &[Vec<Sample>] { &self.runs }

    /// All emitted samples in emission order.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.runs.iter().flatten()
    }

    pub fn len(&self) -> usize { self.runs.iter().map(Vec::len).sum() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn segment_count(&self) -> usize {
        self.runs.iter().map(|r| r.len().saturating_sub(1)).sum()
    }

    /// Line list (`p0 p1 p1 p2 ...`) of every run; always even length.
    pub fn segments(&self) -> Vec<Sample> {
        let mut out = Vec::with_capacity(self.segment_count() * 2);
        for run in &self.runs {
            out.extend(line_list(run));
        }
        out
    }
}

/// Expand a polyline into independent segments: `[a, b, c]` becomes `[a, b, b, c]`.
/// Fewer than two points yield nothing.
pub fn line_list<T: Copy>(points: &[T]) -> Vec<T> {
    if points.len() < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity((points.len() - 1) * 2);
    for pair in points.windows(2) {
        out.push(pair[0]);
        out.push(pair[1]);
    }
    out
}

/// x where the segment `a`-`b` reaches `target`, or `None` for a flat or
/// numerically degenerate segment.
pub fn interpolate_crossing(a: (f64, f64), b: (f64, f64), target: f64) -> Option<f64> {
    let (xa, ya) = a;
    let (xb, yb) = b;
    let dy = yb - ya;
    if dy == 0.0 {
        return None;
    }
    let x = xa + (xb - xa) * (target - ya) / dy;
    x.is_finite().then_some(x)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Edge {
    Bottom,
    Top,
}

#[derive(Default)]
struct RunBuilder {
    runs: Vec<Vec<Sample>>,
    current: Vec<Sample>,
}

impl RunBuilder {
    fn push(&mut self, s: Sample) { self.current.push(s); }
    fn is_open(&self) -> bool { !self.current.is_empty() }
    fn close(&mut self) {
        if self.is_open() {
            self.runs.push(std::mem::take(&mut self.current));
        }
    }
    fn finish(mut self) -> SampledFunction {
        self.close();
        SampledFunction { runs: self.runs }
    }
}

/// Sample `f` over `domain` (clamped to `bounds.x`) and clip against `bounds.y`.
///
/// Every emitted sample satisfies `bounds.y.min <= y <= bounds.y.max`. A value
/// exactly on a boundary counts as visible. Non-finite output from `f` fails
/// the whole call.
pub fn sample<F>(
    f: F,
    domain: Interval,
    bounds: &Bounds,
    step: Step,
    options: &SamplerOptions,
) -> PlotResult<SampledFunction>
where
    F: Fn(f64) -> f64,
{
    let Some(clamped) = domain.intersect(&bounds.x) else {
        step.resolve(&domain)?;
        debug!("domain [{}, {}] outside visible x range", domain.min, domain.max);
        return Ok(SampledFunction::default());
    };
    let domain = clamped;
    let step = step.resolve(&domain)?;

    // Slack so that e.g. [0, 1] with step 0.1 still lands on 1.0.
    let last = (domain.width() / step + 1e-9).floor();
    if last + 1.0 > options.max_samples as f64 {
        warn!("rejecting sample request: step {step} over width {}", domain.width());
        return Err(PlotError::TooManySamples { needed: last + 1.0, limit: options.max_samples });
    }
    let last = last as usize;

    let visible = bounds.y;
    let x_at = |i: usize| domain.min + step * i as f64;
    let eval = |x: f64| -> PlotResult<f64> {
        let y = f(x);
        if y.is_finite() { Ok(y) } else { Err(PlotError::NonFiniteSample { x, y }) }
    };
    let edge_crossing = |a: (f64, f64), b: (f64, f64), edge: Edge| -> PlotResult<Option<Sample>> {
        let target = match edge {
            Edge::Bottom => visible.min,
            Edge::Top => visible.max,
        };
        match interpolate_crossing(a, b, target) {
            Some(xc) => {
                let yc = clamp(eval(xc)?, visible.min, visible.max);
                Ok(Some(Sample::crossing(xc, yc)))
            }
            None => {
                debug!("skipping degenerate crossing between {a:?} and {b:?}");
                Ok(None)
            }
        }
    };

    let mut out = RunBuilder::default();
    let mut prev: Option<(f64, f64)> = None;
    let mut peeked: Option<f64> = None;

    for i in 0..=last {
        let x = x_at(i);
        let y = match peeked.take() {
            Some(y) => y,
            None => eval(x)?,
        };

        if y > visible.max && options.upper_exit == UpperExit::Stop {
            if let Some(p) = prev {
                if let Some(s) = edge_crossing(p, (x, y), Edge::Top)? {
                    out.push(s);
                }
            }
            break;
        }

        let edge = if y > visible.max {
            Some(Edge::Top)
        } else if y < visible.min {
            Some(Edge::Bottom)
        } else {
            None
        };

        match edge {
            None => out.push(Sample::evaluated(x, y)),
            Some(edge) => {
                if out.is_open() {
                    if let Some(p) = prev {
                        if let Some(s) = edge_crossing(p, (x, y), edge)? {
                            out.push(s);
                        }
                    }
                    out.close();
                }
                if i < last {
                    let xn = x_at(i + 1);
                    let yn = eval(xn)?;
                    peeked = Some(yn);
                    let reenters = match edge {
                        Edge::Bottom => yn >= visible.min,
                        Edge::Top => yn <= visible.max,
                    };
                    if reenters {
                        if let Some(s) = edge_crossing((x, y), (xn, yn), edge)? {
                            out.push(s);
                        }
                    }
                }
            }
        }
        prev = Some((x, y));
    }

    Ok(out.finish())
}
