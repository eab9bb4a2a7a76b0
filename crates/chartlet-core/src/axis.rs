// File: crates/chartlet-core/src/axis.rs
// Summary: Axis model with a caption and its visible data range.

use crate::error::PlotResult;
use crate::sampler::Interval;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis without a caption.
    pub fn unlabeled(min: f64, max: f64) -> Self {
        Self::new(String::new(), min, max)
    }

    /// Visible range, validated.
    pub fn range(&self) -> PlotResult<Interval> {
        Interval::new(self.min, self.max)
    }
}
