// File: crates/chartlet-core/src/error.rs
// Summary: Error type shared by the sampler, the draw queue and renderer backends.

use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    #[error("sampling step must be finite and > 0, got {0}")]
    InvalidStep(f64),

    #[error("invalid interval [{min}, {max}]")]
    InvalidInterval { min: f64, max: f64 },

    #[error("function produced a non-finite value {y} at x = {x}")]
    NonFiniteSample { x: f64, y: f64 },

    #[error("sampling would need {needed} samples, limit is {limit}")]
    TooManySamples { needed: f64, limit: usize },

    #[error("render backend error: {0}")]
    Render(String),
}

impl PlotError {
    /// Wrap any displayable backend failure.
    pub fn render(msg: impl std::fmt::Display) -> Self {
        PlotError::Render(msg.to_string())
    }
}
