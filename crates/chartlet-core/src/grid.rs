// File: crates/chartlet-core/src/grid.rs
// Summary: Tick layout helpers for axis labels.

use crate::sampler::Interval;

/// `count` evenly spaced values from `start` to `end`, both ends hit exactly.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count as f64 - 1.0);
            (0..count)
                .map(|i| if i + 1 == count { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Tick values across `range`. Values within a rounding error of zero snap to zero
/// so symmetric ranges label their midpoint `0` rather than `-0` or `1e-17`.
pub fn axis_ticks(range: &Interval, count: usize) -> Vec<f64> {
    let eps = range.width().abs() * 1e-9;
    linspace(range.min, range.max, count)
        .into_iter()
        .map(|v| if v.abs() <= eps { 0.0 } else { v })
        .collect()
}
