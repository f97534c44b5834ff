//! Data → pixel mappings.
//!
//! The layout engine only needs `place`; axis construction (tick selection,
//! domain padding) is the caller's business. `AxisScale` is a small ready-made
//! implementation for callers that don't bring their own.

use serde::{Deserialize, Serialize};

/// Anything that can place a data value on a pixel axis.
pub trait ScaleMapping {
    fn place(&self, value: f64) -> f64;
}

impl<F: Fn(f64) -> f64> ScaleMapping for F {
    fn place(&self, value: f64) -> f64 {
        self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Linear,
    Log,
}

/// Axis scale: data domain mapped onto a pixel range.
///
/// The range may be inverted (e.g. `(bottom, top)` for a y axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub scale_type: ScaleType,
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl AxisScale {
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { scale_type: ScaleType::Linear, domain, range }
    }

    /// Log10 scale. Non-positive domain ends are lifted to a tiny positive value.
    pub fn log(domain: (f64, f64), range: (f64, f64)) -> Self {
        let eps = 1e-12;
        let lo = domain.0.max(eps);
        let hi = if domain.1 <= lo { lo * 10.0 } else { domain.1 };
        Self { scale_type: ScaleType::Log, domain: (lo, hi), range }
    }

    pub fn new(scale_type: ScaleType, domain: (f64, f64), range: (f64, f64)) -> Self {
        match scale_type {
            ScaleType::Linear => Self::linear(domain, range),
            ScaleType::Log => Self::log(domain, range),
        }
    }

    /// Same scale projected onto a new pixel range.
    pub fn extend(&self, range: (f64, f64)) -> Self {
        Self { range, ..*self }
    }
}

impl ScaleMapping for AxisScale {
    fn place(&self, value: f64) -> f64 {
        let (d0, d1, v) = match self.scale_type {
            ScaleType::Linear => (self.domain.0, self.domain.1, value),
            ScaleType::Log => (
                self.domain.0.log10(),
                self.domain.1.log10(),
                value.max(1e-12).log10(),
            ),
        };
        interpolate(d0, d1, self.range, v)
    }
}

/// Linear scale between two intervals, optionally clamped to its range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range, clamp: false }
    }

    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }
}

impl ScaleMapping for LinearScale {
    fn place(&self, value: f64) -> f64 {
        let v = if self.clamp {
            let (lo, hi) = ordered(self.domain);
            value.clamp(lo, hi)
        } else {
            value
        };
        interpolate(self.domain.0, self.domain.1, self.range, v)
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

// A collapsed domain maps everything to the middle of the range.
fn interpolate(d0: f64, d1: f64, range: (f64, f64), v: f64) -> f64 {
    let span = d1 - d0;
    let t = if span.abs() < f64::EPSILON { 0.5 } else { (v - d0) / span };
    range.0 + t * (range.1 - range.0)
}
