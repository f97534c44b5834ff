use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::scale::{AxisScale, ScaleType};

/// One time sample of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub x: f64,
    pub y: f64,
    /// Magnitude driving marker area; `None` means 1.
    #[serde(default)]
    pub size: Option<f64>,
    pub year: i32,
}

impl Value {
    pub fn new(x: f64, y: f64, size: Option<f64>, year: i32) -> Self {
        Self { x, y, size, year }
    }

    #[inline]
    pub fn size_or_default(&self) -> f64 {
        self.size.unwrap_or(1.0)
    }
}

/// One entity's ordered samples. `values` are in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub label: String,
    /// Hex color; absent or unparsable colors fall back to the palette.
    #[serde(default)]
    pub color: Option<String>,
    pub values: Vec<Value>,
}

impl Series {
    pub fn new(key: impl Into<String>, label: impl Into<String>, values: Vec<Value>) -> Self {
        Self { key: key.into(), label: label.into(), color: None, values }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Optional explicit axis for a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default, rename = "type")]
    pub scale_type: ScaleType,
    pub min: f64,
    pub max: f64,
}

/// On-disk dataset used by the CLI: series plus optional axes, size domain and layout tweaks.
///
/// ```
/// let ds = scatterplot_rs::Dataset::from_json_str(r#"{
///     "series": [{ "key": "DEU", "label": "Germany",
///                  "values": [{ "x": 1.0, "y": 2.0, "year": 2000 }] }]
/// }"#)?;
/// assert_eq!(ds.series.len(), 1);
/// # Ok::<(), scatterplot_rs::ScatterError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub series: Vec<Series>,
    #[serde(default)]
    pub x_axis: Option<AxisConfig>,
    #[serde(default)]
    pub y_axis: Option<AxisConfig>,
    #[serde(default)]
    pub size_domain: Option<(f64, f64)>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Dataset {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn values(&self) -> impl Iterator<Item = &Value> {
        self.series.iter().flat_map(|s| s.values.iter())
    }

    /// Explicit size domain, or the min/max of all sizes (absent sizes count as 1).
    pub fn size_domain(&self) -> (f64, f64) {
        self.size_domain
            .or_else(|| extent(self.values().map(Value::size_or_default)))
            .unwrap_or((1.0, 1.0))
    }

    /// X scale onto `range`, from `x_axis` or the data extent.
    pub fn x_scale(&self, range: (f64, f64)) -> AxisScale {
        axis_scale(self.x_axis, self.values().map(|v| v.x), range)
    }

    /// Y scale onto `range` (pass `(bottom, top)` so larger values sit higher).
    pub fn y_scale(&self, range: (f64, f64)) -> AxisScale {
        axis_scale(self.y_axis, self.values().map(|v| v.y), range)
    }
}

fn axis_scale(
    axis: Option<AxisConfig>,
    data: impl Iterator<Item = f64>,
    range: (f64, f64),
) -> AxisScale {
    match axis {
        Some(a) => AxisScale::new(a.scale_type, (a.min, a.max), range),
        None => AxisScale::linear(extent(data).unwrap_or((0.0, 1.0)), range),
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
