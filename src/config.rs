//! Layout constants, overridable through the dataset's `layout` object.

use serde::{Deserialize, Serialize};

use crate::style::{OFFICE10, Rgb8};

/// Tunables for marker sizing, label placement and collision priority.
///
/// Every field has a default, so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Marker area in square pixels, mapped from the size domain.
    pub area_range: (f64, f64),
    /// Per-value font size, mapped from the size domain.
    pub font_range: (f64, f64),
    /// Distance between a point and its start/mid/end label.
    pub label_offset: f64,
    /// Year label font size for foreground series.
    pub year_font_size: f64,
    /// Year label font size in subtle-foreground mode.
    pub subtle_year_font_size: f64,
    /// End label font multiplier for background series.
    pub end_emphasis: f64,
    /// End label font multiplier for foreground series.
    pub foreground_end_emphasis: f64,
    /// End label font multiplier for foreground series in subtle mode.
    pub subtle_end_emphasis: f64,
    pub hover_priority: f64,
    pub focus_priority: f64,
    pub end_priority: f64,
    /// Overhang allowed before a label is pushed back inside the plot.
    pub clamp_tolerance: f64,
    /// Default series colors, assigned by sorted key order.
    pub palette: Vec<Rgb8>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            area_range: (10.0, 1000.0),
            font_range: (10.0, 13.0),
            label_offset: 5.0,
            year_font_size: 9.0,
            subtle_year_font_size: 8.0,
            end_emphasis: 1.1,
            foreground_end_emphasis: 1.3,
            subtle_end_emphasis: 1.2,
            hover_priority: 10000.0,
            focus_priority: 1000.0,
            end_priority: 100.0,
            clamp_tolerance: 1.0,
            palette: OFFICE10.to_vec(),
        }
    }
}
