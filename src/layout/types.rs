//! Per-pass render records produced by `compute_render_data`.

use serde::Serialize;

use crate::geometry::{Bounds, Vector2};
use crate::style::Rgb8;

/// One value in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderValue {
    /// Floored pixel position.
    pub position: Vector2,
    /// Marker radius in pixels.
    pub size: f64,
    pub font_size: f64,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum LabelKind {
    /// Year of the first value.
    Start,
    /// Year of the interior value at this index into `RenderSeries::values`.
    Mid(usize),
    /// Entity name at the last value.
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub font_size: f64,
    /// The point this label annotates.
    pub pos: Vector2,
    pub bounds: Bounds,
    /// Index of the owning series in `RenderData::series`.
    pub series: usize,
    pub kind: LabelKind,
    pub is_hidden: bool,
}

impl Label {
    pub fn is_end(&self) -> bool {
        self.kind == LabelKind::End
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSeries {
    pub key: String,
    /// CSS-safe identity for the drawing target.
    pub display_key: String,
    pub label: String,
    pub color: Rgb8,
    /// Radius of the last value; drives z-order.
    pub size: f64,
    pub values: Vec<RenderValue>,
    pub is_hover: bool,
    pub is_focus: bool,
    pub is_foreground: bool,
    /// Direction of travel at the end of the series (up for a single value).
    pub offset_vector: Vector2,
    pub start_label: Option<Label>,
    pub mid_labels: Vec<Label>,
    pub end_label: Option<Label>,
}

impl RenderSeries {
    /// Labels in flatten order: start, mids, end.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.start_label
            .iter()
            .chain(self.mid_labels.iter())
            .chain(self.end_label.iter())
    }

    pub fn labels_mut(&mut self) -> impl Iterator<Item = &mut Label> {
        self.start_label
            .iter_mut()
            .chain(self.mid_labels.iter_mut())
            .chain(self.end_label.iter_mut())
    }

    pub fn visible_labels(&self) -> impl Iterator<Item = &Label> {
        self.labels().filter(|l| !l.is_hidden)
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderData {
    /// Ascending by `size`; labels refer to series by index into this list.
    pub series: Vec<RenderSeries>,
    pub bounds: Bounds,
    /// Any series has more than one value.
    pub is_connected: bool,
    /// Some series is hovered or focused; everything else is dimmed.
    pub is_layer_mode: bool,
    /// Several focused keys with multi-value series: fewer labels, smaller fonts.
    pub is_subtle_foreground: bool,
    /// Distinct series colors in render order.
    pub colors_in_use: Vec<Rgb8>,
}

impl RenderData {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn background(&self) -> impl Iterator<Item = &RenderSeries> {
        self.series.iter().filter(|s| !s.is_foreground)
    }

    pub fn foreground(&self) -> impl Iterator<Item = &RenderSeries> {
        self.series.iter().filter(|s| s.is_foreground)
    }

    /// All labels in flatten order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.series.iter().flat_map(RenderSeries::labels)
    }

    pub fn get(&self, key: &str) -> Option<&RenderSeries> {
        self.series.iter().find(|s| s.key == key)
    }
}
