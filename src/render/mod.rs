//! Presentation: turn resolved render data into ordered drawing primitives.
//!
//! Z-order is fixed: background marks, background labels, foreground marks,
//! foreground labels. Within each layer series follow render order (ascending
//! size), so larger markers land on top. Hidden labels are never emitted.
//!
//! `svg` paints the primitives with plotters.

pub mod svg;

use serde::Serialize;

use crate::geometry::{Bounds, Vector2, estimate_text_width};
use crate::layout::{Label, LabelKind, RenderData, RenderSeries};
use crate::style::{LABEL_DARK, LABEL_GREY, LAYER_GREY, Rgb8};

const START_MARKER_RADIUS: f64 = 1.5;
const BACKGROUND_LINE_WIDTH: f64 = 1.0;
const FOREGROUND_LINE_WIDTH: f64 = 2.0;
const ARROW_SIZE: f64 = 4.0;
const RING_GAP: f64 = 3.0;
const NO_DATA_FONT_SIZE: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawCommand {
    Circle { center: Vector2, radius: f64, fill: Rgb8 },
    Ring { center: Vector2, radius: f64, stroke: Rgb8, width: f64 },
    Polyline { points: Vec<Vector2>, stroke: Rgb8, width: f64 },
    /// Filled triangle whose tip sits at `tip`, pointing along `angle_deg`.
    Arrow { tip: Vector2, angle_deg: f64, size: f64, fill: Rgb8 },
    /// Single line of text; `top_left` is the corner of its box.
    Text { text: String, top_left: Vector2, font_size: f64, fill: Rgb8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Background,
    BackgroundLabels,
    Foreground,
    ForegroundLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawLayer {
    pub kind: LayerKind,
    pub commands: Vec<DrawCommand>,
}

/// The four layers, back to front. With no series, the background layer holds a "No data" text.
pub fn draw_layers(render: &RenderData) -> Vec<DrawLayer> {
    let mut background = Vec::new();
    let mut background_labels = Vec::new();
    let mut foreground = Vec::new();
    let mut foreground_labels = Vec::new();

    if render.is_empty() {
        background.push(no_data(render.bounds));
    }

    for s in render.background() {
        background_series(s, render.is_layer_mode, &mut background);
        background_labels.extend(s.visible_labels().map(|l| label_text(l, LABEL_GREY)));
    }
    for s in render.foreground() {
        foreground_series(s, &mut foreground);
        foreground_labels.extend(s.visible_labels().map(|l| {
            let fill = if l.kind == LabelKind::End { s.color } else { LABEL_DARK };
            label_text(l, fill)
        }));
    }

    vec![
        DrawLayer { kind: LayerKind::Background, commands: background },
        DrawLayer { kind: LayerKind::BackgroundLabels, commands: background_labels },
        DrawLayer { kind: LayerKind::Foreground, commands: foreground },
        DrawLayer { kind: LayerKind::ForegroundLabels, commands: foreground_labels },
    ]
}

/// All commands flattened in paint order.
pub fn draw_commands(render: &RenderData) -> Vec<DrawCommand> {
    draw_layers(render).into_iter().flat_map(|l| l.commands).collect()
}

fn background_series(s: &RenderSeries, is_layer_mode: bool, out: &mut Vec<DrawCommand>) {
    let color = if is_layer_mode { LAYER_GREY } else { s.color };
    match s.values.as_slice() {
        [] => {}
        [only] => out.push(DrawCommand::Circle { center: only.position, radius: only.size, fill: color }),
        [first, .., last] => {
            out.push(DrawCommand::Circle {
                center: first.position,
                radius: START_MARKER_RADIUS,
                fill: color,
            });
            out.push(DrawCommand::Polyline {
                points: s.values.iter().map(|v| v.position).collect(),
                stroke: color,
                width: BACKGROUND_LINE_WIDTH,
            });
            out.push(arrow(s, last.position, color));
        }
    }
}

fn foreground_series(s: &RenderSeries, out: &mut Vec<DrawCommand>) {
    match s.values.as_slice() {
        [] => {}
        [only] => {
            out.push(DrawCommand::Circle { center: only.position, radius: only.size, fill: s.color });
            if s.is_focus {
                out.push(ring(only.position, only.size, s.color));
            }
        }
        [first, .., last] => {
            out.push(DrawCommand::Polyline {
                points: s.values.iter().map(|v| v.position).collect(),
                stroke: s.color,
                width: FOREGROUND_LINE_WIDTH,
            });
            for v in &s.values {
                out.push(DrawCommand::Circle { center: v.position, radius: v.size, fill: s.color });
            }
            out.push(arrow(s, last.position, s.color));
            if s.is_focus {
                out.push(ring(first.position, first.size, s.color));
            }
        }
    }
}

fn arrow(s: &RenderSeries, tip: Vector2, fill: Rgb8) -> DrawCommand {
    DrawCommand::Arrow { tip, angle_deg: s.offset_vector.angle_deg(), size: ARROW_SIZE, fill }
}

fn ring(center: Vector2, radius: f64, stroke: Rgb8) -> DrawCommand {
    DrawCommand::Ring { center, radius: radius + RING_GAP, stroke, width: 1.0 }
}

fn label_text(label: &Label, fill: Rgb8) -> DrawCommand {
    DrawCommand::Text {
        text: label.text.clone(),
        top_left: Vector2::new(label.bounds.x, label.bounds.y),
        font_size: label.font_size,
        fill,
    }
}

fn no_data(bounds: Bounds) -> DrawCommand {
    let text = "No data";
    let c = bounds.center();
    let w = estimate_text_width(text, NO_DATA_FONT_SIZE);
    DrawCommand::Text {
        text: text.to_string(),
        top_left: Vector2::new(c.x - w / 2.0, c.y - NO_DATA_FONT_SIZE / 2.0),
        font_size: NO_DATA_FONT_SIZE,
        fill: LABEL_GREY,
    }
}
