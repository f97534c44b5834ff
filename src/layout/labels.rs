//! Label synthesis: start year, mid years and the end (entity name) label per series.
//!
//! Every label is pushed off its point along a direction derived from the
//! neighbouring segments, so the text sits outside the path.

use super::types::{Label, LabelKind, RenderSeries};
use crate::config::LayoutConfig;
use crate::geometry::{Bounds, Vector2};

/// Fill in labels for every series. `series` must already be in final render order.
pub fn synthesize_labels(series: &mut [RenderSeries], is_subtle_foreground: bool, config: &LayoutConfig) {
    for (idx, s) in series.iter_mut().enumerate() {
        s.start_label = make_start_label(idx, s, is_subtle_foreground, config);
        s.mid_labels = make_mid_labels(idx, s, is_subtle_foreground, config);
        s.end_label = make_end_label(idx, s, is_subtle_foreground, config);
    }
}

fn year_font_size(is_subtle_foreground: bool, config: &LayoutConfig) -> f64 {
    if is_subtle_foreground {
        config.subtle_year_font_size
    } else {
        config.year_font_size
    }
}

/// Text box at `pos`, shifted so it doesn't overhang its anchor: left of the
/// anchor moves the box left by its width, below the anchor moves it down half a line.
fn nudged_bounds(text: &str, pos: Vector2, anchor: Vector2, font_size: f64) -> Bounds {
    let mut bounds = Bounds::for_text(text, pos, font_size);
    if pos.x < anchor.x {
        bounds = bounds.with_x(bounds.x - bounds.width);
    }
    if pos.y > anchor.y {
        bounds = bounds.with_y(bounds.y + bounds.height / 2.0);
    }
    bounds
}

fn make_start_label(
    idx: usize,
    series: &RenderSeries,
    is_subtle_foreground: bool,
    config: &LayoutConfig,
) -> Option<Label> {
    if !series.is_foreground || series.values.len() < 2 {
        return None;
    }
    let first = series.values[0];
    let next = series.values[1];
    let font_size = year_font_size(is_subtle_foreground, config);
    let direction = next.position.subtract(first.position).normalize();
    let pos = first.position.subtract(direction.times(config.label_offset));
    let text = first.year.to_string();

    Some(Label {
        bounds: nudged_bounds(&text, pos, first.position, font_size),
        text,
        font_size,
        pos: first.position,
        series: idx,
        kind: LabelKind::Start,
        is_hidden: false,
    })
}

fn make_mid_labels(
    idx: usize,
    series: &RenderSeries,
    is_subtle_foreground: bool,
    config: &LayoutConfig,
) -> Vec<Label> {
    let n = series.values.len();
    if !series.is_foreground || n < 3 || !(series.is_hover || !is_subtle_foreground) {
        return Vec::new();
    }
    let font_size = year_font_size(is_subtle_foreground, config);

    (1..n - 1)
        .map(|i| {
            let prev = series.values[i - 1].position;
            let here = series.values[i];
            let next = series.values[i + 1].position;

            let incoming = here.position.subtract(prev);
            let outgoing = next.subtract(here.position);
            let [a, b] = incoming.add(outgoing).normalize().normals();
            let candidates = [a, b].map(|n| here.position.add(n.times(config.label_offset)));

            // Prefer the side farther from both neighbours; first candidate on ties.
            let spread = |c: Vector2| Vector2::distance(c, prev) + Vector2::distance(c, next);
            let pos = if spread(candidates[1]) > spread(candidates[0]) {
                candidates[1]
            } else {
                candidates[0]
            };
            let text = here.year.to_string();

            Label {
                bounds: nudged_bounds(&text, pos, here.position, font_size),
                text,
                font_size,
                pos: here.position,
                series: idx,
                kind: LabelKind::Mid(i),
                is_hidden: false,
            }
        })
        .collect()
}

fn make_end_label(
    idx: usize,
    series: &mut RenderSeries,
    is_subtle_foreground: bool,
    config: &LayoutConfig,
) -> Option<Label> {
    let last = *series.values.last()?;
    let n = series.values.len();

    let emphasis = match (series.is_foreground, is_subtle_foreground) {
        (false, _) => config.end_emphasis,
        (true, false) => config.foreground_end_emphasis,
        (true, true) => config.subtle_end_emphasis,
    };
    let font_size = last.font_size * emphasis;

    let direction = if n > 1 {
        last.position.subtract(series.values[n - 2].position).normalize()
    } else {
        Vector2::UP
    };
    series.offset_vector = direction;

    let distance = if n == 1 { last.size + 1.0 } else { config.label_offset };
    let pos = last.position.add(direction.times(distance));

    Some(Label {
        bounds: nudged_bounds(&series.label, pos, last.position, font_size),
        text: series.label.clone(),
        font_size,
        pos: last.position,
        series: idx,
        kind: LabelKind::End,
        is_hidden: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::RenderValue;
    use crate::style::Rgb8;

    fn series(points: &[(f64, f64)], foreground: bool) -> RenderSeries {
        RenderSeries {
            key: "k".into(),
            display_key: "key-k".into(),
            label: "Name".into(),
            color: Rgb8::new(0, 0, 0),
            size: 3.0,
            values: points
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| RenderValue {
                    position: Vector2::new(x, y),
                    size: 3.0,
                    font_size: 10.0,
                    year: 2000 + i as i32,
                })
                .collect(),
            is_hover: false,
            is_focus: foreground,
            is_foreground: foreground,
            offset_vector: Vector2::ZERO,
            start_label: None,
            mid_labels: Vec::new(),
            end_label: None,
        }
    }

    #[test]
    fn start_label_is_pushed_backwards() {
        let cfg = LayoutConfig::default();
        let s = series(&[(100.0, 100.0), (200.0, 100.0)], true);
        let l = make_start_label(0, &s, false, &cfg).unwrap();
        assert_eq!(l.text, "2000");
        assert_eq!(l.pos, Vector2::new(100.0, 100.0));
        // Label pos is 5px left of the point, so the box ends there.
        assert!((l.bounds.right() - 95.0).abs() < 1e-9);
    }

    #[test]
    fn mid_label_picks_outer_side_of_a_bend() {
        let cfg = LayoutConfig::default();
        // Path goes right then down: the bend's outside is up-right.
        let s = series(&[(0.0, 100.0), (100.0, 100.0), (100.0, 200.0)], true);
        let mids = make_mid_labels(0, &s, false, &cfg);
        assert_eq!(mids.len(), 1);
        assert_eq!(mids[0].kind, LabelKind::Mid(1));
        let b = mids[0].bounds;
        // Offset (+3.5, -3.5): box starts right of the point and sits above it.
        assert!(b.left() > 100.0);
        assert!(b.bottom() < 100.0);
    }

    #[test]
    fn end_label_follows_direction_of_travel() {
        let cfg = LayoutConfig::default();
        let mut s = series(&[(0.0, 50.0), (100.0, 50.0)], false);
        let l = make_end_label(0, &mut s, false, &cfg).unwrap();
        assert_eq!(s.offset_vector, Vector2::new(1.0, 0.0));
        assert!((l.bounds.left() - 105.0).abs() < 1e-9);
        assert!((l.font_size - 11.0).abs() < 1e-9);
    }

    #[test]
    fn single_value_end_label_clears_marker() {
        let cfg = LayoutConfig::default();
        let mut s = series(&[(50.0, 50.0)], false);
        let l = make_end_label(0, &mut s, false, &cfg).unwrap();
        assert_eq!(s.offset_vector, Vector2::UP);
        // radius 3 + 1 above the point; baseline there.
        assert!((l.bounds.bottom() - 46.0).abs() < 1e-9);
    }
}
