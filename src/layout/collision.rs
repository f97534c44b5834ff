//! Label collision resolution.
//!
//! Two passes over every label of every series:
//! 1. clamp each box inside the plot bounds;
//! 2. walk labels from highest to lowest priority and hide any later label that
//!    intersects a still-visible earlier one.
//!
//! Priority is `font_size + hover + focus + end` with weights large enough that
//! hover beats focus beats "is an end label" beats font size.

use log::trace;

use super::types::{Label, RenderSeries};
use crate::config::LayoutConfig;
use crate::geometry::Bounds;

/// The owning series' state that feeds into label priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesFlags {
    pub is_hover: bool,
    pub is_focus: bool,
}

pub fn label_priority(label: &Label, flags: SeriesFlags, config: &LayoutConfig) -> f64 {
    let mut priority = label.font_size;
    if flags.is_hover {
        priority += config.hover_priority;
    }
    if flags.is_focus {
        priority += config.focus_priority;
    }
    if label.is_end() {
        priority += config.end_priority;
    }
    priority
}

/// Clamp then suppress, over the flattened labels of `series` (render order).
pub fn resolve_collisions(series: &mut [RenderSeries], bounds: Bounds, config: &LayoutConfig) {
    let flags: Vec<SeriesFlags> = series
        .iter()
        .map(|s| SeriesFlags { is_hover: s.is_hover, is_focus: s.is_focus })
        .collect();
    let mut labels: Vec<&mut Label> = series.iter_mut().flat_map(RenderSeries::labels_mut).collect();

    clamp_labels(&mut labels, bounds, config.clamp_tolerance);
    hide_colliding_labels(&mut labels, |l| {
        label_priority(l, flags.get(l.series).copied().unwrap_or_default(), config)
    });
}

/// Move boxes that stick out of `bounds` back inside. Sizes never change.
///
/// A box overhanging an edge by more than `tolerance` is flipped across by its
/// own extent; if that still leaves it outside it is pinned to the edge (the
/// low edge wins for boxes larger than the plot). Applying this twice is a no-op.
pub fn clamp_labels(labels: &mut [&mut Label], bounds: Bounds, tolerance: f64) {
    for label in labels.iter_mut() {
        let b = label.bounds;
        let x = clamp_axis(b.x, b.width, bounds.left(), bounds.right(), tolerance);
        let y = clamp_axis(b.y, b.height, bounds.top(), bounds.bottom(), tolerance);
        label.bounds = Bounds::new(x, y, b.width, b.height);
    }
}

fn clamp_axis(start: f64, len: f64, lo: f64, hi: f64, tolerance: f64) -> f64 {
    let mut s = start;
    if s < lo - tolerance {
        s += len;
    } else if s + len > hi + tolerance {
        s -= len;
    }
    if s + len > hi + tolerance {
        s = hi - len;
    }
    if s < lo - tolerance {
        s = lo;
    }
    s
}

/// Greedy priority suppression. Ties keep the incoming order (stable sort).
/// A hidden label never hides anything and is never revealed again.
pub fn hide_colliding_labels<F>(labels: &mut [&mut Label], priority: F)
where
    F: Fn(&Label) -> f64,
{
    let priorities: Vec<f64> = labels.iter().map(|l| priority(l)).collect();
    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| priorities[b].total_cmp(&priorities[a]));

    for (i, &hi) in order.iter().enumerate() {
        if labels[hi].is_hidden {
            continue;
        }
        for &lo in &order[i + 1..] {
            if labels[lo].is_hidden {
                continue;
            }
            if labels[hi].bounds.intersects(&labels[lo].bounds) {
                trace!("label {:?} hidden under {:?}", labels[lo].text, labels[hi].text);
                labels[lo].is_hidden = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector2;
    use crate::layout::types::LabelKind;

    fn label(text: &str, bounds: Bounds, font_size: f64) -> Label {
        Label {
            text: text.into(),
            font_size,
            pos: Vector2::ZERO,
            bounds,
            series: 0,
            kind: LabelKind::End,
            is_hidden: false,
        }
    }

    #[test]
    fn clamp_flips_box_across_right_edge() {
        let plot = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let mut l = label("x", Bounds::new(90.0, 10.0, 20.0, 10.0), 10.0);
        clamp_labels(&mut [&mut l], plot, 1.0);
        assert_eq!(l.bounds.x, 70.0);
        assert_eq!(l.bounds.y, 10.0);
    }

    #[test]
    fn clamp_pins_far_outside_box() {
        let plot = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let mut l = label("x", Bounds::new(-50.0, -40.0, 20.0, 10.0), 10.0);
        clamp_labels(&mut [&mut l], plot, 1.0);
        assert_eq!(l.bounds.x, 0.0);
        assert_eq!(l.bounds.y, 0.0);
    }

    #[test]
    fn clamp_tolerates_one_pixel() {
        let plot = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let mut l = label("x", Bounds::new(-0.5, 95.0, 20.0, 5.5), 10.0);
        clamp_labels(&mut [&mut l], plot, 1.0);
        assert_eq!(l.bounds, Bounds::new(-0.5, 95.0, 20.0, 5.5));
    }

    #[test]
    fn equal_priority_keeps_first() {
        let mut a = label("a", Bounds::new(0.0, 0.0, 10.0, 10.0), 10.0);
        let mut b = label("b", Bounds::new(5.0, 5.0, 10.0, 10.0), 10.0);
        hide_colliding_labels(&mut [&mut a, &mut b], |l| l.font_size);
        assert!(!a.is_hidden);
        assert!(b.is_hidden);
    }

    #[test]
    fn hidden_label_does_not_suppress_others() {
        // a hides b; b would have hidden c, but c only touches b.
        let mut a = label("a", Bounds::new(0.0, 0.0, 10.0, 10.0), 12.0);
        let mut b = label("b", Bounds::new(8.0, 0.0, 10.0, 10.0), 11.0);
        let mut c = label("c", Bounds::new(15.0, 0.0, 10.0, 10.0), 10.0);
        hide_colliding_labels(&mut [&mut a, &mut b, &mut c], |l| l.font_size);
        assert!(!a.is_hidden);
        assert!(b.is_hidden);
        assert!(!c.is_hidden);
    }
}
