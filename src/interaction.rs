//! Pointer interaction: nearest-series hover, click-to-select, and frame coalescing.
//!
//! Handlers don't act immediately. `on_mouse_move`, `on_mouse_leave` and
//! `on_click` only record the event; the host calls `on_frame` once per
//! displayed frame and only the latest move/leave since the previous frame is
//! applied. A click is applied after that, so it sees the hover key the same
//! frame resolved.

use log::debug;

use crate::geometry::Vector2;
use crate::layout::{RenderData, RenderSeries};
use crate::models::Series;

/// Host hooks. All methods default to no-ops.
pub trait ScatterCallbacks {
    fn on_select_entity(&mut self, _key: &str) {}
    fn on_mouse_over(&mut self, _series: &Series) {}
    fn on_mouse_leave(&mut self) {}
}

impl ScatterCallbacks for () {}

/// Single-slot, latest-wins scheduler: scheduling replaces anything not yet taken.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameScheduler<T> {
    pending: Option<T>,
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `item` for the next frame. Returns true if it superseded an earlier item.
    pub fn schedule(&mut self, item: T) -> bool {
        self.pending.replace(item).is_some()
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerEvent {
    Move(Vector2),
    Leave,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionController {
    hover_key: Option<String>,
    pointer: FrameScheduler<PointerEvent>,
    click: FrameScheduler<()>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover_key(&self) -> Option<&str> {
        self.hover_key.as_deref()
    }

    /// Set the hover key directly, bypassing pointer resolution.
    pub fn set_hover_key(&mut self, key: Option<String>) {
        self.hover_key = key;
    }

    pub fn on_mouse_move(&mut self, pointer: Vector2) {
        self.pointer.schedule(PointerEvent::Move(pointer));
    }

    pub fn on_mouse_leave(&mut self) {
        self.pointer.schedule(PointerEvent::Leave);
    }

    pub fn on_click(&mut self) {
        self.click.schedule(());
    }

    pub fn has_pending(&self) -> bool {
        self.pointer.is_pending() || self.click.is_pending()
    }

    /// Apply whatever was scheduled since the last frame.
    ///
    /// `render` is the current layout and `series` the input it was built from
    /// (used to hand the raw series to `on_mouse_over`). Returns true when the
    /// hover key changed, i.e. the layout must be recomputed.
    pub fn on_frame<C>(&mut self, render: &RenderData, series: &[Series], callbacks: &mut C) -> bool
    where
        C: ScatterCallbacks + ?Sized,
    {
        let before = self.hover_key.clone();

        match self.pointer.take() {
            Some(PointerEvent::Move(pointer)) => {
                self.hover_key = closest_series(render, pointer).map(|s| s.key.clone());
                if let Some(key) = self.hover_key.as_deref()
                    && let Some(raw) = series.iter().find(|s| s.key == key)
                {
                    callbacks.on_mouse_over(raw);
                }
            }
            Some(PointerEvent::Leave) => {
                self.hover_key = None;
                callbacks.on_mouse_leave();
            }
            None => {}
        }

        if self.click.take().is_some()
            && let Some(key) = self.hover_key.as_deref()
        {
            callbacks.on_select_entity(key);
        }

        let changed = before != self.hover_key;
        if changed {
            debug!("hover: {:?} -> {:?}", before, self.hover_key);
        }
        changed
    }

    /// Drop a hover key whose series is gone. Returns true if it was cleared.
    pub fn retain_valid(&mut self, series: &[Series]) -> bool {
        match self.hover_key.as_deref() {
            Some(key) if !series.iter().any(|s| s.key == key) => {
                self.hover_key = None;
                true
            }
            _ => false,
        }
    }
}

/// Squared distance from `pointer` to a series.
///
/// In a connected chart multi-value series are measured to their nearest
/// segment; otherwise (and for lone points) to their nearest value.
pub fn series_distance_sq(series: &RenderSeries, pointer: Vector2, is_connected: bool) -> f64 {
    if is_connected && series.values.len() > 1 {
        series
            .values
            .windows(2)
            .map(|w| Vector2::distance_from_point_to_segment_sq(pointer, w[0].position, w[1].position))
            .fold(f64::INFINITY, f64::min)
    } else {
        series
            .values
            .iter()
            .map(|v| Vector2::distance_sq(v.position, pointer))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Series nearest to `pointer`; the first one in render order wins ties.
pub fn closest_series(render: &RenderData, pointer: Vector2) -> Option<&RenderSeries> {
    let mut best: Option<(&RenderSeries, f64)> = None;
    for s in &render.series {
        let d = series_distance_sq(s, pointer, render.is_connected);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((s, d));
        }
    }
    best.map(|(s, _)| s)
}
