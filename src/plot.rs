//! `ScatterPlot`: owns the layout inputs, tracks when they change, and
//! recomputes render data lazily.
//!
//! Inputs that invalidate the layout: the series list, the focus keys, the
//! hover key (via interaction) and the plot bounds.

use ahash::AHashSet;

use crate::config::LayoutConfig;
use crate::geometry::{Bounds, Vector2};
use crate::interaction::{InteractionController, ScatterCallbacks};
use crate::layout::{RenderData, compute_render_data};
use crate::models::{Dataset, Series};
use crate::scale::AxisScale;

#[derive(Debug, Clone)]
pub struct ScatterPlot {
    series: Vec<Series>,
    focus_keys: AHashSet<String>,
    bounds: Bounds,
    x_scale: AxisScale,
    y_scale: AxisScale,
    size_domain: (f64, f64),
    config: LayoutConfig,
    interaction: InteractionController,
    cache: Option<RenderData>,
}

impl ScatterPlot {
    /// `x_scale`/`y_scale` are re-projected onto `bounds` (y inverted: larger values higher).
    pub fn new(
        series: Vec<Series>,
        bounds: Bounds,
        x_scale: AxisScale,
        y_scale: AxisScale,
        size_domain: (f64, f64),
    ) -> Self {
        Self {
            series,
            focus_keys: AHashSet::new(),
            bounds,
            x_scale: x_scale.extend((bounds.left(), bounds.right())),
            y_scale: y_scale.extend((bounds.bottom(), bounds.top())),
            size_domain,
            config: LayoutConfig::default(),
            interaction: InteractionController::new(),
            cache: None,
        }
    }

    /// Scales, size domain and layout config taken from the dataset.
    pub fn from_dataset(dataset: &Dataset, bounds: Bounds) -> Self {
        let x = dataset.x_scale((bounds.left(), bounds.right()));
        let y = dataset.y_scale((bounds.bottom(), bounds.top()));
        Self::new(dataset.series.clone(), bounds, x, y, dataset.size_domain())
            .with_config(dataset.layout.clone())
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self.invalidate();
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn focus_keys(&self) -> &AHashSet<String> {
        &self.focus_keys
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn hover_key(&self) -> Option<&str> {
        self.interaction.hover_key()
    }

    pub fn is_dirty(&self) -> bool {
        self.cache.is_none()
    }

    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    pub fn set_series(&mut self, series: Vec<Series>) {
        if series != self.series {
            self.series = series;
            self.interaction.retain_valid(&self.series);
            self.invalidate();
        }
    }

    pub fn set_focus_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: AHashSet<String> = keys.into_iter().map(Into::into).collect();
        if keys != self.focus_keys {
            self.focus_keys = keys;
            self.invalidate();
        }
    }

    /// Resize the plot; both scales follow the new pixel rectangle.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.x_scale = self.x_scale.extend((bounds.left(), bounds.right()));
            self.y_scale = self.y_scale.extend((bounds.bottom(), bounds.top()));
            self.invalidate();
        }
    }

    /// Force the hover key (e.g. from a linked legend). Unknown keys clear it.
    pub fn set_hover_key(&mut self, key: Option<&str>) {
        let key = key.filter(|k| self.series.iter().any(|s| s.key == *k));
        if key != self.interaction.hover_key() {
            self.interaction.set_hover_key(key.map(str::to_string));
            self.invalidate();
        }
    }

    /// Current layout, recomputed if any input changed since the last call.
    pub fn render_data(&mut self) -> &RenderData {
        let data = self.take_layout();
        self.cache.insert(data)
    }

    /// Cached layout, or a fresh pass if the cache was invalidated.
    fn take_layout(&mut self) -> RenderData {
        self.cache.take().unwrap_or_else(|| {
            compute_render_data(
                &self.series,
                self.interaction.hover_key(),
                &self.focus_keys,
                self.bounds,
                &self.x_scale,
                &self.y_scale,
                self.size_domain,
                &self.config,
            )
        })
    }

    pub fn on_mouse_move(&mut self, pointer: Vector2) {
        self.interaction.on_mouse_move(pointer);
    }

    pub fn on_mouse_leave(&mut self) {
        self.interaction.on_mouse_leave();
    }

    pub fn on_click(&mut self) {
        self.interaction.on_click();
    }

    /// Display-refresh tick: apply coalesced pointer events. Returns true if the
    /// hover key changed (the next `render_data` call recomputes).
    pub fn on_frame<C>(&mut self, callbacks: &mut C) -> bool
    where
        C: ScatterCallbacks + ?Sized,
    {
        if !self.interaction.has_pending() {
            return false;
        }
        let render = self.take_layout();
        let changed = self.interaction.on_frame(&render, &self.series, callbacks);
        if !changed {
            self.cache = Some(render);
        }
        changed
    }
}
