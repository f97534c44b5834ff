//! Layout pass: series → render series → labels → collision-resolved render data.
//!
//! - `builder`: pixel positions, marker radii, font sizes, z-order
//! - `labels`: start/mid/end label synthesis
//! - `collision`: bounds clamp + priority suppression
//!
//! `compute_render_data` is pure: the same inputs always give the same output,
//! and nothing is carried over between passes. Deciding *when* to call it is
//! up to the caller (see `plot::ScatterPlot`).

pub mod builder;
pub mod collision;
pub mod labels;
pub mod types;

pub use types::{Label, LabelKind, RenderData, RenderSeries, RenderValue};

use ahash::AHashSet;
use log::debug;

use crate::config::LayoutConfig;
use crate::geometry::Bounds;
use crate::models::Series;
use crate::scale::ScaleMapping;

/// Run one full layout pass.
///
/// `x_scale`/`y_scale` must already map onto the pixel rectangle `bounds`.
#[allow(clippy::too_many_arguments)]
pub fn compute_render_data<X, Y>(
    series: &[Series],
    hover_key: Option<&str>,
    focus_keys: &AHashSet<String>,
    bounds: Bounds,
    x_scale: &X,
    y_scale: &Y,
    size_domain: (f64, f64),
    config: &LayoutConfig,
) -> RenderData
where
    X: ScaleMapping,
    Y: ScaleMapping,
{
    let mut render = builder::build_render_series(
        series,
        x_scale,
        y_scale,
        size_domain,
        hover_key,
        focus_keys,
        config,
    );

    let is_connected = render.iter().any(|s| s.values.len() > 1);
    // Keyed on the whole dataset: one long series elsewhere is enough to switch
    // every focused series into the reduced mode.
    let is_subtle_foreground = focus_keys.len() > 1 && render.iter().any(|s| s.values.len() > 2);
    let is_layer_mode = render.iter().any(|s| s.is_foreground);

    labels::synthesize_labels(&mut render, is_subtle_foreground, config);
    collision::resolve_collisions(&mut render, bounds, config);

    let mut colors_in_use = Vec::new();
    for s in &render {
        if !colors_in_use.contains(&s.color) {
            colors_in_use.push(s.color);
        }
    }

    let data = RenderData {
        series: render,
        bounds,
        is_connected,
        is_layer_mode,
        is_subtle_foreground,
        colors_in_use,
    };

    debug!(
        "layout: {} series, {} labels ({} hidden), connected={} layer={} subtle={}",
        data.series.len(),
        data.labels().count(),
        data.labels().filter(|l| l.is_hidden).count(),
        data.is_connected,
        data.is_layer_mode,
        data.is_subtle_foreground,
    );
    data
}
