//! Raw series → screen-space render series.

use ahash::AHashSet;
use log::warn;
use regex::Regex;
use std::f64::consts::PI;
use std::sync::LazyLock;

use super::types::{RenderSeries, RenderValue};
use crate::config::LayoutConfig;
use crate::geometry::Vector2;
use crate::models::Series;
use crate::scale::{LinearScale, ScaleMapping};
use crate::style::{Rgb8, assign_default_colors};

static UNSAFE_CSS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("static regex"));

/// CSS-safe identity for a series key, e.g. `"Côte d'Ivoire"` → `"key-C_te_d_Ivoire"`.
pub fn display_key(key: &str) -> String {
    format!("key-{}", UNSAFE_CSS.replace_all(key, "_"))
}

/// Map every series into pixel space and sort ascending by marker size.
///
/// Series without values are skipped. Labels are left empty; see `labels::synthesize_labels`.
#[allow(clippy::too_many_arguments)]
pub fn build_render_series<X, Y>(
    series: &[Series],
    x_scale: &X,
    y_scale: &Y,
    size_domain: (f64, f64),
    hover_key: Option<&str>,
    focus_keys: &AHashSet<String>,
    config: &LayoutConfig,
) -> Vec<RenderSeries>
where
    X: ScaleMapping,
    Y: ScaleMapping,
{
    let area_scale = LinearScale::new(size_domain, config.area_range).clamped();
    let font_scale = LinearScale::new(size_domain, config.font_range).clamped();
    let default_colors = assign_default_colors(series.iter().map(|s| s.key.as_str()), &config.palette);

    let mut out: Vec<RenderSeries> = series
        .iter()
        .filter(|s| !s.values.is_empty())
        .map(|s| {
            let values: Vec<RenderValue> = s
                .values
                .iter()
                .map(|v| {
                    let size = v.size_or_default();
                    let area = area_scale.place(size).max(0.0);
                    RenderValue {
                        position: Vector2::new(
                            x_scale.place(v.x).floor(),
                            y_scale.place(v.y).floor(),
                        ),
                        size: (area / PI).sqrt(),
                        font_size: font_scale.place(size),
                        year: v.year,
                    }
                })
                .collect();

            let is_hover = hover_key == Some(s.key.as_str());
            let is_focus = focus_keys.contains(&s.key);
            let color = series_color(s, &default_colors);

            RenderSeries {
                key: s.key.clone(),
                display_key: display_key(&s.key),
                label: s.label.clone(),
                color,
                size: values.last().map(|v| v.size).unwrap_or(0.0),
                values,
                is_hover,
                is_focus,
                is_foreground: is_hover || is_focus,
                offset_vector: Vector2::ZERO,
                start_label: None,
                mid_labels: Vec::new(),
                end_label: None,
            }
        })
        .collect();

    // Stable: equal sizes keep input order.
    out.sort_by(|a, b| a.size.total_cmp(&b.size));
    out
}

fn series_color(s: &Series, defaults: &ahash::AHashMap<String, Rgb8>) -> Rgb8 {
    let fallback = || defaults.get(&s.key).copied().unwrap_or(Rgb8::new(0, 0, 0));
    match s.color.as_deref() {
        Some(hex) => hex.parse().unwrap_or_else(|e| {
            warn!("series {:?}: {e}; using palette color", s.key);
            fallback()
        }),
        None => fallback(),
    }
}
