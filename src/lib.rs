//! scatterplot_rs
//!
//! Layout engine for an interactive scatterplot layer: markers and trajectory
//! lines per entity, year labels along each trajectory, an entity-name label at
//! each endpoint, and deterministic priority-based label collision resolution.
//! Pointer interaction (hover/click) picks the nearest series.
//!
//! ### Features
//! - Pure layout pass: `layout::compute_render_data`
//! - Lazy recomputation on input change: `ScatterPlot`
//! - Frame-coalesced hover/select handling: `interaction`
//! - Ordered draw primitives and SVG output via plotters: `render`
//!
//! ### Example
//! ```
//! use scatterplot_rs::{Bounds, ScatterPlot, Series, Value};
//! use scatterplot_rs::scale::AxisScale;
//!
//! let series = vec![Series::new(
//!     "DEU",
//!     "Germany",
//!     vec![Value::new(1.0, 2.0, None, 2000), Value::new(2.0, 3.0, None, 2010)],
//! )];
//! let bounds = Bounds::new(0.0, 0.0, 400.0, 300.0);
//! let mut plot = ScatterPlot::new(
//!     series,
//!     bounds,
//!     AxisScale::linear((0.0, 4.0), (0.0, 1.0)),
//!     AxisScale::linear((0.0, 4.0), (0.0, 1.0)),
//!     (1.0, 1.0),
//! );
//! plot.set_focus_keys(["DEU"]);
//! let render = plot.render_data();
//! assert!(render.is_layer_mode);
//! let svg = scatterplot_rs::render::svg::render_svg_string(render, 400, 300)?;
//! assert!(svg.contains("Germany"));
//! # Ok::<(), scatterplot_rs::ScatterError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod models;
pub mod plot;
pub mod render;
pub mod scale;
pub mod style;

pub use config::LayoutConfig;
pub use error::{Result, ScatterError};
pub use geometry::{Bounds, Vector2};
pub use interaction::{InteractionController, ScatterCallbacks};
pub use layout::{Label, LabelKind, RenderData, RenderSeries, compute_render_data};
pub use models::{Dataset, Series, Value};
pub use plot::ScatterPlot;
