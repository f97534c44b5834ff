//! Error type for the fallible edges of the crate (dataset I/O, parsing, drawing).
//!
//! Layout itself never fails; see `layout::compute_render_data`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("drawing failed: {0}")]
    Draw(String),
}

pub type Result<T> = std::result::Result<T, ScatterError>;
