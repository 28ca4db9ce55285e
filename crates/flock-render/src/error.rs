//! Error types for flock-render.

use thiserror::Error;

/// Errors that can occur while generating palettes or writing captures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("palette dimensions must be non-zero, got {groups} groups x {levels} levels")]
    InvalidPalette { groups: u16, levels: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
