//! Unified error types for glyph_engine

use thiserror::Error;

use crate::{Position, Size};

/// Errors surfaced by a [`crate::GridStore`].
///
/// Selection, move and clipboard operations are total and never produce one of
/// these; only the store applying a result can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Position {pos} is outside of the canvas {size}")]
    OutOfBounds { pos: Position, size: Size },

    #[error("Invalid canvas size {size}")]
    InvalidSize { size: Size },

    #[error("Canvas can't hold {requested} cells (limit {limit})")]
    CapacityExceeded { requested: usize, limit: usize },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for glyph_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }
}
