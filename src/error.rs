//! Engine errors.
//!
//! The move/merge rules themselves are total; errors only come from
//! building a grid out of caller-supplied rows and from configuration.

/// Errors surfaced by grid construction and configuration.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Board size outside the supported range.
    #[error("Invalid board size {size}: must be between {min} and {max}")]
    InvalidBoardSize {
        /// Requested side length.
        size: usize,
        /// Smallest accepted side length.
        min: usize,
        /// Largest accepted side length.
        max: usize,
    },

    /// Grid built from zero rows.
    #[error("Grid has no rows")]
    EmptyGrid,

    /// A row whose length differs from the number of rows.
    #[error("Row {row} has {found} cells, expected {expected}")]
    NonSquareGrid {
        /// Index of the offending row.
        row: usize,
        /// Required row length (the row count).
        expected: usize,
        /// Actual row length.
        found: usize,
    },

    /// Malformed configuration text.
    #[error("Config error: {0}")]
    Config(String),

    /// Failed to read a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}

/// Result alias used across the crate.
pub type EngineResult<T> = Result<T, EngineError>;
