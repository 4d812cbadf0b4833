//! Error types for regionmap-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! the packed storage layout.

use thiserror::Error;

/// regionmap error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row-wise input is not rectangular
    #[error("invalid input shape: row {row} has {actual} cells, expected {expected}")]
    InvalidInputShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Coordinates outside the grid
    #[error("index out of bounds: ({x}, {y}) in {width}x{height} grid")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Two grids that must share dimensions do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for regionmap-core operations
pub type Result<T> = std::result::Result<T, Error>;
