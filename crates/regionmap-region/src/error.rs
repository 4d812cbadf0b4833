//! Error types for regionmap-region

use thiserror::Error;

/// Errors that can occur during region labeling and ranking
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] regionmap_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Fewer distinct region sizes exist than ranks were requested
    #[error("undefined ranking: requested {requested} size ranks, only {available} available")]
    UndefinedRanking { requested: usize, available: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
