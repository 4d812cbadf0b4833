//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building fixtures or comparing results
#[derive(Debug, Error)]
pub enum TestError {
    /// ASCII fixture could not be parsed
    #[error("invalid fixture at line {line}: {message}")]
    InvalidFixture { line: usize, message: String },

    /// Grid construction failed
    #[error("grid error: {0}")]
    Grid(#[from] regionmap_core::Error),

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Logger could not be started
    #[error("logger initialization failed: {0}")]
    Logger(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
