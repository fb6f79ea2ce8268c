//! Error types for the usage dashboard core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A statistic was requested over zero values.
    #[error("cannot compute statistics over an empty sequence")]
    EmptyInput,

    /// Correlation inputs differ in length or have fewer than two points.
    #[error("dimension mismatch: {left} vs {right} values (need equal lengths of at least 2)")]
    DimensionMismatch { left: usize, right: usize },

    /// One of the correlation inputs has zero variance.
    #[error("correlation is undefined for a zero-variance series")]
    UndefinedCorrelation,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A source row broke a Record invariant.
    #[error("invalid record at position {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// The dataset could not be loaded. Terminal for the session.
    #[error("failed to load dataset from {path}: {reason}")]
    DatasetLoad { path: PathBuf, reason: String },

    #[error("no dataset loaded")]
    NotLoaded,

    #[error("dataset already loaded for this session")]
    AlreadyLoaded,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
