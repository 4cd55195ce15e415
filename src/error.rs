//! Error type shared across the workspace.
//!
//! Schema problems, malformed numerics, and fetch failures abort the pipeline;
//! solver trouble (non-convergence, ill-conditioning) is reported through
//! `tracing::warn!` instead and never surfaces here.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required column `{0}`")]
    MissingColumn(String),

    #[error("row {row}: malformed numeric value `{value}` in column `{column}`")]
    MalformedNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("malformed csv input: {0}")]
    Csv(String),

    #[error("fetching `{url}` failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("dataset is empty after dropping incomplete rows")]
    EmptyDataset,

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("row {row}: balance + 100 = {value} is negative, square-root feature is undefined")]
    FeatureDomain { row: usize, value: f64 },

    #[error("system is not positive definite even after diagonal jitter")]
    NotPositiveDefinite,

    #[error("estimator used before fit")]
    NotFitted,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
