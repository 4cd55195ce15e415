//! `shrinkage` studies the effect of L1 and L2 regularization on linear
//! regression over the credit Default dataset.
//!
//! Kin in spirit to a small slice of Python's `scikit-learn`, it provides the
//! preprocessing steps (yes/no encoding, standardization, ordered half-split,
//! interaction and polynomial feature augmentation) and the shared plumbing
//! (dataset container, regression metrics, estimator trait) used by the
//! `shrinkage-linear` fitters and the `shrinkage-datasets` loaders.

pub mod dataset;
pub mod error;
mod metrics_regression;
pub mod prelude;
pub mod preprocessing;
pub mod traits;

pub use dataset::Dataset;
pub use error::{Error, Result};

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::{mean_squared_error, r2};
}
