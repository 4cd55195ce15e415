//! Convenience re-exports for the common surface of the workspace.

pub use crate::dataset::Dataset;
pub use crate::error::{Error, Result};
pub use crate::metrics::{mean_squared_error, r2};
pub use crate::preprocessing::{augment_credit, standardize, standardize_dataset, StandardScaler};
pub use crate::traits::Estimator;
