//! Column standardization and the credit-study feature augmentation.
//!
//! Scaling statistics are computed over the entire table before any split, as
//! the studied procedure does; augmentation runs independently within each
//! split so derived columns never mix train and test rows.

use ndarray::{stack, Array1, Array2, Axis};

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Standardizes columns to zero mean and unit sample variance (ddof = 1).
///
/// A zero-variance column is centered but left unscaled, the same guard the
/// sklearn scaler applies.
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    mean: Option<Array1<f64>>,
    std: Option<Array1<f64>>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit(&mut self, x: &Array2<f64>) -> Result<&Self> {
        if x.nrows() < 2 {
            return Err(Error::DimensionMismatch {
                expected: "at least 2 rows to estimate a variance".to_string(),
                actual: format!("{} rows", x.nrows()),
            });
        }
        let mean = x.mean_axis(Axis(0)).ok_or(Error::EmptyDataset)?;
        let std = x
            .std_axis(Axis(0), 1.0)
            .mapv(|s| if s == 0.0 { 1.0 } else { s });
        self.mean = Some(mean);
        self.std = Some(std);
        Ok(self)
    }

    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let mean = self.mean.as_ref().ok_or(Error::NotFitted)?;
        let std = self.std.as_ref().ok_or(Error::NotFitted)?;
        if x.ncols() != mean.len() {
            return Err(Error::DimensionMismatch {
                expected: format!("{} columns", mean.len()),
                actual: format!("{}", x.ncols()),
            });
        }
        Ok((x - mean) / std)
    }

    pub fn fit_transform(&mut self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(x)?;
        self.transform(x)
    }
}

/// Standardize a target vector in place of a full scaler (ddof = 1).
pub fn standardize(y: &Array1<f64>) -> Array1<f64> {
    let n = y.len() as f64;
    let mean = y.sum() / n;
    let var = y.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std = if var == 0.0 { 1.0 } else { var.sqrt() };
    y.mapv(|v| (v - mean) / std)
}

/// Standardize every column of a dataset, target included, returning the
/// scaled dataset. Statistics come from all rows of `ds`.
pub fn standardize_dataset(ds: &Dataset) -> Result<Dataset> {
    let mut scaler = StandardScaler::new();
    let records = scaler.fit_transform(&ds.records)?;
    let targets = standardize(&ds.targets);
    Dataset::new(records, targets, ds.feature_names.clone())
}

const AUGMENTED: [&str; 6] = [
    "balance_student",
    "balance_default",
    "student_default",
    "balance_sqrt",
    "balance2",
    "balance3",
];

/// Append the six derived credit-study columns to a feature set.
///
/// Three pairwise interaction products and three power transforms of the
/// shifted balance column. `balance` is standardized by the time this runs,
/// so the +100 shift is assumed to keep it positive; a row where it does not
/// is a hard error rather than a NaN smuggled into the design matrix.
pub fn augment_credit(ds: &Dataset) -> Result<Dataset> {
    let balance = ds.column("balance")?;
    let student = ds.column("student")?;
    let default = ds.column("default")?;

    let n = ds.nsamples();
    let mut extra = Array2::<f64>::zeros((n, AUGMENTED.len()));
    for i in 0..n {
        let shifted = balance[i] + 100.0;
        if shifted < 0.0 {
            return Err(Error::FeatureDomain {
                row: i,
                value: shifted,
            });
        }
        extra[[i, 0]] = balance[i] * student[i];
        extra[[i, 1]] = balance[i] * default[i];
        extra[[i, 2]] = student[i] * default[i];
        extra[[i, 3]] = shifted.sqrt();
        extra[[i, 4]] = shifted.powi(2);
        extra[[i, 5]] = shifted.powi(3);
    }

    let records =
        stack(Axis(1), &[ds.records.view(), extra.view()]).map_err(|e| Error::DimensionMismatch {
            expected: "stackable feature blocks".to_string(),
            actual: e.to_string(),
        })?;
    let mut names = ds.feature_names.clone();
    names.extend(AUGMENTED.iter().map(|s| s.to_string()));
    Dataset::new(records, ds.targets.clone(), names)
}
