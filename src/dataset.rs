//! Row-aligned container for a feature matrix, its target vector, and the
//! feature names that label the matrix columns.

use ndarray::{Array1, Array2, Axis};

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Array2<f64>,
    pub targets: Array1<f64>,
    pub feature_names: Vec<String>,
}

impl Dataset {
    /// Build a dataset, checking that rows and names line up with `records`.
    pub fn new(
        records: Array2<f64>,
        targets: Array1<f64>,
        feature_names: Vec<String>,
    ) -> Result<Self> {
        if records.nrows() != targets.len() {
            return Err(Error::DimensionMismatch {
                expected: format!("{} target rows", records.nrows()),
                actual: format!("{}", targets.len()),
            });
        }
        if records.ncols() != feature_names.len() {
            return Err(Error::DimensionMismatch {
                expected: format!("{} feature names", records.ncols()),
                actual: format!("{}", feature_names.len()),
            });
        }
        Ok(Dataset {
            records,
            targets,
            feature_names,
        })
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.feature_names.iter().position(|n| n == name)
    }

    /// Column of `records` selected by feature name.
    pub fn column(&self, name: &str) -> Result<Array1<f64>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
        Ok(self.records.index_axis(Axis(1), idx).to_owned())
    }

    /// First ⌊n/2⌋ rows become the training set, the remainder the test set.
    ///
    /// Order-preserving and non-random, which makes downstream results depend
    /// on row order. That is the studied procedure, reproduced as-is.
    pub fn split_half(&self) -> (Dataset, Dataset) {
        let n = self.nsamples();
        let cut = n / 2;
        let train = Dataset {
            records: self.records.slice(ndarray::s![..cut, ..]).to_owned(),
            targets: self.targets.slice(ndarray::s![..cut]).to_owned(),
            feature_names: self.feature_names.clone(),
        };
        let test = Dataset {
            records: self.records.slice(ndarray::s![cut.., ..]).to_owned(),
            targets: self.targets.slice(ndarray::s![cut..]).to_owned(),
            feature_names: self.feature_names.clone(),
        };
        (train, test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    fn toy() -> Dataset {
        Dataset::new(
            arr2(&[[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0], [5.0, 50.0]]),
            arr1(&[0.1, 0.2, 0.3, 0.4, 0.5]),
            vec!["a".to_string(), "b".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn row_mismatch_is_rejected() {
        let res = Dataset::new(
            arr2(&[[1.0], [2.0]]),
            arr1(&[1.0]),
            vec!["a".to_string()],
        );
        assert!(res.is_err());
    }

    #[test]
    fn name_mismatch_is_rejected() {
        let res = Dataset::new(arr2(&[[1.0], [2.0]]), arr1(&[1.0, 2.0]), vec![]);
        assert!(res.is_err());
    }

    #[test]
    fn column_lookup_by_name() {
        let ds = toy();
        assert_eq!(ds.column_index("b"), Some(1));
        assert_eq!(ds.column("b").unwrap(), arr1(&[10.0, 20.0, 30.0, 40.0, 50.0]));
        assert!(ds.column("c").is_err());
    }

    #[test]
    fn split_half_preserves_order() {
        let ds = toy();
        let (train, test) = ds.split_half();
        assert_eq!(train.nsamples(), 2);
        assert_eq!(test.nsamples(), 3);
        assert_eq!(train.targets, arr1(&[0.1, 0.2]));
        assert_eq!(test.targets, arr1(&[0.3, 0.4, 0.5]));
        assert_eq!(test.records.row(0), arr1(&[3.0, 30.0]));
    }
}
