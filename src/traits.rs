//! Estimator trait implemented by every fitter in `shrinkage-linear`.

use ndarray::{Array1, Array2};

use crate::error::Result;
use crate::metrics_regression::r2;

/// A supervised regression estimator.
///
/// `score` defaults to the coefficient of determination on `(x, y)`, which
/// may be disjoint from the data the model was fitted on.
pub trait Estimator {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()>;

    fn predict(&self, x: &Array2<f64>) -> Array1<f64>;

    fn score(&self, x: &Array2<f64>, y: &Array1<f64>) -> f64 {
        let pred = self.predict(x);
        r2(y.view(), pred.view())
    }
}
