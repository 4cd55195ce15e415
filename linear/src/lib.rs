//! Penalized linear regression for the credit Default study.
//!
//! Three fitters share the `shrinkage::traits::Estimator` surface:
//!
//! - [`LinearRegression`], ordinary least squares via the normal equations;
//! - [`Ridge`], the closed-form L2 fit `(XᵀX + λI)β = Xᵀy`;
//! - [`Lasso`], L1-penalized least squares by cyclic coordinate descent.
//!
//! The λ sweep that compares the two penalty families lives in [`sweep`].

pub mod cd;
mod solve;
pub mod sweep;

pub use cd::{coordinate_descent, soft_threshold, CdFit};
pub use solve::solve_normal_equations;
pub use sweep::{sweep, Penalty, ScoreRecord};

use ndarray::{Array1, Array2};

use shrinkage::error::{Error, Result};
use shrinkage::traits::Estimator;

fn check_dims(x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(Error::DimensionMismatch {
            expected: format!("{} target rows", x.nrows()),
            actual: format!("{}", y.len()),
        });
    }
    if x.nrows() == 0 {
        return Err(Error::EmptyDataset);
    }
    Ok(())
}

fn predict_linear(x: &Array2<f64>, coefficients: &Array1<f64>, intercept: f64) -> Array1<f64> {
    x.dot(coefficients) + intercept
}

/// Ordinary least squares, the λ = 0 reference point for both penalties.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    coefficients: Option<Array1<f64>>,
    intercept: f64,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted coefficients, one per design-matrix column, in column order.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    pub fn coefficients(&self) -> &Array1<f64> {
        self.coefficients
            .as_ref()
            .expect("model not fitted, call fit() first")
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }
}

impl Estimator for LinearRegression {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        let (beta, intercept) = solve_normal_equations(x, y, 0.0, true)?;
        self.coefficients = Some(beta);
        self.intercept = intercept;
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        predict_linear(x, self.coefficients(), self.intercept)
    }
}

/// L2-penalized regression, minimizing `Σ(yᵢ − ŷᵢ)² + λ Σ βⱼ²`.
///
/// Closed form on centered data; the intercept is never penalized. A singular
/// or near-singular Gram matrix is solved with diagonal jitter and reported
/// as a warning rather than an error.
#[derive(Debug, Clone)]
pub struct Ridge {
    alpha: f64,
    coefficients: Option<Array1<f64>>,
    intercept: f64,
}

impl Ridge {
    /// `alpha` is the penalty strength λ; 0 recovers ordinary least squares.
    pub fn new(alpha: f64) -> Self {
        Ridge {
            alpha,
            coefficients: None,
            intercept: 0.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// # Panics
    ///
    /// Panics if the model is not fitted.
    pub fn coefficients(&self) -> &Array1<f64> {
        self.coefficients
            .as_ref()
            .expect("model not fitted, call fit() first")
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }
}

impl Estimator for Ridge {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        check_dims(x, y)?;
        let (beta, intercept) = solve_normal_equations(x, y, self.alpha, true)?;
        self.coefficients = Some(beta);
        self.intercept = intercept;
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        predict_linear(x, self.coefficients(), self.intercept)
    }
}

/// L1-penalized regression, minimizing `Σ(yᵢ − ŷᵢ)² + λ Σ |βⱼ|`.
///
/// Solved by cyclic coordinate descent with soft-thresholding; coefficients
/// inside the penalty dead zone are set to exactly zero, which is what makes
/// the Lasso a feature selector. Failing to converge within `max_iter` sweeps
/// is a warning, not an error; the last iterate is kept.
#[derive(Debug, Clone)]
pub struct Lasso {
    alpha: f64,
    max_iter: usize,
    tol: f64,
    coefficients: Option<Array1<f64>>,
    intercept: f64,
    converged: bool,
    n_iter: usize,
}

impl Lasso {
    /// `alpha` is the penalty strength λ; 0 recovers ordinary least squares
    /// (run to convergence).
    pub fn new(alpha: f64) -> Self {
        Lasso {
            alpha,
            max_iter: 1000,
            tol: 1e-4,
            coefficients: None,
            intercept: 0.0,
            converged: false,
            n_iter: 0,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// # Panics
    ///
    /// Panics if the model is not fitted.
    pub fn coefficients(&self) -> &Array1<f64> {
        self.coefficients
            .as_ref()
            .expect("model not fitted, call fit() first")
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Whether the last fit reached the tolerance before the sweep cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }
}

impl Estimator for Lasso {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        check_dims(x, y)?;
        let fit = coordinate_descent(x.view(), y.view(), self.alpha, true, self.tol, self.max_iter);
        self.coefficients = Some(fit.coefficients);
        self.intercept = fit.intercept;
        self.converged = fit.converged;
        self.n_iter = fit.n_iter;
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        predict_linear(x, self.coefficients(), self.intercept)
    }
}
