//! Normal-equations solver shared by the least-squares and Ridge fitters.
//!
//! The Gram system `(XᵀX + αI) β = Xᵀy` is solved with a Cholesky
//! factorization. Collinear features make the unpenalized Gram matrix
//! singular or nearly so; rather than failing silently or aborting, the solve
//! retries with escalating diagonal jitter and reports the degradation as a
//! warning.

use ndarray::{Array1, Array2, Axis};
use tracing::warn;

use shrinkage::{Error, Result};

/// Solve the (optionally ridge-penalized) least-squares problem.
///
/// Data is centered first when `fit_intercept` is set, so the penalty never
/// touches the intercept; the intercept is recovered as `ȳ − x̄ᵀβ`.
pub fn solve_normal_equations(
    x: &Array2<f64>,
    y: &Array1<f64>,
    alpha: f64,
    fit_intercept: bool,
) -> Result<(Array1<f64>, f64)> {
    let n = x.nrows();
    let p = x.ncols();
    if n != y.len() {
        return Err(Error::DimensionMismatch {
            expected: format!("{} target rows", n),
            actual: format!("{}", y.len()),
        });
    }
    if n == 0 {
        return Err(Error::EmptyDataset);
    }

    let (xc, yc, x_mean, y_mean) = if fit_intercept {
        let x_mean = x.mean_axis(Axis(0)).ok_or(Error::EmptyDataset)?;
        let y_mean = y.sum() / n as f64;
        (x - &x_mean, y.mapv(|v| v - y_mean), x_mean, y_mean)
    } else {
        (x.clone(), y.clone(), Array1::zeros(p), 0.0)
    };

    let mut gram = xc.t().dot(&xc);
    for j in 0..p {
        gram[[j, j]] += alpha;
    }
    let rhs = xc.t().dot(&yc);

    let beta = regularized_cholesky_solve(gram, &rhs)?;
    let intercept = y_mean - x_mean.dot(&beta);
    Ok((beta, intercept))
}

/// Cholesky-solve `a x = b`, adding escalating diagonal jitter when `a` is
/// not positive definite. Each jittered solve is surfaced as a warning; the
/// result may be inaccurate but is still returned, per the contract for
/// ill-conditioned designs.
pub(crate) fn regularized_cholesky_solve(a: Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let p = a.nrows();
    let max_diag = (0..p).map(|j| a[[j, j]].abs()).fold(0.0_f64, f64::max);
    let scale = if max_diag > 0.0 { max_diag } else { 1.0 };

    let mut jitter = 0.0;
    for attempt in 0..6 {
        let mut trial = a.clone();
        if jitter > 0.0 {
            for j in 0..p {
                trial[[j, j]] += jitter;
            }
        }
        if let Some(factor) = cholesky(&trial) {
            if attempt > 0 {
                warn!(
                    jitter,
                    "gram matrix is singular or near-singular, solved with diagonal jitter"
                );
            }
            return Ok(solve_with_factor(&factor, b));
        }
        jitter = if jitter == 0.0 {
            scale * 1e-10
        } else {
            jitter * 100.0
        };
    }
    Err(Error::NotPositiveDefinite)
}

/// Lower-triangular Cholesky factor, or `None` when a pivot is non-positive.
fn cholesky(a: &Array2<f64>) -> Option<Array2<f64>> {
    let p = a.nrows();
    let mut l = Array2::<f64>::zeros((p, p));
    for i in 0..p {
        for j in 0..=i {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                l[[i, j]] = sum.sqrt();
            } else {
                l[[i, j]] = sum / l[[j, j]];
            }
        }
    }
    Some(l)
}

/// Forward- then back-substitution against `L Lᵀ x = b`.
fn solve_with_factor(l: &Array2<f64>, b: &Array1<f64>) -> Array1<f64> {
    let p = b.len();
    let mut z = Array1::<f64>::zeros(p);
    for i in 0..p {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[[i, k]] * z[k];
        }
        z[i] = sum / l[[i, i]];
    }
    let mut x = Array1::<f64>::zeros(p);
    for i in (0..p).rev() {
        let mut sum = z[i];
        for k in (i + 1)..p {
            sum -= l[[k, i]] * x[k];
        }
        x[i] = sum / l[[i, i]];
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr1, arr2};

    #[test]
    fn recovers_known_line() {
        // y = 2x + 1
        let x = arr2(&[[1.0], [2.0], [3.0], [4.0]]);
        let y = arr1(&[3.0, 5.0, 7.0, 9.0]);
        let (beta, intercept) = solve_normal_equations(&x, &y, 0.0, true).unwrap();
        assert_abs_diff_eq!(beta[0], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(intercept, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn recovers_multivariate_plane() {
        // y = 1 + 2*x1 + 3*x2
        let x = arr2(&[[1.0, 1.0], [2.0, 1.0], [1.0, 2.0], [2.0, 2.0], [3.0, 1.0]]);
        let y = arr1(&[6.0, 8.0, 9.0, 11.0, 10.0]);
        let (beta, intercept) = solve_normal_equations(&x, &y, 0.0, true).unwrap();
        assert_abs_diff_eq!(beta[0], 2.0, epsilon = 1e-8);
        assert_abs_diff_eq!(beta[1], 3.0, epsilon = 1e-8);
        assert_abs_diff_eq!(intercept, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn without_intercept_goes_through_origin() {
        let x = arr2(&[[1.0], [2.0], [3.0]]);
        let y = arr1(&[2.0, 4.0, 6.0]);
        let (beta, intercept) = solve_normal_equations(&x, &y, 0.0, false).unwrap();
        assert_abs_diff_eq!(beta[0], 2.0, epsilon = 1e-10);
        assert_eq!(intercept, 0.0);
    }

    #[test]
    fn ridge_penalty_shrinks_coefficients() {
        let x = arr2(&[[1.0], [2.0], [3.0], [4.0]]);
        let y = arr1(&[3.0, 5.0, 7.0, 9.0]);
        let (unpenalized, _) = solve_normal_equations(&x, &y, 0.0, true).unwrap();
        let (penalized, _) = solve_normal_equations(&x, &y, 10.0, true).unwrap();
        assert!(penalized[0].abs() < unpenalized[0].abs());
        let (heavy, _) = solve_normal_equations(&x, &y, 1e6, true).unwrap();
        assert!(heavy[0].abs() < 1e-3);
    }

    #[test]
    fn duplicated_column_is_solved_with_jitter() {
        // Exactly collinear design: unpenalized Gram matrix is singular.
        let x = arr2(&[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]);
        let y = arr1(&[3.0, 5.0, 7.0, 9.0]);
        let (beta, intercept) = solve_normal_equations(&x, &y, 0.0, true).unwrap();
        // The two columns share the signal; their sum carries the slope.
        assert_abs_diff_eq!(beta[0] + beta[1], 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(intercept, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let x = arr2(&[[1.0], [2.0]]);
        let y = arr1(&[1.0, 2.0, 3.0]);
        assert!(solve_normal_equations(&x, &y, 0.0, true).is_err());
    }
}
