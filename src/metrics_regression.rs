//! Regression metrics.

use ndarray::ArrayView1;

/// Coefficient of determination, `1 - SS_res / SS_tot`.
///
/// Evaluable on any compatible pair, including data disjoint from the one the
/// model was fitted on. A constant target makes `SS_tot` zero; we return 1.0
/// when the predictions are also exact and negative infinity otherwise, so a
/// degenerate fit never looks good.
pub fn r2(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> f64 {
    debug_assert_eq!(y_true.len(), y_pred.len());
    let mean = y_true.sum() / y_true.len() as f64;
    let ss_res = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>();
    let ss_tot = y_true.iter().map(|t| (t - mean).powi(2)).sum::<f64>();
    if ss_tot == 0.0 {
        if ss_res == 0.0 {
            1.0
        } else {
            f64::NEG_INFINITY
        }
    } else {
        1.0 - ss_res / ss_tot
    }
}

pub fn mean_squared_error(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> f64 {
    debug_assert_eq!(y_true.len(), y_pred.len());
    let n = y_true.len() as f64;
    y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>()
        / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    #[test]
    fn perfect_prediction_scores_one() {
        let y = arr1(&[1.0, 2.0, 3.0, 4.0]);
        assert_abs_diff_eq!(r2(y.view(), y.view()), 1.0);
    }

    #[test]
    fn mean_prediction_scores_zero() {
        let y = arr1(&[1.0, 2.0, 3.0]);
        let pred = arr1(&[2.0, 2.0, 2.0]);
        assert_abs_diff_eq!(r2(y.view(), pred.view()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_target_with_error_is_degenerate() {
        let y = arr1(&[5.0, 5.0, 5.0]);
        let pred = arr1(&[5.0, 5.0, 6.0]);
        assert_eq!(r2(y.view(), pred.view()), f64::NEG_INFINITY);
        assert_abs_diff_eq!(r2(y.view(), y.view()), 1.0);
    }

    #[test]
    fn r2_invariant_under_consistent_permutation() {
        let y = arr1(&[1.0, -2.0, 0.5, 3.0]);
        let pred = arr1(&[0.9, -1.7, 0.6, 2.8]);
        let perm = [2usize, 0, 3, 1];
        let y_p = arr1(&perm.iter().map(|&i| y[i]).collect::<Vec<_>>());
        let pred_p = arr1(&perm.iter().map(|&i| pred[i]).collect::<Vec<_>>());
        assert_abs_diff_eq!(
            r2(y.view(), pred.view()),
            r2(y_p.view(), pred_p.view()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn mse_of_shifted_prediction() {
        let y = arr1(&[1.0, 2.0, 3.0]);
        let pred = arr1(&[2.0, 3.0, 4.0]);
        assert_abs_diff_eq!(mean_squared_error(y.view(), pred.view()), 1.0);
    }
}
