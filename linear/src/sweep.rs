//! Penalty-strength sweep: one independent fit per λ, each scored against the
//! same held-out set. No memoization and no early stopping; every λ in the
//! input list produces a score record, in input order.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use shrinkage::error::Result;
use shrinkage::traits::Estimator;

use crate::{Lasso, Ridge};

/// Which penalty family a sweep fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Penalty {
    L1,
    L2,
}

/// One point on a score-versus-λ curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub lambda: f64,
    pub r2: f64,
}

/// Fit `penalty` at every λ in `lambdas` on `train` and score each fit on
/// `test` (R² on the held-out pair).
pub fn sweep(
    penalty: Penalty,
    lambdas: &[f64],
    train: (&Array2<f64>, &Array1<f64>),
    test: (&Array2<f64>, &Array1<f64>),
) -> Result<Vec<ScoreRecord>> {
    let (x_train, y_train) = train;
    let (x_test, y_test) = test;
    lambdas
        .iter()
        .map(|&lambda| {
            let r2 = match penalty {
                Penalty::L1 => {
                    let mut model = Lasso::new(lambda);
                    model.fit(x_train, y_train)?;
                    model.score(x_test, y_test)
                }
                Penalty::L2 => {
                    let mut model = Ridge::new(lambda);
                    model.fit(x_train, y_train)?;
                    model.score(x_test, y_test)
                }
            };
            Ok(ScoreRecord { lambda, r2 })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};
    use ndarray_rand::rand_distr::StandardNormal;
    use ndarray_rand::RandomExt;
    use rand::SeedableRng;
    use rand_isaac::Isaac64Rng;
    use shrinkage::preprocessing::StandardScaler;
    use shrinkage::traits::Estimator;

    const LAMBDAS: [f64; 7] = [0.0001, 0.001, 0.01, 0.1, 1.0, 10.0, 100.0];

    fn fixed_study() -> ((Array2<f64>, Array1<f64>), (Array2<f64>, Array1<f64>)) {
        let mut rng = Isaac64Rng::seed_from_u64(99);
        let raw: Array2<f64> = Array2::random_using((400, 5), StandardNormal, &mut rng);
        let x = StandardScaler::new().fit_transform(&raw).unwrap();
        let noise: Array1<f64> = Array1::random_using(400, StandardNormal, &mut rng) * 0.1;
        let y = 2.0 * &x.column(0) - 0.5 * &x.column(2) + noise;

        let x_train = x.slice(ndarray::s![..200, ..]).to_owned();
        let y_train = y.slice(ndarray::s![..200]).to_owned();
        let x_test = x.slice(ndarray::s![200.., ..]).to_owned();
        let y_test = y.slice(ndarray::s![200..]).to_owned();
        ((x_train, y_train), (x_test, y_test))
    }

    #[test]
    fn one_record_per_lambda_in_order() {
        let (train, test) = fixed_study();
        for &penalty in &[Penalty::L1, Penalty::L2] {
            let records = sweep(
                penalty,
                &LAMBDAS,
                (&train.0, &train.1),
                (&test.0, &test.1),
            )
            .unwrap();
            assert_eq!(records.len(), LAMBDAS.len());
            for (record, &lambda) in records.iter().zip(LAMBDAS.iter()) {
                assert_eq!(record.lambda, lambda);
            }
        }
    }

    #[test]
    fn ridge_curve_degrades_as_lambda_grows() {
        let (train, test) = fixed_study();
        let records = sweep(
            Penalty::L2,
            &LAMBDAS,
            (&train.0, &train.1),
            (&test.0, &test.1),
        )
        .unwrap();
        // Small λ barely perturbs the fit; over-penalization degrades it.
        assert!(records[0].r2 > 0.99);
        assert!(records.last().unwrap().r2 < records[0].r2);
        // The tail of the curve is non-increasing.
        assert!(records[5].r2 >= records[6].r2);
        assert!(records[4].r2 >= records[5].r2);
    }

    #[test]
    fn lasso_reaches_exact_zero_before_ridge_ever_does() {
        let (train, _test) = fixed_study();
        // λ large enough to empty the Lasso entirely.
        let lambda = 1e5;

        let mut lasso = crate::Lasso::new(lambda);
        lasso.fit(&train.0, &train.1).unwrap();
        assert!(lasso.coefficients().iter().all(|&b| b == 0.0));

        let mut ridge = crate::Ridge::new(lambda);
        ridge.fit(&train.0, &train.1).unwrap();
        assert!(ridge.coefficients().iter().all(|&b| b != 0.0));
    }

    #[test]
    fn independent_fits_share_nothing() {
        let (train, test) = fixed_study();
        let forward = sweep(
            Penalty::L1,
            &LAMBDAS,
            (&train.0, &train.1),
            (&test.0, &test.1),
        )
        .unwrap();
        let mut reversed_lambdas = LAMBDAS;
        reversed_lambdas.reverse();
        let backward = sweep(
            Penalty::L1,
            &reversed_lambdas,
            (&train.0, &train.1),
            (&test.0, &test.1),
        )
        .unwrap();
        for (f, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(f.lambda, b.lambda);
            assert_eq!(f.r2, b.r2);
        }
    }
}
