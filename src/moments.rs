//! Sample moments: de-meaned data, covariance, and standardization vectors.

use nalgebra::{DMatrix, DVector};

use crate::data::Observations;
use crate::error::{CovCorError, Result};

/// First and second sample moments of an observation matrix.
///
/// The sample covariance uses the divisor n (not n−1), matching the
/// maximum-likelihood normalization of the Ledoit-Wolf moment estimators; the
/// intensity solver relies on this normalization and it must not be changed.
#[derive(Clone, Debug)]
pub struct SampleMoments {
    centered: DMatrix<f64>,
    covariance: DMatrix<f64>,
    variances: DVector<f64>,
    std_devs: DVector<f64>,
}

impl SampleMoments {
    /// Computes moments from observations.
    ///
    /// The per-column mean is subtracted on an owned working copy, so the
    /// caller's matrix is never altered. Single-variable and single-observation
    /// inputs are rejected: with one column there is no correlation structure
    /// to average, and with one row the covariance has zero degrees of freedom.
    pub fn compute(observations: &Observations) -> Result<Self> {
        let n = observations.sample_count();
        let p = observations.variable_count();

        if p == 1 {
            return Err(CovCorError::SingleFeature);
        }
        if n == 1 {
            return Err(CovCorError::SingleSample);
        }

        let mut centered = observations.matrix().clone();
        for column in 0..p {
            let mean = centered.column(column).sum() / n as f64;
            for row in 0..n {
                centered[(row, column)] -= mean;
            }
        }

        let covariance = (centered.transpose() * &centered) / n as f64;
        let variances = DVector::from_fn(p, |j, _| covariance[(j, j)]);
        let std_devs = variances.map(f64::sqrt);

        Ok(Self {
            centered,
            covariance,
            variances,
            std_devs,
        })
    }

    /// Number of observations the moments were computed from.
    pub fn sample_count(&self) -> usize {
        self.centered.nrows()
    }

    /// Number of variables.
    pub fn variable_count(&self) -> usize {
        self.centered.ncols()
    }

    /// The de-meaned observation matrix (every column sums to zero).
    pub fn centered(&self) -> &DMatrix<f64> {
        &self.centered
    }

    /// The sample covariance matrix `XᵀX / n` on de-meaned data.
    pub fn covariance(&self) -> &DMatrix<f64> {
        &self.covariance
    }

    /// Per-variable sample variances (the covariance diagonal).
    pub fn variances(&self) -> &DVector<f64> {
        &self.variances
    }

    /// Per-variable sample standard deviations.
    pub fn std_devs(&self) -> &DVector<f64> {
        &self.std_devs
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn reference_observations() -> Observations {
        Observations::from_rows(
            4,
            3,
            &[
                1.0, 2.0, 1.0, //
                2.0, 1.0, 3.0, //
                3.0, 4.0, 2.0, //
                2.0, 3.0, 1.0,
            ],
        )
        .unwrap()
    }

    #[test]
    fn centering_zeroes_column_sums() {
        let moments = SampleMoments::compute(&reference_observations()).unwrap();
        for column in 0..moments.variable_count() {
            assert_relative_eq!(
                moments.centered().column(column).sum(),
                0.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn covariance_matches_direct_computation() {
        let moments = SampleMoments::compute(&reference_observations()).unwrap();
        // Hand-computed XᵀX / 4 on the de-meaned data.
        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[
                0.5, 0.5, 0.25, //
                0.5, 1.25, -0.375, //
                0.25, -0.375, 0.6875,
            ],
        );
        assert_relative_eq!(moments.covariance(), &expected, epsilon = 1e-12);
        assert_relative_eq!(moments.variances()[1], 1.25, epsilon = 1e-12);
        assert_relative_eq!(moments.std_devs()[1], 1.25f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn divisor_is_sample_count_not_degrees_of_freedom() {
        // Two observations of two variables; XᵀX / 2, not XᵀX.
        let observations = Observations::from_rows(2, 2, &[0.0, 0.0, 2.0, 4.0]).unwrap();
        let moments = SampleMoments::compute(&observations).unwrap();
        assert_relative_eq!(moments.covariance()[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(moments.covariance()[(1, 1)], 4.0, epsilon = 1e-12);
        assert_relative_eq!(moments.covariance()[(0, 1)], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn single_variable_is_rejected() {
        let observations = Observations::from_rows(3, 1, &[1.0, 2.0, 3.0]).unwrap();
        let result = SampleMoments::compute(&observations);
        assert!(matches!(result, Err(CovCorError::SingleFeature)));
    }

    #[test]
    fn single_observation_is_rejected() {
        let observations = Observations::from_rows(1, 3, &[1.0, 2.0, 3.0]).unwrap();
        let result = SampleMoments::compute(&observations);
        assert!(matches!(result, Err(CovCorError::SingleSample)));
    }

    #[test]
    fn caller_matrix_is_untouched() {
        let observations = reference_observations();
        let before = observations.matrix().clone();
        let _moments = SampleMoments::compute(&observations).unwrap();
        assert_eq!(observations.matrix(), &before);
    }
}
