//! Constant-correlation shrinkage target construction.

use nalgebra::DMatrix;

use crate::error::{CovCorError, Result};
use crate::moments::SampleMoments;

/// The constant-correlation prior: a matrix sharing the sample variances on its
/// diagonal while replacing every pairwise covariance with the one implied by
/// the average sample correlation.
#[derive(Clone, Debug)]
pub struct ConstantCorrelationTarget {
    matrix: DMatrix<f64>,
    average_correlation: f64,
}

impl ConstantCorrelationTarget {
    /// Builds the target from sample moments.
    ///
    /// A variable with zero sample variance makes the correlation undefined,
    /// so constant columns are rejected before any division happens.
    pub fn from_moments(moments: &SampleMoments) -> Result<Self> {
        let p = moments.variable_count();
        let sample = moments.covariance();
        let variances = moments.variances();
        let std_devs = moments.std_devs();

        for column in 0..p {
            let variance = variances[column];
            if variance <= 0.0 {
                return Err(CovCorError::degenerate_variance(column, variance));
            }
        }

        // rBar: mean of the off-diagonal correlation entries. The diagonal of
        // the standardized matrix sums to exactly p, hence the subtraction.
        let mut standardized_sum = 0.0;
        for i in 0..p {
            for j in 0..p {
                standardized_sum += sample[(i, j)] / (std_devs[i] * std_devs[j]);
            }
        }
        let average_correlation = (standardized_sum - p as f64) / (p * (p - 1)) as f64;

        let mut matrix = DMatrix::zeros(p, p);
        for i in 0..p {
            for j in 0..p {
                if i == j {
                    matrix[(i, j)] = variances[i];
                } else {
                    matrix[(i, j)] = average_correlation * std_devs[i] * std_devs[j];
                }
            }
        }

        Ok(Self {
            matrix,
            average_correlation,
        })
    }

    /// Returns a read-only view of the target matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The average pairwise sample correlation (rBar).
    pub fn average_correlation(&self) -> f64 {
        self.average_correlation
    }
}
