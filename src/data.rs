//! Observation-matrix container and validation used by the shrinkage estimator.

use nalgebra::DMatrix;

use crate::error::{CovCorError, Result};

/// Represents an n×p table of observations: n samples (rows) of p variables
/// (columns).
///
/// Construction validates that the matrix is non-empty and that every entry is
/// finite, so downstream stages never see NaN or infinite values. The matrix is
/// owned and never mutated; de-meaning happens on a working copy inside
/// [`SampleMoments::compute`](crate::moments::SampleMoments::compute).
#[derive(Clone, Debug)]
pub struct Observations {
    matrix: DMatrix<f64>,
}

impl Observations {
    /// Wraps a raw observation matrix after validating it.
    pub fn new(matrix: DMatrix<f64>) -> Result<Self> {
        if matrix.nrows() == 0 || matrix.ncols() == 0 {
            return Err(CovCorError::empty(matrix.nrows(), matrix.ncols()));
        }
        for row in 0..matrix.nrows() {
            for column in 0..matrix.ncols() {
                if !matrix[(row, column)].is_finite() {
                    return Err(CovCorError::NonFiniteValue { row, column });
                }
            }
        }
        Ok(Self { matrix })
    }

    /// Builds observations from row-major values, one observation per row.
    pub fn from_rows(samples: usize, variables: usize, values: &[f64]) -> Result<Self> {
        if samples == 0 || variables == 0 {
            return Err(CovCorError::empty(samples, variables));
        }
        if values.len() != samples * variables {
            return Err(CovCorError::dimension_mismatch(
                "row-major values",
                samples * variables,
                values.len(),
            ));
        }
        Self::new(DMatrix::from_row_slice(samples, variables, values))
    }

    /// Number of observations (rows).
    pub fn sample_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of variables (columns).
    pub fn variable_count(&self) -> usize {
        self.matrix.ncols()
    }

    /// Returns a read-only view of the observation matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_matrix() {
        let observations =
            Observations::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).expect("valid data");
        assert_eq!(observations.sample_count(), 2);
        assert_eq!(observations.variable_count(), 2);
        assert_eq!(observations.matrix()[(1, 0)], 3.0);
    }

    #[test]
    fn rejects_empty_matrix() {
        let result = Observations::new(DMatrix::<f64>::zeros(0, 3));
        assert!(matches!(
            result,
            Err(CovCorError::EmptyMatrix { rows: 0, columns: 3 })
        ));
    }

    #[test]
    fn rejects_mismatched_row_slice() {
        let result = Observations::from_rows(2, 2, &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(CovCorError::DimensionMismatch {
                expected: 4,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_finite_entries() {
        let result = Observations::from_rows(2, 2, &[1.0, f64::NAN, 3.0, 4.0]);
        assert!(matches!(
            result,
            Err(CovCorError::NonFiniteValue { row: 0, column: 1 })
        ));
    }
}
