use thiserror::Error;

/// Unified error type for `covcor` operations.
#[derive(Debug, Error)]
pub enum CovCorError {
    /// Raised when the observation matrix has no rows or no columns.
    #[error("observation matrix must have at least one row and one column, found {rows}x{columns}")]
    EmptyMatrix {
        /// Number of rows in the rejected matrix.
        rows: usize,
        /// Number of columns in the rejected matrix.
        columns: usize,
    },

    /// Raised when provided values or matrices have incompatible dimensions.
    #[error("dimension mismatch in {context}: expected {expected} but found {found}")]
    DimensionMismatch {
        /// Human-readable context describing the operation.
        context: &'static str,
        /// The required dimension.
        expected: usize,
        /// The dimension that was actually supplied.
        found: usize,
    },

    /// Raised when an observation entry is NaN or infinite.
    #[error("observation at ({row}, {column}) is not finite")]
    NonFiniteValue { row: usize, column: usize },

    /// Raised when the data contains a single variable; no correlation
    /// structure exists among one column.
    #[error("data has a single variable; a constant-correlation target is undefined")]
    SingleFeature,

    /// Raised when the data contains a single observation; the sample
    /// covariance has zero degrees of freedom.
    #[error("data has a single observation; the sample covariance is undefined")]
    SingleSample,

    /// Raised when a variable has zero sample variance, which would divide
    /// by zero in the correlation computation.
    #[error("variable in column {column} has zero sample variance ({variance})")]
    DegenerateVariance {
        /// Index of the constant column.
        column: usize,
        /// The offending variance estimate.
        variance: f64,
    },

    /// Raised when the sample covariance equals the shrinkage target exactly,
    /// leaving the optimal intensity undefined.
    #[error("sample covariance equals the shrinkage target; the optimal intensity is undefined")]
    DegenerateTarget,

    /// Raised when a fixed shrinkage intensity is not a finite value in [0, 1].
    #[error("fixed shrinkage intensity must be a finite value in [0, 1], found {value}")]
    InvalidIntensity { value: f64 },
}

impl CovCorError {
    /// Helper to raise when an input matrix has a degenerate shape.
    pub fn empty(rows: usize, columns: usize) -> Self {
        Self::EmptyMatrix { rows, columns }
    }

    /// Helper to format a [`DimensionMismatch`](CovCorError::DimensionMismatch) error.
    pub fn dimension_mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            found,
        }
    }

    /// Helper to raise when a constant column is detected.
    pub fn degenerate_variance(column: usize, variance: f64) -> Self {
        Self::DegenerateVariance { column, variance }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, CovCorError>;
