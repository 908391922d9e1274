//! Constant-correlation shrinkage estimation for covariance matrices.
//!
//! This crate implements the shrinkage estimator of O. Ledoit and M. Wolf,
//! "Honey, I Shrunk the Sample Covariance Matrix" (Journal of Portfolio
//! Management, 2004), which blends the sample covariance matrix with a
//! constant-correlation target. It mirrors the behavior of the reference
//! `covCor` implementation while embracing idiomatic Rust. It offers tools to
//!
//! - validate observation matrices (`data` module),
//! - compute sample moments and the covariance matrix (`moments` module),
//! - build the constant-correlation target (`target` module),
//! - solve for the optimal shrinkage intensity (`intensity` module), and
//! - assemble the final blended estimate (`estimation` module).
//!
//! The estimated intensity follows the closed-form optimum of the reference
//! publication and is always clamped into [0, 1], so the result is a convex
//! combination of sample and target that stays positive and well conditioned
//! whenever every variable has positive variance.
//!
//! # Quick start
//!
//! ```
//! use covcor::data::Observations;
//! use covcor::ShrinkageEstimator;
//!
//! // Four observations of three variables, one observation per row.
//! let observations = Observations::from_rows(
//!     4,
//!     3,
//!     &[
//!         1.0, 2.0, 1.0, //
//!         2.0, 1.0, 3.0, //
//!         3.0, 4.0, 2.0, //
//!         2.0, 3.0, 1.0,
//!     ],
//! )
//! .expect("validated observations");
//!
//! let estimate = ShrinkageEstimator::new()
//!     .estimate(&observations)
//!     .expect("well-formed estimate");
//! println!(
//!     "shrunk covariance with intensity {:.3}: {}",
//!     estimate.intensity, estimate.covariance
//! );
//! ```
//!
//! Degenerate inputs (a single variable, a single observation, a constant
//! column, or a target that coincides with the sample covariance) are reported
//! as named errors instead of ad-hoc sentinel values.

pub mod data;
pub mod error;
pub mod estimation;
pub mod intensity;
pub mod moments;
pub mod target;

pub use error::{CovCorError, Result};
pub use estimation::{IntensityRule, ShrinkageEstimate, ShrinkageEstimator};
pub use intensity::IntensitySummary;
