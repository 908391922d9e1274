//! High-level estimation pipeline mirroring the reference `covCor` entry point.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::data::Observations;
use crate::error::{CovCorError, Result};
use crate::intensity::{optimal_intensity, IntensitySummary};
use crate::moments::SampleMoments;
use crate::target::ConstantCorrelationTarget;

/// Source of the shrinkage intensity used in the final blend.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum IntensityRule {
    /// Estimate the asymptotically optimal intensity from the data.
    #[default]
    Optimal,
    /// Use a caller-supplied intensity, validated into [0, 1].
    Fixed(f64),
}

/// Constant-correlation shrinkage estimator for covariance matrices.
///
/// Blends the sample covariance with the constant-correlation target of
/// Ledoit & Wolf, `sigma = delta * prior + (1 - delta) * sample`, where the
/// intensity `delta` is either estimated from the data or fixed up front.
#[derive(Clone, Debug, Default)]
pub struct ShrinkageEstimator {
    rule: IntensityRule,
}

impl ShrinkageEstimator {
    /// Creates an estimator that solves for the optimal intensity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an estimator with a fixed intensity.
    ///
    /// The value must be finite and inside [0, 1] so that the blend stays a
    /// convex combination; anything else is rejected rather than silently
    /// producing a non-convex "estimate".
    pub fn with_fixed_intensity(intensity: f64) -> Result<Self> {
        if !intensity.is_finite() || !(0.0..=1.0).contains(&intensity) {
            return Err(CovCorError::InvalidIntensity { value: intensity });
        }
        Ok(Self {
            rule: IntensityRule::Fixed(intensity),
        })
    }

    /// The intensity rule this estimator applies.
    pub fn rule(&self) -> IntensityRule {
        self.rule
    }

    /// Runs the full pipeline: moments, target, intensity, blend.
    pub fn estimate(&self, observations: &Observations) -> Result<ShrinkageEstimate> {
        let moments = SampleMoments::compute(observations)?;
        let target = ConstantCorrelationTarget::from_moments(&moments)?;

        let (intensity, summary) = match self.rule {
            IntensityRule::Optimal => {
                let summary = optimal_intensity(&moments, &target)?;
                (summary.intensity, Some(summary))
            }
            IntensityRule::Fixed(value) => (value, None),
        };

        let covariance =
            target.matrix() * intensity + moments.covariance() * (1.0 - intensity);

        Ok(ShrinkageEstimate {
            covariance,
            intensity,
            average_correlation: target.average_correlation(),
            summary,
        })
    }
}

/// Result of a shrinkage estimation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShrinkageEstimate {
    /// The blended covariance estimate.
    pub covariance: DMatrix<f64>,
    /// The shrinkage intensity actually used in the blend.
    pub intensity: f64,
    /// Average pairwise sample correlation behind the target.
    pub average_correlation: f64,
    /// Solver diagnostics; `None` when the intensity was fixed.
    pub summary: Option<IntensitySummary>,
}
