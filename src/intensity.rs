//! Closed-form estimation of the optimal shrinkage intensity.
//!
//! Implements the analytical intensity estimator from "Honey, I Shrunk the
//! Sample Covariance Matrix" (Ledoit & Wolf, 2004): the asymptotic variance of
//! the sample covariance (phi), its asymptotic covariance with the target
//! entries (rho), and the target misspecification (gamma) are estimated from
//! third and fourth sample moments and combined into the intensity that
//! minimizes expected quadratic loss.

use log::{debug, warn};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{CovCorError, Result};
use crate::moments::SampleMoments;
use crate::target::ConstantCorrelationTarget;

/// Diagnostics from the intensity solver.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntensitySummary {
    /// The clamped optimal intensity in [0, 1].
    pub intensity: f64,
    /// The unclamped ratio `(phi - rho) / gamma`.
    pub kappa: f64,
    /// Estimated asymptotic variance of the sample covariance entries.
    pub phi: f64,
    /// Estimated asymptotic covariance between sample and target entries.
    pub rho: f64,
    /// Squared Frobenius distance between sample covariance and target.
    pub gamma: f64,
}

/// Estimates the asymptotically optimal shrinkage intensity.
///
/// Fails with [`CovCorError::DegenerateTarget`] when the sample covariance
/// equals the target exactly, which leaves the intensity undefined.
pub fn optimal_intensity(
    moments: &SampleMoments,
    target: &ConstantCorrelationTarget,
) -> Result<IntensitySummary> {
    let n = moments.sample_count() as f64;
    let p = moments.variable_count();
    let x = moments.centered();
    let sample = moments.covariance();
    let variances = moments.variances();
    let std_devs = moments.std_devs();
    let prior = target.matrix();

    // phi-hat: fourth-moment estimate of the variance of each sample
    // covariance entry, phiMat[i][j] = E[x_i^2 x_j^2] - 2 E[x_i x_j] s_ij + s_ij^2.
    let squared = x.map(|v| v * v);
    let second = (x.transpose() * x) / n;
    let phi_mat = (squared.transpose() * &squared) / n - second.component_mul(sample) * 2.0
        + sample.component_mul(sample);
    let phi = phi_mat.sum();

    // rho-hat: third-moment cross terms between sample covariance and target.
    // The theta diagonal carries no target bias (sample and prior variances
    // agree by construction) and is forced to zero.
    let cubed = x.map(|v| v * v * v);
    let third = (cubed.transpose() * x) / n;
    let theta = DMatrix::from_fn(p, p, |i, j| {
        if i == j {
            0.0
        } else {
            third[(i, j)] - second[(i, i)] * sample[(i, j)] - second[(i, j)] * variances[i]
                + variances[i] * sample[(i, j)]
        }
    });
    let mut weighted_theta = 0.0;
    for i in 0..p {
        for j in 0..p {
            weighted_theta += std_devs[j] / std_devs[i] * theta[(i, j)];
        }
    }
    let rho = phi_mat.diagonal().sum() + target.average_correlation() * weighted_theta;

    // gamma-hat: squared Frobenius misspecification of the target.
    let gamma = (sample - prior).map(|v| v * v).sum();
    if gamma == 0.0 {
        return Err(CovCorError::DegenerateTarget);
    }

    let kappa = (phi - rho) / gamma;
    let raw = kappa / n;
    let intensity = raw.clamp(0.0, 1.0);
    if raw != intensity {
        warn!("shrinkage intensity {raw} outside [0, 1], clamped to {intensity}");
    }
    debug!("solved shrinkage intensity {intensity} (phi={phi}, rho={rho}, gamma={gamma})");

    Ok(IntensitySummary {
        intensity,
        kappa,
        phi,
        rho,
        gamma,
    })
}
