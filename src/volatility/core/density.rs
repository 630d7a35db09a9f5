//! Conditional densities of the decomposed Standard Laplace volatility model.
//!
//! Purpose
//! -------
//! Evaluate the closed-form conditional density of `ρ_t` given `ρ_{t−1}` over
//! the lag-1 pairs of an arbitrary ρ grid. Grids need not come from the
//! simulator: sweeping `linspace` grids is how the density shapes for
//! varying α, β, θ are inspected.
//!
//! Key behaviors
//! -------------
//! - [`DensityEvaluator::asymmetric_pdf`]: the θ ≠ 0 form, a difference of
//!   two exponential kernels with scales `α(1 ± θ)ρ_{t−1}`.
//! - [`DensityEvaluator::symmetric_pdf`]: the θ = 0 closed form
//!   `m·exp(−m / (αρ_{t−1})) / (αρ_{t−1})²`, the θ → 0 limit of the above.
//! - [`DensityEvaluator::symmetric_log_pdf`] and
//!   [`DensityEvaluator::symmetric_log_likelihood`]: log-space versions used
//!   by the maximum-likelihood fit.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length is always `len(ρ) − 1`; a single-point grid gives an
//!   empty sample and an empty grid is rejected.
//! - θ = 0 in the asymmetric form and any `ρ_{t−1} = 0` are structural
//!   degeneracies reported as `ProcessError::DegenerateDensity`.
//! - Everything else (negative lags, residuals outside the support,
//!   overflow) propagates as NaN/±inf so callers can detect it.
//!
//! Conventions
//! -----------
//! - `diff_t = ρ_t − (1 + β·ρ_{t−1})` is the residual of the persistence
//!   term; it equals the symmetric form's `m_t`.
//! - Evaluators are pure: no state is mutated, no randomness is consumed.
use crate::volatility::{
    core::{
        data::{LaggedPairs, lagged_views},
        params::ProcessParameters,
        validation::{validate_density_theta, validate_nonzero_lags},
    },
    errors::{ProcessError, ProcessResult},
};
use ndarray::{Array1, ArrayView1, Zip};

/// Asymmetry used by [`DensityEvaluator::asymmetric_pdf`] when none is given.
pub const DEFAULT_PDF_THETA: f64 = 0.5;

/// Stateless evaluator of the conditional densities for fixed (α, β).
///
/// Only `alpha` and `beta` of the held parameters enter the densities; the
/// asymmetry is an explicit argument of [`DensityEvaluator::asymmetric_pdf`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityEvaluator {
    pub params: ProcessParameters,
}

impl DensityEvaluator {
    pub fn new(params: ProcessParameters) -> DensityEvaluator {
        DensityEvaluator { params }
    }

    /// Asymmetric density over the lag-1 pairs of `rho`.
    ///
    /// For each pair, with `d = ρ_t − (1 + β ρ_{t−1})`:
    ///
    /// `f = [exp(−d / (α(1+θ)ρ_{t−1})) − exp(−d / (α(1−θ)ρ_{t−1}))] / (2αθρ_{t−1})`
    ///
    /// # Arguments
    /// - `rho`: any ρ grid, length ≥ 1.
    /// - `theta`: asymmetry in `(0, 1)`; `None` uses [`DEFAULT_PDF_THETA`].
    ///
    /// # Errors
    /// - `ProcessError::EmptySeries` for an empty grid.
    /// - `ProcessError::DegenerateDensity` if `θ = 0` or any `ρ_{t−1} = 0`.
    /// - `ProcessError::InvalidParameter` if θ is outside `[0, 1)`.
    pub fn asymmetric_pdf(
        &self, rho: ArrayView1<f64>, theta: Option<f64>,
    ) -> ProcessResult<Array1<f64>> {
        let theta = validate_density_theta(theta.unwrap_or(DEFAULT_PDF_THETA))?;
        let (rho_t, rho_lag) = checked_pairs(rho)?;
        let alpha = self.params.alpha;
        let beta = self.params.beta;
        let scale_pos = alpha * (1.0 + theta);
        let scale_neg = alpha * (1.0 - theta);
        let norm = 2.0 * alpha * theta;
        Ok(Zip::from(&rho_t).and(&rho_lag).map_collect(|&x, &lag| {
            let diff = x - (1.0 + beta * lag);
            ((-diff / (scale_pos * lag)).exp() - (-diff / (scale_neg * lag)).exp()) / (norm * lag)
        }))
    }

    /// Symmetric (θ = 0) density over the lag-1 pairs of `rho`.
    ///
    /// `f = m · exp(−m / (αρ_{t−1})) / (αρ_{t−1})²`, `m = ρ_t − βρ_{t−1} − 1`.
    ///
    /// # Errors
    /// - `ProcessError::EmptySeries` for an empty grid.
    /// - `ProcessError::DegenerateDensity` if any `ρ_{t−1} = 0`.
    pub fn symmetric_pdf(&self, rho: ArrayView1<f64>) -> ProcessResult<Array1<f64>> {
        let (rho_t, rho_lag) = checked_pairs(rho)?;
        let alpha = self.params.alpha;
        let beta = self.params.beta;
        Ok(Zip::from(&rho_t).and(&rho_lag).map_collect(|&x, &lag| {
            let m = x - beta * lag - 1.0;
            let scale = alpha * lag;
            m * (-m / scale).exp() / (scale * scale)
        }))
    }

    /// Elementwise log of the symmetric density,
    /// `ln m − m / (αρ_{t−1}) − 2 ln(αρ_{t−1})`.
    ///
    /// Pairs with `m ≤ 0` or `ρ_{t−1} < 0` give NaN or `−∞`.
    pub fn symmetric_log_pdf(&self, rho: ArrayView1<f64>) -> ProcessResult<Array1<f64>> {
        let (rho_t, rho_lag) = checked_pairs(rho)?;
        let alpha = self.params.alpha;
        let beta = self.params.beta;
        Ok(Zip::from(&rho_t)
            .and(&rho_lag)
            .map_collect(|&x, &lag| symmetric_log_term(x - beta * lag - 1.0, alpha * lag)))
    }

    /// Total symmetric log-likelihood over validated pairs.
    ///
    /// # Errors
    /// `ProcessError::InfeasibleSupport` if `β ≥ beta_cap`, i.e. some residual
    /// is non-positive and the density vanishes.
    pub fn symmetric_log_likelihood(&self, pairs: &LaggedPairs) -> ProcessResult<f64> {
        let alpha = self.params.alpha;
        let beta = self.params.beta;
        if beta >= pairs.beta_cap {
            return Err(ProcessError::InfeasibleSupport { bound: pairs.beta_cap });
        }
        Ok(pairs
            .rho_t
            .iter()
            .zip(pairs.rho_lag.iter())
            .map(|(&x, &lag)| symmetric_log_term(x - beta * lag - 1.0, alpha * lag))
            .sum())
    }
}

/// One term `ln m − m / s − 2 ln s` of the symmetric log-likelihood.
pub(crate) fn symmetric_log_term(m: f64, scale: f64) -> f64 {
    m.ln() - m / scale - 2.0 * scale.ln()
}

fn checked_pairs(rho: ArrayView1<f64>) -> ProcessResult<(ArrayView1<f64>, ArrayView1<f64>)> {
    if rho.is_empty() {
        return Err(ProcessError::EmptySeries);
    }
    let (rho_t, rho_lag) = lagged_views(rho);
    validate_nonzero_lags(rho_lag)?;
    Ok((rho_t, rho_lag))
}
