//! Lag-1 pair containers for likelihood evaluation.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the aligned pairs
//! `(ρ_t, ρ_{t−1})` consumed by the symmetric log-likelihood and the L-BFGS
//! fit. The raw density evaluators work on unvalidated views instead (see
//! [`lagged_views`]) so they can sweep arbitrary grids.
//!
//! Key behaviors
//! -------------
//! - [`LaggedPairs::new`] enforces: at least two observations, all values
//!   finite, all lagged values strictly positive.
//! - Precomputes the support bound `beta_cap = min_t (ρ_t − 1) / ρ_{t−1}`:
//!   the symmetric density is positive iff `β < beta_cap`.
//!
//! Conventions
//! -----------
//! - Pair index `t` refers to `(ρ[t + 1], ρ[t])`; `len()` is `n − 1`.
//! - Values are copied once at construction; downstream code only reads.
use crate::volatility::{
    core::validation::validate_likelihood_series,
    errors::{ProcessError, ProcessResult},
};
use ndarray::{Array1, ArrayView1, s};

/// Split a ρ series into aligned `(ρ_t, ρ_lag)` views without validation.
///
/// Both views have length `len(rho) − 1`; an input of length ≤ 1 yields two
/// empty views.
pub fn lagged_views<'a>(
    rho: ArrayView1<'a, f64>,
) -> (ArrayView1<'a, f64>, ArrayView1<'a, f64>) {
    if rho.len() < 2 {
        return (rho.slice_move(s![0..0]), rho.slice_move(s![0..0]));
    }
    (rho.slice_move(s![1..]), rho.slice_move(s![..-1]))
}

/// `LaggedPairs` — validated lag-1 pairs of a volatility series.
///
/// Fields
/// ------
/// - `rho_t`: `Array1<f64>`, observations `ρ[1..]`.
/// - `rho_lag`: `Array1<f64>`, lagged observations `ρ[..n−1]`, all `> 0`.
/// - `beta_cap`: `f64`, supremum of admissible β for the symmetric density.
#[derive(Debug, Clone, PartialEq)]
pub struct LaggedPairs {
    pub rho_t: Array1<f64>,
    pub rho_lag: Array1<f64>,
    pub beta_cap: f64,
}

impl LaggedPairs {
    /// Build validated pairs from a ρ series.
    ///
    /// # Errors
    /// - [`ProcessError::EmptySeries`] if fewer than two observations.
    /// - [`ProcessError::NonFiniteData`] for NaN/±inf values.
    /// - [`ProcessError::NonPositiveLag`] for a lagged value ≤ 0.
    pub fn new(rho: ArrayView1<f64>) -> ProcessResult<Self> {
        validate_likelihood_series(rho)?;
        let (rho_t, rho_lag) = lagged_views(rho);
        let beta_cap = rho_t
            .iter()
            .zip(rho_lag.iter())
            .fold(f64::INFINITY, |acc, (&x, &lag)| acc.min((x - 1.0) / lag));
        Ok(LaggedPairs { rho_t: rho_t.to_owned(), rho_lag: rho_lag.to_owned(), beta_cap })
    }

    /// Number of pairs (`n − 1`).
    pub fn len(&self) -> usize {
        self.rho_t.len()
    }

    /// Always `false` for a validated instance.
    pub fn is_empty(&self) -> bool {
        self.rho_t.is_empty()
    }

    /// Residuals `m_t = ρ_t − 1 − β·ρ_{t−1}`.
    pub fn residuals(&self, beta: f64) -> Array1<f64> {
        &self.rho_t - 1.0 - &self.rho_lag * beta
    }

    /// Support bound for β, or an error when no `β ≥ 0` keeps all residuals
    /// strictly positive.
    ///
    /// # Errors
    /// [`ProcessError::InfeasibleSupport`] when `beta_cap ≤ 0`.
    pub fn admissible_beta_cap(&self) -> ProcessResult<f64> {
        if self.beta_cap > 0.0 {
            Ok(self.beta_cap)
        } else {
            Err(ProcessError::InfeasibleSupport { bound: self.beta_cap })
        }
    }
}
