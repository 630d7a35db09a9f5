//! Fixed-step (α, β) estimator and the entry point to the L-BFGS fit.
//!
//! Purpose
//! -------
//! Run the exploratory gradient-style update of `(α, β)` over a ρ series and
//! record every iterate. The recurrence is applied exactly as defined, with
//! no convergence check and no correction of its update terms; it is a
//! diagnostic trace, not a validated estimator. The validated estimator is
//! [`EstimatorEngine::fit_mle`].
//!
//! Key behaviors
//! -------------
//! With `N = len(ρ)`, pairs `(ρ_t, ρ_lag)` and step `C`:
//!
//! ```text
//! α[0] = f·α₀,  β[0] = f·β₀                (f = seed fraction)
//! r     = ρ_t − β[i−1]·ρ_lag − 1
//! α[i]  = α[i−1] − C·(α[i−1] − Σ r / (2·N·ρ_lag))
//! β[i]  = β[i−1] − C·(Σ ρ_lag / r − N / α[i−1])
//! ```
//!
//! for `i = 1..N`. Each step sums over all `N − 1` pairs, so a run costs
//! `O(N²)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both traces have length `N`.
//! - NaN/±inf produced along the way propagate into later iterates; use
//!   [`EstimatorTrace::first_non_finite`] to locate the first one.
use crate::{
    optimization::{errors::OptResult, loglik_optimizer::MLEOptions},
    volatility::{
        core::{
            data::{LaggedPairs, lagged_views},
            options::EstimatorOptions,
            params::ProcessParameters,
            process::ProcessGenerator,
        },
        errors::{ProcessError, ProcessResult},
        models::mle::SymmetricSLCModel,
    },
};
use ndarray::{Array1, ArrayView1, Zip};

/// EstimatorTrace — per-iteration values of the fixed-step estimator.
///
/// Fields
/// ------
/// - `alpha`: `Array1<f64>`, α iterates; `alpha[0]` is the seeded value.
/// - `beta`: `Array1<f64>`, β iterates, same length as `alpha`.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorTrace {
    pub alpha: Array1<f64>,
    pub beta: Array1<f64>,
}

impl EstimatorTrace {
    /// Number of recorded iterates.
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    /// Last α iterate.
    pub fn final_alpha(&self) -> Option<f64> {
        self.alpha.len().checked_sub(1).map(|i| self.alpha[i])
    }

    /// Last β iterate.
    pub fn final_beta(&self) -> Option<f64> {
        self.beta.len().checked_sub(1).map(|i| self.beta[i])
    }

    /// First iteration at which α or β is NaN/±inf.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.alpha
            .iter()
            .zip(self.beta.iter())
            .position(|(a, b)| !a.is_finite() || !b.is_finite())
    }
}

/// Estimator over a fixed prior parameterization.
///
/// `params` seeds the first iterate and drives simulation in
/// [`EstimatorEngine::estimate`]; `options` holds the step size, seed
/// fraction, and RNG seeding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorEngine {
    pub params: ProcessParameters,
    pub options: EstimatorOptions,
}

impl EstimatorEngine {
    pub fn new(params: ProcessParameters, options: EstimatorOptions) -> EstimatorEngine {
        EstimatorEngine { params, options }
    }

    /// Simulate ρ of length `n` with the engine's own parameters, then run
    /// [`EstimatorEngine::estimate_from`] on it.
    ///
    /// # Errors
    /// Generator errors (`ProcessError::InvalidLength` for `n == 0`).
    pub fn estimate(&self, n: usize) -> ProcessResult<EstimatorTrace> {
        let rho = ProcessGenerator::new(self.params, self.options.sim_opts).generate(n)?;
        self.estimate_from(rho.view())
    }

    /// Run the fixed-step recurrence over a caller-supplied ρ.
    ///
    /// # Errors
    /// `ProcessError::EmptySeries` for an empty series. Everything else,
    /// including zero lags, propagates as NaN/±inf in the trace.
    pub fn estimate_from(&self, rho: ArrayView1<f64>) -> ProcessResult<EstimatorTrace> {
        if rho.is_empty() {
            return Err(ProcessError::EmptySeries);
        }
        let n = rho.len();
        let n_f = n as f64;
        let step = self.options.step_size;
        let (rho_t, rho_lag) = lagged_views(rho);
        let den_alpha = rho_lag.mapv(|lag| 2.0 * n_f * lag);

        let mut alpha = Array1::<f64>::zeros(n);
        let mut beta = Array1::<f64>::zeros(n);
        alpha[0] = self.params.alpha * self.options.seed_fraction;
        beta[0] = self.params.beta * self.options.seed_fraction;

        for i in 1..n {
            let (a_prev, b_prev) = (alpha[i - 1], beta[i - 1]);
            let mut alpha_sum = 0.0;
            let mut beta_sum = 0.0;
            Zip::from(&rho_t).and(&rho_lag).and(&den_alpha).for_each(|&x, &lag, &den| {
                let r = x - b_prev * lag - 1.0;
                alpha_sum += r / den;
                beta_sum += lag / r;
            });
            alpha[i] = a_prev - step * (a_prev - alpha_sum);
            beta[i] = b_prev - step * (beta_sum - n_f / a_prev);
        }

        let trace = EstimatorTrace { alpha, beta };
        #[cfg(feature = "obs_slog")]
        if self.options.verbose {
            eprintln!(
                "estimator: n = {n}, step = {step:e}, alpha {:.6} -> {:?}, beta {:.6} -> {:?}, \
                 first non-finite = {:?}",
                trace.alpha[0],
                trace.final_alpha(),
                trace.beta[0],
                trace.final_beta(),
                trace.first_non_finite()
            );
        }
        Ok(trace)
    }

    /// Maximum-likelihood fit of the symmetric model to `rho` with L-BFGS,
    /// started from the engine's parameters.
    ///
    /// # Errors
    /// - Series validation errors (`EmptySeries`, `NonFiniteData`,
    ///   `NonPositiveLag`) converted into `OptError`.
    /// - `OptError::InfeasibleSupport` if no β ≥ 0 is admissible.
    /// - Optimizer failures.
    pub fn fit_mle(
        &self, rho: ArrayView1<f64>, opts: MLEOptions,
    ) -> OptResult<SymmetricSLCModel> {
        let pairs = LaggedPairs::new(rho)?;
        let mut model = SymmetricSLCModel::new(opts);
        model.fit_from_params(&self.params, &pairs)?;
        Ok(model)
    }
}
