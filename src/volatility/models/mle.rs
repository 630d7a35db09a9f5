//! Maximum-likelihood fit of the symmetric (θ = 0) volatility model.
//!
//! Purpose
//! -------
//! Estimate `(α, β)` by maximizing the symmetric conditional log-likelihood
//! with L-BFGS through [`maximize`].
//!
//! Key behaviors
//! -------------
//! - Objective: the per-pair average
//!   `ℓ̄ = (1/T) Σ_t [ln m_t − m_t/(αρ_lag) − 2 ln(αρ_lag)]`,
//!   `m_t = ρ_t − 1 − βρ_lag`, `T = len(pairs)`. Averaging keeps gradients
//!   O(1) regardless of sample size; the maximizer is unchanged.
//! - Parameterization: `θ = (θ_α, θ_β)` with
//!   `α = softplus(θ_α)` and `β = b·logistic(θ_β)`, `b = beta_cap·(1 − SUPPORT_MARGIN)`,
//!   so every iterate has `α > 0`, `0 ≤ β < beta_cap` and all `m_t > 0`.
//!   α is floored at [`ALPHA_FLOOR`] so the objective stays finite for any
//!   θ a line search may try; below the floor the α-gradient is zero.
//! - Analytic gradient:
//!   `∂ℓ/∂α = Σ (m/(α²ρ_lag) − 2/α)`, `∂ℓ/∂β = Σ (1/α − ρ_lag/m)`,
//!   chained through the transforms.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data are validated [`LaggedPairs`]; `beta_cap > 0` is checked before
//!   the run (`OptError::InfeasibleSupport` otherwise).
//! - Fitted parameters are symmetric: `θ = 0`, unit exponential scale.
//! - A run that ends in a solver exit (failed line search) is an error and
//!   leaves the model unfitted.
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{
            Grad, LogLikelihood, MLEOptions, OptimOutcome, Theta, maximize,
            validation::validate_theta_input,
        },
        numerical_stability::{
            SUPPORT_MARGIN, safe_logistic, safe_logit, safe_softplus, safe_softplus_inv,
        },
    },
    volatility::{
        core::{data::LaggedPairs, density::symmetric_log_term, params::ProcessParameters},
        errors::{ProcessError, ProcessResult},
    },
};
use ndarray::array;

/// Number of unconstrained parameters `(θ_α, θ_β)`.
pub const N_THETA: usize = 2;

/// Smallest α the objective is evaluated at.
pub const ALPHA_FLOOR: f64 = 1e-10;

/// Symmetric Standard Laplace conditional model fitted by L-BFGS.
///
/// After [`SymmetricSLCModel::fit`], `results` holds the optimizer outcome
/// (θ̂ in unconstrained space, average log-likelihood) and `fitted_params`
/// the mapped `(α̂, β̂)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricSLCModel {
    /// Optimizer configuration.
    pub mle_opts: MLEOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Fitted parameters (populated after `fit`).
    pub fitted_params: Option<ProcessParameters>,
}

impl SymmetricSLCModel {
    pub fn new(mle_opts: MLEOptions) -> SymmetricSLCModel {
        SymmetricSLCModel { mle_opts, results: None, fitted_params: None }
    }

    /// Fit from an unconstrained start `theta0` and cache the results.
    ///
    /// # Errors
    /// - `OptError::ThetaLengthMismatch` / `OptError::InvalidThetaInput` for a
    ///   malformed `theta0`.
    /// - `OptError::InfeasibleSupport` if `data.beta_cap ≤ 0`.
    /// - `OptError::SolverAborted` if the solver exited early.
    /// - Optimizer failures.
    pub fn fit(&mut self, theta0: Theta, data: &LaggedPairs) -> OptResult<()> {
        let outcome = maximize(self, theta0, data, &self.mle_opts)?;
        self.store_outcome(outcome, data)
    }

    /// Fit starting from a model-space guess.
    ///
    /// # Errors
    /// As [`SymmetricSLCModel::fit`].
    pub fn fit_from_params(
        &mut self, guess: &ProcessParameters, data: &LaggedPairs,
    ) -> OptResult<()> {
        data.admissible_beta_cap()?;
        let theta0 = theta_from_params(guess, beta_scale(data));
        self.fit(theta0, data)
    }

    /// Cache `outcome` and its mapped parameters. Nothing is stored for a
    /// solver exit.
    fn store_outcome(&mut self, outcome: OptimOutcome, data: &LaggedPairs) -> OptResult<()> {
        if let Some(text) = outcome.solver_exit() {
            return Err(OptError::SolverAborted { text: text.to_string() });
        }
        let (alpha, beta) = map_theta(&outcome.theta_hat, beta_scale(data));
        self.fitted_params = Some(ProcessParameters::symmetric(alpha, beta)?);
        self.results = Some(outcome);
        Ok(())
    }

    /// Fitted parameters, or `ProcessError::ModelNotFitted`.
    pub fn fitted(&self) -> ProcessResult<&ProcessParameters> {
        self.fitted_params.as_ref().ok_or(ProcessError::ModelNotFitted)
    }
}

impl LogLikelihood for SymmetricSLCModel {
    type Data = LaggedPairs;

    /// Average symmetric log-likelihood at `θ`.
    fn value(&self, theta: &Theta, data: &LaggedPairs) -> OptResult<f64> {
        let (alpha, beta) = map_theta(theta, beta_scale(data));
        let total: f64 = data
            .rho_t
            .iter()
            .zip(data.rho_lag.iter())
            .map(|(&x, &lag)| symmetric_log_term(x - 1.0 - beta * lag, alpha * lag))
            .sum();
        Ok(total / data.len() as f64)
    }

    fn check(&self, theta: &Theta, data: &LaggedPairs) -> OptResult<()> {
        validate_theta_input(theta, N_THETA)?;
        data.admissible_beta_cap()?;
        Ok(())
    }

    /// Gradient of the average log-likelihood with respect to `θ`.
    fn grad(&self, theta: &Theta, data: &LaggedPairs) -> OptResult<Grad> {
        let scale = beta_scale(data);
        let (alpha, beta) = map_theta(theta, scale);
        let (d_alpha, d_beta) = data.rho_t.iter().zip(data.rho_lag.iter()).fold(
            (0.0, 0.0),
            |(da, db), (&x, &lag)| {
                let m = x - 1.0 - beta * lag;
                (da + m / (alpha * alpha * lag) - 2.0 / alpha, db + 1.0 / alpha - lag / m)
            },
        );
        let n = data.len() as f64;
        let alpha_slope =
            if safe_softplus(theta[0]) > ALPHA_FLOOR { safe_logistic(theta[0]) } else { 0.0 };
        let sigma = safe_logistic(theta[1]);
        Ok(array![d_alpha / n * alpha_slope, d_beta / n * scale * sigma * (1.0 - sigma)])
    }
}

/// Upper bound actually used for β: `beta_cap` shrunk by the support margin.
fn beta_scale(data: &LaggedPairs) -> f64 {
    data.beta_cap * (1.0 - SUPPORT_MARGIN)
}

/// `θ → (α, β)`, with α floored at [`ALPHA_FLOOR`].
fn map_theta(theta: &Theta, scale: f64) -> (f64, f64) {
    (safe_softplus(theta[0]).max(ALPHA_FLOOR), scale * safe_logistic(theta[1]))
}

/// `(α, β) → θ`. β is placed inside `[1%, 99%]` of the admissible range so
/// the start is away from the flat tails of the logistic.
fn theta_from_params(guess: &ProcessParameters, scale: f64) -> Theta {
    let frac = (guess.beta / scale).clamp(0.01, 0.99);
    array![safe_softplus_inv(guess.alpha), safe_logit(frac)]
}
