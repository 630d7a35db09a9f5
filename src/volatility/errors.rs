//! Errors for the decomposed-Laplace volatility stack (parameter checks,
//! series validation, density degeneracies, and fitted-model state).
//!
//! This module defines [`ProcessError`] and the [`ProcessResult`] alias used
//! by the process generator, the density evaluators, and both estimators.
//! The type implements `Display`/`Error` and is converted into
//! `OptError` at the optimizer boundary.
//!
//! ## Conventions
//! - **Indices are 0-based positions in the ρ series.** Density errors point
//!   at the pair `t = (ρ[t + 1], ρ[t])`, whose lag is `ρ[t]`, so the pair
//!   index and the series index of the offending lag coincide.
//!   `NonFiniteData` can also name the last point, which is no pair's lag.
//! - Parameter errors carry the parameter name so one variant covers α, β, θ,
//!   the exponential scale, and estimator knobs.
//! - Raw evaluators propagate NaN/±inf instead of raising; only structural
//!   degeneracies (θ = 0, ρ_lag = 0) are reported as errors.
use statrs::distribution::ExpError;

/// Crate-wide result alias for volatility operations that may produce
/// [`ProcessError`].
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Unified error type for the volatility process and its estimators.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    // ---- Parameters ----
    /// A model or estimator parameter is outside its admissible domain.
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    /// Requested sequence length is not admissible.
    InvalidLength { n: usize, reason: &'static str },

    // ---- Densities ----
    /// Density is undefined for the given input (θ = 0 or ρ_lag = 0).
    DegenerateDensity { index: Option<usize>, reason: &'static str },

    // ---- Series validation ----
    /// Series is empty.
    EmptySeries,

    /// `ρ[index]` is NaN/±inf.
    NonFiniteData { index: usize, value: f64 },

    /// `ρ[index]`, used as a lag, is ≤ 0.
    NonPositiveLag { index: usize, value: f64 },

    /// No β ≥ 0 keeps every residual ρ_t − 1 − β·ρ_lag strictly positive.
    InfeasibleSupport { bound: f64 },

    // ---- Model state ----
    /// Model hasn't been fitted yet.
    ModelNotFitted,

    // ---- statrs distribution errors ----
    /// Wrapper for statrs::distribution::ExpError
    InvalidExpParam,
}

impl std::error::Error for ProcessError {}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameters ----
            ProcessError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid parameter {name} = {value}: {reason}")
            }
            ProcessError::InvalidLength { n, reason } => {
                write!(f, "Invalid sequence length {n}: {reason}")
            }

            // ---- Densities ----
            ProcessError::DegenerateDensity { index: Some(index), reason } => {
                write!(f, "Density is degenerate at pair {index}: {reason}")
            }
            ProcessError::DegenerateDensity { index: None, reason } => {
                write!(f, "Density is degenerate: {reason}")
            }

            // ---- Series validation ----
            ProcessError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            ProcessError::NonFiniteData { index, value } => {
                write!(f, "Data point at index {index} is non-finite: {value}")
            }
            ProcessError::NonPositiveLag { index, value } => {
                write!(f, "Lagged value at pair {index} is non-positive: {value}")
            }
            ProcessError::InfeasibleSupport { bound } => {
                write!(
                    f,
                    "Symmetric density has no admissible beta: support bound is {bound}, must be > 0"
                )
            }

            // ---- Model state ----
            ProcessError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet.")
            }

            // ---- statrs ----
            ProcessError::InvalidExpParam => {
                write!(f, "Invalid exponential distribution parameter.")
            }
        }
    }
}

impl From<ExpError> for ProcessError {
    fn from(_err: ExpError) -> Self {
        ProcessError::InvalidExpParam
    }
}
