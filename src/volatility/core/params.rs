//! Model-space parameters for the decomposed-Laplace volatility process.
//!
//! This module provides [`ProcessParameters`], the single parameter value
//! passed into the generator, the density evaluators, and the estimators.
//! Components hold their own copy; nothing inherits defaults from another
//! component.
//!
//! ## Invariants validated by constructors
//! - `alpha > 0` and finite
//! - `beta ≥ 0` and finite
//! - `0 ≤ theta < 1`
//! - `shape > 0` and finite
//!
//! ## Stationarity
//! The process is only well behaved when `2α < 1 − β`. This is a modelling
//! assumption that callers may deliberately violate (e.g. to sweep density
//! shapes), so it is exposed through [`ProcessParameters::is_stationary`]
//! instead of being enforced.
use crate::volatility::{
    core::validation::{validate_alpha, validate_beta, validate_shape, validate_theta},
    errors::ProcessResult,
};

/// Default shape parameter α.
pub const DEFAULT_ALPHA: f64 = 0.19;
/// Default persistence parameter β.
pub const DEFAULT_BETA: f64 = 0.3;
/// Default asymmetry parameter θ (symmetric shocks).
pub const DEFAULT_THETA: f64 = 0.0;
/// Default scale of the exponential shocks.
pub const DEFAULT_SHAPE: f64 = 1.0;

/// Validated parameters `(α, β, θ, scale)` of the volatility process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessParameters {
    /// α > 0
    pub alpha: f64,
    /// β ≥ 0
    pub beta: f64,
    /// 0 ≤ θ < 1
    pub theta: f64,
    /// Exponential scale > 0
    pub shape: f64,
}

impl ProcessParameters {
    /// Create validated model-space parameters.
    ///
    /// # Errors
    /// Returns `ProcessError::InvalidParameter` naming the first parameter
    /// that is outside its domain.
    pub fn new(alpha: f64, beta: f64, theta: f64, shape: f64) -> ProcessResult<Self> {
        let alpha = validate_alpha(alpha)?;
        let beta = validate_beta(beta)?;
        let theta = validate_theta(theta)?;
        let shape = validate_shape(shape)?;
        Ok(ProcessParameters { alpha, beta, theta, shape })
    }

    /// Symmetric parameters (`θ = 0`, unit exponential scale).
    pub fn symmetric(alpha: f64, beta: f64) -> ProcessResult<Self> {
        Self::new(alpha, beta, 0.0, DEFAULT_SHAPE)
    }

    /// Re-construct with a new α.
    pub fn with_alpha(self, alpha: f64) -> ProcessResult<Self> {
        Self::new(alpha, self.beta, self.theta, self.shape)
    }

    /// Re-construct with a new β.
    pub fn with_beta(self, beta: f64) -> ProcessResult<Self> {
        Self::new(self.alpha, beta, self.theta, self.shape)
    }

    /// Re-construct with a new θ.
    pub fn with_theta(self, theta: f64) -> ProcessResult<Self> {
        Self::new(self.alpha, self.beta, theta, self.shape)
    }

    /// Re-construct with a new exponential scale.
    pub fn with_shape(self, shape: f64) -> ProcessResult<Self> {
        Self::new(self.alpha, self.beta, self.theta, shape)
    }

    /// `true` when `2α < 1 − β`, the condition under which the recursion is
    /// stationary.
    pub fn is_stationary(&self) -> bool {
        2.0 * self.alpha < 1.0 - self.beta
    }

    /// Expected multiplier applied to ρ_{t−1} in one step,
    /// `α·((1 − θ) + (1 + θ))·scale + β = 2α·scale + β`.
    ///
    /// The recursion has a finite unconditional mean iff this is below one.
    pub fn mean_multiplier(&self) -> f64 {
        2.0 * self.alpha * self.shape + self.beta
    }

    /// Unconditional mean `1 / (1 − mean_multiplier)` when it exists.
    pub fn unconditional_mean(&self) -> Option<f64> {
        let m = self.mean_multiplier();
        if m < 1.0 { Some(1.0 / (1.0 - m)) } else { None }
    }
}

impl Default for ProcessParameters {
    fn default() -> Self {
        ProcessParameters {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            theta: DEFAULT_THETA,
            shape: DEFAULT_SHAPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volatility::errors::ProcessError;

    #[test]
    // Purpose
    // -------
    // Defaults match the named constants and satisfy the stationarity
    // condition.
    //
    // Expect
    // ------
    // - `(0.19, 0.3, 0.0, 1.0)`, `2·0.19 = 0.38 < 0.7`.
    fn default_parameters_use_named_constants_and_are_stationary() {
        let params = ProcessParameters::default();
        assert_eq!(params.alpha, DEFAULT_ALPHA);
        assert_eq!(params.beta, DEFAULT_BETA);
        assert_eq!(params.theta, DEFAULT_THETA);
        assert_eq!(params.shape, DEFAULT_SHAPE);
        assert!(params.is_stationary());
    }

    #[test]
    fn new_rejects_out_of_domain_values() {
        assert!(matches!(
            ProcessParameters::new(0.0, 0.3, 0.0, 1.0),
            Err(ProcessError::InvalidParameter { name: "alpha", .. })
        ));
        assert!(matches!(
            ProcessParameters::new(0.1, 0.3, 1.0, 1.0),
            Err(ProcessError::InvalidParameter { name: "theta", .. })
        ));
        assert!(matches!(
            ProcessParameters::new(0.1, 0.3, 0.0, -1.0),
            Err(ProcessError::InvalidParameter { name: "shape", .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Stationarity is reported, not enforced: a non-stationary combination
    // still constructs.
    fn non_stationary_parameters_construct_but_report_it() {
        let params = ProcessParameters::symmetric(0.4, 0.5).expect("valid domain");
        assert!(!params.is_stationary());
        assert!(params.unconditional_mean().is_none());
    }

    #[test]
    fn with_methods_revalidate() {
        let params = ProcessParameters::default();
        assert_eq!(params.with_beta(0.1).map(|p| p.beta), Ok(0.1));
        assert!(params.with_alpha(-0.2).is_err());
    }

    #[test]
    fn unconditional_mean_matches_closed_form() {
        let params = ProcessParameters::default();
        let mean = params.unconditional_mean().expect("stationary");
        assert!((mean - 1.0 / (1.0 - 0.68)).abs() < 1e-12);
    }
}
