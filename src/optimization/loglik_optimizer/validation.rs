//! Validation helpers shared by the optimizer layer.
//!
//! - Tolerances: [`verify_tol_grad`], [`verify_tol_cost`].
//! - Per-evaluation checks: [`validate_theta_input`], [`validate_grad`].
//! - Final results: [`validate_theta_hat`], [`validate_value`].
//!
//! Each helper reports the first offending element through a dedicated
//! [`OptError`] variant.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{Grad, Theta},
};

/// Validate an optional gradient-norm tolerance (finite and > 0 when set).
///
/// # Errors
/// `OptError::InvalidTolGrad`.
pub fn verify_tol_grad(tol: Option<f64>) -> OptResult<()> {
    match tol {
        Some(tol) if !tol.is_finite() => {
            Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." })
        }
        Some(tol) if tol <= 0.0 => {
            Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." })
        }
        _ => Ok(()),
    }
}

/// Validate an optional cost-change tolerance (finite and > 0 when set).
///
/// # Errors
/// `OptError::InvalidTolCost`.
pub fn verify_tol_cost(tol: Option<f64>) -> OptResult<()> {
    match tol {
        Some(tol) if !tol.is_finite() => {
            Err(OptError::InvalidTolCost { tol, reason: "Tolerance must be finite." })
        }
        Some(tol) if tol <= 0.0 => {
            Err(OptError::InvalidTolCost { tol, reason: "Tolerance must be positive." })
        }
        _ => Ok(()),
    }
}

/// Validate an unconstrained input vector: expected length, finite entries.
///
/// # Errors
/// - `OptError::ThetaLengthMismatch` on a length mismatch.
/// - `OptError::InvalidThetaInput` for the first non-finite entry.
pub fn validate_theta_input(theta: &Theta, dim: usize) -> OptResult<()> {
    if theta.len() != dim {
        return Err(OptError::ThetaLengthMismatch { expected: dim, actual: theta.len() });
    }
    match theta.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(OptError::InvalidThetaInput { index, value: theta[index] }),
        None => Ok(()),
    }
}

/// Validate a gradient: `grad.len() == dim` and all entries finite.
///
/// # Errors
/// - `OptError::GradientDimMismatch` on a length mismatch.
/// - `OptError::InvalidGradient` for the first non-finite entry.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    match grad.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(OptError::InvalidGradient {
            index,
            value: grad[index],
            reason: "Gradient elements must be finite.",
        }),
        None => Ok(()),
    }
}

/// Unwrap θ̂ if present and finite.
///
/// # Errors
/// - `OptError::MissingThetaHat` if the solver produced no parameters.
/// - `OptError::InvalidThetaHat` for the first non-finite entry.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    let theta = theta_hat.ok_or(OptError::MissingThetaHat)?;
    match theta.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(OptError::InvalidThetaHat {
            index,
            value: theta[index],
            reason: "Parameter estimates must be finite.",
        }),
        None => Ok(theta),
    }
}

/// Reject a NaN/±inf log-likelihood value.
///
/// # Errors
/// `OptError::NonFiniteCost`.
pub fn validate_value(value: f64) -> OptResult<()> {
    if value.is_finite() { Ok(()) } else { Err(OptError::NonFiniteCost { value }) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn theta_input_checks_length_then_finiteness() {
        assert_eq!(validate_theta_input(&array![0.0, 1.0], 2), Ok(()));
        assert_eq!(
            validate_theta_input(&array![0.0], 2),
            Err(OptError::ThetaLengthMismatch { expected: 2, actual: 1 })
        );
        assert!(matches!(
            validate_theta_input(&array![0.0, f64::INFINITY], 2),
            Err(OptError::InvalidThetaInput { index: 1, .. })
        ));
    }

    #[test]
    fn grad_reports_first_non_finite_entry() {
        assert!(matches!(
            validate_grad(&array![1.0, f64::NAN, f64::NAN], 3),
            Err(OptError::InvalidGradient { index: 1, .. })
        ));
        assert!(matches!(
            validate_grad(&array![1.0], 2),
            Err(OptError::GradientDimMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn theta_hat_and_value_checks() {
        assert_eq!(validate_theta_hat(None), Err(OptError::MissingThetaHat));
        assert!(validate_theta_hat(Some(array![f64::NAN])).is_err());
        assert_eq!(validate_theta_hat(Some(array![0.5])), Ok(array![0.5]));
        assert!(validate_value(-3.0).is_ok());
        assert!(validate_value(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn tolerance_checks_accept_none() {
        assert!(verify_tol_grad(None).is_ok());
        assert!(verify_tol_cost(None).is_ok());
        assert!(verify_tol_grad(Some(0.0)).is_err());
        assert!(verify_tol_cost(Some(f64::INFINITY)).is_err());
    }
}
