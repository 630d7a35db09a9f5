//! Validation helpers — reusable checks for model parameters, lengths, and
//! lagged series.
//!
//! Purpose
//! -------
//! Centralize the small domain checks used across the volatility stack so
//! constructors and evaluators fail fast with structured [`ProcessError`]s
//! instead of producing silently meaningless arrays.
//!
//! Key behaviors
//! -------------
//! - Validate the four model parameters (α > 0, β ≥ 0, θ ∈ [0, 1), scale > 0).
//! - Validate the asymmetry argument accepted by the asymmetric density,
//!   distinguishing the degenerate θ = 0 case from out-of-range values.
//! - Validate requested sequence lengths and the lagged values of a ρ grid.
//!
//! Conventions
//! -----------
//! - All helpers return [`ProcessResult`] and never panic.
//! - The stationarity condition `2α < 1 − β` is a modelling assumption and is
//!   deliberately not checked here; see `ProcessParameters::is_stationary`.
//! - This module contains no I/O and no logging.
use crate::volatility::errors::{ProcessError, ProcessResult};
use ndarray::ArrayView1;

/// Validate the shape parameter α: finite and strictly positive.
pub fn validate_alpha(alpha: f64) -> ProcessResult<f64> {
    if !alpha.is_finite() {
        return Err(ProcessError::InvalidParameter {
            name: "alpha",
            value: alpha,
            reason: "Alpha must be finite.",
        });
    }
    if alpha <= 0.0 {
        return Err(ProcessError::InvalidParameter {
            name: "alpha",
            value: alpha,
            reason: "Alpha must be strictly positive.",
        });
    }
    Ok(alpha)
}

/// Validate the persistence parameter β: finite and non-negative.
pub fn validate_beta(beta: f64) -> ProcessResult<f64> {
    if !beta.is_finite() {
        return Err(ProcessError::InvalidParameter {
            name: "beta",
            value: beta,
            reason: "Beta must be finite.",
        });
    }
    if beta < 0.0 {
        return Err(ProcessError::InvalidParameter {
            name: "beta",
            value: beta,
            reason: "Beta must be non-negative.",
        });
    }
    Ok(beta)
}

/// Validate the asymmetry parameter θ of a process: `0 ≤ θ < 1`.
pub fn validate_theta(theta: f64) -> ProcessResult<f64> {
    if !theta.is_finite() || !(0.0..1.0).contains(&theta) {
        return Err(ProcessError::InvalidParameter {
            name: "theta",
            value: theta,
            reason: "Theta must lie in [0, 1).",
        });
    }
    Ok(theta)
}

/// Validate the scale of the exponential shocks: finite and strictly positive.
pub fn validate_shape(shape: f64) -> ProcessResult<f64> {
    if !shape.is_finite() || shape <= 0.0 {
        return Err(ProcessError::InvalidParameter {
            name: "shape",
            value: shape,
            reason: "Exponential scale must be finite and strictly positive.",
        });
    }
    Ok(shape)
}

/// Validate the θ argument of the asymmetric density.
///
/// Errors
/// ------
/// - [`ProcessError::DegenerateDensity`] when `theta == 0` (the asymmetric
///   closed form divides by θ; use the symmetric density instead).
/// - [`ProcessError::InvalidParameter`] when θ is non-finite or outside `[0, 1)`.
pub fn validate_density_theta(theta: f64) -> ProcessResult<f64> {
    let theta = validate_theta(theta)?;
    if theta == 0.0 {
        return Err(ProcessError::DegenerateDensity {
            index: None,
            reason: "Asymmetric density is undefined at theta = 0; use the symmetric density.",
        });
    }
    Ok(theta)
}

/// Validate a requested sequence length (`n ≥ 1`).
pub fn validate_length(n: usize) -> ProcessResult<usize> {
    if n == 0 {
        return Err(ProcessError::InvalidLength {
            n,
            reason: "Sequence length must be at least 1.",
        });
    }
    Ok(n)
}

/// Reject any exactly-zero lagged value.
///
/// Only the division-by-zero case is an error; negative or non-finite lags
/// are left to propagate through the closed-form densities.
pub fn validate_nonzero_lags(rho_lag: ArrayView1<f64>) -> ProcessResult<()> {
    match rho_lag.iter().position(|&v| v == 0.0) {
        Some(index) => Err(ProcessError::DegenerateDensity {
            index: Some(index),
            reason: "Lagged volatility is zero; the density divides by rho_lag.",
        }),
        None => Ok(()),
    }
}

/// Validate a ρ series for likelihood work: non-empty and finite, with
/// strictly positive values at every lag position. Reported indices are
/// positions in `rho`.
pub fn validate_likelihood_series(rho: ArrayView1<f64>) -> ProcessResult<()> {
    if rho.len() < 2 {
        return Err(ProcessError::EmptySeries);
    }
    for (index, &value) in rho.iter().enumerate() {
        if !value.is_finite() {
            return Err(ProcessError::NonFiniteData { index, value });
        }
    }
    for (index, &value) in rho.iter().take(rho.len() - 1).enumerate() {
        if value <= 0.0 {
            return Err(ProcessError::NonPositiveLag { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // Representative valid/invalid inputs for every helper, including the
    // boundary values 0 and 1 for theta and zero lags.
    // -------------------------------------------------------------------------

    #[test]
    fn validate_alpha_rejects_zero_negative_and_nan() {
        assert!(validate_alpha(0.19).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_alpha(bad),
                Err(ProcessError::InvalidParameter { name: "alpha", .. })
            ));
        }
    }

    #[test]
    fn validate_beta_accepts_zero_and_rejects_negative() {
        assert_eq!(validate_beta(0.0), Ok(0.0));
        assert!(matches!(
            validate_beta(-0.1),
            Err(ProcessError::InvalidParameter { name: "beta", .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Theta is half-open: 0 is admissible for the process, 1 is not.
    fn validate_theta_is_half_open_unit_interval() {
        assert!(validate_theta(0.0).is_ok());
        assert!(validate_theta(0.999).is_ok());
        assert!(validate_theta(1.0).is_err());
        assert!(validate_theta(-1e-12).is_err());
    }

    #[test]
    fn validate_shape_rejects_non_positive_scale() {
        assert!(validate_shape(1.0).is_ok());
        assert!(validate_shape(0.0).is_err());
    }

    #[test]
    // Purpose
    // -------
    // The asymmetric density distinguishes theta = 0 (degenerate) from an
    // out-of-range theta (invalid parameter).
    fn validate_density_theta_reports_degenerate_at_zero() {
        assert!(matches!(
            validate_density_theta(0.0),
            Err(ProcessError::DegenerateDensity { index: None, .. })
        ));
        assert!(matches!(
            validate_density_theta(1.5),
            Err(ProcessError::InvalidParameter { name: "theta", .. })
        ));
        assert_eq!(validate_density_theta(0.2), Ok(0.2));
    }

    #[test]
    fn validate_length_rejects_zero() {
        assert!(matches!(validate_length(0), Err(ProcessError::InvalidLength { n: 0, .. })));
        assert_eq!(validate_length(1), Ok(1));
    }

    #[test]
    fn validate_nonzero_lags_reports_first_zero_index() {
        let lags = array![1.0, -2.0, 0.0, 0.0];
        assert!(matches!(
            validate_nonzero_lags(lags.view()),
            Err(ProcessError::DegenerateDensity { index: Some(2), .. })
        ));
        assert!(validate_nonzero_lags(array![1.0, -2.0].view()).is_ok());
    }

    #[test]
    fn validate_likelihood_series_checks_length_finiteness_and_lags() {
        assert!(matches!(
            validate_likelihood_series(array![1.0].view()),
            Err(ProcessError::EmptySeries)
        ));
        assert!(matches!(
            validate_likelihood_series(array![1.0, f64::NAN].view()),
            Err(ProcessError::NonFiniteData { index: 1, .. })
        ));
        assert!(matches!(
            validate_likelihood_series(array![1.0, -1.0, 2.0].view()),
            Err(ProcessError::NonPositiveLag { index: 1, .. })
        ));
        // The last value is never used as a lag.
        assert!(validate_likelihood_series(array![1.0, 2.0, -3.0].view()).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Series errors index ρ itself, not the lag-1 pairs.
    //
    // Given
    // -----
    // - ρ of length 3 (pairs 0 and 1) with NaN in the last position.
    //
    // Expect
    // ------
    // - NonFiniteData at index 2, one past the last pair index.
    fn series_errors_report_series_positions() {
        assert!(matches!(
            validate_likelihood_series(array![1.0, 2.0, f64::INFINITY].view()),
            Err(ProcessError::NonFiniteData { index: 2, .. })
        ));
        assert!(matches!(
            validate_likelihood_series(array![1.0, 2.0, 0.0, 4.0].view()),
            Err(ProcessError::NonPositiveLag { index: 2, value }) if value == 0.0
        ));
    }
}
