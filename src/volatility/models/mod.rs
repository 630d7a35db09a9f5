//! models — estimators of the volatility process parameters.
//!
//! Purpose
//! -------
//! Turn a ρ series into parameter estimates, either with the exploratory
//! fixed-step recurrence ([`EstimatorEngine`]) or by L-BFGS maximum
//! likelihood of the symmetric density ([`SymmetricSLCModel`]).
//!
//! Downstream usage
//! ----------------
//! - `EstimatorEngine::estimate` / `estimate_from` return an
//!   [`EstimatorTrace`] of every iterate.
//! - `EstimatorEngine::fit_mle` returns a fitted [`SymmetricSLCModel`] whose
//!   `fitted_params` hold `(α̂, β̂)`.

pub mod estimator;
pub mod mle;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::estimator::{EstimatorEngine, EstimatorTrace};
pub use self::mle::SymmetricSLCModel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use laplace_volatility::volatility::models::prelude::*;
//
// to import the main model surface in a single line.

pub mod prelude {
    pub use super::estimator::{EstimatorEngine, EstimatorTrace};
    pub use super::mle::SymmetricSLCModel;
}
