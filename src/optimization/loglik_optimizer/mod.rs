//! loglik_optimizer — L-BFGS maximization of log-likelihoods via argmin.
//!
//! Purpose
//! -------
//! Fit any model that implements [`LogLikelihood`] on an unconstrained
//! parameter vector. The volatility MLE is the in-crate user; the layer
//! itself knows nothing about volatility.
//!
//! Key behaviors
//! -------------
//! - [`maximize`] validates θ₀ through the model's `check`, builds L-BFGS
//!   with the requested line search, runs it, and returns an
//!   [`OptimOutcome`].
//! - Analytic gradients are used when provided; otherwise finite
//!   differences of the cost are taken (`finitediff`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters live in ℝᵈ; constraints are handled by the model through
//!   reparameterizations from
//!   [`numerical_stability`](crate::optimization::numerical_stability).
//! - Costs and gradients entering argmin are finite; violations surface as
//!   `OptError`s.
//!
//! Testing notes
//! -------------
//! - Unit tests use small quadratic likelihoods with known optima; the
//!   volatility fit is exercised in `volatility::models::mle` and the
//!   integration tests.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use laplace_volatility::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
