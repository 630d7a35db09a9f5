//! optimization — L-BFGS likelihood maximization and its error surface.
//!
//! Purpose
//! -------
//! Provide the fitting layer used by the volatility MLE: an argmin-backed
//! log-likelihood maximizer, stable reparameterizations from unconstrained
//! θ into model space, and a single error enum for everything that can go
//! wrong along the way.
//!
//! Key behaviors
//! -------------
//! - `loglik_optimizer`: maximize `ℓ(θ)` with L-BFGS (More–Thuente or
//!   Hager–Zhang line search), analytic or finite-difference gradients.
//! - `numerical_stability`: softplus / logistic transforms and the support
//!   margin.
//! - `errors`: [`OptError`](errors::OptError) and `OptResult<T>`, with
//!   conversions from argmin errors and from `ProcessError`.
//!
//! Conventions
//! -----------
//! - Solvers minimize `c(θ) = −ℓ(θ)`; user-facing values are in ℓ.
//! - No I/O; progress output exists only behind the `obs_slog` feature.
//!
//! Testing notes
//! -------------
//! - Submodules test solver wiring on toy quadratics, transform accuracy,
//!   and error conversions. The volatility fit is tested end to end in
//!   `tests/`.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use laplace_volatility::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
