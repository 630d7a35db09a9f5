//! numerical_stability — guarded transforms for constrained parameters.
//!
//! Purpose
//! -------
//! Map between the unconstrained θ that L-BFGS moves in and bounded model
//! parameters (positive α, β inside the density support) without overflow
//! or loss of precision near the boundaries.
//!
//! Key behaviors
//! -------------
//! - Softplus / inverse softplus for strictly positive parameters.
//! - Logistic / logit for parameters confined to a bounded interval.
//! - [`SUPPORT_MARGIN`] keeps mapped values strictly inside open bounds.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    LOGIT_EPS, SUPPORT_MARGIN, safe_logistic, safe_logit, safe_softplus, safe_softplus_inv,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use laplace_volatility::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{
        SUPPORT_MARGIN, safe_logistic, safe_logit, safe_softplus, safe_softplus_inv,
    };
}
