//! volatility — decomposed Standard Laplace volatility process.
//!
//! Purpose
//! -------
//! Model a discrete-time volatility process built from the decomposition of
//! a Standard Laplace variate into the difference of two exponentials:
//! simulate it, evaluate its conditional densities, and estimate its
//! parameters.
//!
//! Key behaviors
//! -------------
//! - [`core`]: parameters and options, the ρ–recursion generator, lag-1 pair
//!   containers, and the symmetric / asymmetric densities.
//! - [`models`]: the fixed-step (α, β) estimator trace and the L-BFGS
//!   maximum-likelihood fit of the symmetric model.
//! - [`errors`]: [`ProcessError`] and [`ProcessResult`] shared by both.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every component owns its own [`ProcessParameters`]; nothing is shared
//!   or mutated across calls.
//! - Randomness enters only through the generator and is reproducible when
//!   a seed is configured.
//!
//! Conventions
//! -----------
//! - ρ series are `ndarray::Array1<f64>` starting at `ρ_0 = 1`.
//! - Densities and likelihoods operate on lag-1 pairs `(ρ[t + 1], ρ[t])`.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    DensityEvaluator, EstimatorOptions, LaggedPairs, ProcessGenerator, ProcessParameters, SimOpts,
};

pub use self::errors::{ProcessError, ProcessResult};

pub use self::models::{EstimatorEngine, EstimatorTrace, SymmetricSLCModel};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use laplace_volatility::volatility::prelude::*;
//
// to import the main volatility surface in a single line.

pub mod prelude {
    pub use super::{
        DensityEvaluator, EstimatorEngine, EstimatorOptions, EstimatorTrace, LaggedPairs,
        ProcessError, ProcessGenerator, ProcessParameters, ProcessResult, SimOpts,
        SymmetricSLCModel,
    };
}
