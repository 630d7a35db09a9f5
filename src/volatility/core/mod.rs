//! core — parameters, simulation, and densities of the volatility process.
//!
//! Purpose
//! -------
//! Collect the building blocks of the decomposed Standard Laplace volatility
//! process: validated parameters and options, the ρ–recursion generator,
//! lag-1 pair containers, and the closed-form conditional densities. The
//! estimators in [`crate::volatility::models`] build on these primitives.
//!
//! Key behaviors
//! -------------
//! - [`ProcessParameters`] holds `(α, β, θ, scale)`; every component owns a
//!   copy instead of inheriting defaults.
//! - [`ProcessGenerator`] simulates ρ paths with injectable randomness
//!   ([`SimOpts`] or a caller-owned RNG).
//! - [`DensityEvaluator`] evaluates the symmetric and asymmetric densities
//!   over arbitrary ρ grids; [`LaggedPairs`] is the validated input of the
//!   likelihood.
//!
//! Invariants & assumptions
//! ------------------------
//! - Generated paths start at `ρ_0 = 1` and have the requested length.
//! - Density outputs have length `len(ρ) − 1`.
//! - Stationarity (`2α < 1 − β`) is queried, never enforced.

pub mod data;
pub mod density;
pub mod options;
pub mod params;
pub mod process;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::{LaggedPairs, lagged_views};
pub use self::density::{DEFAULT_PDF_THETA, DensityEvaluator};
pub use self::options::{DEFAULT_SEED_FRACTION, DEFAULT_STEP_SIZE, EstimatorOptions, SimOpts};
pub use self::params::{
    DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_SHAPE, DEFAULT_THETA, ProcessParameters,
};
pub use self::process::{ProcessGenerator, recursion_loop};
pub use self::validation::{
    validate_alpha, validate_beta, validate_density_theta, validate_length,
    validate_likelihood_series, validate_nonzero_lags, validate_shape, validate_theta,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use laplace_volatility::volatility::core::prelude::*;
//
// to import the main core surface in a single line.

pub mod prelude {
    pub use super::data::LaggedPairs;
    pub use super::density::DensityEvaluator;
    pub use super::options::{EstimatorOptions, SimOpts};
    pub use super::params::ProcessParameters;
    pub use super::process::ProcessGenerator;
}
