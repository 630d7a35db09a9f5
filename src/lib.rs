//! laplace_volatility — decomposed Standard Laplace volatility process.
//!
//! Purpose
//! -------
//! Simulate the volatility process obtained by decomposing a Standard
//! Laplace variate into two exponential shocks, evaluate its closed-form
//! conditional densities, and estimate `(α, β)` from a ρ series.
//!
//! Key behaviors
//! -------------
//! - `volatility`: process parameters, path generation, densities, and
//!   estimators (fixed-step trace and L-BFGS maximum likelihood).
//! - `optimization`: the argmin-backed log-likelihood maximizer, stable
//!   reparameterizations, and the optimizer error surface.
//!
//! Conventions
//! -----------
//! - Numeric inputs and outputs are `ndarray` arrays of `f64`.
//! - Fallible operations return `ProcessResult<T>` (process layer) or
//!   `OptResult<T>` (anything that runs the optimizer).
//! - Library code does not log; the `obs_slog` feature enables progress
//!   output on stderr for verbose runs.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` holds the end-to-end
//!   simulate / evaluate / estimate pipeline.

pub mod optimization;
pub mod volatility;
