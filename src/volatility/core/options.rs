//! Options — configuration for simulation and estimation workflows.
//!
//! Purpose
//! -------
//! Collect the configuration knobs of the volatility stack in one place so
//! call sites pass explicit, validated options instead of ad-hoc flags:
//! RNG seeding for simulation ([`SimOpts`]) and the fixed-step estimator
//! settings ([`EstimatorOptions`]).
//!
//! Key behaviors
//! -------------
//! - [`SimOpts`] carries an optional seed. `Some(seed)` yields reproducible
//!   paths; `None` delegates to OS entropy.
//! - [`EstimatorOptions`] carries the step size `C`, the seed fraction used
//!   for the initial iterate, the simulation options used when the estimator
//!   generates its own ρ, and a `verbose` flag honored under `obs_slog`.
//!
//! Conventions
//! -----------
//! - Defaults reproduce the reference configuration: `C = 1e-7`, seed
//!   fraction `0.5`.
//! - Constructors validate numeric fields and never panic.
//!
//! Testing notes
//! -------------
//! - Unit tests cover defaults and rejection of invalid step sizes and
//!   seed fractions.
use crate::volatility::errors::{ProcessError, ProcessResult};

/// Default fixed step size `C` of the gradient-style estimator.
pub const DEFAULT_STEP_SIZE: f64 = 1e-7;

/// Default fraction of the prior parameter used as the first iterate.
pub const DEFAULT_SEED_FRACTION: f64 = 0.5;

/// SimOpts — simulation-time configuration.
///
/// Fields
/// ------
/// - `seed`: `Option<u64>`
///   Optional RNG seed. `Some(seed)` yields reproducible runs; `None`
///   draws a fresh seed from OS entropy on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimOpts {
    /// Optional RNG seed for reproducibility.
    pub seed: Option<u64>,
}

impl SimOpts {
    /// Construct simulation options from an optional seed.
    pub fn new(seed: Option<u64>) -> SimOpts {
        SimOpts { seed }
    }

    /// Reproducible options with a fixed seed.
    pub fn seeded(seed: u64) -> SimOpts {
        SimOpts { seed: Some(seed) }
    }
}

/// EstimatorOptions — configuration of the fixed-step estimator.
///
/// Purpose
/// -------
/// Bundle the knobs of the literal (α, β) update recurrence so the engine
/// itself stays free of magic numbers.
///
/// Fields
/// ------
/// - `step_size`: `f64`
///   Fixed step `C` applied at every iteration; finite and > 0.
/// - `seed_fraction`: `f64`
///   Fraction of the prior `(α, β)` used as the first iterate; finite and > 0.
/// - `sim_opts`: [`SimOpts`]
///   Seeding used when the estimator simulates its own ρ.
/// - `verbose`: `bool`
///   Prints a start/finish summary to stderr when the `obs_slog` feature is
///   enabled; ignored otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorOptions {
    pub step_size: f64,
    pub seed_fraction: f64,
    pub sim_opts: SimOpts,
    pub verbose: bool,
}

impl EstimatorOptions {
    /// Construct validated estimator options.
    ///
    /// # Errors
    /// Returns `ProcessError::InvalidParameter` if `step_size` or
    /// `seed_fraction` is non-finite or not strictly positive.
    pub fn new(
        step_size: f64, seed_fraction: f64, sim_opts: SimOpts, verbose: bool,
    ) -> ProcessResult<Self> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ProcessError::InvalidParameter {
                name: "step_size",
                value: step_size,
                reason: "Step size must be finite and strictly positive.",
            });
        }
        if !seed_fraction.is_finite() || seed_fraction <= 0.0 {
            return Err(ProcessError::InvalidParameter {
                name: "seed_fraction",
                value: seed_fraction,
                reason: "Seed fraction must be finite and strictly positive.",
            });
        }
        Ok(EstimatorOptions { step_size, seed_fraction, sim_opts, verbose })
    }
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        EstimatorOptions {
            step_size: DEFAULT_STEP_SIZE,
            seed_fraction: DEFAULT_SEED_FRACTION,
            sim_opts: SimOpts::default(),
            verbose: false,
        }
    }
}
