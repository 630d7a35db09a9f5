//! Integration tests for the volatility simulate / evaluate / estimate pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end workflow: simulate ρ with the default
//!   parameterization, evaluate densities over simulated and synthetic
//!   grids, run the fixed-step estimator, and fit the symmetric model by
//!   L-BFGS.
//! - Exercise realistic sample sizes and optimizer settings rather than the
//!   hand-computed edge cases covered by unit tests.
//!
//! Coverage
//! --------
//! - `volatility::core`: `ProcessGenerator`, `DensityEvaluator`,
//!   `LaggedPairs`, `SimOpts` seeding.
//! - `volatility::models`: `EstimatorEngine::estimate` and `fit_mle`.
//! - `optimization::loglik_optimizer`: both line searches via `MLEOptions`.
//!
//! Exclusions
//! ----------
//! - Input validation and error variants of individual building blocks;
//!   those are covered by unit tests.
use laplace_volatility::{
    optimization::{
        errors::OptError,
        loglik_optimizer::{LineSearcher, MLEOptions, Tolerances},
    },
    volatility::{
        core::{
            density::DensityEvaluator,
            options::{EstimatorOptions, SimOpts},
            params::ProcessParameters,
            process::ProcessGenerator,
        },
        errors::ProcessError,
        models::estimator::EstimatorEngine,
    },
};
use ndarray::{Array1, array};

/// Purpose
/// -------
/// Optimizer settings shared by the MLE tests: gradient tolerance `1e-6`,
/// at most 500 iterations, default L-BFGS memory.
fn mle_options(line_searcher: LineSearcher) -> MLEOptions {
    let tols = Tolerances::new(Some(1e-6), None, Some(500))
        .expect("Tolerances::new should accept positive tolerances");
    MLEOptions::new(tols, line_searcher, false, None)
        .expect("MLEOptions::new should succeed with default memory")
}

#[test]
// Purpose
// -------
// Default parameters produce a well-formed path of the requested length.
//
// Given
// -----
// - `{alpha 0.19, beta 0.3, theta 0, shape 1}`, n = 2000, seeded RNG.
//
// Expect
// ------
// - Length 2000, ρ[0] = 1, every later value finite and strictly above 1.
fn default_generation_produces_finite_path_above_one() {
    // Arrange
    let generator = ProcessGenerator::new(ProcessParameters::default(), SimOpts::seeded(7));

    // Act
    let rho = generator.generate(2000).expect("generation should succeed");

    // Assert
    assert_eq!(rho.len(), 2000);
    assert_eq!(rho[0], 1.0);
    assert!(rho.iter().skip(1).all(|&v| v.is_finite() && v > 1.0));
}

#[test]
// Purpose
// -------
// Stationary parameterizations stay finite across many independent seeded
// paths, including asymmetric shocks.
//
// Given
// -----
// - (α, β, θ) ∈ {(0.19, 0.3, 0), (0.1, 0.6, 0.5), (0.3, 0.2, 0.9)}, all with
//   2α < 1 − β; 25 paths of length 3000 each.
//
// Expect
// ------
// - Every entry of every path is finite.
fn stationary_paths_stay_finite_across_seeds() {
    for (alpha, beta, theta) in [(0.19, 0.3, 0.0), (0.1, 0.6, 0.5), (0.3, 0.2, 0.9)] {
        let params = ProcessParameters::new(alpha, beta, theta, 1.0).unwrap();
        assert!(params.is_stationary());
        let generator = ProcessGenerator::new(params, SimOpts::seeded(1000));

        let paths = generator.generate_paths(3000, 25).unwrap();

        assert_eq!(paths.dim(), (25, 3000));
        assert!(paths.iter().all(|v| v.is_finite()), "non-finite path for {params:?}");
        assert!(paths.column(0).iter().all(|&v| v == 1.0));
    }
}

#[test]
// Purpose
// -------
// The asymmetric density over a dense synthetic grid is finite everywhere.
//
// Given
// -----
// - ρ = linspace(1, 10, 10000), α = 0.2, β = 0, θ = 0.2.
//
// Expect
// ------
// - 9999 finite values; repeating the call returns identical output.
fn asymmetric_density_over_linspace_grid_is_finite() {
    let eval = DensityEvaluator::new(ProcessParameters::symmetric(0.2, 0.0).unwrap());
    let rho = Array1::linspace(1.0, 10.0, 10000);

    let pdf = eval.asymmetric_pdf(rho.view(), Some(0.2)).unwrap();

    assert_eq!(pdf.len(), 9999);
    assert!(pdf.iter().all(|v| v.is_finite()));
    assert_eq!(pdf, eval.asymmetric_pdf(rho.view(), Some(0.2)).unwrap());
}

#[test]
// Purpose
// -------
// Densities evaluated on a simulated path are consistent: the asymmetric
// form with a vanishing θ tracks the symmetric form, and θ = 0 is rejected.
fn densities_on_simulated_path_are_consistent() {
    let params = ProcessParameters::default();
    let rho = ProcessGenerator::new(params, SimOpts::seeded(99)).generate(500).unwrap();
    let eval = DensityEvaluator::new(params);

    let sym = eval.symmetric_pdf(rho.view()).unwrap();
    let asym = eval.asymmetric_pdf(rho.view(), Some(1e-6)).unwrap();

    assert_eq!(sym.len(), 499);
    assert!(sym.iter().all(|&v| v.is_finite() && v > 0.0));
    for (a, s) in asym.iter().zip(sym.iter()) {
        if *s > 1e-8 {
            assert!(((a - s) / s).abs() < 1e-4);
        }
    }
    assert!(matches!(
        eval.asymmetric_pdf(rho.view(), Some(0.0)),
        Err(ProcessError::DegenerateDensity { .. })
    ));
}

#[test]
// Purpose
// -------
// The fixed-step estimator over a simulated path yields finite traces of
// the path length, seeded at half the prior values.
//
// Given
// -----
// - Default parameters, default estimator options with a fixed seed, n = 100.
//
// Expect
// ------
// - Traces of length 100, alpha[0] = 0.095, beta[0] = 0.15, all finite.
fn estimator_trace_over_simulated_path_is_finite() {
    let options =
        EstimatorOptions { sim_opts: SimOpts::seeded(31), ..EstimatorOptions::default() };
    let engine = EstimatorEngine::new(ProcessParameters::default(), options);

    let trace = engine.estimate(100).unwrap();

    assert_eq!(trace.len(), 100);
    assert!((trace.alpha[0] - 0.095).abs() < 1e-15);
    assert!((trace.beta[0] - 0.15).abs() < 1e-15);
    assert!(trace.alpha.iter().chain(trace.beta.iter()).all(|v| v.is_finite()));
    assert_eq!(trace.first_non_finite(), None);
}

#[test]
// Purpose
// -------
// Maximum likelihood recovers the generating parameters with either line
// search.
//
// Given
// -----
// - 5000 points simulated from (α, β) = (0.19, 0.3) with a fixed seed.
// - The engine starts from a deliberately different prior (0.1, 0.15).
//
// Expect
// ------
// - |α̂ − 0.19| < 0.03 and |β̂ − 0.3| < 0.05 for both line searches.
fn mle_recovers_generating_parameters() {
    let rho = ProcessGenerator::new(ProcessParameters::default(), SimOpts::seeded(4242))
        .generate(5000)
        .unwrap();
    let prior = ProcessParameters::symmetric(0.1, 0.15).unwrap();
    let engine = EstimatorEngine::new(prior, EstimatorOptions::default());

    for line_searcher in [LineSearcher::MoreThuente, LineSearcher::HagerZhang] {
        let model = engine.fit_mle(rho.view(), mle_options(line_searcher)).unwrap();

        let fitted = model.fitted().unwrap();
        assert!((fitted.alpha - 0.19).abs() < 0.03, "{line_searcher:?}: {}", fitted.alpha);
        assert!((fitted.beta - 0.3).abs() < 0.05, "{line_searcher:?}: {}", fitted.beta);
        let outcome = model.results.as_ref().unwrap();
        assert!(outcome.value.is_finite());
        assert_eq!(outcome.theta_hat.len(), 2);
    }
}

#[test]
// Purpose
// -------
// Invalid series surface as optimizer errors from `fit_mle`.
fn mle_rejects_invalid_series() {
    let engine = EstimatorEngine::new(ProcessParameters::default(), EstimatorOptions::default());

    let with_nan = array![1.0, 1.5, f64::NAN, 2.0];
    assert!(matches!(
        engine.fit_mle(with_nan.view(), MLEOptions::default()),
        Err(OptError::NonFiniteData { index: 2, .. })
    ));

    let dips = array![1.0, 0.5, 2.0];
    assert!(matches!(
        engine.fit_mle(dips.view(), MLEOptions::default()),
        Err(OptError::InfeasibleSupport { .. })
    ));
}
