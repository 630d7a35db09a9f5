//! Entry point for maximizing a [`LogLikelihood`] with L-BFGS.
//!
//! [`maximize`] validates the start point, picks the solver for
//! `opts.line_searcher`, and hands both to a shared runner that configures
//! the argmin executor and normalizes its final state into an
//! [`OptimOutcome`].
//!
//! With the `obs_slog` feature and `opts.verbose`, ℓ(θ₀) and the initial
//! gradient norm are printed to stderr and argmin's terminal slog observer
//! reports every iteration.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        Grad, OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        traits::{LineSearcher, LogLikelihood, MLEOptions},
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, IterState, Solver, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Maximize `ℓ(θ)` from `theta0`.
///
/// # Errors
/// - Anything `f.check(theta0, data)` rejects.
/// - Solver configuration or runtime failures converted from argmin.
/// - `OptimOutcome` validation failures (missing or non-finite θ̂ / ℓ(θ̂)).
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            run_lbfgs(theta0, opts, problem, build_optimizer_more_thuente(opts)?)
        }
        LineSearcher::HagerZhang => {
            run_lbfgs(theta0, opts, problem, build_optimizer_hager_zhang(opts)?)
        }
    }
}

/// Run `solver` on `problem` and collect the best state.
///
/// The reported value is `−best_cost`, i.e. back in log-likelihood space.
pub fn run_lbfgs<'a, F, S>(
    theta0: Theta, opts: &MLEOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
    S: Solver<ArgMinAdapter<'a, F>, IterState<Theta, Grad, (), (), (), f64>> + Send + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        print_initial_state(&theta0, &problem)?;
    }
    let mut executor = Executor::new(problem, solver).configure(|state| state.param(theta0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        executor = executor.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        executor = executor.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut state = executor.run()?.state().clone();
    let iterations = state.get_iter();
    let fn_evals = state.get_func_counts().clone();
    let termination = state.get_termination_status().clone();
    let grad = state.take_gradient();
    OptimOutcome::new(
        state.take_best_param(),
        -state.get_best_cost(),
        termination,
        iterations,
        fn_evals,
        grad,
    )
}

#[cfg(feature = "obs_slog")]
fn print_initial_state<F: LogLikelihood>(
    theta0: &Theta, problem: &ArgMinAdapter<'_, F>,
) -> OptResult<()> {
    let ll0 = -problem.cost(theta0)?;
    let grad_norm = problem.gradient(theta0).ok().map(|g| g.l2_norm());
    eprintln!(
        "init: ell(theta0) = {:.6}{}",
        ll0,
        grad_norm.map(|n| format!(", ||grad|| = {n:.6}")).unwrap_or_default()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{Cost, Tolerances, validation::validate_theta_input},
    };
    use ndarray::array;

    // Concave quadratic with maximum at `center`.
    struct Bowl {
        analytic: bool,
    }

    impl LogLikelihood for Bowl {
        type Data = Theta;

        fn value(&self, theta: &Theta, center: &Theta) -> OptResult<Cost> {
            Ok(-(theta - center).mapv(|d| d * d).sum())
        }

        fn check(&self, theta: &Theta, center: &Theta) -> OptResult<()> {
            validate_theta_input(theta, center.len())
        }

        fn grad(&self, theta: &Theta, center: &Theta) -> OptResult<Grad> {
            if self.analytic {
                Ok((theta - center).mapv(|d| -2.0 * d))
            } else {
                Err(OptError::GradientNotImplemented)
            }
        }
    }

    fn opts(line_searcher: LineSearcher) -> MLEOptions {
        let tols = Tolerances::new(Some(1e-8), None, Some(200)).unwrap();
        MLEOptions::new(tols, line_searcher, false, None).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Both line searches locate the maximum of a concave quadratic, with
    // analytic and finite-difference gradients.
    //
    // Given
    // -----
    // - ℓ(θ) = −‖θ − c‖², c = [0.7, −1.3], θ₀ = [0, 0].
    //
    // Expect
    // ------
    // - θ̂ within 1e-4 of c, ℓ(θ̂) ≈ 0, converged.
    fn maximize_recovers_quadratic_optimum() {
        let center = array![0.7, -1.3];
        for line_searcher in [LineSearcher::MoreThuente, LineSearcher::HagerZhang] {
            for analytic in [true, false] {
                let out =
                    maximize(&Bowl { analytic }, array![0.0, 0.0], &center, &opts(line_searcher))
                        .unwrap();
                assert!(out.converged, "{line_searcher:?} analytic={analytic}: {}", out.status);
                assert!((&out.theta_hat - &center).iter().all(|d| d.abs() < 1e-4));
                assert!(out.value.abs() < 1e-8);
            }
        }
    }

    #[test]
    fn maximize_runs_model_check_first() {
        let center = array![0.7, -1.3];
        let result =
            maximize(&Bowl { analytic: true }, array![0.0], &center, &MLEOptions::default());
        assert_eq!(result, Err(OptError::ThetaLengthMismatch { expected: 2, actual: 1 }));
    }
}
