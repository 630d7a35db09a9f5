//! traits — model interface, optimizer options, and normalized results.
//!
//! Purpose
//! -------
//! Define what a likelihood model must provide to be fitted by
//! [`maximize`](crate::optimization::loglik_optimizer::maximize) and how a run
//! is configured and reported.
//!
//! Key behaviors
//! -------------
//! - [`LogLikelihood`]: models expose `ℓ(θ)` on an unconstrained θ, an
//!   up-front `check`, and optionally an analytic `∇ℓ(θ)`.
//! - [`MLEOptions`] / [`Tolerances`] / [`LineSearcher`]: validated run
//!   configuration.
//! - [`OptimOutcome`]: the optimizer-agnostic result (θ̂, ℓ(θ̂), status,
//!   counters).
//!
//! Conventions
//! -----------
//! - Users *maximize* `ℓ(θ)`; the argmin adapter minimizes `c(θ) = −ℓ(θ)` and
//!   flips the sign of analytic gradients itself. Gradients returned by
//!   models are always `∇ℓ(θ)`.
//! - `OptimOutcome::value` is reported in log-likelihood space.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Cost, FnEvalMap, Grad, Theta,
        validation::{validate_theta_hat, validate_value, verify_tol_cost, verify_tol_grad},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// Default gradient-norm tolerance of [`MLEOptions::default`].
pub const DEFAULT_TOL_GRAD: f64 = 1e-6;

/// Default iteration cap of [`MLEOptions::default`].
pub const DEFAULT_MAX_ITER: usize = 300;

/// Log-likelihood over an unconstrained parameter vector.
///
/// Required:
/// - `value(θ, data)`: evaluate `ℓ(θ)`; return an `OptError` for inputs the
///   model cannot evaluate.
/// - `check(θ, data)`: reject malformed `θ`/`data` once before the run.
///
/// Optional:
/// - `grad(θ, data)`: analytic `∇ℓ(θ)`. The default reports
///   `OptError::GradientNotImplemented`, which makes the adapter fall back
///   to finite differences of the cost.
pub trait LogLikelihood {
    type Data: 'static;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Line search used inside L-BFGS.
///
/// Parses case-insensitively from `"MoreThuente"` / `"HagerZhang"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSearcher {
    #[default]
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// MLEOptions — configuration of one L-BFGS run.
///
/// Fields
/// ------
/// - `tols`: [`Tolerances`], stopping rules.
/// - `line_searcher`: [`LineSearcher`], line search inside L-BFGS.
/// - `verbose`: `bool`, attach the terminal observer and print ℓ(θ₀) when the
///   `obs_slog` feature is enabled.
/// - `lbfgs_mem`: `Option<usize>`, history size; `None` uses
///   [`DEFAULT_LBFGS_MEM`](crate::optimization::loglik_optimizer::DEFAULT_LBFGS_MEM).
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
}

impl MLEOptions {
    /// Construct options; numeric tolerances are validated by
    /// [`Tolerances::new`].
    ///
    /// # Errors
    /// `OptError::InvalidLBFGSMem` if `lbfgs_mem == Some(0)`.
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, verbose: bool, lbfgs_mem: Option<usize>,
    ) -> OptResult<Self> {
        if let Some(0) = lbfgs_mem {
            return Err(OptError::InvalidLBFGSMem {
                mem: 0,
                reason: "L-BFGS memory must be greater than zero.",
            });
        }
        Ok(Self { tols, line_searcher, verbose, lbfgs_mem })
    }
}

impl Default for MLEOptions {
    /// `tol_grad = 1e-6`, no cost tolerance, 300 iterations, More–Thuente,
    /// quiet, default memory.
    fn default() -> Self {
        Self {
            tols: Tolerances {
                tol_grad: Some(DEFAULT_TOL_GRAD),
                tol_cost: None,
                max_iter: Some(DEFAULT_MAX_ITER),
            },
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
        }
    }
}

/// Stopping rules: gradient norm, cost change, and iteration cap.
///
/// At least one rule must be set; see [`Tolerances::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - `OptError::NoTolerancesProvided` if all three are `None`.
    /// - `OptError::InvalidTolGrad` / `OptError::InvalidTolCost` for
    ///   non-finite or non-positive tolerances.
    /// - `OptError::InvalidMaxIter` if `max_iter == Some(0)`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_grad(tol_grad)?;
        verify_tol_cost(tol_cost)?;
        if let Some(0) = max_iter {
            return Err(OptError::InvalidMaxIter {
                max_iter: 0,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// OptimOutcome — normalized result of [`maximize`](crate::optimization::loglik_optimizer::maximize).
///
/// Fields
/// ------
/// - `theta_hat`: best unconstrained parameters found (all finite).
/// - `value`: `ℓ(θ̂)`, finite.
/// - `converged`: `true` for any terminated status except a solver exit
///   (e.g. a failed line search).
/// - `status`: human-readable termination status.
/// - `termination`: the raw argmin termination status.
/// - `iterations`: solver iterations performed.
/// - `fn_evals`: argmin counters (`cost_count`, `gradient_count`, ...).
/// - `grad_norm`: L2 norm of the last cost gradient, if available.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub termination: TerminationStatus,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Reason given by the solver for exiting early, if it did.
    pub fn solver_exit(&self) -> Option<&str> {
        match &self.termination {
            TerminationStatus::Terminated(TerminationReason::SolverExit(text)) => {
                Some(text.as_str())
            }
            _ => None,
        }
    }

    /// Build a validated outcome from raw solver state.
    ///
    /// # Errors
    /// - `OptError::MissingThetaHat` / `OptError::InvalidThetaHat` for a
    ///   missing or non-finite θ̂.
    /// - `OptError::NonFiniteCost` for a non-finite value.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match &termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(TerminationReason::SolverExit(text)) => {
                (false, format!("Solver exit: {text}"))
            }
            other => (true, format!("{other:?}")),
        };
        Ok(Self {
            theta_hat,
            value,
            converged,
            status,
            termination,
            iterations: iterations as usize,
            fn_evals,
            grad_norm: grad.map(|g| g.l2_norm()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn line_searcher_parses_case_insensitively() {
        assert_eq!("hagerZHANG".parse::<LineSearcher>(), Ok(LineSearcher::HagerZhang));
        assert_eq!("MoreThuente".parse::<LineSearcher>(), Ok(LineSearcher::MoreThuente));
        assert!(matches!(
            "backtracking".parse::<LineSearcher>(),
            Err(OptError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Tolerances reject the empty configuration and invalid values.
    fn tolerances_validate_inputs() {
        assert_eq!(Tolerances::new(None, None, None), Err(OptError::NoTolerancesProvided));
        assert!(matches!(
            Tolerances::new(Some(-1.0), None, None),
            Err(OptError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            Tolerances::new(None, Some(f64::NAN), None),
            Err(OptError::InvalidTolCost { .. })
        ));
        assert!(matches!(
            Tolerances::new(None, None, Some(0)),
            Err(OptError::InvalidMaxIter { .. })
        ));
        assert!(Tolerances::new(None, None, Some(10)).is_ok());
    }

    #[test]
    fn mle_options_reject_zero_memory_and_default_is_valid() {
        let tols = Tolerances::new(Some(1e-6), None, Some(100)).unwrap();
        assert!(matches!(
            MLEOptions::new(tols, LineSearcher::HagerZhang, false, Some(0)),
            Err(OptError::InvalidLBFGSMem { .. })
        ));
        let default = MLEOptions::default();
        assert_eq!(
            Tolerances::new(default.tols.tol_grad, default.tols.tol_cost, default.tols.max_iter),
            Ok(default.tols)
        );
    }

    #[test]
    // Purpose
    // -------
    // `OptimOutcome::new` maps termination status and validates θ̂.
    //
    // Given
    // -----
    // - A solver-converged status with a gradient [3, 4].
    // - A missing θ̂.
    //
    // Expect
    // ------
    // - converged = true, grad_norm = 5.
    // - MissingThetaHat for the missing vector.
    fn optim_outcome_maps_status_and_validates_theta() {
        let out = OptimOutcome::new(
            Some(array![0.1, 0.2]),
            -12.5,
            TerminationStatus::Terminated(TerminationReason::SolverConverged),
            7,
            FnEvalMap::new(),
            Some(array![3.0, 4.0]),
        )
        .unwrap();
        assert!(out.converged);
        assert_eq!(out.iterations, 7);
        assert_eq!(out.grad_norm, Some(5.0));

        let missing = OptimOutcome::new(
            None,
            0.0,
            TerminationStatus::NotTerminated,
            0,
            FnEvalMap::new(),
            None,
        );
        assert_eq!(missing, Err(OptError::MissingThetaHat));
    }

    #[test]
    // Purpose
    // -------
    // A solver exit (an aborted line search) is not reported as converged
    // and its reason stays available.
    fn solver_exit_is_not_converged() {
        let reason = "Line search terminated with: 'Non-finite cost value: NaN'".to_string();
        let out = OptimOutcome::new(
            Some(array![0.1, 0.2]),
            -3.0,
            TerminationStatus::Terminated(TerminationReason::SolverExit(reason.clone())),
            2,
            FnEvalMap::new(),
            None,
        )
        .unwrap();
        assert!(!out.converged);
        assert_eq!(out.solver_exit(), Some(reason.as_str()));

        let converged = OptimOutcome::new(
            Some(array![0.1]),
            -3.0,
            TerminationStatus::Terminated(TerminationReason::MaxItersReached),
            300,
            FnEvalMap::new(),
            None,
        )
        .unwrap();
        assert_eq!(converged.solver_exit(), None);
    }
}
