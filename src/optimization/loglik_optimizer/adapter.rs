//! Bridge from a [`LogLikelihood`] to argmin's `CostFunction` / `Gradient`.
//!
//! The cost is `c(θ) = −ℓ(θ)`. Analytic gradients are negated; when the model
//! has none, the cost itself is finite-differenced (central first, forward as
//! a fallback), so that branch needs no sign flip.
use std::cell::RefCell;

use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        traits::LogLikelihood,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// A model and its data viewed as an argmin minimization problem.
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// `−ℓ(θ)`; a non-finite ℓ is reported as `OptError::NonFiniteCost` so
    /// the line search backs off instead of accepting it.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let value = self.f.value(theta, self.data)?;
        if !value.is_finite() {
            return Err(OptError::NonFiniteCost { value }.into());
        }
        Ok(-value)
    }
}

impl<'a, F: LogLikelihood> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Gradient of the cost.
    ///
    /// Uses `−∇ℓ(θ)` when the model implements it. On
    /// `OptError::GradientNotImplemented`, central differences of the cost
    /// are tried first; if a cost evaluation failed or the result is not
    /// finite, forward differences are used instead.
    ///
    /// # Errors
    /// Model errors other than `GradientNotImplemented`, cost errors raised
    /// during differencing, and gradient validation failures.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = theta.len();
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, dim)?;
                Ok(-g)
            }
            Err(OptError::GradientNotImplemented) => {
                let failure: RefCell<Option<Error>> = RefCell::new(None);
                let cost = |t: &Theta| -> f64 {
                    self.cost(t).unwrap_or_else(|e| {
                        failure.borrow_mut().get_or_insert(e);
                        f64::NAN
                    })
                };
                let central = theta.central_diff(&cost);
                if failure.borrow().is_none() && validate_grad(&central, dim).is_ok() {
                    return Ok(central);
                }
                forward_gradient(theta, &cost, &failure)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Forward-difference gradient of `cost`, surfacing any captured cost error.
fn forward_gradient<G: Fn(&Theta) -> f64>(
    theta: &Theta, cost: &G, failure: &RefCell<Option<Error>>,
) -> Result<Grad, Error> {
    failure.replace(None);
    let grad = theta.forward_diff(cost);
    if let Some(err) = failure.take() {
        return Err(err);
    }
    validate_grad(&grad, theta.len())?;
    Ok(grad)
}
