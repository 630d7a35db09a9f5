//! loglik_optimizer::types — numeric aliases and pre-wired L-BFGS solvers.
//!
//! Purpose
//! -------
//! Keep the `ndarray`/argmin generics in one place so model code only sees
//! [`Theta`], [`Grad`], and [`Cost`].
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` are column vectors of length `dim(θ)`; for the
//!   symmetric volatility likelihood `dim(θ) = 2`.
//! - `Cost` is `c(θ) = −ℓ(θ)`; higher layers flip the sign back.
//! - Line-search aliases use argmin's `(Param, Gradient, Float)` forms.
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Unconstrained parameter vector θ.
pub type Theta = Array1<f64>;

/// Gradient vector, same shape as [`Theta`].
pub type Grad = Array1<f64>;

/// Scalar objective value.
pub type Cost = f64;

/// argmin function-evaluation counters keyed by name (e.g. `"cost_count"`).
pub type FnEvalMap = HashMap<String, u64>;

/// Default L-BFGS history size.
pub const DEFAULT_LBFGS_MEM: usize = 7;

pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS with Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS with More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;
