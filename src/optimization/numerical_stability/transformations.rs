//! Numerically stable reparameterizations between ℝ and constrained sets.
//!
//! Optimizers run on unconstrained θ; models map θ into their domain with
//! the transforms below:
//! - [`safe_softplus`] / [`safe_softplus_inv`]: ℝ ↔ (0, ∞).
//! - [`safe_logistic`] / [`safe_logit`]: ℝ ↔ (0, 1).
//!
//! Cutoffs (`|x| > 20`) keep `f64` arithmetic away from overflow and from
//! cancellation in `ln(1 + eˣ)` / `ln(eˣ − 1)`.

/// Relative margin kept between a mapped parameter and an open upper bound.
///
/// A bound `b` is used as `b·(1 − SUPPORT_MARGIN)`, so iterates never touch
/// the boundary where a density vanishes.
pub const SUPPORT_MARGIN: f64 = 1e-6;

/// Clamp applied to probabilities before [`safe_logit`].
pub const LOGIT_EPS: f64 = 1e-12;

/// `ln(1 + eˣ)`, mapping ℝ → (0, ∞).
pub fn safe_softplus(x: f64) -> f64 {
    if x > 20.0 { x + (-x).exp().ln_1p() } else { x.exp().ln_1p() }
}

/// Inverse of [`safe_softplus`] on `(0, ∞)`: `ln(eˣ − 1)`.
pub fn safe_softplus_inv(x: f64) -> f64 {
    if x > 20.0 { x + (-(-x).exp()).ln_1p() } else { x.exp_m1().ln() }
}

/// `1 / (1 + e⁻ˣ)`, evaluated without overflow for either sign of `x`.
///
/// Also the derivative of [`safe_softplus`].
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Inverse of [`safe_logistic`]; `p` is clamped to `[LOGIT_EPS, 1 − LOGIT_EPS]`.
pub fn safe_logit(p: f64) -> f64 {
    let p = p.clamp(LOGIT_EPS, 1.0 - LOGIT_EPS);
    (p / (1.0 - p)).ln()
}
