//! # McCabe-Thiele curves
//!
//! Closed-form curves of the McCabe-Thiele diagram for a binary mixture with
//! constant relative volatility:
//!
//! | Curve | Formula |
//! |-------|---------|
//! | equilibrium | `y = α·x / (1 + (α−1)·x)` |
//! | rectifying operating line | `y = R/(R+1)·x + xD/(R+1)` |
//! | stripping operating line | `y = q/(q−1)·(x − xB) + xB` |
//!
//! Singular parameters (R = −1, q = 1) are not trapped, the result is simply
//! infinite or NaN.
use nalgebra::DVector;

/// Vapour mole fraction in equilibrium with liquid mole fraction `x`
///
/// # Examples
/// ```
/// use UnitOpsCalc::Distillation::McCabeThiele::equilibrium_curve;
/// let y = equilibrium_curve(0.5, 2.0);
/// assert!((y - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn equilibrium_curve(x: f64, alpha: f64) -> f64 {
    alpha * x / (1.0 + (alpha - 1.0) * x)
}

/// Rectifying section operating line
pub fn rectifying_line(x: f64, R: f64, xD: f64) -> f64 {
    (R / (R + 1.0)) * x + xD / (R + 1.0)
}

/// Stripping section operating line
///
/// `xF` is part of the signature but does not enter the formula: the line is
/// drawn through (xB, xB) with the q-line slope `q/(q−1)`.
pub fn stripping_line(x: f64, xB: f64, _xF: f64, q: f64) -> f64 {
    (q / (q - 1.0)) * (x - xB) + xB
}

pub fn equilibrium_curve_vec(x: &DVector<f64>, alpha: f64) -> DVector<f64> {
    x.map(|xi| equilibrium_curve(xi, alpha))
}

pub fn rectifying_line_vec(x: &DVector<f64>, R: f64, xD: f64) -> DVector<f64> {
    x.map(|xi| rectifying_line(xi, R, xD))
}

pub fn stripping_line_vec(x: &DVector<f64>, xB: f64, xF: f64, q: f64) -> DVector<f64> {
    x.map(|xi| stripping_line(xi, xB, xF, q))
}
