//! # Ideal isothermal reactors, first order kinetics
//!
//! Sizing of a continuous stirred-tank reactor (CSTR) and a plug-flow reactor (PFR)
//! for a target conversion X, and the two conversion profiles of the calculator.
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | CSTR volume | `V = F0 / (k·(1−X))` |
//! | PFR volume | `V = (F0/k)·ln(1/(1−X))` |
//! | PFR profile | `X(x) = 1 − exp(−k·x/F0)`, x ∈ [0, L] |
//! | CSTR profile | `X(V) = 1 − exp(−k·F0·V)`, V ∈ [0, 5] |
//!
//! The two profile formulas are kept exactly as the calculator has always drawn
//! them. They do not follow from the sizing equations above (the CSTR design
//! equation inverts to `X = 1 − F0/(k·V)`, see [`cstr_conversion_from_volume`]).
//!
//! X = 1 gives infinite volumes; nothing here traps it.
use crate::Utils::curves::linspace;
use nalgebra::DVector;

/// samples in each conversion profile
pub const PROFILE_POINTS: usize = 100;
/// upper end of the CSTR profile volume range, m³
pub const CSTR_PROFILE_MAX_VOLUME: f64 = 5.0;

/// Required volumes `(V_CSTR, V_PFR)` to reach conversion `X`
///
/// # Examples
/// ```
/// use UnitOpsCalc::Reactors::IdealReactors::calculate_volumes;
/// let (v_cstr, v_pfr) = calculate_volumes(1.0, 0.1, 0.5);
/// assert!((v_cstr - 20.0).abs() < 1e-9);
/// assert!((v_pfr - 10.0 * 2.0_f64.ln()).abs() < 1e-9);
/// ```
pub fn calculate_volumes(F0: f64, k: f64, X: f64) -> (f64, f64) {
    let V_CSTR = F0 / (k * (1.0 - X));
    let V_PFR = F0 / k * (1.0 / (1.0 - X)).ln();
    (V_CSTR, V_PFR)
}

/// Conversion along the PFR, `L` is the reactor length
pub fn pfr_conversion_profile(F0: f64, k: f64, L: f64) -> (DVector<f64>, DVector<f64>) {
    let x = linspace(0.0, L, PROFILE_POINTS);
    let conversion = x.map(|xi| 1.0 - (-k * xi / F0).exp());
    (x, conversion)
}

/// Conversion of the CSTR over volumes from 0 to 5 m³
pub fn cstr_conversion_vs_volume(F0: f64, k: f64) -> (DVector<f64>, DVector<f64>) {
    let V = linspace(0.0, CSTR_PROFILE_MAX_VOLUME, PROFILE_POINTS);
    let X = V.map(|v| 1.0 - (-k * F0 * v).exp());
    (V, X)
}

/// Inverse of the CSTR sizing equation: conversion reached in volume `V`
pub fn cstr_conversion_from_volume(F0: f64, k: f64, V: f64) -> f64 {
    1.0 - F0 / (k * V)
}
