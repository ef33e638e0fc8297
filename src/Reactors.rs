//! # Ideal reactors
//!
//! Continuous stirred-tank (CSTR) and plug-flow (PFR) reactors with first order,
//! isothermal kinetics.
//!
//! ## Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `F0` | feed molar rate | mol/s |
//! | `k` | rate constant | 1/s |
//! | `X` | conversion of the reactant | - |
//! | `V` | reactor volume | m³ |
pub mod IdealReactors;
pub mod reactor_sizing;
