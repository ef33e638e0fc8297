//! # UnitOpsCalc
//!
//! Coursework calculators for chemical engineering:
//!
//! - [`Distillation`]: McCabe-Thiele diagram of a binary column (equilibrium curve,
//!   rectifying and stripping operating lines)
//! - [`Reactors`]: volumes of ideal CSTR and PFR for a first order reaction and their
//!   conversion profiles
//!
//! Both tools take a few scalars through a [`Utils::shell::ParameterSource`], evaluate
//! closed-form formulas and return a [`Utils::shell::Report`] with charts and text.
#[allow(non_snake_case)]
pub mod Distillation;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Reactors;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
