//! # Binary distillation, McCabe-Thiele method
//!
//! Graphical stage analysis of a binary column with constant relative volatility
//! and constant molar overflow.
//!
//! ## Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `α` | relative volatility of the light component | - |
//! | `x`, `y` | liquid and vapour mole fraction of the light component | - |
//! | `xF`, `xD`, `xB` | feed, distillate and bottoms mole fraction | - |
//! | `R` | reflux ratio L/D | - |
//! | `q` | feed quality, liquid fraction of the feed | - |
//!
//! [`McCabeThiele`] holds the pure curve functions, [`column_diagram`] samples them
//! into a chart and a report.
pub mod McCabeThiele;
pub mod column_diagram;
mod mccabe_thiele_tests;
