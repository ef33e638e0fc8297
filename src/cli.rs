pub mod calculators_help;
pub mod cli_calculators;
pub mod cli_main;
