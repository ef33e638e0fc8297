pub mod calc_errors;
pub mod curves;
pub mod plot_curves;
pub mod shell;
