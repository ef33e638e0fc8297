use thiserror::Error;

/// error types of the input/output shell
///
/// The numeric cores never return errors: singular parameters give NaN or infinity
/// and those are shown as they are.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task file error: {0}")]
    TaskFile(#[from] serde_json::Error),
    #[error("Unknown parameter '{name}' in section '{section}'")]
    UnknownParameter { section: String, name: String },
    #[error("Parameter '{name}' = {value} is outside of the range [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Cannot parse '{input}' as a value for '{name}'")]
    InvalidNumber { name: String, input: String },
    #[error("Input stream closed while reading '{0}'")]
    InputClosed(String),
    #[error("Unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("Plotting error: {0}")]
    Plot(String),
}
