//! # Settings Module
//!
//! ## Purpose
//! Task files let a calculation be repeated without typing every number again.
//! A task file is a JSON document; every field is optional:
//!
//! ```json
//! {
//!   "output_dir": "plots",
//!   "plot_format": "svg",
//!   "plot_width": 1024,
//!   "plot_height": 768,
//!   "log_level": "info",
//!   "distillation": { "alpha": 2.0, "xF": 0.4, "xD": 0.95, "xB": 0.05, "R": 1.5, "q": 1.0 },
//!   "reactor": { "F0": 1.0, "k": 0.1, "X": 0.5 }
//! }
//! ```
//!
//! A missing section means the tool is skipped; a missing parameter inside a
//! section takes its default. Parameter names not known to the tool are rejected.
//!
//! ## Usage Pattern
//! ```rust,ignore
//! use UnitOpsCalc::settings::TaskSettings;
//!
//! let task = TaskSettings::load("problem.json")?;
//! for report in task.reports()? {
//!     report.present(&mut task.renderer(), &mut std::io::stdout())?;
//! }
//! ```
use crate::Distillation::column_diagram::{ColumnSpec, distillation_report};
use crate::Reactors::reactor_sizing::{ReactorSpec, reactor_report};
use crate::Utils::calc_errors::CalcError;
use crate::Utils::plot_curves::{PlotFileRenderer, PlotFormat, PlotSettings};
use crate::Utils::shell::{MapParameters, Report, ScalarParam};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

fn default_output_dir() -> PathBuf {
    PathBuf::from("plots")
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub plot_format: PlotFormat,
    #[serde(default = "default_width")]
    pub plot_width: u32,
    #[serde(default = "default_height")]
    pub plot_height: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distillation: Option<HashMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactor: Option<HashMap<String, f64>>,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            plot_format: PlotFormat::default(),
            plot_width: default_width(),
            plot_height: default_height(),
            log_level: default_log_level(),
            distillation: None,
            reactor: None,
        }
    }
}

fn defaults_of(params: &[ScalarParam]) -> HashMap<String, f64> {
    params
        .iter()
        .map(|p| (p.name.to_string(), p.default))
        .collect()
}

impl TaskSettings {
    /// Task with both tools and every parameter at its default value
    pub fn template() -> Self {
        Self {
            distillation: Some(defaults_of(&ColumnSpec::PARAMETERS)),
            reactor: Some(defaults_of(&ReactorSpec::PARAMETERS)),
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, CalcError> {
        let task: TaskSettings = serde_json::from_str(text)?;
        task.validate()?;
        Ok(task)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CalcError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let task = Self::from_json(&text)?;
        info!("task file {} loaded", path.display());
        Ok(task)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CalcError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), text)?;
        info!("task file written to {}", path.as_ref().display());
        Ok(())
    }

    /// Unknown parameter names and log levels are rejected here; value ranges are
    /// checked when the parameters are collected.
    pub fn validate(&self) -> Result<(), CalcError> {
        self.log_level()?;
        if let Some(values) = &self.distillation {
            MapParameters::new(values.clone())
                .ensure_known("distillation", &ColumnSpec::PARAMETERS)?;
        }
        if let Some(values) = &self.reactor {
            MapParameters::new(values.clone()).ensure_known("reactor", &ReactorSpec::PARAMETERS)?;
        }
        Ok(())
    }

    pub fn log_level(&self) -> Result<LevelFilter, CalcError> {
        self.log_level
            .trim()
            .parse()
            .map_err(|_| CalcError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn plot_settings(&self) -> PlotSettings {
        PlotSettings {
            width: self.plot_width,
            height: self.plot_height,
            format: self.plot_format,
            ..PlotSettings::default()
        }
    }

    pub fn renderer(&self) -> PlotFileRenderer {
        PlotFileRenderer::new(&self.output_dir, self.plot_settings())
    }

    /// Reports of every tool that has a section in the task
    pub fn reports(&self) -> Result<Vec<Report>, CalcError> {
        let mut reports = Vec::new();
        if let Some(values) = &self.distillation {
            reports.push(distillation_report(&mut MapParameters::new(values.clone()))?);
        }
        if let Some(values) = &self.reactor {
            reports.push(reactor_report(&mut MapParameters::new(values.clone()))?);
        }
        Ok(reports)
    }
}

/// Writes the default task to `path`
pub fn create_template<P: AsRef<Path>>(path: P) -> Result<(), CalcError> {
    TaskSettings::template().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_task_uses_defaults() {
        let task = TaskSettings::from_json("{}").unwrap();
        assert_eq!(task, TaskSettings::default());
        assert_eq!(task.output_dir, PathBuf::from("plots"));
        assert_eq!(task.plot_format, PlotFormat::Svg);
        assert_eq!(task.log_level().unwrap(), LevelFilter::Info);
        assert!(task.reports().unwrap().is_empty());
    }

    #[test]
    fn test_template_round_trip() {
        let file = NamedTempFile::new().unwrap();
        create_template(file.path()).unwrap();
        let loaded = TaskSettings::load(file.path()).unwrap();
        assert_eq!(loaded, TaskSettings::template());

        let distillation = loaded.distillation.as_ref().unwrap();
        assert_eq!(distillation.len(), 6);
        assert_eq!(distillation["alpha"], 2.0);
        assert_eq!(distillation["xD"], 0.95);
        let reactor = loaded.reactor.as_ref().unwrap();
        assert_eq!(reactor.len(), 3);
        assert_eq!(reactor["k"], 0.1);
    }

    #[test]
    fn test_partial_task() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{ "plot_format": "png", "plot_width": 640, "log_level": "debug", "reactor": {{ "X": 0.9 }} }}"#
        )
        .unwrap();
        let task = TaskSettings::load(file.path()).unwrap();
        assert_eq!(task.plot_format, PlotFormat::Png);
        assert_eq!(task.log_level().unwrap(), LevelFilter::Debug);
        let plot = task.plot_settings();
        assert_eq!((plot.width, plot.height), (640, 768));
        assert!(task.distillation.is_none());

        let reports = task.reports().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].charts.len(), 2);
        assert!(
            reports[0]
                .narrative
                .iter()
                .any(|t| t.contains("conversion of 90.00%"))
        );
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let err = TaskSettings::from_json(r#"{ "distillation": { "alpha": 2.0, "reflux": 1.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, CalcError::UnknownParameter { .. }));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = TaskSettings::from_json(r#"{ "log_level": "verbose", "reactor": {} }"#)
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidLogLevel(ref level) if level == "verbose"));

        let task = TaskSettings::from_json(r#"{ "log_level": "OFF" }"#).unwrap();
        assert_eq!(task.log_level().unwrap(), LevelFilter::Off);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TaskSettings::from_json(r#"{ "colour": "red" }"#).unwrap_err();
        assert!(matches!(err, CalcError::TaskFile(_)));
    }

    #[test]
    fn test_out_of_range_value_fails_on_reports() {
        let task = TaskSettings::from_json(r#"{ "distillation": { "xF": 1.5 } }"#).unwrap();
        assert!(matches!(
            task.reports(),
            Err(CalcError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = TaskSettings::load("/definitely/not/here/task.json").unwrap_err();
        assert!(matches!(err, CalcError::Io(_)));
    }
}
