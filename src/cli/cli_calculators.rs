use crate::Distillation::column_diagram::distillation_report;
use crate::Reactors::reactor_sizing::reactor_report;
use crate::Utils::calc_errors::CalcError;
use crate::Utils::plot_curves::{PlotFileRenderer, PlotSettings};
use crate::Utils::shell::{
    ChartRenderer, DefaultParameters, ParameterSource, TableRenderer, TerminalParameters,
};
use crate::settings::{TaskSettings, create_template};
use log::{LevelFilter, error, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Distillation,
    Reactor,
}

/// Collects the tool's inputs from `source`, computes and presents the report
pub fn run_tool<W: Write>(
    tool: Tool,
    source: &mut dyn ParameterSource,
    renderer: &mut dyn ChartRenderer,
    out: &mut W,
) -> Result<(), CalcError> {
    info!("running {:?} calculator", tool);
    let report = match tool {
        Tool::Distillation => distillation_report(source)?,
        Tool::Reactor => reactor_report(source)?,
    };
    report.present(renderer, out)
}

/// Puts the previous global log level back when dropped
struct LogLevelGuard(LevelFilter);

impl LogLevelGuard {
    fn set(level: LevelFilter) -> Self {
        let previous = log::max_level();
        log::set_max_level(level);
        Self(previous)
    }
}

impl Drop for LogLevelGuard {
    fn drop(&mut self) {
        log::set_max_level(self.0);
    }
}

/// Runs every tool the task file has a section for. The task's log level holds
/// only while the task runs.
pub fn run_task_file<P: AsRef<Path>, W: Write>(
    path: P,
    out: &mut W,
) -> Result<Vec<PathBuf>, CalcError> {
    let task = TaskSettings::load(path)?;
    let _level = LogLevelGuard::set(task.log_level()?);
    let mut renderer = task.renderer();
    let reports = task.reports()?;
    if reports.is_empty() {
        writeln!(out, "Task file has neither a 'distillation' nor a 'reactor' section.")?;
    }
    for report in reports {
        report.present(&mut renderer, out)?;
    }
    Ok(renderer.written)
}

/// Interactive run: prompts on stdin, charts go to `plots/`
pub fn interactive_tool(tool: Tool) {
    let stdin = io::stdin();
    let mut source = TerminalParameters::new(stdin.lock(), io::stdout());
    let mut renderer = PlotFileRenderer::new("plots", PlotSettings::default());
    let mut out = io::stdout();
    match run_tool(tool, &mut source, &mut renderer, &mut out) {
        Ok(()) => {
            for path in &renderer.written {
                println!("Chart saved: {}", path.display());
            }
        }
        Err(e) => {
            error!("{:?} calculator failed: {}", tool, e);
            println!("Error: {}", e);
        }
    }
}

/// Same as [`interactive_tool`] with defaults only, printing sample tables
/// instead of writing chart files
pub fn quick_look(tool: Tool) {
    let mut source = DefaultParameters;
    let mut renderer = TableRenderer::new(io::stdout(), 10);
    if let Err(e) = run_tool(tool, &mut source, &mut renderer, &mut io::stdout()) {
        println!("Error: {}", e);
    }
}

pub fn solve_from_file(path: &str) {
    let path = PathBuf::from(path.trim());
    if !path.exists() {
        println!("File not found: {}", path.display());
        return;
    }
    match run_task_file(&path, &mut io::stdout()) {
        Ok(written) => {
            for file in written {
                println!("Chart saved: {}", file.display());
            }
        }
        Err(e) => {
            error!("task file {} failed: {}", path.display(), e);
            println!("Error: {}", e);
        }
    }
}

pub fn generate_template(path: &str) {
    let path = path.trim();
    let path = if path.is_empty() { "task.json" } else { path };
    match create_template(path) {
        Ok(()) => println!("Template generated successfully: {}", path),
        Err(e) => println!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Utils::curves::Chart;
    use crate::Utils::shell::MapParameters;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[derive(Default)]
    struct CountingRenderer {
        charts: Vec<String>,
    }

    impl ChartRenderer for CountingRenderer {
        fn render(&mut self, chart: &Chart) -> Result<(), CalcError> {
            self.charts.push(chart.slug());
            Ok(())
        }
    }

    #[test]
    fn test_run_tool_distillation() {
        let mut renderer = CountingRenderer::default();
        let mut out: Vec<u8> = Vec::new();
        run_tool(Tool::Distillation, &mut DefaultParameters, &mut renderer, &mut out).unwrap();
        assert_eq!(renderer.charts, vec!["mccabe_thiele_diagram".to_string()]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("McCabe-Thiele Method"));
    }

    #[test]
    fn test_run_tool_reactor_with_values() {
        let mut values = HashMap::new();
        values.insert("F0".to_string(), 2.0);
        let mut renderer = CountingRenderer::default();
        let mut out: Vec<u8> = Vec::new();
        run_tool(
            Tool::Reactor,
            &mut MapParameters::new(values),
            &mut renderer,
            &mut out,
        )
        .unwrap();
        assert_eq!(renderer.charts.len(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Volume required for CSTR: 40.0000 m³"));
    }

    #[test]
    fn test_run_tool_input_error() {
        let mut values = HashMap::new();
        values.insert("X".to_string(), 2.0);
        let result = run_tool(
            Tool::Reactor,
            &mut MapParameters::new(values),
            &mut CountingRenderer::default(),
            &mut Vec::<u8>::new(),
        );
        assert!(matches!(result, Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_run_task_file_writes_charts() {
        let dir = tempdir().unwrap();
        let task = TaskSettings {
            output_dir: dir.path().join("out"),
            log_level: "off".to_string(),
            ..TaskSettings::template()
        };
        let task_path = dir.path().join("task.json");
        task.save(&task_path).unwrap();

        let level_before = log::max_level();
        let written = run_task_file(&task_path, &mut Vec::<u8>::new()).unwrap();
        // the task's level does not outlive the run
        assert_eq!(log::max_level(), level_before);
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("svg"));
        }
    }
}
