//! # Presentation shell
//!
//! The calculators only talk to the outside world through two capabilities:
//!
//! - [`ParameterSource`]: "collect a named scalar with a default and bounds"
//! - [`ChartRenderer`]: "render a set of named 2-D curves with axis labels"
//!
//! plus a [`Report`] that bundles charts, a summary table and narrative text.
//! Any terminal, file or GUI backend satisfying these traits can drive the
//! calculators.
use super::calc_errors::CalcError;
use super::curves::Chart;
use log::{info, warn};
use prettytable::{Table, row};
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// Description of one scalar input: the contract of a single input widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarParam {
    /// key used in task files
    pub name: &'static str,
    /// prompt shown to the user
    pub label: &'static str,
    pub default: f64,
    /// closed range `[min, max]`, if any
    pub bounds: Option<(f64, f64)>,
    pub help: Option<&'static str>,
}

impl ScalarParam {
    pub const fn new(name: &'static str, label: &'static str, default: f64) -> Self {
        Self {
            name,
            label,
            default,
            bounds: None,
            help: None,
        }
    }

    pub const fn bounded(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    pub const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    /// Simple range check, the only validation the calculators do.
    pub fn check(&self, value: f64) -> Result<f64, CalcError> {
        match self.bounds {
            Some((min, max)) if !(min..=max).contains(&value) => Err(CalcError::OutOfRange {
                name: self.name.to_string(),
                value,
                min,
                max,
            }),
            _ => Ok(value),
        }
    }
}

pub trait ParameterSource {
    fn collect_scalar(&mut self, param: &ScalarParam) -> Result<f64, CalcError>;
}

/// Every parameter takes its default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultParameters;

impl ParameterSource for DefaultParameters {
    fn collect_scalar(&mut self, param: &ScalarParam) -> Result<f64, CalcError> {
        Ok(param.default)
    }
}

/// Values given by name (usually a section of a task file); missing names fall
/// back to defaults.
#[derive(Debug, Clone, Default)]
pub struct MapParameters {
    pub values: HashMap<String, f64>,
}

impl MapParameters {
    pub fn new(values: HashMap<String, f64>) -> Self {
        Self { values }
    }

    /// Fails on names that none of `known` describes, so that a typo in a task
    /// file does not silently become a default.
    pub fn ensure_known(&self, section: &str, known: &[ScalarParam]) -> Result<(), CalcError> {
        let mut names: Vec<&String> = self.values.keys().collect();
        names.sort();
        for name in names {
            if !known.iter().any(|p| p.name == name) {
                return Err(CalcError::UnknownParameter {
                    section: section.to_string(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl ParameterSource for MapParameters {
    fn collect_scalar(&mut self, param: &ScalarParam) -> Result<f64, CalcError> {
        match self.values.get(param.name) {
            Some(&value) => param.check(value),
            None => Ok(param.default),
        }
    }
}

/// Interactive prompts over any reader/writer pair (stdin/stdout in the binary).
///
/// An empty answer takes the default, an unparsable or out-of-range answer is
/// reported and asked again.
pub struct TerminalParameters<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalParameters<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn prompt(&mut self, param: &ScalarParam) -> Result<(), CalcError> {
        if let Some(help) = param.help {
            writeln!(self.writer, "\x1b[90m  ({})\x1b[0m", help)?;
        }
        match param.bounds {
            Some((min, max)) => write!(
                self.writer,
                "\x1b[36m{} [{}..{}] (default {}): \x1b[0m",
                param.label, min, max, param.default
            )?,
            None => write!(
                self.writer,
                "\x1b[36m{} (default {}): \x1b[0m",
                param.label, param.default
            )?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ParameterSource for TerminalParameters<R, W> {
    fn collect_scalar(&mut self, param: &ScalarParam) -> Result<f64, CalcError> {
        loop {
            self.prompt(param)?;
            let mut input = String::new();
            if self.reader.read_line(&mut input)? == 0 {
                return Err(CalcError::InputClosed(param.name.to_string()));
            }
            let trimmed = input.trim();
            if trimmed.is_empty() {
                return Ok(param.default);
            }
            let parsed = trimmed
                .parse::<f64>()
                .map_err(|_| CalcError::InvalidNumber {
                    name: param.name.to_string(),
                    input: trimmed.to_string(),
                })
                .and_then(|value| param.check(value));
            match parsed {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.writer, "\x1b[31m{}\x1b[0m", e)?,
            }
        }
    }
}

pub trait ChartRenderer {
    fn render(&mut self, chart: &Chart) -> Result<(), CalcError>;
}

/// Prints every `stride`-th sample of each curve as a table, for a quick look at
/// the numbers without opening a chart file.
pub struct TableRenderer<W: Write> {
    writer: W,
    stride: usize,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(writer: W, stride: usize) -> Self {
        Self {
            writer,
            stride: stride.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChartRenderer for TableRenderer<W> {
    fn render(&mut self, chart: &Chart) -> Result<(), CalcError> {
        writeln!(self.writer, "\n=== {} ===", chart.title)?;
        for curve in &chart.curves {
            let mut table = Table::new();
            table.add_row(row![chart.x_label, format!("{}: {}", chart.y_label, curve.label)]);
            let last = curve.len().saturating_sub(1);
            for (i, (x, y)) in curve.points().enumerate() {
                if i % self.stride == 0 || i == last {
                    table.add_row(row![format!("{:.4}", x), format!("{:.4}", y)]);
                }
            }
            table.print(&mut self.writer)?;
        }
        for reference in &chart.references {
            writeln!(
                self.writer,
                "{} = {:.4}",
                reference.label, reference.value
            )?;
        }
        Ok(())
    }
}

/// Result of one calculator run, ready to be presented.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub charts: Vec<Chart>,
    /// rows of (quantity, value, unit)
    pub summary: Vec<(String, String, String)>,
    pub narrative: Vec<String>,
}

impl Report {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            charts: Vec::new(),
            summary: Vec::new(),
            narrative: Vec::new(),
        }
    }

    pub fn add_summary_row(&mut self, quantity: &str, value: String, unit: &str) {
        self.summary
            .push((quantity.to_string(), value, unit.to_string()));
    }

    pub fn add_text(&mut self, text: String) {
        self.narrative.push(text);
    }

    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value", "Units"]);
        for (quantity, value, unit) in &self.summary {
            table.add_row(row![quantity, value, unit]);
        }
        table
    }

    /// Writes title, summary and narrative to `out` and hands every chart to
    /// `renderer`. A failing chart is logged and the rest still rendered; the
    /// first error is returned at the end.
    pub fn present<W: Write>(
        &self,
        renderer: &mut dyn ChartRenderer,
        out: &mut W,
    ) -> Result<(), CalcError> {
        writeln!(out, "\n\x1b[34m=== {} ===\x1b[0m", self.title)?;
        if !self.summary.is_empty() {
            self.summary_table().print(out)?;
        }
        for text in &self.narrative {
            writeln!(out, "{}", text)?;
        }
        let mut first_error = None;
        for chart in &self.charts {
            match renderer.render(chart) {
                Ok(()) => info!("rendered chart '{}'", chart.title),
                Err(e) => {
                    warn!("failed to render chart '{}': {}", chart.title, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
