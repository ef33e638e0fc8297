//! Assembly of the McCabe-Thiele diagram from column parameters: parameter intake,
//! curve evaluation over the liquid composition grid, chart and report.
use super::McCabeThiele::{equilibrium_curve_vec, rectifying_line_vec, stripping_line_vec};
use crate::Utils::calc_errors::CalcError;
use crate::Utils::curves::{Chart, Curve, CurveColor, LineStyle, linspace};
use crate::Utils::shell::{ParameterSource, Report, ScalarParam};
use log::{info, warn};
use nalgebra::DVector;

/// number of liquid mole fraction samples over [0, 1]
pub const DIAGRAM_POINTS: usize = 500;

pub const DIAGRAM_TITLE: &str = "McCabe-Thiele Diagram";
pub const EQUILIBRIUM_LABEL: &str = "Equilibrium Curve";
pub const RECTIFYING_LABEL: &str = "Rectifying Line (R)";
pub const STRIPPING_LABEL: &str = "Stripping Line (q)";
pub const DIAGONAL_LABEL: &str = "y = x";

const CONCLUSION: &str = "This McCabe-Thiele diagram shows the equilibrium curve and the operating lines \
for the rectifying and stripping sections of the distillation column. The reflux ratio, feed condition, \
and relative volatility all influence the number of theoretical stages required for the separation process.";

/// Column inputs. No cross-field checks: xB < xF < xD is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    /// relative volatility
    pub alpha: f64,
    /// feed mole fraction
    pub xF: f64,
    /// distillate mole fraction
    pub xD: f64,
    /// bottoms mole fraction
    pub xB: f64,
    /// reflux ratio
    pub R: f64,
    /// feed quality
    pub q: f64,
}

impl ColumnSpec {
    pub const PARAMETERS: [ScalarParam; 6] = [
        ScalarParam::new("alpha", "Relative Volatility (α)", 2.0),
        ScalarParam::new("xF", "Feed Mole Fraction (xF)", 0.4).bounded(0.0, 1.0),
        ScalarParam::new("xD", "Distillate Mole Fraction (xD)", 0.95).bounded(0.0, 1.0),
        ScalarParam::new("xB", "Bottom Mole Fraction (xB)", 0.05).bounded(0.0, 1.0),
        ScalarParam::new("R", "Reflux Ratio (R)", 1.5),
        ScalarParam::new("q", "Feed Condition (q)", 1.0)
            .with_help("q = 1 for saturated liquid, q = 0 for saturated vapor"),
    ];

    /// Asks `source` for the six inputs in the order they are listed in
    /// [`ColumnSpec::PARAMETERS`]
    pub fn collect(source: &mut dyn ParameterSource) -> Result<Self, CalcError> {
        let [alpha, xF, xD, xB, R, q] = Self::PARAMETERS;
        Ok(Self {
            alpha: source.collect_scalar(&alpha)?,
            xF: source.collect_scalar(&xF)?,
            xD: source.collect_scalar(&xD)?,
            xB: source.collect_scalar(&xB)?,
            R: source.collect_scalar(&R)?,
            q: source.collect_scalar(&q)?,
        })
    }

    /// Human readable notes about parameters where a curve degenerates. Only
    /// informative: the curves are evaluated anyway.
    pub fn singularities(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.alpha <= 0.0 {
            notes.push(format!(
                "relative volatility α = {} is not positive, equilibrium curve is unphysical",
                self.alpha
            ));
        } else if self.alpha == 1.0 {
            notes.push("α = 1: equilibrium curve coincides with y = x, no separation".to_string());
        }
        if self.R == -1.0 {
            notes.push("R = -1: rectifying line is undefined (division by zero)".to_string());
        }
        if self.q == 1.0 {
            notes.push("q = 1: stripping line slope q/(q-1) is infinite".to_string());
        }
        notes
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        let [alpha, xF, xD, xB, R, q] = Self::PARAMETERS;
        Self {
            alpha: alpha.default,
            xF: xF.default,
            xD: xD.default,
            xB: xB.default,
            R: R.default,
            q: q.default,
        }
    }
}

/// Sampled curves of the diagram
#[derive(Debug, Clone, PartialEq)]
pub struct McCabeThieleDiagram {
    pub spec: ColumnSpec,
    pub x: DVector<f64>,
    pub y_equilibrium: DVector<f64>,
    pub y_rectifying: DVector<f64>,
    pub y_stripping: DVector<f64>,
}

impl McCabeThieleDiagram {
    pub fn new(spec: ColumnSpec) -> Self {
        Self::with_points(spec, DIAGRAM_POINTS)
    }

    pub fn with_points(spec: ColumnSpec, n_points: usize) -> Self {
        for note in spec.singularities() {
            warn!("{}", note);
        }
        let x = linspace(0.0, 1.0, n_points);
        let y_equilibrium = equilibrium_curve_vec(&x, spec.alpha);
        let y_rectifying = rectifying_line_vec(&x, spec.R, spec.xD);
        let y_stripping = stripping_line_vec(&x, spec.xB, spec.xF, spec.q);
        info!(
            "McCabe-Thiele curves evaluated on {} points (α = {}, R = {}, q = {})",
            n_points, spec.alpha, spec.R, spec.q
        );
        Self {
            spec,
            x,
            y_equilibrium,
            y_rectifying,
            y_stripping,
        }
    }

    pub fn chart(&self) -> Chart {
        let mut chart = Chart::new(
            DIAGRAM_TITLE,
            "Mole Fraction of Light Component (x)",
            "Mole Fraction of Light Component (y)",
        );
        chart
            .add_curve(
                Curve::new(EQUILIBRIUM_LABEL, self.x.clone(), self.y_equilibrium.clone())
                    .with_color(CurveColor::Blue),
            )
            .add_curve(
                Curve::new(RECTIFYING_LABEL, self.x.clone(), self.y_rectifying.clone())
                    .with_style(LineStyle::Dashed)
                    .with_color(CurveColor::Green),
            )
            .add_curve(
                Curve::new(STRIPPING_LABEL, self.x.clone(), self.y_stripping.clone())
                    .with_style(LineStyle::Dashed)
                    .with_color(CurveColor::Red),
            )
            .add_curve(
                Curve::new(DIAGONAL_LABEL, self.x.clone(), self.x.clone())
                    .with_style(LineStyle::Dotted)
                    .with_color(CurveColor::Black),
            );
        chart
    }

    pub fn report(&self) -> Report {
        let spec = &self.spec;
        let mut report = Report::new("Distillation Column Calculator using McCabe-Thiele Method");
        report.add_summary_row("Relative Volatility (α)", format!("{}", spec.alpha), "-");
        report.add_summary_row("Feed Mole Fraction (xF)", format!("{}", spec.xF), "-");
        report.add_summary_row("Distillate Mole Fraction (xD)", format!("{}", spec.xD), "-");
        report.add_summary_row("Bottom Mole Fraction (xB)", format!("{}", spec.xB), "-");
        report.add_summary_row("Reflux Ratio (R)", format!("{}", spec.R), "-");
        report.add_summary_row("Feed Condition (q)", format!("{}", spec.q), "-");
        for note in spec.singularities() {
            report.add_text(format!("Note: {}", note));
        }
        report.add_text(CONCLUSION.to_string());
        report.charts.push(self.chart());
        report
    }
}

/// Whole distillation tool: collect inputs, evaluate, assemble the report
pub fn distillation_report(source: &mut dyn ParameterSource) -> Result<Report, CalcError> {
    let spec = ColumnSpec::collect(source)?;
    Ok(McCabeThieleDiagram::new(spec).report())
}
