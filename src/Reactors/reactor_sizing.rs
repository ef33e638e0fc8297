//! CSTR/PFR sizing tool: inputs, volumes, the two profile charts and the
//! comparison summary.
use super::IdealReactors::{calculate_volumes, cstr_conversion_vs_volume, pfr_conversion_profile};
use crate::Utils::calc_errors::CalcError;
use crate::Utils::curves::{Chart, Curve, CurveColor, ReferenceLine};
use crate::Utils::shell::{ParameterSource, Report, ScalarParam};
use log::{info, warn};

pub const PFR_CHART_TITLE: &str = "Conversion Profile along PFR Length";
pub const CSTR_CHART_TITLE: &str = "CSTR Conversion as a Function of Reactor Volume";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorSpec {
    /// feed molar rate, mol/s
    pub F0: f64,
    /// first order rate constant, 1/s
    pub k: f64,
    /// target conversion
    pub X: f64,
}

impl ReactorSpec {
    pub const PARAMETERS: [ScalarParam; 3] = [
        ScalarParam::new("F0", "Enter the feed rate (F0) in mol/s", 1.0),
        ScalarParam::new("k", "Enter the reaction rate constant (k) in s^-1", 0.1),
        ScalarParam::new("X", "Enter the target conversion (X) between 0 and 1", 0.5)
            .bounded(0.0, 1.0),
    ];

    pub fn collect(source: &mut dyn ParameterSource) -> Result<Self, CalcError> {
        let [F0, k, X] = Self::PARAMETERS;
        Ok(Self {
            F0: source.collect_scalar(&F0)?,
            k: source.collect_scalar(&k)?,
            X: source.collect_scalar(&X)?,
        })
    }

    pub fn singularities(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.X >= 1.0 {
            notes.push(format!(
                "X = {}: complete conversion needs an infinite volume",
                self.X
            ));
        }
        if self.k == 0.0 {
            notes.push("k = 0: no reaction, volumes are infinite".to_string());
        }
        if self.F0 <= 0.0 {
            notes.push(format!("feed rate F0 = {} is not positive", self.F0));
        }
        notes
    }
}

impl Default for ReactorSpec {
    fn default() -> Self {
        let [F0, k, X] = Self::PARAMETERS;
        Self {
            F0: F0.default,
            k: k.default,
            X: X.default,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReactorSizing {
    pub spec: ReactorSpec,
    pub V_CSTR: f64,
    pub V_PFR: f64,
}

impl ReactorSizing {
    pub fn new(spec: ReactorSpec) -> Self {
        for note in spec.singularities() {
            warn!("{}", note);
        }
        let (V_CSTR, V_PFR) = calculate_volumes(spec.F0, spec.k, spec.X);
        info!(
            "reactor volumes for X = {}: CSTR {:.4} m³, PFR {:.4} m³",
            spec.X, V_CSTR, V_PFR
        );
        Self {
            spec,
            V_CSTR,
            V_PFR,
        }
    }

    /// PFR profile; the reactor length is taken equal to the PFR volume
    pub fn pfr_chart(&self) -> Chart {
        let (x, conversion) = pfr_conversion_profile(self.spec.F0, self.spec.k, self.V_PFR);
        let mut chart = Chart::new(PFR_CHART_TITLE, "Reactor Length (m)", "Conversion (X)");
        chart
            .add_curve(
                Curve::new("PFR Conversion Profile", x, conversion).with_color(CurveColor::Blue),
            )
            .add_reference(ReferenceLine::horizontal(
                "Target Conversion",
                self.spec.X,
                CurveColor::Red,
            ));
        chart
    }

    pub fn cstr_chart(&self) -> Chart {
        let (V, X) = cstr_conversion_vs_volume(self.spec.F0, self.spec.k);
        let mut chart = Chart::new(CSTR_CHART_TITLE, "Reactor Volume (m³)", "Conversion (X)");
        chart
            .add_curve(Curve::new("CSTR Conversion vs Volume", V, X).with_color(CurveColor::Green))
            .add_reference(ReferenceLine::vertical(
                "CSTR Volume",
                self.V_CSTR,
                CurveColor::Red,
            ))
            .add_reference(ReferenceLine::horizontal(
                "Target Conversion",
                self.spec.X,
                CurveColor::Orange,
            ));
        chart
    }

    pub fn report(&self) -> Report {
        let spec = &self.spec;
        let mut report = Report::new("CSTR and PFR Reactor Design Calculator");
        report.add_summary_row("Feed rate (F0)", format!("{}", spec.F0), "mol/s");
        report.add_summary_row("Rate constant (k)", format!("{}", spec.k), "1/s");
        report.add_summary_row("Target conversion (X)", format!("{}", spec.X), "-");
        report.add_summary_row("CSTR volume", format!("{:.4}", self.V_CSTR), "m³");
        report.add_summary_row("PFR volume", format!("{:.4}", self.V_PFR), "m³");
        for note in spec.singularities() {
            report.add_text(format!("Note: {}", note));
        }
        report.add_text(format!("Volume required for CSTR: {:.4} m³", self.V_CSTR));
        report.add_text(format!("Volume required for PFR: {:.4} m³", self.V_PFR));
        report.add_text("\n=== Comparison Summary ===".to_string());
        report.add_text(format!(
            "The CSTR requires a volume of {:.4} m³ to achieve a conversion of {:.2}%.",
            self.V_CSTR,
            spec.X * 100.0
        ));
        report.add_text(format!(
            "The PFR requires a volume of {:.4} m³ to achieve the same conversion.",
            self.V_PFR
        ));
        report.charts.push(self.pfr_chart());
        report.charts.push(self.cstr_chart());
        report
    }
}

/// Whole reactor tool: collect inputs, size, assemble the report
pub fn reactor_report(source: &mut dyn ParameterSource) -> Result<Report, CalcError> {
    let spec = ReactorSpec::collect(source)?;
    Ok(ReactorSizing::new(spec).report())
}
