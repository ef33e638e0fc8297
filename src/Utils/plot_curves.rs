//! Chart files drawn with plotters
//!
//! [`PlotFileRenderer`] writes every [`Chart`] it gets into
//! `<output_dir>/<chart slug>.<svg|png>`. Non-finite samples are not drawn: each
//! curve is split into its finite runs, so a singular operating line simply
//! disappears from the diagram instead of breaking the axis ranges.
//!
//! ```rust,ignore
//! use UnitOpsCalc::Utils::plot_curves::{PlotFileRenderer, PlotSettings};
//!
//! let mut renderer = PlotFileRenderer::new("plots", PlotSettings::default());
//! report.present(&mut renderer, &mut std::io::stdout())?;
//! ```
use super::calc_errors::CalcError;
use super::curves::{Chart, CurveColor, LineStyle, Orientation};
use super::shell::ChartRenderer;
use log::info;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlotFormat {
    #[default]
    Svg,
    Png,
}

impl PlotFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            PlotFormat::Svg => "svg",
            PlotFormat::Png => "png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSettings {
    /// Image width in pixels (default: 1024)
    pub width: u32,
    /// Image height in pixels (default: 768)
    pub height: u32,
    pub format: PlotFormat,
    /// Line width in pixels (default: 2)
    pub line_width: u32,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            format: PlotFormat::Svg,
            line_width: 2,
        }
    }
}

pub(crate) fn rgb(color: CurveColor) -> RGBColor {
    match color {
        CurveColor::Blue => BLUE,
        CurveColor::Green => RGBColor(0, 128, 0),
        CurveColor::Red => RED,
        CurveColor::Black => BLACK,
        CurveColor::Orange => RGBColor(255, 165, 0),
    }
}

/// Widen a degenerate range and leave a 5% margin on both sides
fn padded(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < 1e-12 {
        return (min - 0.5, max + 0.5);
    }
    let pad = 0.05 * (max - min);
    (min - pad, max + pad)
}

pub struct PlotFileRenderer {
    pub output_dir: PathBuf,
    pub settings: PlotSettings,
    /// files written so far
    pub written: Vec<PathBuf>,
}

impl PlotFileRenderer {
    pub fn new<P: AsRef<Path>>(output_dir: P, settings: PlotSettings) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            settings,
            written: Vec::new(),
        }
    }

    pub fn path_for(&self, chart: &Chart) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", chart.slug(), self.settings.format.extension()))
    }
}

impl ChartRenderer for PlotFileRenderer {
    fn render(&mut self, chart: &Chart) -> Result<(), CalcError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(chart);
        let size = (self.settings.width, self.settings.height);
        let result = match self.settings.format {
            PlotFormat::Svg => draw_chart(SVGBackend::new(&path, size), chart, &self.settings),
            PlotFormat::Png => draw_chart(BitMapBackend::new(&path, size), chart, &self.settings),
        };
        result.map_err(|e| CalcError::Plot(e.to_string()))?;
        info!("chart '{}' saved to {}", chart.title, path.display());
        self.written.push(path);
        Ok(())
    }
}

fn draw_chart<DB: DrawingBackend>(
    backend: DB,
    chart: &Chart,
    settings: &PlotSettings,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max, y_min, y_max) = chart.finite_bounds().unwrap_or((0.0, 1.0, 0.0, 1.0));
    let (x_min, x_max) = padded(x_min, x_max);
    let (y_min, y_max) = padded(y_min, y_max);

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    ctx.configure_mesh()
        .x_desc(&chart.x_label)
        .y_desc(&chart.y_label)
        .x_label_formatter(&|x| format!("{:.2}", x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    for curve in &chart.curves {
        let color = rgb(curve.color);
        let style = ShapeStyle::from(&color).stroke_width(settings.line_width);
        for (i, segment) in curve.finite_segments().into_iter().enumerate() {
            let annotation = match curve.style {
                LineStyle::Solid => ctx.draw_series(LineSeries::new(segment, style))?,
                LineStyle::Dashed => ctx.draw_series(DashedLineSeries::new(segment, 10, 6, style))?,
                LineStyle::Dotted => ctx.draw_series(DashedLineSeries::new(segment, 2, 5, style))?,
            };
            // one legend entry per curve
            if i == 0 {
                annotation
                    .label(curve.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }
        }
    }

    for reference in chart.references.iter().filter(|r| r.value.is_finite()) {
        let color = rgb(reference.color);
        let style = ShapeStyle::from(&color).stroke_width(settings.line_width);
        let points = match reference.orientation {
            Orientation::Horizontal => vec![(x_min, reference.value), (x_max, reference.value)],
            Orientation::Vertical => vec![(reference.value, y_min), (reference.value, y_max)],
        };
        ctx.draw_series(DashedLineSeries::new(points, 10, 6, style))?
            .label(reference.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    ctx.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
