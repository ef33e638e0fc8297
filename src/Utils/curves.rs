//! # Curves and charts
//!
//! Plain value objects that the numeric cores are assembled into before
//! presentation. A [`Curve`] is an ordered set of `(x, y)` samples stored as two
//! equal-length `DVector`s; a [`Chart`] is a titled set of curves plus optional
//! horizontal/vertical [`ReferenceLine`]s.
//!
//! Samples may contain NaN or infinities (singular parameters are not trapped by the
//! numeric cores); [`Curve::finite_segments`] gives the drawable pieces.
use nalgebra::DVector;

/// `n` points uniformly spaced over `[start, end]`, both ends included
pub fn linspace(start: f64, end: f64, n: usize) -> DVector<f64> {
    match n {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, start),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            DVector::from_fn(n, |i, _| {
                if i == n - 1 {
                    end
                } else {
                    start + step * i as f64
                }
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveColor {
    Blue,
    Green,
    Red,
    Black,
    Orange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub x: DVector<f64>,
    pub y: DVector<f64>,
    pub style: LineStyle,
    pub color: CurveColor,
}

impl Curve {
    /// # Panics
    /// if `x` and `y` have different lengths
    pub fn new(label: &str, x: DVector<f64>, y: DVector<f64>) -> Self {
        assert_eq!(
            x.len(),
            y.len(),
            "curve '{}' has {} x samples and {} y samples",
            label,
            x.len(),
            y.len()
        );
        Self {
            label: label.to_string(),
            x,
            y,
            style: LineStyle::Solid,
            color: CurveColor::Blue,
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: CurveColor) -> Self {
        self.color = color;
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| (x, y))
    }

    /// Runs of consecutive finite samples. The line is broken wherever x or y is
    /// NaN or infinite.
    pub fn finite_segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (x, y) in self.points() {
            if x.is_finite() && y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    /// `y = value`
    Horizontal,
    /// `x = value`
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub orientation: Orientation,
    pub value: f64,
    pub color: CurveColor,
}

impl ReferenceLine {
    pub fn horizontal(label: &str, y: f64, color: CurveColor) -> Self {
        Self {
            label: label.to_string(),
            orientation: Orientation::Horizontal,
            value: y,
            color,
        }
    }

    pub fn vertical(label: &str, x: f64, color: CurveColor) -> Self {
        Self {
            label: label.to_string(),
            orientation: Orientation::Vertical,
            value: x,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curves: Vec<Curve>,
    pub references: Vec<ReferenceLine>,
}

impl Chart {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            curves: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn add_curve(&mut self, curve: Curve) -> &mut Self {
        self.curves.push(curve);
        self
    }

    pub fn add_reference(&mut self, reference: ReferenceLine) -> &mut Self {
        self.references.push(reference);
        self
    }

    pub fn curve(&self, label: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.label == label)
    }

    /// File-name friendly version of the title: "McCabe-Thiele Diagram" -> "mccabe_thiele_diagram"
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('_') {
                slug.push('_');
            }
        }
        let slug = slug.trim_matches('_').to_string();
        if slug.is_empty() {
            "chart".to_string()
        } else {
            slug
        }
    }

    /// Bounds `(x_min, x_max, y_min, y_max)` over all finite samples and finite
    /// reference lines. `None` if there is nothing finite to draw.
    pub fn finite_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut found = false;
        for curve in &self.curves {
            for (x, y) in curve.finite_segments().into_iter().flatten() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
                found = true;
            }
        }
        if !found {
            return None;
        }
        for reference in self.references.iter().filter(|r| r.value.is_finite()) {
            match reference.orientation {
                Orientation::Horizontal => {
                    y_min = y_min.min(reference.value);
                    y_max = y_max.max(reference.value);
                }
                Orientation::Vertical => {
                    x_min = x_min.min(reference.value);
                    x_max = x_max.max(reference.value);
                }
            }
        }
        Some((x_min, x_max, y_min, y_max))
    }
}
