#[cfg(test)]
mod tests {
    use super::super::McCabeThiele::*;
    use super::super::column_diagram::*;
    use crate::Utils::curves::{CurveColor, LineStyle, linspace};
    use crate::Utils::shell::{DefaultParameters, MapParameters};
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    #[test]
    fn test_equilibrium_curve_textbook_value() {
        assert_relative_eq!(equilibrium_curve(0.5, 2.0), 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(equilibrium_curve(0.5, 2.0), 0.6667, epsilon = 1e-4);
    }

    #[test]
    fn test_equilibrium_curve_end_points() {
        for alpha in [0.3, 0.5, 1.5, 2.0, 5.0, 100.0] {
            assert_relative_eq!(equilibrium_curve(0.0, alpha), 0.0, epsilon = 1e-12);
            assert_relative_eq!(equilibrium_curve(1.0, alpha), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equilibrium_curve_is_increasing() {
        let x = linspace(0.0, 1.0, 200);
        for alpha in [0.2, 0.8, 1.2, 2.5, 10.0] {
            let y = equilibrium_curve_vec(&x, alpha);
            for i in 1..y.len() {
                assert!(
                    y[i] > y[i - 1],
                    "not increasing at x = {} for alpha = {}",
                    x[i],
                    alpha
                );
            }
        }
    }

    #[test]
    fn test_equilibrium_curve_alpha_one_is_diagonal() {
        let x = linspace(0.0, 1.0, 50);
        let y = equilibrium_curve_vec(&x, 1.0);
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_eq!(xi, yi);
        }
    }

    #[test]
    fn test_equilibrium_above_diagonal_for_volatile_component() {
        let x = linspace(0.01, 0.99, 20);
        let y = equilibrium_curve_vec(&x, 2.5);
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert!(yi > xi);
        }
    }

    #[test]
    fn test_rectifying_line_end_points() {
        let (R, xD) = (1.5, 0.95);
        assert_relative_eq!(rectifying_line(0.0, R, xD), xD / (R + 1.0), epsilon = 1e-12);
        assert_relative_eq!(
            rectifying_line(1.0, R, xD),
            (R + xD) / (R + 1.0),
            epsilon = 1e-12
        );
        // passes through (xD, xD)
        assert_relative_eq!(rectifying_line(xD, R, xD), xD, epsilon = 1e-12);
    }

    #[test]
    fn test_rectifying_line_singular_reflux() {
        let y = rectifying_line(0.5, -1.0, 0.95);
        assert!(!y.is_finite());
    }

    #[test]
    fn test_stripping_line_passes_through_bottoms() {
        for q in [0.0, 0.5, 1.5, 2.0] {
            assert_relative_eq!(stripping_line(0.05, 0.05, 0.4, q), 0.05, epsilon = 1e-12);
        }
        // slope q/(q-1)
        assert_relative_eq!(stripping_line(0.15, 0.05, 0.4, 2.0), 0.05 + 2.0 * 0.1, epsilon = 1e-12);
        // saturated vapour feed: flat line
        assert_relative_eq!(stripping_line(0.8, 0.05, 0.4, 0.0), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_stripping_line_ignores_feed_fraction() {
        for x in [0.0, 0.2, 0.7, 1.0] {
            assert_eq!(
                stripping_line(x, 0.05, 0.1, 0.5),
                stripping_line(x, 0.05, 0.9, 0.5)
            );
        }
    }

    #[test]
    fn test_stripping_line_saturated_liquid_feed_is_singular() {
        let x = linspace(0.0, 1.0, 11);
        let y = stripping_line_vec(&x, 0.05, 0.4, 1.0);
        assert!(y.iter().all(|v| !v.is_finite()));
    }

    #[test]
    fn test_vector_forms_keep_length_and_match_scalars() {
        let x = linspace(0.0, 1.0, 37);
        let y_eq = equilibrium_curve_vec(&x, 3.0);
        let y_r = rectifying_line_vec(&x, 2.0, 0.9);
        let y_s = stripping_line_vec(&x, 0.1, 0.5, 1.3);
        assert_eq!(y_eq.len(), 37);
        assert_eq!(y_r.len(), 37);
        assert_eq!(y_s.len(), 37);
        for i in 0..37 {
            assert_eq!(y_eq[i], equilibrium_curve(x[i], 3.0));
            assert_eq!(y_r[i], rectifying_line(x[i], 2.0, 0.9));
            assert_eq!(y_s[i], stripping_line(x[i], 0.1, 0.5, 1.3));
        }
    }

    #[test]
    fn test_column_spec_defaults() {
        let spec = ColumnSpec::default();
        assert_eq!(spec.alpha, 2.0);
        assert_eq!(spec.xF, 0.4);
        assert_eq!(spec.xD, 0.95);
        assert_eq!(spec.xB, 0.05);
        assert_eq!(spec.R, 1.5);
        assert_eq!(spec.q, 1.0);
        let collected = ColumnSpec::collect(&mut DefaultParameters).unwrap();
        assert_eq!(collected, spec);
    }

    #[test]
    fn test_column_spec_collect_from_map() {
        let mut values = HashMap::new();
        values.insert("alpha".to_string(), 3.0);
        values.insert("q".to_string(), 0.5);
        let spec = ColumnSpec::collect(&mut MapParameters::new(values)).unwrap();
        assert_eq!(spec.alpha, 3.0);
        assert_eq!(spec.q, 0.5);
        assert_eq!(spec.xD, 0.95);
    }

    #[test]
    fn test_column_spec_fraction_out_of_range() {
        let mut values = HashMap::new();
        values.insert("xD".to_string(), 1.2);
        assert!(ColumnSpec::collect(&mut MapParameters::new(values)).is_err());
    }

    #[test]
    fn test_no_cross_field_validation() {
        // bottoms richer than distillate is accepted as is
        let mut values = HashMap::new();
        values.insert("xB".to_string(), 0.9);
        values.insert("xD".to_string(), 0.1);
        let spec = ColumnSpec::collect(&mut MapParameters::new(values)).unwrap();
        assert_eq!(spec.xB, 0.9);
        assert_eq!(spec.xD, 0.1);
    }

    #[test]
    fn test_singularities() {
        assert_eq!(ColumnSpec::default().singularities().len(), 1); // q = 1
        let spec = ColumnSpec {
            alpha: 1.0,
            R: -1.0,
            q: 0.5,
            ..ColumnSpec::default()
        };
        assert_eq!(spec.singularities().len(), 2);
        let spec = ColumnSpec {
            q: 0.5,
            ..ColumnSpec::default()
        };
        assert!(spec.singularities().is_empty());
    }

    #[test]
    fn test_diagram_grid_and_curves() {
        let diagram = McCabeThieleDiagram::new(ColumnSpec::default());
        assert_eq!(diagram.x.len(), DIAGRAM_POINTS);
        assert_eq!(diagram.x[0], 0.0);
        assert_eq!(diagram.x[DIAGRAM_POINTS - 1], 1.0);
        assert_relative_eq!(diagram.y_rectifying[0], 0.95 / 2.5, epsilon = 1e-12);

        let chart = diagram.chart();
        assert_eq!(chart.title, DIAGRAM_TITLE);
        assert_eq!(chart.curves.len(), 4);
        let eq = chart.curve(EQUILIBRIUM_LABEL).unwrap();
        assert_eq!(eq.style, LineStyle::Solid);
        assert_eq!(eq.color, CurveColor::Blue);
        let rect = chart.curve(RECTIFYING_LABEL).unwrap();
        assert_eq!(rect.style, LineStyle::Dashed);
        assert_eq!(rect.color, CurveColor::Green);
        let strip = chart.curve(STRIPPING_LABEL).unwrap();
        assert_eq!(strip.color, CurveColor::Red);
        // q = 1 by default: the stripping line has nothing to draw
        assert!(strip.finite_segments().is_empty());
        let diag = chart.curve(DIAGONAL_LABEL).unwrap();
        assert_eq!(diag.style, LineStyle::Dotted);
        assert_eq!(diag.x, diag.y);
    }

    #[test]
    fn test_distillation_report() {
        let report = distillation_report(&mut DefaultParameters).unwrap();
        assert_eq!(report.charts.len(), 1);
        assert_eq!(report.summary.len(), 6);
        assert!(report.narrative.iter().any(|t| t.contains("theoretical stages")));
        assert!(report.narrative.iter().any(|t| t.starts_with("Note: q = 1")));
    }
}
