use crate::Distillation::McCabeThiele::{equilibrium_curve, rectifying_line, stripping_line};
use crate::Reactors::IdealReactors::{
    calculate_volumes, cstr_conversion_from_volume, cstr_conversion_vs_volume,
    pfr_conversion_profile,
};
use crate::Utils::plot_curves::{PlotFileRenderer, PlotSettings};
use crate::settings::TaskSettings;
use prettytable::{Table, row};

pub fn calc_examples(task: usize) {
    match task {
        0 => {
            // textbook values
            let mut table = Table::new();
            table.add_row(row!["Expression", "Value", "Expected"]);
            table.add_row(row![
                "equilibrium_curve(0.5, α = 2)",
                format!("{:.4}", equilibrium_curve(0.5, 2.0)),
                "0.6667"
            ]);
            table.add_row(row![
                "equilibrium_curve(0.3, α = 1)",
                format!("{:.4}", equilibrium_curve(0.3, 1.0)),
                "0.3000"
            ]);
            table.add_row(row![
                "rectifying_line(0, R = 1.5, xD = 0.95)",
                format!("{:.4}", rectifying_line(0.0, 1.5, 0.95)),
                "0.3800"
            ]);
            table.add_row(row![
                "stripping_line(0.05, xB = 0.05, xF = 0.4, q = 0.5)",
                format!("{:.4}", stripping_line(0.05, 0.05, 0.4, 0.5)),
                "0.0500"
            ]);
            let (V_CSTR, V_PFR) = calculate_volumes(1.0, 0.1, 0.5);
            table.add_row(row![
                "V_CSTR(F0 = 1, k = 0.1, X = 0.5)",
                format!("{:.4}", V_CSTR),
                "20.0000"
            ]);
            table.add_row(row![
                "V_PFR(F0 = 1, k = 0.1, X = 0.5)",
                format!("{:.4}", V_PFR),
                "6.9315"
            ]);
            table.add_row(row![
                "1 - F0/(k·V_CSTR)",
                format!("{:.4}", cstr_conversion_from_volume(1.0, 0.1, V_CSTR)),
                "0.5000"
            ]);
            let (_, pfr) = pfr_conversion_profile(1.0, 0.1, V_PFR);
            let (_, cstr) = cstr_conversion_vs_volume(1.0, 0.1);
            table.add_row(row![
                "PFR conversion at the outlet",
                format!("{:.4}", pfr[pfr.len() - 1]),
                "0.5000"
            ]);
            table.add_row(row![
                "CSTR profile conversion at 5 m³",
                format!("{:.4}", cstr[cstr.len() - 1]),
                "0.3935"
            ]);
            table.printstd();
        }
        1 => {
            // every chart of the default task, written to plots/examples
            let task = TaskSettings::template();
            let mut renderer = PlotFileRenderer::new("plots/examples", PlotSettings::default());
            match task.reports() {
                Ok(reports) => {
                    for report in reports {
                        if let Err(e) = report.present(&mut renderer, &mut std::io::stdout()) {
                            println!("Error: {}", e);
                        }
                    }
                    for path in &renderer.written {
                        println!("Chart saved: {}", path.display());
                    }
                }
                Err(e) => println!("Error: {}", e),
            }
        }
        _ => println!("Invalid task number"),
    }
}
