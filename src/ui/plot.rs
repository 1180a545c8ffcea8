use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

/// Number of samples along the fitted curve.
const CURVE_SAMPLES: usize = 200;

// ---------------------------------------------------------------------------
// GDP chart (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter+line chart in the central panel.
pub fn gdp_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view the series  (File → Open…)");
            });
            return;
        }
    };

    Plot::new("gdp_plot")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("GDP per capita")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Recorded observations.
            let observed: PlotPoints = dataset
                .points
                .iter()
                .map(|p| [f64::from(p.year), p.gdp_per_capita])
                .collect();

            plot_ui.points(
                Points::new(observed)
                    .name("Actual GDP")
                    .shape(MarkerShape::Asterisk)
                    .radius(4.0)
                    .color(Color32::LIGHT_BLUE),
            );

            // Fitted curve, sampled across the observed year span.
            if let (Some(predictor), Some((first, last))) =
                (&state.predictor, dataset.year_span())
            {
                let (lo, hi) = (f64::from(first), f64::from(last));
                let curve: PlotPoints = (0..CURVE_SAMPLES)
                    .map(|i| {
                        let x = lo + (hi - lo) * i as f64 / (CURVE_SAMPLES - 1) as f64;
                        [x, predictor.model().evaluate(x)]
                    })
                    .collect();

                plot_ui.line(
                    Line::new(curve)
                        .name("Polynomial fit")
                        .color(Color32::RED)
                        .width(2.0),
                );
            }
        });
}
