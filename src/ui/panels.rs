use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::GdpDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year query widgets
// ---------------------------------------------------------------------------

/// Render the left query panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Prediction");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Year input, clamped to [first dataset year, 2100] ----
    let bounds = state.year_bounds();
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Year");
        ui.add(
            egui::DragValue::new(&mut state.year_input)
                .range(bounds)
                .speed(1),
        );
    });

    let has_predictor = state.predictor.is_some();
    if ui
        .add_enabled(has_predictor, egui::Button::new("Predict GDP"))
        .clicked()
    {
        state.run_prediction();
    }

    if let Some(pred) = &state.prediction {
        ui.add_space(4.0);
        ui.label(RichText::new(pred.to_string()).color(Color32::LIGHT_GREEN));
    }

    ui.separator();
    ui.checkbox(&mut state.show_raw_data, "Show raw data");

    if has_predictor {
        ui.add_space(4.0);
        ui.label(RichText::new("Degree-4 polynomial fit").weak());
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            if let Some((first, last)) = ds.year_span() {
                ui.label(format!("{} rows loaded, {first}-{last}", ds.len()));
            }
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// Scrollable Year / GDP table shown above the chart.
pub fn raw_data_table(ui: &mut Ui, dataset: &GdpDataset) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .max_scroll_height(220.0)
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Year");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("GDP per capita");
            });
        })
        .body(|body| {
            body.rows(18.0, dataset.len(), |mut row| {
                let point = &dataset.points[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(point.year.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", point.gdp_per_capita));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open GDP data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows spanning {:?}",
                    dataset.len(),
                    dataset.year_span()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
