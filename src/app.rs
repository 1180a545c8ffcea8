use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GdpApp {
    pub state: AppState,
}

impl Default for GdpApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for GdpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: year query ----
        egui::SidePanel::left("query_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: raw data table + chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.show_raw_data {
                if let Some(ds) = &self.state.dataset {
                    panels::raw_data_table(ui, ds);
                    ui.separator();
                }
            }
            plot::gdp_plot(ui, &self.state);
        });
    }
}
