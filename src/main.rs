mod app;
mod data;
mod predictor;
mod regression;
mod state;
mod ui;

use std::path::PathBuf;

use app::GdpApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let mut app = GdpApp::default();

    // Optional dataset path on the command line; otherwise File → Open.
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        match data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} rows from {}", dataset.len(), path.display());
                app.state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                app.state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Canada GDP Predictor",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
