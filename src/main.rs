mod app;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::FitmentFinderApp;
use eframe::egui;

/// Loaded automatically at startup when present in the working directory.
const DEFAULT_CATALOG: &str = "catalog.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fitment Finder",
        options,
        Box::new(|_cc| {
            let mut app = FitmentFinderApp::default();
            let default = Path::new(DEFAULT_CATALOG);
            if default.exists() {
                app.state.load_catalog_from(default);
            }
            Ok(Box::new(app))
        }),
    )
}
