#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::UnitflowApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("Unitflow"),
        ..Default::default()
    };

    eframe::run_native(
        "Unitflow",
        options,
        Box::new(|cc| Ok(Box::new(UnitflowApp::new(cc)))),
    )
}
