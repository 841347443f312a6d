#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod storage;
mod theme;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("☁ CloudShelf")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([760.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CloudShelf",
        native_options,
        Box::new(|cc| Ok(Box::new(app::CloudShelfApp::new(cc)))),
    )
}
