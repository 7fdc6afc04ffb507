//! PDF Reader - egui-based UI
//!
//! Single-window viewer with zoom, paging and color display modes.

mod app;
mod dialog;
mod surface;

use app::ReaderApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 850.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("PDF Reader"),
        ..Default::default()
    };

    eframe::run_native(
        "PDF Reader",
        options,
        Box::new(|cc| Ok(Box::new(ReaderApp::new(cc)?))),
    )
}
