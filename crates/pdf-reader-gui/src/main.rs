#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use pdf_reader_core::ReaderOptions;

mod app;
mod handlers;
mod logger;
mod renderer;
mod views;

/// Viewer configuration, read from the working directory when present
const CONFIG_FILE: &str = "pdf-reader.json";

/// Log entries kept for the in-app log panel
const MAX_LOG_ENTRIES: usize = 500;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(MAX_LOG_ENTRIES);
    if let Err(e) = logger.clone().init() {
        eprintln!("Failed to install logger: {}", e);
    }

    let options = match ReaderOptions::load_or_default(CONFIG_FILE) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{}; using defaults", e);
            ReaderOptions::default()
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("PDF Reader"),
        ..Default::default()
    };

    eframe::run_native(
        "PDF Reader",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::PdfReaderApp::new(cc, options, logger)))),
    )
}
