use eframe::egui;

use crate::logger::AppLogger;

pub fn show_status_bar(ui: &mut egui::Ui, status: &str, logger: &AppLogger, show_log: &mut bool) {
    ui.horizontal(|ui| {
        ui.toggle_value(show_log, "Log");
        ui.separator();
        ui.label(status);
    });

    if *show_log {
        ui.separator();
        egui::ScrollArea::vertical()
            .max_height(120.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in logger.get_entries() {
                    ui.monospace(entry.display_line());
                }
            });
        if ui.small_button("Clear").clicked() {
            logger.clear();
        }
    }
}
