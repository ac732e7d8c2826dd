use eframe::egui;
use pdf_reader_core::{Renderer, ViewerSession, ZoomDirection};

use crate::handlers::viewer::ViewerAction;

pub fn show_toolbar<R: Renderer>(
    ui: &mut egui::Ui,
    session: &ViewerSession<R>,
    render_failed: bool,
    actions: &mut Vec<ViewerAction>,
) {
    ui.horizontal(|ui| {
        if ui.button("Open PDF...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PDF Files", &["pdf"])
                .pick_file()
            {
                actions.push(ViewerAction::Open { path });
            }
        }

        let loaded = session.is_loaded();
        let can_go_back = loaded && session.page_index() > 0;
        let can_go_forward = loaded && session.page_index() + 1 < session.page_count();

        if ui
            .add_enabled(can_go_back, egui::Button::new("◀ Previous"))
            .clicked()
        {
            actions.push(ViewerAction::PrevPage);
        }

        if ui
            .add_enabled(can_go_forward, egui::Button::new("Next ▶"))
            .clicked()
        {
            actions.push(ViewerAction::NextPage);
        }

        if ui
            .add_enabled(loaded, egui::Button::new("Save Progress"))
            .clicked()
        {
            actions.push(ViewerAction::SaveProgress);
        }

        if loaded && render_failed && ui.button("⟳ Retry").clicked() {
            actions.push(ViewerAction::Retry);
        }

        if loaded {
            ui.separator();
            ui.label(format!(
                "Page {} of {} · {:.0}%",
                session.page_index() + 1,
                session.page_count(),
                session.scale() * 100.0
            ));
        }
    });
}

/// Page area. The mouse wheel over it zooms instead of scrolling.
pub fn show_page(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    actions: &mut Vec<ViewerAction>,
) {
    if ui.rect_contains_pointer(ui.max_rect()) {
        let delta = ui.input(|i| i.raw_scroll_delta.y);
        if let Some(direction) = ZoomDirection::from_wheel_delta(delta) {
            actions.push(ViewerAction::Zoom(direction));
            ui.ctx()
                .input_mut(|i| i.smooth_scroll_delta = egui::Vec2::ZERO);
        }
    }

    if let Some(texture) = texture {
        egui::ScrollArea::both().show(ui, |ui| {
            ui.centered_and_justified(|ui| {
                ui.image((texture.id(), texture.size_vec2()));
            });
        });
    } else {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.heading("PDF Reader");
            ui.add_space(20.0);
            ui.label("Open a PDF or drop one here. Reading resumes where you last saved.");
        });
    }
}
