use eframe::egui;
use pdf_reader_core::{ReaderOptions, ViewerSession};

use crate::handlers::viewer::{ViewerAction, ViewerUpdate, handle_action};
use crate::logger::AppLogger;
use crate::renderer::PdfiumRenderer;
use crate::views::{show_page, show_status_bar, show_toolbar};

pub struct PdfReaderApp {
    /// `None` when the pdfium library could not be loaded
    session: Option<ViewerSession<PdfiumRenderer>>,
    page_texture: Option<egui::TextureHandle>,
    status: String,
    logger: AppLogger,
    show_log: bool,
    /// The last render failed; the toolbar offers a retry
    render_failed: bool,
}

impl PdfReaderApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        options: ReaderOptions,
        logger: AppLogger,
    ) -> Self {
        let session = match PdfiumRenderer::new() {
            Ok(renderer) => Some(ViewerSession::new(renderer, options)),
            Err(e) => {
                log::error!("Failed to initialize PDF renderer: {}", e);
                None
            }
        };

        Self {
            session,
            page_texture: None,
            status: logger.latest_message().unwrap_or_default(),
            logger,
            show_log: false,
            render_failed: false,
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: ViewerAction) {
        let Some(session) = &mut self.session else {
            self.status = "PDF viewing is unavailable: pdfium could not be loaded".to_string();
            return;
        };

        let mark = self.logger.mark();
        match handle_action(action, session) {
            ViewerUpdate::PageRendered(bitmap) => {
                self.render_failed = false;
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied(bitmap.size(), &bitmap.rgba);

                if let Some(texture) = &mut self.page_texture {
                    texture.set(color_image, egui::TextureOptions::default());
                } else {
                    self.page_texture = Some(ctx.load_texture(
                        "pdf_page",
                        color_image,
                        egui::TextureOptions::default(),
                    ));
                }

                self.status = match session.document_path() {
                    Some(path) => format!(
                        "{} · page {} of {}",
                        path.display(),
                        session.page_index() + 1,
                        session.page_count()
                    ),
                    None => String::new(),
                };
                ctx.request_repaint();
            }
            ViewerUpdate::ProgressSaved { page_index } => {
                self.status = format!("Saved progress: page {}", page_index + 1);
            }
            ViewerUpdate::Unchanged => {}
            ViewerUpdate::Error { message } => {
                self.render_failed = session.is_loaded();
                self.status = format!("Error: {message}");
            }
        }

        // Warnings raised along the way (clamped page, unreadable record) go on the status line
        if let Some(warning) = self.logger.warnings_since(mark).pop() {
            self.status = format!("{} · {}", self.status, warning.message);
        }
    }
}

impl eframe::App for PdfReaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        if let Some(session) = &mut self.session {
            let max_side = ctx.input(|i| i.max_texture_side);
            session.renderer_mut().set_max_bitmap_side(max_side);
        }

        ctx.input(|i| {
            // Handle drag-and-drop for PDF files
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    if path.extension().and_then(|s| s.to_str()) == Some("pdf") {
                        actions.push(ViewerAction::Open { path: path.clone() });
                    }
                }
            }

            if i.key_pressed(egui::Key::ArrowRight) {
                actions.push(ViewerAction::NextPage);
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                actions.push(ViewerAction::PrevPage);
            }
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| match &self.session {
            Some(session) => show_toolbar(ui, session, self.render_failed, &mut actions),
            None => {
                ui.label("PDF viewing is unavailable: pdfium could not be loaded");
            }
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            show_status_bar(ui, &self.status, &self.logger, &mut self.show_log);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_page(ui, self.page_texture.as_ref(), &mut actions);
        });

        for action in actions {
            self.apply(ctx, action);
        }
    }
}
