use pdf_reader_core::{Bitmap, Renderer, ViewerSession, ZoomDirection};
use std::path::PathBuf;

/// User input for the viewer
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerAction {
    Open { path: PathBuf },
    NextPage,
    PrevPage,
    Zoom(ZoomDirection),
    /// Render the current page again, e.g. after a failed render
    Retry,
    SaveProgress,
}

/// What the window should change after an action
#[derive(Debug)]
pub enum ViewerUpdate {
    PageRendered(Bitmap),
    ProgressSaved { page_index: usize },
    /// Nothing to redraw (no document, or at a boundary)
    Unchanged,
    Error { message: String },
}

pub fn handle_action<R: Renderer>(
    action: ViewerAction,
    session: &mut ViewerSession<R>,
) -> ViewerUpdate {
    let result = match action {
        ViewerAction::Open { path } => session.open(path).map(Some),
        ViewerAction::NextPage => session.next_page(),
        ViewerAction::PrevPage => session.prev_page(),
        ViewerAction::Zoom(direction) => session.zoom(direction),
        ViewerAction::Retry => session.render_current(),
        ViewerAction::SaveProgress => {
            return match session.save_progress() {
                Ok(Some(page_index)) => ViewerUpdate::ProgressSaved { page_index },
                Ok(None) => ViewerUpdate::Unchanged,
                Err(e) => error_update(e),
            };
        }
    };

    match result {
        Ok(Some(bitmap)) => ViewerUpdate::PageRendered(bitmap),
        Ok(None) => ViewerUpdate::Unchanged,
        Err(e) => error_update(e),
    }
}

fn error_update(error: pdf_reader_core::ReaderError) -> ViewerUpdate {
    log::error!("{}", error);
    ViewerUpdate::Error {
        message: error.to_string(),
    }
}
