//! Page and zoom navigation for a single open document
//!
//! A session is either empty or has one document loaded. Every operation
//! that moves the view computes the target page and scale first, asks the
//! renderer for that view, and only commits the new state once the bitmap
//! exists. A failed render leaves the session exactly as it was.

use crate::options::ReaderOptions;
use crate::progress::ProgressStore;
use crate::renderer::{Bitmap, Renderer};
use crate::types::*;
use std::path::{Path, PathBuf};

/// Zoom input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Wheel up zooms in, wheel down zooms out
    pub fn from_wheel_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(ZoomDirection::In)
        } else if delta < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

struct LoadedDocument<D> {
    path: PathBuf,
    handle: D,
    page_count: usize,
    page_index: usize,
}

/// Viewer state: the open document (if any), current page and zoom scale
pub struct ViewerSession<R: Renderer> {
    renderer: R,
    store: ProgressStore,
    options: ReaderOptions,
    document: Option<LoadedDocument<R::Document>>,
    scale: f32,
}

impl<R: Renderer> ViewerSession<R> {
    pub fn new(renderer: R, options: ReaderOptions) -> Self {
        let store = ProgressStore::new(options.progress_file.clone());
        Self {
            renderer,
            store,
            scale: options.initial_scale,
            options,
            document: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn document_path(&self) -> Option<&Path> {
        self.document.as_ref().map(|doc| doc.path.as_path())
    }

    pub fn page_index(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.page_index)
    }

    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.page_count)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Open `path` and resume at its saved page.
    ///
    /// A saved page beyond the end of the document (it got shorter since)
    /// restarts at the first page, as does an unreadable progress record.
    /// Saving keeps failing until the record is repaired.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<Bitmap> {
        let path = path.into();
        let handle = self.renderer.open_document(&path)?;
        let page_count = self.renderer.page_count(&handle);
        if page_count == 0 {
            return Err(ReaderError::DocumentOpen {
                path,
                reason: "document has no pages".to_string(),
            });
        }

        let saved = match self.store.lookup(&path) {
            Ok(saved) => saved,
            Err(e @ ReaderError::StoreCorrupt { .. }) => {
                log::warn!("{}; starting at the first page", e);
                None
            }
            Err(e) => return Err(e),
        };

        let page_index = match saved {
            Some(saved) if saved < page_count => saved,
            Some(saved) => {
                log::warn!(
                    "Saved page {} is past the end of {} ({} pages), starting at the first page",
                    saved + 1,
                    path.display(),
                    page_count
                );
                0
            }
            None => 0,
        };

        let bitmap = self.renderer.render(&handle, page_index, self.scale)?;
        log::info!(
            "Opened {} ({} pages) at page {}",
            path.display(),
            page_count,
            page_index + 1
        );
        self.document = Some(LoadedDocument {
            path,
            handle,
            page_count,
            page_index,
        });
        Ok(bitmap)
    }

    /// Advance one page. `None` when empty or already on the last page.
    pub fn next_page(&mut self) -> Result<Option<Bitmap>> {
        let target = match &self.document {
            Some(doc) if doc.page_index + 1 < doc.page_count => doc.page_index + 1,
            _ => return Ok(None),
        };
        self.show(target, self.scale)
    }

    /// Go back one page. `None` when empty or already on the first page.
    pub fn prev_page(&mut self) -> Result<Option<Bitmap>> {
        let target = match &self.document {
            Some(doc) if doc.page_index > 0 => doc.page_index - 1,
            _ => return Ok(None),
        };
        self.show(target, self.scale)
    }

    /// Apply one zoom step. `None` when empty or when the step would leave the zoom bounds.
    pub fn zoom(&mut self, direction: ZoomDirection) -> Result<Option<Bitmap>> {
        let Some(page_index) = self.document.as_ref().map(|doc| doc.page_index) else {
            return Ok(None);
        };
        let scale = match direction {
            ZoomDirection::In => self.scale * self.options.zoom_step,
            ZoomDirection::Out => self.scale / self.options.zoom_step,
        };
        if !self.options.accepts_scale(scale) {
            log::debug!("Zoom {:?} to {:.3} is out of bounds, ignoring", direction, scale);
            return Ok(None);
        }
        self.show(page_index, scale)
    }

    /// Render the current view again without changing it
    pub fn render_current(&self) -> Result<Option<Bitmap>> {
        match &self.document {
            Some(doc) => self
                .renderer
                .render(&doc.handle, doc.page_index, self.scale)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Persist the current page for the open document. Returns the saved index.
    pub fn save_progress(&self) -> Result<Option<usize>> {
        match &self.document {
            Some(doc) => {
                self.store.save(&doc.path, doc.page_index)?;
                Ok(Some(doc.page_index))
            }
            None => Ok(None),
        }
    }

    fn show(&mut self, page_index: usize, scale: f32) -> Result<Option<Bitmap>> {
        let Some(doc) = self.document.as_mut() else {
            return Ok(None);
        };
        let bitmap = self.renderer.render(&doc.handle, page_index, scale)?;
        log::debug!("Showing page {} at scale {:.3}", page_index + 1, scale);
        doc.page_index = page_index;
        self.scale = scale;
        Ok(Some(bitmap))
    }
}
