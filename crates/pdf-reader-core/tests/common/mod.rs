#![allow(dead_code)]

use pdf_reader_core::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// In-memory renderer: documents are registered by path with a page count,
/// pages are 100x100 units and render to `scale * 100` pixels square.
#[derive(Clone, Default)]
pub struct FakeRenderer {
    documents: Rc<RefCell<HashMap<PathBuf, usize>>>,
    fail_renders: Rc<Cell<bool>>,
    max_side: Rc<Cell<Option<usize>>>,
    render_calls: Rc<RefCell<Vec<(usize, f32)>>>,
}

pub struct FakeDocument {
    pages: usize,
}

impl FakeRenderer {
    pub fn with_document(self, path: impl Into<PathBuf>, pages: usize) -> Self {
        self.set_document(path, pages);
        self
    }

    /// Register or replace a document
    pub fn set_document(&self, path: impl Into<PathBuf>, pages: usize) {
        self.documents.borrow_mut().insert(path.into(), pages);
    }

    pub fn fail_renders(&self, fail: bool) {
        self.fail_renders.set(fail);
    }

    /// Reject bitmaps larger than `max_side` pixels per side
    pub fn limit_bitmap_side(&self, max_side: usize) {
        self.max_side.set(Some(max_side));
    }

    pub fn render_calls(&self) -> Vec<(usize, f32)> {
        self.render_calls.borrow().clone()
    }
}

impl Renderer for FakeRenderer {
    type Document = FakeDocument;

    fn open_document(&self, path: &Path) -> Result<FakeDocument> {
        match self.documents.borrow().get(path) {
            Some(&pages) => Ok(FakeDocument { pages }),
            None => Err(ReaderError::DocumentOpen {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            }),
        }
    }

    fn page_count(&self, document: &FakeDocument) -> usize {
        document.pages
    }

    fn render(&self, document: &FakeDocument, page_index: usize, scale: f32) -> Result<Bitmap> {
        assert!(page_index < document.pages, "rendered page out of range");
        if self.fail_renders.get() {
            return Err(ReaderError::Render {
                page_index,
                scale,
                reason: "out of memory".to_string(),
            });
        }
        if let Some(max_side) = self.max_side.get() {
            ensure_bitmap_fits(page_index, scale, (100.0, 100.0), max_side)?;
        }
        self.render_calls.borrow_mut().push((page_index, scale));
        let side = ((scale * 100.0).round() as usize).max(1);
        Ok(Bitmap::new(side, side, vec![255; side * side * 4]))
    }
}

/// Session over a fake renderer with its progress record in a fresh temp dir
pub fn session_in(dir: &TempDir, renderer: FakeRenderer) -> ViewerSession<FakeRenderer> {
    let options = ReaderOptions {
        progress_file: dir.path().join("progress.json"),
        ..Default::default()
    };
    ViewerSession::new(renderer, options)
}
