use pdf_reader_core::{Bitmap, ReaderError, Renderer, Result, ensure_bitmap_fits};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

const VENDOR_LIB_DIR: &str = "vendor/pdfium/lib";

/// Largest bitmap side rendered until the window reports its texture limit
pub const DEFAULT_MAX_BITMAP_SIDE: usize = 8192;

/// Initialize Pdfium, trying the vendored library first, then falling back to system
pub fn init_pdfium() -> std::result::Result<Pdfium, PdfiumError> {
    // build.rs downloads into vendor/pdfium/lib under the workspace root
    let candidates = [
        std::env::current_dir().ok().map(|dir| dir.join(VENDOR_LIB_DIR)),
        Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("../..").join(VENDOR_LIB_DIR)),
    ];

    for vendor_path in candidates.into_iter().flatten().filter(|p| p.exists()) {
        match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            Ok(binding) => return Ok(Pdfium::new(binding)),
            Err(e) => log::warn!(
                "Vendored pdfium at {} failed to load: {}",
                vendor_path.display(),
                e
            ),
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

/// A document pdfium has opened once. Pages are loaded from the file on each render.
pub struct PdfiumDocument {
    path: PathBuf,
    page_count: usize,
}

pub struct PdfiumRenderer {
    pdfium: Pdfium,
    max_bitmap_side: usize,
}

impl PdfiumRenderer {
    pub fn new() -> std::result::Result<Self, PdfiumError> {
        Ok(Self {
            pdfium: init_pdfium()?,
            max_bitmap_side: DEFAULT_MAX_BITMAP_SIDE,
        })
    }

    /// Pages that would rasterize larger than `max_side` pixels fail with a render error
    pub fn set_max_bitmap_side(&mut self, max_side: usize) {
        self.max_bitmap_side = max_side;
    }
}

impl Renderer for PdfiumRenderer {
    type Document = PdfiumDocument;

    fn open_document(&self, path: &Path) -> Result<PdfiumDocument> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ReaderError::DocumentOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(PdfiumDocument {
            path: path.to_path_buf(),
            page_count: document.pages().len() as usize,
        })
    }

    fn page_count(&self, document: &PdfiumDocument) -> usize {
        document.page_count
    }

    fn render(&self, document: &PdfiumDocument, page_index: usize, scale: f32) -> Result<Bitmap> {
        let render_error = |e: PdfiumError| ReaderError::Render {
            page_index,
            scale,
            reason: e.to_string(),
        };

        let pdf = self
            .pdfium
            .load_pdf_from_file(&document.path, None)
            .map_err(render_error)?;
        let page = pdf.pages().get(page_index as u16).map_err(render_error)?;
        ensure_bitmap_fits(
            page_index,
            scale,
            (page.width().value, page.height().value),
            self.max_bitmap_side,
        )?;

        // scale 1.0 renders one pixel per PDF point
        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page.render_with_config(&config).map_err(render_error)?;

        Ok(Bitmap::new(
            bitmap.width() as usize,
            bitmap.height() as usize,
            bitmap.as_rgba_bytes().to_vec(),
        ))
    }
}
