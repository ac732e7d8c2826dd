//! Boundary to the external page rasterizer

use crate::types::{ReaderError, Result};
use std::path::Path;

/// An RGBA8 page image, row-major, `width * height * 4` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), width * height * 4);
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}

/// Something that can open documents and rasterize their pages.
///
/// Implementations report unreadable documents as
/// [`ReaderError::DocumentOpen`](crate::ReaderError::DocumentOpen) and
/// rasterization failures as [`ReaderError::Render`](crate::ReaderError::Render).
pub trait Renderer {
    /// Handle to an opened document
    type Document;

    fn open_document(&self, path: &Path) -> Result<Self::Document>;

    fn page_count(&self, document: &Self::Document) -> usize;

    /// Render `page_index` at `scale`, where 1.0 maps one document unit to one pixel
    fn render(&self, document: &Self::Document, page_index: usize, scale: f32) -> Result<Bitmap>;
}

/// Reject a render whose bitmap would exceed `max_side` pixels on either side.
///
/// `page_size` is the page's width and height in document units at scale 1.0.
pub fn ensure_bitmap_fits(
    page_index: usize,
    scale: f32,
    page_size: (f32, f32),
    max_side: usize,
) -> Result<()> {
    let width = (page_size.0 * scale).ceil();
    let height = (page_size.1 * scale).ceil();
    if !width.is_finite() || !height.is_finite() || width.max(height) > max_side as f32 {
        return Err(ReaderError::Render {
            page_index,
            scale,
            reason: format!(
                "page would be {}x{} pixels, the limit is {} per side",
                width, height, max_side
            ),
        });
    }
    Ok(())
}
