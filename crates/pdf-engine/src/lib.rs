use image::{ImageBuffer, Rgb};
use std::path::Path;

#[cfg(feature = "pdfium")]
pub mod pdfium_backend;

#[cfg(feature = "pdfium")]
pub use pdfium_backend::PdfiumRasterizer;

/// Packed RGB pixels, three bytes per pixel, no alpha.
pub type Bitmap = ImageBuffer<Rgb<u8>, Vec<u8>>;

/// Page geometry in page-space units (points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self { width_pt, height_pt }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PdfEngineError {
    #[error("failed to initialize PDF library: {0}")]
    Initialization(String),
    #[error("failed to open PDF: {0}")]
    Load(String),
    #[error("page {page} out of range (page_count={page_count})")]
    PageOutOfRange { page: usize, page_count: usize },
    #[error("render error: {0}")]
    Render(String),
}

/// Turns documents into page bitmaps.
///
/// `Document` is a scoped resource: dropping it releases whatever the
/// backend holds for that file.
pub trait Rasterizer {
    type Document;

    fn open(&self, path: &Path) -> Result<Self::Document, PdfEngineError>;
    fn page_count(&self, document: &Self::Document) -> usize;
    fn page_geometry(
        &self,
        document: &Self::Document,
        page_index: usize,
    ) -> Result<PageSize, PdfEngineError>;

    /// Renders a page at `scale`. The bitmap measures
    /// [`scaled_dimensions`] of the page geometry.
    fn rasterize(
        &self,
        document: &Self::Document,
        page_index: usize,
        scale: f32,
    ) -> Result<Bitmap, PdfEngineError>;
}

/// Pixel size of a page rendered at `scale`, never smaller than 1×1.
pub fn scaled_dimensions(size: PageSize, scale: f32) -> (u32, u32) {
    let width = (size.width_pt * scale).round().max(1.0) as u32;
    let height = (size.height_pt * scale).round().max(1.0) as u32;
    (width, height)
}

/// Drops the alpha channel of tightly packed RGBA data.
pub fn rgba_to_rgb(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for pixel in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&pixel[..3]);
    }
    rgb
}

pub fn check_page_index(page_index: usize, page_count: usize) -> Result<(), PdfEngineError> {
    if page_index < page_count {
        Ok(())
    } else {
        Err(PdfEngineError::PageOutOfRange { page: page_index, page_count })
    }
}
