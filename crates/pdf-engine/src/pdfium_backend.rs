//! PDFium-backed rasterizer.
//!
//! Binds the PDFium shared library once and renders pages through
//! `pdfium-render`.

use crate::{
    check_page_index, rgba_to_rgb, scaled_dimensions, Bitmap, PageSize, PdfEngineError, Rasterizer,
};
use pdfium_render::prelude::*;
use std::path::Path;

/// Rasterizer backed by a process-wide PDFium binding.
pub struct PdfiumRasterizer {
    pdfium: &'static Pdfium,
}

impl PdfiumRasterizer {
    /// Bind PDFium.
    ///
    /// Search order:
    /// 1. Executable's directory (for app bundles: .app/Contents/MacOS/)
    /// 2. Current working directory
    /// 3. System library paths
    pub fn new() -> Result<Self, PdfEngineError> {
        let pdfium = Box::leak(Box::new(bind_pdfium()?));
        Ok(Self { pdfium })
    }
}

fn bind_pdfium() -> Result<Pdfium, PdfEngineError> {
    let exe_dir = std::env::current_exe().ok().and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(ref dir) = exe_dir {
        if let Ok(bindings) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
        {
            log::debug!("bound PDFium from {}", dir.display());
            return Ok(Pdfium::new(bindings));
        }
    }

    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| PdfEngineError::Initialization(e.to_string()))?;

    Ok(Pdfium::new(bindings))
}

fn load_page<'a>(
    document: &'a PdfDocument<'static>,
    page_index: usize,
) -> Result<PdfPage<'a>, PdfEngineError> {
    let page_count = document.pages().len() as usize;
    check_page_index(page_index, page_count)?;

    let index = u16::try_from(page_index)
        .map_err(|_| PdfEngineError::PageOutOfRange { page: page_index, page_count })?;

    document.pages().get(index).map_err(|e| PdfEngineError::Render(e.to_string()))
}

fn geometry(page: &PdfPage<'_>) -> PageSize {
    PageSize::new(page.width().value, page.height().value)
}

impl Rasterizer for PdfiumRasterizer {
    type Document = PdfDocument<'static>;

    fn open(&self, path: &Path) -> Result<Self::Document, PdfEngineError> {
        self.pdfium.load_pdf_from_file(path, None).map_err(|e| PdfEngineError::Load(e.to_string()))
    }

    fn page_count(&self, document: &Self::Document) -> usize {
        document.pages().len() as usize
    }

    fn page_geometry(
        &self,
        document: &Self::Document,
        page_index: usize,
    ) -> Result<PageSize, PdfEngineError> {
        let page = load_page(document, page_index)?;
        Ok(geometry(&page))
    }

    fn rasterize(
        &self,
        document: &Self::Document,
        page_index: usize,
        scale: f32,
    ) -> Result<Bitmap, PdfEngineError> {
        let page = load_page(document, page_index)?;
        let (width, height) = scaled_dimensions(geometry(&page), scale);

        let config = PdfRenderConfig::new()
            .set_target_width(width as i32)
            .set_target_height(height as i32);

        let bitmap =
            page.render_with_config(&config).map_err(|e| PdfEngineError::Render(e.to_string()))?;

        let out_width = bitmap.width() as u32;
        let out_height = bitmap.height() as u32;
        let rgb = rgba_to_rgb(&bitmap.as_rgba_bytes());

        Bitmap::from_raw(out_width, out_height, rgb).ok_or_else(|| {
            PdfEngineError::Render(format!(
                "bitmap buffer does not match {out_width}x{out_height}"
            ))
        })
    }
}
