//! Viewport controller: page, scale and color mode for one open document.

use crate::color::{self, ColorMode};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::input::parse_page_entry;
use crate::zoom::fit_page_scale;
use pdf_engine::{Bitmap, PageSize, PdfEngineError, Rasterizer};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    pub current_page: usize,
    pub scale: f32,
    pub mode: ColorMode,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self { current_page: 0, scale: 1.0, mode: ColorMode::Default }
    }
}

/// A page ready for display, already recolored.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub bitmap: Bitmap,
    pub page_index: usize,
    pub page_count: usize,
    pub scale: f32,
    /// Bitmap pixels per display point; the page is shown at
    /// `bitmap size / pixels_per_point`.
    pub pixels_per_point: f32,
    pub mode: ColorMode,
}

/// Where rendered pages end up.
pub trait DisplaySurface {
    fn present(&mut self, page: RenderedPage);
    fn clear(&mut self);
}

struct LoadedDocument<D> {
    handle: D,
    path: PathBuf,
    page_count: usize,
}

pub struct ViewportController<R: Rasterizer, S: DisplaySurface> {
    rasterizer: R,
    surface: S,
    config: ViewerConfig,
    document: Option<LoadedDocument<R::Document>>,
    state: ViewerState,
}

impl<R: Rasterizer, S: DisplaySurface> ViewportController<R, S> {
    pub fn new(rasterizer: R, surface: S) -> Self {
        Self::with_config(rasterizer, surface, ViewerConfig::default())
    }

    pub fn with_config(rasterizer: R, surface: S, config: ViewerConfig) -> Self {
        Self { rasterizer, surface, config, document: None, state: ViewerState::default() }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// Zero while no document is loaded.
    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.page_count)
    }

    pub fn document_path(&self) -> Option<&Path> {
        self.document.as_ref().map(|doc| doc.path.as_path())
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Open `path`, replacing the current document.
    ///
    /// The previous document is released before the new one is acquired,
    /// so a failed open leaves no document loaded.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), ViewerError> {
        let path = path.as_ref();

        if let Some(previous) = self.document.take() {
            log::debug!("releasing {}", previous.path.display());
        }

        let opened = self.rasterizer.open(path).and_then(|handle| {
            let page_count = self.rasterizer.page_count(&handle);
            if page_count == 0 {
                return Err(PdfEngineError::Load("document has no pages".to_owned()));
            }
            Ok((handle, page_count))
        });

        let (handle, page_count) = match opened {
            Ok(opened) => opened,
            Err(source) => {
                self.surface.clear();
                return Err(ViewerError::DocumentOpen { path: path.to_path_buf(), source });
            }
        };

        log::info!("opened {} ({} pages)", path.display(), page_count);

        self.document = Some(LoadedDocument { handle, path: path.to_path_buf(), page_count });
        self.state.current_page = 0;
        self.state.scale = 1.0;
        self.render()
    }

    pub fn goto_page(&mut self, page: usize) -> Result<(), ViewerError> {
        let page_count = self.page_count();
        if page >= page_count {
            let page = i64::try_from(page).unwrap_or(i64::MAX);
            return Err(ViewerError::PageRange { page, page_count });
        }

        self.state.current_page = page;
        self.render()
    }

    /// Jump to a 1-based page number typed by the user.
    pub fn goto_page_entry(&mut self, text: &str) -> Result<(), ViewerError> {
        let number = parse_page_entry(text)?;
        let index = number.saturating_sub(1);
        let page_count = self.page_count();

        match usize::try_from(index) {
            Ok(page) if page < page_count => self.goto_page(page),
            _ => Err(ViewerError::PageRange { page: index, page_count }),
        }
    }

    pub fn next_page(&mut self) -> Result<(), ViewerError> {
        if self.state.current_page + 1 >= self.page_count() {
            return Ok(());
        }

        self.state.current_page += 1;
        self.render()
    }

    pub fn prev_page(&mut self) -> Result<(), ViewerError> {
        if !self.is_loaded() || self.state.current_page == 0 {
            return Ok(());
        }

        self.state.current_page -= 1;
        self.render()
    }

    pub fn zoom_in(&mut self) -> Result<(), ViewerError> {
        self.set_scale(self.state.scale * self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> Result<(), ViewerError> {
        self.set_scale(self.state.scale / self.config.zoom_step)
    }

    /// Fit the current page inside a viewport of the given size.
    pub fn fit_to_window(
        &mut self,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<(), ViewerError> {
        let Some(geometry) = self.current_geometry()? else {
            return Ok(());
        };

        match fit_page_scale(viewport_width, viewport_height, geometry) {
            Some(scale) => self.set_scale(scale),
            None => Ok(()),
        }
    }

    pub fn set_mode(&mut self, mode: ColorMode) -> Result<(), ViewerError> {
        log::debug!("color mode {:?}", mode);
        self.state.mode = mode;
        self.render()
    }

    /// Update the output density and the largest bitmap the display
    /// accepts. Re-renders only when either changed; invalid values are
    /// ignored.
    pub fn set_display_metrics(
        &mut self,
        pixels_per_point: f32,
        max_bitmap_side: u32,
    ) -> Result<(), ViewerError> {
        let config = self
            .config
            .clone()
            .with_pixels_per_point(pixels_per_point)
            .with_max_bitmap_side(max_bitmap_side);
        if config == self.config {
            return Ok(());
        }

        log::debug!(
            "display metrics {:.2} ppp, max side {:?}",
            config.pixels_per_point,
            config.max_bitmap_side
        );
        self.config = config;

        if !self.is_loaded() {
            return Ok(());
        }
        self.render()
    }

    /// Rasterize, recolor and present the current page, or clear the
    /// surface when nothing is open.
    ///
    /// A scale too large for the current page's bitmap cap is lowered
    /// before rasterizing.
    pub fn render(&mut self) -> Result<(), ViewerError> {
        let Some(document) = &self.document else {
            self.surface.clear();
            return Ok(());
        };

        let geometry = self
            .rasterizer
            .page_geometry(&document.handle, self.state.current_page)
            .map_err(ViewerError::Render)?;
        self.state.scale = self.config.clamp_scale(self.state.scale, geometry);

        let ViewerState { current_page, scale, mode } = self.state;
        let pixels_per_point = self.config.pixels_per_point;
        let bitmap = self
            .rasterizer
            .rasterize(&document.handle, current_page, scale * pixels_per_point)
            .map_err(ViewerError::Render)?;

        log::debug!(
            "rendered page {} at {:.3} ({}x{})",
            current_page,
            scale,
            bitmap.width(),
            bitmap.height()
        );

        self.surface.present(RenderedPage {
            bitmap: color::transform(&bitmap, mode),
            page_index: current_page,
            page_count: document.page_count,
            scale,
            pixels_per_point,
            mode,
        });

        Ok(())
    }

    fn current_geometry(&self) -> Result<Option<PageSize>, ViewerError> {
        let Some(document) = &self.document else {
            return Ok(None);
        };

        self.rasterizer
            .page_geometry(&document.handle, self.state.current_page)
            .map(Some)
            .map_err(ViewerError::Render)
    }

    fn set_scale(&mut self, scale: f32) -> Result<(), ViewerError> {
        let Some(geometry) = self.current_geometry()? else {
            return Ok(());
        };

        let clamped = self.config.clamp_scale(scale, geometry);
        if (clamped - self.state.scale).abs() <= f32::EPSILON {
            return Ok(());
        }

        self.state.scale = clamped;
        self.render()
    }
}
