use crate::color::ColorMode;
use crate::controller::{DisplaySurface, ViewportController};
use crate::error::ViewerError;
use pdf_engine::Rasterizer;
use std::path::PathBuf;

/// Requests the controller understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(PathBuf),
    GotoPage(usize),
    GotoPageEntry(String),
    NextPage,
    PrevPage,
    ZoomIn,
    ZoomOut,
    FitToWindow { viewport_width: f32, viewport_height: f32 },
    SetMode(ColorMode),
    Render,
}

impl<R: Rasterizer, S: DisplaySurface> ViewportController<R, S> {
    pub fn dispatch(&mut self, command: Command) -> Result<(), ViewerError> {
        log::debug!("dispatch {:?}", command);

        match command {
            Command::Open(path) => self.open(path),
            Command::GotoPage(page) => self.goto_page(page),
            Command::GotoPageEntry(text) => self.goto_page_entry(&text),
            Command::NextPage => self.next_page(),
            Command::PrevPage => self.prev_page(),
            Command::ZoomIn => self.zoom_in(),
            Command::ZoomOut => self.zoom_out(),
            Command::FitToWindow { viewport_width, viewport_height } => {
                self.fit_to_window(viewport_width, viewport_height)
            }
            Command::SetMode(mode) => self.set_mode(mode),
            Command::Render => self.render(),
        }
    }
}
