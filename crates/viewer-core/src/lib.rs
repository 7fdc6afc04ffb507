//! Viewer core: color modes, viewport state and input routing.
//!
//! Everything here is independent of the GUI toolkit. Pages come in
//! through [`pdf_engine::Rasterizer`] and leave through [`DisplaySurface`].

pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod zoom;

pub use color::{transform, ColorMode};
pub use command::Command;
pub use config::ViewerConfig;
pub use controller::{DisplaySurface, RenderedPage, ViewerState, ViewportController};
pub use error::ViewerError;
pub use input::{parse_page_entry, route, InputEvent};
pub use zoom::fit_page_scale;
