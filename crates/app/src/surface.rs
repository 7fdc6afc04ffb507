//! egui display surface: keeps the current page as a texture.

use eframe::egui;
use viewer_core::{DisplaySurface, RenderedPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageIndicator {
    page_index: usize,
    page_count: usize,
}

pub struct EguiSurface {
    ctx: egui::Context,
    texture: Option<egui::TextureHandle>,
    // Texture size in points
    display_size: egui::Vec2,
    indicator: Option<PageIndicator>,
}

impl EguiSurface {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, texture: None, display_size: egui::Vec2::ZERO, indicator: None }
    }

    /// Texture and the size to draw it at, in points.
    pub fn page_image(&self) -> Option<(egui::TextureId, egui::Vec2)> {
        self.texture.as_ref().map(|t| (t.id(), self.display_size))
    }

    /// "Page X / N", or "Page 0 / 0" when nothing is shown.
    pub fn indicator_text(&self) -> String {
        match self.indicator {
            Some(PageIndicator { page_index, page_count }) => {
                format!("Page {} / {}", page_index + 1, page_count)
            }
            None => "Page 0 / 0".to_owned(),
        }
    }
}

impl DisplaySurface for EguiSurface {
    fn present(&mut self, page: RenderedPage) {
        let (width, height) = page.bitmap.dimensions();
        let image =
            egui::ColorImage::from_rgb([width as usize, height as usize], page.bitmap.as_raw());

        match &mut self.texture {
            Some(handle) => handle.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(self.ctx.load_texture("page", image, egui::TextureOptions::LINEAR));
            }
        }

        self.display_size = egui::vec2(width as f32, height as f32) / page.pixels_per_point;
        self.indicator =
            Some(PageIndicator { page_index: page.page_index, page_count: page.page_count });
        self.ctx.request_repaint();
    }

    fn clear(&mut self) {
        self.texture = None;
        self.display_size = egui::Vec2::ZERO;
        self.indicator = None;
        self.ctx.request_repaint();
    }
}
