//! Viewer tuning: zoom step, scale bounds and output density.

use pdf_engine::PageSize;

/// Configuration for the viewport controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Factor applied per zoom in / zoom out step
    pub zoom_step: f32,
    /// Smallest scale reachable by zoom or fit
    pub min_scale: f32,
    /// Largest scale reachable by zoom or fit
    pub max_scale: f32,
    /// Bitmap pixels per display point
    pub pixels_per_point: f32,
    /// Longest bitmap side the display can take, if limited
    pub max_bitmap_side: Option<u32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: 1.2,
            min_scale: 0.1,
            max_scale: 10.0,
            pixels_per_point: 1.0,
            max_bitmap_side: None,
        }
    }
}

impl ViewerConfig {
    /// Sets the zoom step. Values at or below 1.0 are ignored.
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        if step > 1.0 {
            self.zoom_step = step;
        }
        self
    }

    /// Sets the scale bounds. Swapped bounds are reordered; non-positive
    /// bounds are ignored.
    pub fn with_scale_bounds(mut self, min: f32, max: f32) -> Self {
        if min > 0.0 && max > 0.0 {
            self.min_scale = min.min(max);
            self.max_scale = min.max(max);
        }
        self
    }

    /// Sets the output density. Non-positive values are ignored.
    pub fn with_pixels_per_point(mut self, pixels_per_point: f32) -> Self {
        if pixels_per_point > 0.0 {
            self.pixels_per_point = pixels_per_point;
        }
        self
    }

    /// Caps the longest side of rendered bitmaps. Zero is ignored.
    pub fn with_max_bitmap_side(mut self, side: u32) -> Self {
        if side > 0 {
            self.max_bitmap_side = Some(side);
        }
        self
    }

    /// Largest scale for `page`: `max_scale`, lowered so the rendered
    /// bitmap stays within `max_bitmap_side`.
    pub fn scale_limit(&self, page: PageSize) -> f32 {
        let longest = page.width_pt.max(page.height_pt) * self.pixels_per_point;

        match self.max_bitmap_side {
            Some(side) if longest > 0.0 => self.max_scale.min(side as f32 / longest),
            _ => self.max_scale,
        }
    }

    /// Clamps `scale` for `page`. The bitmap cap wins over `min_scale`.
    pub fn clamp_scale(&self, scale: f32, page: PageSize) -> f32 {
        scale.max(self.min_scale).min(self.scale_limit(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_engine::scaled_dimensions;

    fn a4() -> PageSize {
        PageSize::new(595.0, 842.0)
    }

    #[test]
    fn default_bounds_and_step() {
        let config = ViewerConfig::default();

        assert_eq!(config.zoom_step, 1.2);
        assert_eq!(config.clamp_scale(0.01, a4()), 0.1);
        assert_eq!(config.clamp_scale(50.0, a4()), 10.0);
        assert_eq!(config.clamp_scale(2.5, a4()), 2.5);
    }

    #[test]
    fn builder_rejects_invalid_values() {
        let config = ViewerConfig::default()
            .with_zoom_step(0.5)
            .with_scale_bounds(-1.0, 4.0)
            .with_pixels_per_point(0.0)
            .with_max_bitmap_side(0);

        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn builder_reorders_swapped_bounds() {
        let config = ViewerConfig::default().with_scale_bounds(4.0, 0.5);

        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 4.0);
    }

    #[test]
    fn bitmap_cap_lowers_the_limit() {
        let config = ViewerConfig::default().with_max_bitmap_side(8192);
        let scale = config.clamp_scale(10.0, a4());

        assert!(scale < 10.0);
        let (width, height) = scaled_dimensions(a4(), scale);
        assert!(width <= 8192 && height <= 8192, "{width}x{height}");
        assert_eq!(height, 8192);
    }

    #[test]
    fn bitmap_cap_accounts_for_density() {
        let config =
            ViewerConfig::default().with_max_bitmap_side(2048).with_pixels_per_point(2.0);
        let scale = config.clamp_scale(10.0, a4());

        let (_, height) = scaled_dimensions(a4(), scale * 2.0);
        assert!(height <= 2048);
    }

    #[test]
    fn bitmap_cap_wins_over_min_scale() {
        let config = ViewerConfig::default().with_max_bitmap_side(100);
        let huge = PageSize::new(10_000.0, 10_000.0);

        assert!((config.clamp_scale(1.0, huge) - 0.01).abs() < 1e-6);
    }
}
