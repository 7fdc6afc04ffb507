use pdf_engine::PageSize;

/// Scale at which the whole page fits inside the viewport.
///
/// Returns `None` when either box is degenerate.
pub fn fit_page_scale(viewport_width: f32, viewport_height: f32, page: PageSize) -> Option<f32> {
    if viewport_width <= 0.0
        || viewport_height <= 0.0
        || page.width_pt <= 0.0
        || page.height_pt <= 0.0
    {
        return None;
    }

    let width = viewport_width / page.width_pt;
    let height = viewport_height / page.height_pt;

    Some(width.min(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_page_uses_smallest_dimension_ratio() {
        let scale = fit_page_scale(1000.0, 800.0, PageSize::new(500.0, 2000.0));
        assert_eq!(scale, Some(0.4));

        let scale = fit_page_scale(800.0, 600.0, PageSize::new(400.0, 500.0))
            .expect("scale for valid boxes");
        assert!((scale - 1.2).abs() < 1e-6);
    }

    #[test]
    fn fit_page_rejects_degenerate_boxes() {
        assert_eq!(fit_page_scale(0.0, 600.0, PageSize::new(400.0, 500.0)), None);
        assert_eq!(fit_page_scale(800.0, 600.0, PageSize::new(400.0, 0.0)), None);
    }
}
