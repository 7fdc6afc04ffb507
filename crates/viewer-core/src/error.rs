use pdf_engine::PdfEngineError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("cannot open {}: {source}", path.display())]
    DocumentOpen {
        path: PathBuf,
        #[source]
        source: PdfEngineError,
    },
    /// `page` is the zero-based index that was requested.
    #[error("page {} is out of range (document has {page_count} pages)", page.saturating_add(1))]
    PageRange { page: i64, page_count: usize },
    #[error("invalid page number {0:?}")]
    InvalidPageInput(String),
    #[error("failed to render page: {0}")]
    Render(#[source] PdfEngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_range_message_is_one_based() {
        let err = ViewerError::PageRange { page: 4, page_count: 3 };
        assert_eq!(err.to_string(), "page 5 is out of range (document has 3 pages)");
    }

    #[test]
    fn page_range_message_saturates() {
        let err = ViewerError::PageRange { page: i64::MAX, page_count: 3 };
        assert_eq!(
            err.to_string(),
            format!("page {} is out of range (document has 3 pages)", i64::MAX)
        );
    }
}
