//! Modal error dialog shown for recoverable viewer errors.

use eframe::egui;
use viewer_core::ViewerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Warning,
}

impl ErrorSeverity {
    fn icon(&self) -> &'static str {
        match self {
            ErrorSeverity::Error => "❌",
            ErrorSeverity::Warning => "⚠️",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDialogState {
    pub severity: ErrorSeverity,
    pub title: String,
    pub message: String,
}

impl ErrorDialogState {
    pub fn from_error(error: &ViewerError) -> Self {
        let (severity, title, message) = match error {
            ViewerError::DocumentOpen { .. } => {
                (ErrorSeverity::Error, "Open failed", format!("Could not open PDF: {error}"))
            }
            ViewerError::PageRange { page_count: 0, .. } => {
                (ErrorSeverity::Warning, "Error", "No document is open".to_owned())
            }
            ViewerError::PageRange { page_count, .. } => (
                ErrorSeverity::Warning,
                "Error",
                format!("Page number out of range (1-{page_count})"),
            ),
            ViewerError::InvalidPageInput(_) => {
                (ErrorSeverity::Warning, "Error", "Please enter a valid page number".to_owned())
            }
            ViewerError::Render(_) => (ErrorSeverity::Error, "Render failed", error.to_string()),
        };

        Self { severity, title: title.to_owned(), message }
    }

    /// Draws the dialog. Returns `true` once it has been dismissed.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut should_close = false;

        egui::Window::new(format!("{} {}", self.severity.icon(), self.title))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&self.message);
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            });

        should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_engine::PdfEngineError;
    use std::path::PathBuf;

    #[test]
    fn open_failure_is_an_error() {
        let dialog = ErrorDialogState::from_error(&ViewerError::DocumentOpen {
            path: PathBuf::from("notes.pdf"),
            source: PdfEngineError::Load("bad xref".to_owned()),
        });

        assert_eq!(dialog.severity, ErrorSeverity::Error);
        assert_eq!(dialog.title, "Open failed");
        assert!(dialog.message.contains("notes.pdf"));
        assert!(dialog.message.contains("bad xref"));
    }

    #[test]
    fn page_errors_are_warnings() {
        let range = ErrorDialogState::from_error(&ViewerError::PageRange { page: 9, page_count: 3 });
        assert_eq!(range.severity, ErrorSeverity::Warning);
        assert_eq!(range.message, "Page number out of range (1-3)");

        let input = ErrorDialogState::from_error(&ViewerError::InvalidPageInput("x".to_owned()));
        assert_eq!(input.message, "Please enter a valid page number");
    }

    #[test]
    fn page_error_without_document() {
        let dialog = ErrorDialogState::from_error(&ViewerError::PageRange { page: 0, page_count: 0 });

        assert_eq!(dialog.message, "No document is open");
    }
}
