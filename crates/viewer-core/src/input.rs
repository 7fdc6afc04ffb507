//! Toolkit-neutral input events and their routing to controller commands.

use crate::color::ColorMode;
use crate::command::Command;
use crate::error::ViewerError;
use std::num::IntErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    FileSelected(PathBuf),
    ZoomIn,
    ZoomOut,
    FitRequested { viewport_width: f32, viewport_height: f32 },
    ModeSelected(ColorMode),
    /// Contents of the page-number field when confirmed.
    PageEntryConfirmed(String),
    PreviousPage,
    NextPage,
    /// Positive `delta_y` scrolls up / away from the user.
    Wheel { delta_y: f32, zoom_modifier: bool },
    Resized,
}

pub fn route(event: InputEvent) -> Option<Command> {
    let command = match event {
        InputEvent::FileSelected(path) => Command::Open(path),
        InputEvent::ZoomIn => Command::ZoomIn,
        InputEvent::ZoomOut => Command::ZoomOut,
        InputEvent::FitRequested { viewport_width, viewport_height } => {
            Command::FitToWindow { viewport_width, viewport_height }
        }
        InputEvent::ModeSelected(mode) => Command::SetMode(mode),
        InputEvent::PageEntryConfirmed(text) => Command::GotoPageEntry(text),
        InputEvent::PreviousPage => Command::PrevPage,
        InputEvent::NextPage => Command::NextPage,
        InputEvent::Wheel { delta_y, .. } if delta_y == 0.0 => return None,
        InputEvent::Wheel { delta_y, zoom_modifier: true } => {
            if delta_y > 0.0 {
                Command::ZoomIn
            } else {
                Command::ZoomOut
            }
        }
        InputEvent::Wheel { delta_y, zoom_modifier: false } => {
            if delta_y > 0.0 {
                Command::PrevPage
            } else {
                Command::NextPage
            }
        }
        InputEvent::Resized => Command::Render,
    };

    Some(command)
}

/// Parses a page number as typed: surrounding whitespace is ignored, the
/// value is returned unchanged (1-based, possibly out of range).
///
/// Numbers too large for `i64` saturate, so they still read as out of
/// range rather than as invalid input.
pub fn parse_page_entry(text: &str) -> Result<i64, ViewerError> {
    let trimmed = text.trim();

    match trimmed.parse::<i64>() {
        Ok(number) => Ok(number),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ViewerError::InvalidPageInput(trimmed.to_owned())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_wheel_steps_pages() {
        let up = InputEvent::Wheel { delta_y: 120.0, zoom_modifier: false };
        let down = InputEvent::Wheel { delta_y: -120.0, zoom_modifier: false };

        assert_eq!(route(up), Some(Command::PrevPage));
        assert_eq!(route(down), Some(Command::NextPage));
    }

    #[test]
    fn modified_wheel_zooms() {
        let up = InputEvent::Wheel { delta_y: 3.0, zoom_modifier: true };
        let down = InputEvent::Wheel { delta_y: -3.0, zoom_modifier: true };

        assert_eq!(route(up), Some(Command::ZoomIn));
        assert_eq!(route(down), Some(Command::ZoomOut));
    }

    #[test]
    fn zero_wheel_delta_is_ignored() {
        assert_eq!(route(InputEvent::Wheel { delta_y: 0.0, zoom_modifier: true }), None);
        assert_eq!(route(InputEvent::Wheel { delta_y: 0.0, zoom_modifier: false }), None);
    }

    #[test]
    fn toolbar_events_map_one_to_one() {
        assert_eq!(
            route(InputEvent::FileSelected(PathBuf::from("a.pdf"))),
            Some(Command::Open(PathBuf::from("a.pdf")))
        );
        assert_eq!(
            route(InputEvent::FitRequested { viewport_width: 800.0, viewport_height: 600.0 }),
            Some(Command::FitToWindow { viewport_width: 800.0, viewport_height: 600.0 })
        );
        assert_eq!(
            route(InputEvent::ModeSelected(ColorMode::Night)),
            Some(Command::SetMode(ColorMode::Night))
        );
        assert_eq!(
            route(InputEvent::PageEntryConfirmed("7".to_owned())),
            Some(Command::GotoPageEntry("7".to_owned()))
        );
        assert_eq!(route(InputEvent::Resized), Some(Command::Render));
    }

    #[test]
    fn page_entry_parsing() {
        assert_eq!(parse_page_entry(" 12\n").expect("numeric entry"), 12);
        assert_eq!(parse_page_entry("-3").expect("negative is numeric"), -3);

        let err = parse_page_entry("twelve").expect_err("words are rejected");
        assert!(matches!(err, ViewerError::InvalidPageInput(ref text) if text == "twelve"));

        assert!(parse_page_entry("").is_err());
    }

    #[test]
    fn page_entry_overflow_saturates() {
        assert_eq!(parse_page_entry("99999999999999999999").expect("numeric entry"), i64::MAX);
        assert_eq!(parse_page_entry("-99999999999999999999").expect("numeric entry"), i64::MIN);
        assert!(parse_page_entry("9999999999999999999x").is_err());
    }
}
