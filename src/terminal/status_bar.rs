//! Status bar showing widget state and key hints at the bottom of the screen.

use crate::ascii::CharSet;
use crate::component::CaptureState;

use super::panel::PanelSize;

/// Bottom status line: current state, view settings, key hints, notices.
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// Whether the status bar is visible
    pub visible: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    /// Create a new status bar, visible by default.
    pub fn new() -> Self {
        Self { visible: true }
    }

    /// Create a status bar with the specified visibility.
    pub fn with_visibility(visible: bool) -> Self {
        Self { visible }
    }

    /// Format the status line for the current widget state.
    ///
    /// Format: " state | size | charset | hints ". A notice (e.g. the path a
    /// capture was saved to) takes the place of the hints while present.
    pub fn format(
        &self,
        state: CaptureState,
        size: PanelSize,
        charset: CharSet,
        notice: Option<&str>,
    ) -> String {
        let label = match state {
            CaptureState::Inactive => "inactive",
            CaptureState::Active => "live",
        };

        let tail = match notice {
            Some(notice) => notice,
            None => match state {
                CaptureState::Inactive => "[enter] activate camera  [q] cancel",
                CaptureState::Active => "[space] capture  [r] retake  [q] quit",
            },
        };

        format!(" {} | {} | {} | {} ", label, size.name(), charset.name(), tail)
    }
}
