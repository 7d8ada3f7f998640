//! Terminal UI layer: lifecycle, panel state, and rendering.

mod frame;
mod panel;
mod raw_mode;
pub mod rendering;
mod status_bar;
mod tui;

pub use frame::AsciiFrame;
pub use panel::{CapturePanel, PanelSize};
pub use status_bar::StatusBar;
pub use tui::Tui;
