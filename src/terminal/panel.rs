//! The capture widget's on-screen panel.
//!
//! A centered card holding either the activation controls or the live
//! preview, depending on widget state. Only presentation state lives here;
//! the state machine is in [`crate::component`].

use ratatui::layout::Rect;

use super::frame::AsciiFrame;

/// Size preset for the capture panel.
///
/// Outer dimensions include the border; a size is picked to leave room for
/// the controls line under the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelSize {
    /// 46x14 outer
    Small,
    /// 66x20 outer (default)
    #[default]
    Medium,
    /// 90x28 outer
    Large,
}

impl PanelSize {
    /// Outer dimensions including border, as (width, height) in characters.
    pub fn dimensions(&self) -> (u16, u16) {
        match self {
            PanelSize::Small => (46, 14),
            PanelSize::Medium => (66, 20),
            PanelSize::Large => (90, 28),
        }
    }

    /// Cycle to the next size.
    ///
    /// Order: Small -> Medium -> Large -> Small
    pub fn next(&self) -> Self {
        match self {
            PanelSize::Small => PanelSize::Medium,
            PanelSize::Medium => PanelSize::Large,
            PanelSize::Large => PanelSize::Small,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PanelSize::Small => "small",
            PanelSize::Medium => "medium",
            PanelSize::Large => "large",
        }
    }
}

/// Presentation state for the capture panel.
#[derive(Debug, Default)]
pub struct CapturePanel {
    /// Size preset
    pub size: PanelSize,
    /// Current preview frame, if the feed has produced one
    pub frame: Option<AsciiFrame>,
}

impl CapturePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center the panel in the container, clamped to its bounds.
    pub fn calculate_rect(&self, container: Rect) -> Rect {
        let (width, height) = self.size.dimensions();
        let width = width.min(container.width);
        let height = height.min(container.height);

        Rect {
            x: container.x + (container.width.saturating_sub(width)) / 2,
            y: container.y + (container.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    /// Preview dimensions inside the border and above the controls line,
    /// as (width, height) in characters.
    pub fn preview_dimensions(&self) -> (u16, u16) {
        let (width, height) = self.size.dimensions();
        (width.saturating_sub(2), height.saturating_sub(4))
    }

    pub fn cycle_size(&mut self) {
        self.size = self.size.next();
        // Stale frame no longer fits the new grid
        self.frame = None;
    }

    pub fn set_frame(&mut self, frame: AsciiFrame) {
        self.frame = Some(frame);
    }

    pub fn clear_frame(&mut self) {
        self.frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_size_cycle_wraps() {
        let mut size = PanelSize::Small;
        size = size.next();
        assert_eq!(size, PanelSize::Medium);
        size = size.next();
        assert_eq!(size, PanelSize::Large);
        size = size.next();
        assert_eq!(size, PanelSize::Small);
    }

    #[test]
    fn test_calculate_rect_centers() {
        let panel = CapturePanel::new();
        let container = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        };
        let rect = panel.calculate_rect(container);
        let (w, h) = panel.size.dimensions();

        assert_eq!(rect.width, w);
        assert_eq!(rect.height, h);
        assert_eq!(rect.x, (100 - w) / 2);
        assert_eq!(rect.y, (40 - h) / 2);
    }

    #[test]
    fn test_calculate_rect_clamps_to_container() {
        let panel = CapturePanel::new();
        let container = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 8,
        };
        let rect = panel.calculate_rect(container);
        assert!(rect.width <= 20);
        assert!(rect.height <= 8);
    }

    #[test]
    fn test_preview_dimensions_leave_room_for_controls() {
        let panel = CapturePanel::new();
        let (outer_w, outer_h) = panel.size.dimensions();
        let (inner_w, inner_h) = panel.preview_dimensions();
        assert_eq!(inner_w, outer_w - 2);
        assert_eq!(inner_h, outer_h - 4);
    }

    #[test]
    fn test_cycle_size_drops_stale_frame() {
        let mut panel = CapturePanel::new();
        panel.set_frame(AsciiFrame::new(4, 2));
        panel.cycle_size();
        assert!(panel.frame.is_none());
    }
}
