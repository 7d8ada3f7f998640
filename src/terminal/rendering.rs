//! Rendering functions for the capture widget.
//!
//! Pure mapping from widget state to ratatui widgets: the inactive view
//! shows the activation controls, the active view shows the live preview
//! with the capture controls. No terminal lifecycle management here.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{CapturePanel, StatusBar};
use crate::ascii::CharSet;
use crate::component::{CaptureState, Control};
use crate::input::key_hint;

/// Title shown on the panel border.
const PANEL_TITLE: &str = " Take a Photo ";

/// Render the capture panel for the current widget state.
///
/// # Arguments
/// * `frame` - The ratatui frame to render to
/// * `panel` - Presentation state (size, preview frame)
/// * `state` - The widget state that picks the view
/// * `area` - The available area to center the panel in
pub fn render_panel(
    frame: &mut ratatui::Frame,
    panel: &CapturePanel,
    state: CaptureState,
    area: Rect,
) {
    let panel_rect = panel.calculate_rect(area);

    // Clear behind the panel for the card effect
    frame.render_widget(Clear, panel_rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(PANEL_TITLE);
    let inner = block.inner(panel_rect);
    frame.render_widget(block, panel_rect);

    if state.shows_preview() {
        render_preview(frame, panel, inner);
    } else {
        render_activation_controls(frame, state, inner);
    }

    render_controls_line(frame, state, inner);
}

/// Active view: the live preview above the controls line.
///
/// When the feed has produced nothing (not ready, or access failed), the
/// preview area simply stays empty.
fn render_preview(frame: &mut ratatui::Frame, panel: &CapturePanel, inner: Rect) {
    let Some(ref ascii_frame) = panel.frame else {
        return;
    };

    let preview_area = Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    };
    let text = ascii_frame.to_string_display();
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, preview_area);
}

/// Inactive view: the activation controls as centered button lines.
fn render_activation_controls(frame: &mut ratatui::Frame, state: CaptureState, inner: Rect) {
    let controls = state.controls();
    let top = inner.y + inner.height.saturating_sub(controls.len() as u16 * 2) / 2;

    for (i, control) in controls.iter().enumerate() {
        let line_rect = Rect {
            x: inner.x,
            y: top + (i as u16) * 2,
            width: inner.width,
            height: 1,
        };
        if line_rect.y >= inner.y + inner.height {
            break;
        }
        let button = Paragraph::new(format!("[ {} ]", control.label()))
            .style(Style::default().fg(button_color(control)))
            .alignment(Alignment::Center);
        frame.render_widget(button, line_rect);
    }
}

/// Key-hint line for the current controls, at the bottom of the panel.
fn render_controls_line(frame: &mut ratatui::Frame, state: CaptureState, inner: Rect) {
    if inner.height < 2 {
        return;
    }

    let line = state
        .controls()
        .iter()
        .map(|c| format!("[{}] {}", key_hint(*c), c.label()))
        .collect::<Vec<_>>()
        .join("   ");

    let line_rect = Rect {
        x: inner.x,
        y: inner.y + inner.height - 1,
        width: inner.width,
        height: 1,
    };
    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, line_rect);
}

fn button_color(control: &Control) -> Color {
    match control {
        Control::ActivateCamera | Control::CapturePhoto => Color::Cyan,
        Control::Cancel | Control::Retake => Color::Gray,
    }
}

/// Render the status bar at the bottom row of the area.
pub fn render_status_bar(
    frame: &mut ratatui::Frame,
    status_bar: &StatusBar,
    state: CaptureState,
    charset: CharSet,
    panel: &CapturePanel,
    notice: Option<&str>,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(status_bar.format(state, panel.size, charset, notice))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(paragraph, status_area);
}

/// Render a complete frame: panel plus optional status bar.
pub fn render_app(
    frame: &mut ratatui::Frame,
    panel: &CapturePanel,
    state: CaptureState,
    charset: CharSet,
    status_bar: Option<&StatusBar>,
    notice: Option<&str>,
    area: Rect,
) {
    let show_status = status_bar.is_some_and(|sb| sb.visible);
    let main_area = if show_status {
        Rect {
            height: area.height.saturating_sub(1),
            ..area
        }
    } else {
        area
    };

    render_panel(frame, panel, state, main_area);

    if let Some(sb) = status_bar {
        if sb.visible {
            render_status_bar(frame, sb, state, charset, panel, notice, area);
        }
    }
}
