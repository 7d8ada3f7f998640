//! Keyboard input handling.
//!
//! Maps crossterm key events to widget actions. The mapping is
//! state-dependent: the same key can mean "cancel" on the inactive view and
//! "quit" (the external close trigger) on the active view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::component::{Action, CaptureState, Control};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an action into the capture widget
    Widget(Action),
    /// Cycle the panel size preset
    CyclePanelSize,
    /// Cycle the preview character set
    CycleCharset,
    /// Quit the application (external close trigger while active)
    Quit,
    /// No action for this key
    None,
}

/// Key hint shown next to a control's label.
pub fn key_hint(control: Control) -> &'static str {
    match control {
        Control::ActivateCamera => "enter",
        Control::Cancel => "q",
        Control::CapturePhoto => "space",
        Control::Retake => "r",
    }
}

/// Map a key event to an action for the current widget state.
///
/// Bindings:
/// - Inactive: Enter/a activate, q/Esc cancel
/// - Active: Space/c capture, r retake, s cycle panel size,
///   a cycle charset, q/Esc quit
/// - Ctrl+C always quits
pub fn handle_key_event(event: KeyEvent, state: CaptureState) -> KeyAction {
    // Ignore key releases reported by some terminals
    if event.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match state {
        CaptureState::Inactive => match event.code {
            KeyCode::Enter | KeyCode::Char('a') => KeyAction::Widget(Action::Activate),
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Widget(Action::Cancel),
            _ => KeyAction::None,
        },
        CaptureState::Active => match event.code {
            KeyCode::Char(' ') | KeyCode::Char('c') => KeyAction::Widget(Action::Capture),
            KeyCode::Char('r') => KeyAction::Widget(Action::Retake),
            KeyCode::Char('s') => KeyAction::CyclePanelSize,
            KeyCode::Char('a') => KeyAction::CycleCharset,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        },
    }
}
