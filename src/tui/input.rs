//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::collector::MetricCatalog;

use super::state::{AppState, InputMode, PopupState};

/// Minutes moved by `b` and `f`.
pub const SHIFT_MINUTES: i64 = 10;

/// Lines moved by PgUp/PgDn.
const PAGE_SIZE: usize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Rerun both queries for the current window.
    Reload,
    /// Change the journal severity ceiling.
    SetPriority(u8),
    /// Switch the metric family by catalog key.
    SetMetric(&'static str),
    /// Move the window by this many minutes.
    Shift(i64),
    /// Jump to the time in `AppState::time_jump_input`.
    JumpToTime,
}

/// Navigation action for unified scroll dispatch.
enum NavAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

fn apply_navigation(scroll: &mut usize, action: NavAction) {
    *scroll = match action {
        NavAction::Up => scroll.saturating_sub(1),
        NavAction::Down => scroll.saturating_add(1),
        NavAction::PageUp => scroll.saturating_sub(PAGE_SIZE),
        NavAction::PageDown => scroll.saturating_add(PAGE_SIZE),
        NavAction::Home => 0,
        // Clamped by the renderer.
        NavAction::End => usize::MAX,
    };
}

fn navigation(key: &KeyEvent) -> Option<NavAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(NavAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(NavAction::Down),
        KeyCode::PageUp => Some(NavAction::PageUp),
        KeyCode::PageDown => Some(NavAction::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(NavAction::Home),
        KeyCode::End | KeyCode::Char('G') => Some(NavAction::End),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { .. } => return handle_help(state, key),
        PopupState::None => {}
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::TimeJump => handle_time_jump_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if is_ctrl_c(&key) {
        state.popup = PopupState::None;
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if is_ctrl_c(&key) {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('H') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
        }
        _ => {
            if let Some(nav) = navigation(&key)
                && let PopupState::Help { scroll } = &mut state.popup
            {
                apply_navigation(scroll, nav);
            }
        }
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    state.status_message = None;

    if is_ctrl_c(&key) {
        return KeyAction::Quit;
    }
    if let Some(nav) = navigation(&key) {
        apply_navigation(state.focused_scroll_mut(), nav);
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('?') | KeyCode::Char('H') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }
        KeyCode::Char('r') => KeyAction::Reload,
        KeyCode::Char('b') => KeyAction::Shift(-SHIFT_MINUTES),
        KeyCode::Char('f') => KeyAction::Shift(SHIFT_MINUTES),
        KeyCode::Char('t') => {
            state.start_time_jump();
            KeyAction::None
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = state.focus.toggle();
            KeyAction::None
        }
        KeyCode::Char(c @ '0'..='7') => KeyAction::SetPriority(c as u8 - b'0'),
        KeyCode::Char(c) => match MetricCatalog::by_hotkey(c) {
            Some(preset) => KeyAction::SetMetric(preset.key),
            None => KeyAction::None,
        },
        _ => KeyAction::None,
    }
}

/// Handles keys while the time jump prompt is open.
fn handle_time_jump_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if is_ctrl_c(&key) {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Esc => {
            state.finish_time_jump();
            KeyAction::None
        }
        KeyCode::Enter => {
            if state.time_jump_input.trim().is_empty() {
                state.time_jump_error = Some("Empty input".to_string());
                KeyAction::None
            } else {
                KeyAction::JumpToTime
            }
        }
        KeyCode::Backspace => {
            state.time_jump_input.pop();
            state.time_jump_error = None;
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.time_jump_input.push(c);
            state.time_jump_error = None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}
