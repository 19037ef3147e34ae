//! Application state management.

/// Pane receiving scroll keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Stats,
    #[default]
    Journal,
}

impl Focus {
    pub fn toggle(self) -> Focus {
        match self {
            Focus::Stats => Focus::Journal,
            Focus::Journal => Focus::Stats,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    TimeJump,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

/// Main application state.
///
/// Scroll offsets may run past the content; the renderer clamps them to
/// what fits on screen.
#[derive(Debug, Default)]
pub struct AppState {
    /// Pane that scroll keys act on.
    pub focus: Focus,
    /// Input mode.
    pub input_mode: InputMode,
    /// Time jump input buffer (`t`).
    pub time_jump_input: String,
    /// Last time jump parse error to display in popup.
    pub time_jump_error: Option<String>,
    /// Active popup.
    pub popup: PopupState,
    /// First visible journal line.
    pub journal_scroll: usize,
    /// First visible table row.
    pub stats_scroll: usize,
    /// Transient message shown in the footer until the next key.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll offset of the focused pane.
    pub fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Stats => &mut self.stats_scroll,
            Focus::Journal => &mut self.journal_scroll,
        }
    }

    /// Returns both panes to their first line after new data arrived.
    pub fn reset_scroll(&mut self) {
        self.journal_scroll = 0;
        self.stats_scroll = 0;
    }

    /// Opens the time jump prompt with an empty buffer.
    pub fn start_time_jump(&mut self) {
        self.input_mode = InputMode::TimeJump;
        self.time_jump_input.clear();
        self.time_jump_error = None;
    }

    /// Closes the time jump prompt.
    pub fn finish_time_jump(&mut self) {
        self.input_mode = InputMode::Normal;
        self.time_jump_input.clear();
        self.time_jump_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_toggles_between_panes() {
        assert_eq!(Focus::default(), Focus::Journal);
        assert_eq!(Focus::Journal.toggle(), Focus::Stats);
        assert_eq!(Focus::Stats.toggle(), Focus::Journal);
    }

    #[test]
    fn test_focused_scroll_follows_focus() {
        let mut state = AppState::new();
        *state.focused_scroll_mut() = 5;
        assert_eq!(state.journal_scroll, 5);

        state.focus = Focus::Stats;
        *state.focused_scroll_mut() = 2;
        assert_eq!(state.stats_scroll, 2);

        state.reset_scroll();
        assert_eq!((state.journal_scroll, state.stats_scroll), (0, 0));
    }
}
