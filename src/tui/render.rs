//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::collector::CommandRunner;
use crate::orchestrator::ReloadOrchestrator;
use crate::util::Clock;

use super::state::{AppState, Focus, InputMode, PopupState};
use super::widgets::{
    render_footer, render_header, render_help, render_journal, render_quit_confirm,
    render_stats, render_time_jump,
};

/// Height of the stats pane including borders and the column header.
const STATS_HEIGHT: u16 = 14;

/// Main render function.
pub fn render<R: CommandRunner, C: Clock>(
    frame: &mut Frame,
    state: &mut AppState,
    orchestrator: &ReloadOrchestrator<R, C>,
) {
    let area = frame.area();
    let query = orchestrator.query();

    let chunks = Layout::vertical([
        Constraint::Length(1),            // Header
        Constraint::Length(STATS_HEIGHT), // Stats
        Constraint::Min(3),               // Journal
        Constraint::Length(1),            // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], query, orchestrator.last_search());

    render_stats(
        frame,
        chunks[1],
        orchestrator.table(),
        query.metric,
        &mut state.stats_scroll,
        state.focus == Focus::Stats,
    );

    render_journal(
        frame,
        chunks[2],
        orchestrator.log_lines(),
        query.priority,
        &mut state.journal_scroll,
        state.focus == Focus::Journal,
    );

    render_footer(frame, chunks[3], state.status_message.as_deref());

    // Popups go last so they overlay the panes.
    match &mut state.popup {
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {
            if state.input_mode == InputMode::TimeJump {
                render_time_jump(
                    frame,
                    area,
                    &state.time_jump_input,
                    state.time_jump_error.as_deref(),
                );
            }
        }
    }
}
