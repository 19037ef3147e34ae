//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info};

use crate::collector::CommandRunner;
use crate::orchestrator::{MAX_SEARCH_ITERATIONS, ReloadOrchestrator};
use crate::util::{Clock, parse_time_with_base};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App<R: CommandRunner, C: Clock> {
    orchestrator: ReloadOrchestrator<R, C>,
    state: AppState,
    should_quit: bool,
}

impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Creates a new App around an orchestrator that has not loaded yet.
    pub fn new(orchestrator: ReloadOrchestrator<R, C>) -> Self {
        Self {
            orchestrator,
            state: AppState::new(),
            should_quit: false,
        }
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, tick_rate);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let events = EventHandler::new(tick_rate);

        self.orchestrator.reload();
        self.report_search();

        while !self.should_quit {
            terminal.draw(|frame| render(frame, &mut self.state, &self.orchestrator))?;

            match events.next() {
                Ok(Event::Tick) | Ok(Event::Resize) => {}
                Ok(Event::Key(key)) => {
                    let action = handle_key(&mut self.state, key);
                    self.apply(action);
                }
                Err(_) => self.should_quit = true,
            }
        }
        Ok(())
    }

    fn apply(&mut self, action: KeyAction) {
        if action != KeyAction::None {
            debug!(?action, "key action");
        }
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Reload => {
                self.orchestrator.reload();
                self.state.reset_scroll();
                self.report_search();
            }
            KeyAction::SetPriority(level) => {
                self.orchestrator.set_priority(level);
                self.state.journal_scroll = 0;
            }
            KeyAction::SetMetric(key) => {
                if self.orchestrator.set_metric(key) {
                    self.state.stats_scroll = 0;
                    self.report_search();
                }
            }
            KeyAction::Shift(minutes) => {
                if self.orchestrator.shift_time(minutes) {
                    self.state.reset_scroll();
                    self.report_search();
                } else {
                    self.state.status_message =
                        Some("Window already reaches the present".to_string());
                }
            }
            KeyAction::JumpToTime => self.jump_to_time(),
        }
    }

    fn jump_to_time(&mut self) {
        let base = self.orchestrator.query().window.start();
        match parse_time_with_base(&self.state.time_jump_input, base) {
            Ok(start) => {
                info!(%start, "jumping to time");
                self.state.finish_time_jump();
                self.orchestrator.jump_to(start);
                self.state.reset_scroll();
                self.report_search();
            }
            Err(e) => self.state.time_jump_error = Some(e.to_string()),
        }
    }

    fn report_search(&mut self) {
        if !self.orchestrator.last_search().found {
            self.state.status_message = Some(format!(
                "No samples found within {MAX_SEARCH_ITERATIONS} windows"
            ));
        }
    }
}
