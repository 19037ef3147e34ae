//! Journal source backed by `journalctl -o json`.

use tracing::{debug, warn};

use crate::model::{LogLine, LogRecord, Priority, TimeWindow};

use super::traits::CommandRunner;

/// Timestamp format accepted by `journalctl --since/--until`.
const JOURNAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Queries the journal for a window and renders display lines.
#[derive(Debug, Clone)]
pub struct LogSource {
    program: String,
    limit: usize,
}

impl LogSource {
    /// Creates a source running `program`, emitting at most `limit` lines.
    pub fn new(program: impl Into<String>, limit: usize) -> Self {
        Self {
            program: program.into(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Builds the `journalctl` argument list.
    ///
    /// The severity ceiling is applied by journald itself, and only when the
    /// filter is narrower than "everything".
    pub fn command_args(&self, window: &TimeWindow, priority: Priority) -> Vec<String> {
        let mut args = vec![
            "--no-pager".to_string(),
            "--since".to_string(),
            window.start().format(JOURNAL_TIME_FORMAT).to_string(),
            "--until".to_string(),
            window.end().format(JOURNAL_TIME_FORMAT).to_string(),
            "-o".to_string(),
            "json".to_string(),
        ];
        if let Some(range) = priority.journal_range() {
            args.push("-p".to_string());
            args.push(range);
        }
        args
    }

    /// Fetches and renders the journal for `window`.
    ///
    /// Never fails: an invocation error becomes a single `Error: ...` line.
    pub fn fetch(
        &self,
        runner: &dyn CommandRunner,
        window: &TimeWindow,
        priority: Priority,
    ) -> Vec<LogLine> {
        let args = self.command_args(window, priority);
        match runner.run(&self.program, &args) {
            Ok(output) => {
                let lines = render_journal_output(&output, self.limit);
                debug!(lines = lines.len(), "journal refreshed");
                lines
            }
            Err(e) => {
                warn!(error = %e, "journal query failed");
                vec![LogLine::plain(format!("Error: {}", e))]
            }
        }
    }
}

/// Decodes journal export output into at most `limit` display lines.
///
/// Lines that are not JSON objects are passed through verbatim. The budget
/// counts physical lines, so a long message may be cut short.
pub fn render_journal_output(output: &str, limit: usize) -> Vec<LogLine> {
    let mut rendered = Vec::new();

    for raw in output.lines() {
        if rendered.len() >= limit {
            break;
        }
        match LogRecord::from_json_line(raw) {
            Some(record) => {
                let room = limit - rendered.len();
                rendered.extend(record.render().into_iter().take(room));
            }
            None => rendered.push(LogLine::plain(raw)),
        }
    }

    rendered
}
