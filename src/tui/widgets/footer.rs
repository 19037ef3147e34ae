//! One-line key hint bar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

const HINTS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("r", "reload"),
    ("b/f", "∓10m"),
    ("t", "jump"),
    ("0-7", "priority"),
    ("Tab", "focus"),
    ("?", "help"),
];

/// Renders the status message when present, otherwise the key hints.
pub fn render_footer(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let line = match status {
        Some(msg) => Line::from(Span::styled(format!(" {msg}"), Styles::section_header())),
        None => Line::from(
            HINTS
                .iter()
                .flat_map(|(key, what)| {
                    [
                        Span::styled(format!(" {key}"), Styles::help_key()),
                        Span::styled(format!(" {what} "), Styles::help()),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}
