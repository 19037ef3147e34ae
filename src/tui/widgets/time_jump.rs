//! Time jump input popup.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered;

const EXAMPLES: &[&str] = &[
    "  -1h        (relative to window start)",
    "  16:00      (time on the window's day)",
    "  2026-02-07 17:00",
    "  1738944000 (unix timestamp)",
];

/// Renders a centered time jump popup.
pub fn render_time_jump(frame: &mut Frame, area: Rect, input: &str, error: Option<&str>) {
    let popup_area = centered(area, (area.width * 70 / 100).clamp(50, 80), 13);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Jump to time (local) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Start: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                input,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Examples:",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    lines.extend(
        EXAMPLES
            .iter()
            .map(|e| Line::from(Span::styled(*e, Style::default().fg(Color::DarkGray)))),
    );

    if let Some(err) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" → jump", Style::default().fg(Color::DarkGray)),
        Span::styled("   Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" → cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, inner);
}
