//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::collector::MetricCatalog;
use crate::model::SEVERITY_NAMES;
use crate::tui::style::Styles;

use super::{centered, clamp_scroll};

const KEYS: &[(&str, &str)] = &[
    ("q", "Quit (asks for confirmation)"),
    ("Ctrl-C", "Quit immediately"),
    ("r", "Reload both panes"),
    ("b / f", "Move the window 10 minutes back / forward"),
    ("t", "Jump to a time"),
    ("0-7", "Show journal entries up to this severity"),
    ("Tab", "Switch the focused pane"),
    ("↑↓ j k", "Scroll the focused pane"),
    ("PgUp PgDn", "Scroll by a page"),
    ("Home End", "Scroll to top / bottom"),
    ("?", "Toggle this help"),
];

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 80);
    let popup_height = (area.height * 80 / 100).clamp(10, 30);
    let popup_area = centered(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;
    let offset = clamp_scroll(scroll, content_lines, visible_height);
    let max_scroll = content_lines.saturating_sub(visible_height);

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", offset + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close, ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" to scroll", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Keys", Styles::section_header()))];
    lines.extend(KEYS.iter().map(|(key, what)| key_line(key, what)));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Metrics (highlighted columns in green)",
        Styles::section_header(),
    )));
    for preset in MetricCatalog::all() {
        let what = format!(
            "{} (sar {})",
            preset.label,
            preset.sampler_options.join(" ")
        );
        lines.push(key_line(&preset.hotkey.to_string(), &what));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Severities", Styles::section_header())));
    for (level, name) in SEVERITY_NAMES.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("  {level}  {name}"),
            Styles::severity(Some(level as i64)),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "When a window has no samples, it keeps moving in the last direction \
         until data turns up.",
        Styles::help(),
    )));
    lines
}

fn key_line(key: &str, what: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Styles::help_key()),
        Span::raw(what.to_string()),
    ])
}
