//! Journal pane.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{LogLine, Priority};
use crate::tui::style::Styles;

use super::clamp_scroll;

/// Renders the visible slice of `lines`, colored by severity.
pub fn render_journal(
    frame: &mut Frame,
    area: Rect,
    lines: &[LogLine],
    priority: Priority,
    scroll: &mut usize,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(
            " Journal ≤ {} · {} lines ",
            priority.name(),
            lines.len()
        ))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if lines.is_empty() {
        let paragraph = Paragraph::new("No journal entries in window")
            .style(Styles::dim())
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = block.inner(area).height as usize;
    let offset = clamp_scroll(scroll, lines.len(), visible);

    let text: Vec<Line> = lines
        .iter()
        .skip(offset)
        .take(visible)
        .map(|l| Line::styled(l.text.as_str(), Styles::severity(l.severity)))
        .collect();

    frame.render_widget(Paragraph::new(text).block(block), area);
}
