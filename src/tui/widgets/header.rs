//! Header bar widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::config::QueryConfig;
use crate::orchestrator::{MAX_SEARCH_ITERATIONS, SearchOutcome};
use crate::tui::style::Styles;

const WINDOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the header: window bounds, filters and how the last search went.
pub fn render_header(frame: &mut Frame, area: Rect, query: &QueryConfig, search: SearchOutcome) {
    let chunks = Layout::horizontal([
        Constraint::Length(46), // Window
        Constraint::Length(16), // Priority
        Constraint::Length(18), // Metric
        Constraint::Min(20),    // Search
    ])
    .split(area);

    let window = format!(
        " {} → {}",
        query.window.start().format(WINDOW_FORMAT),
        query.window.end().format(WINDOW_FORMAT)
    );
    frame.render_widget(Paragraph::new(window).style(Styles::header()), chunks[0]);

    let priority = format!(" prio ≤ {}", query.priority.name());
    frame.render_widget(Paragraph::new(priority).style(Styles::header()), chunks[1]);

    let metric = format!(" metric {}", query.metric.key);
    frame.render_widget(Paragraph::new(metric).style(Styles::header()), chunks[2]);

    let search = format!(
        " {} | {}",
        query.window.direction().label(),
        search_status(search)
    );
    frame.render_widget(Paragraph::new(search).style(Styles::header()), chunks[3]);
}

fn search_status(search: SearchOutcome) -> String {
    match (search.found, search.iterations) {
        (true, 0) => "data".to_string(),
        (true, 1) => "data after 1 move".to_string(),
        (true, n) => format!("data after {n} moves"),
        (false, _) => format!("no data in {MAX_SEARCH_ITERATIONS} moves"),
    }
}
