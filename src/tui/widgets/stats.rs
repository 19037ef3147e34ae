//! Sampler table pane.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::collector::MetricPreset;
use crate::model::StatTable;
use crate::tui::style::{Styles, Theme};

use super::clamp_scroll;

/// Widest a column is allowed to grow.
const MAX_COLUMN_WIDTH: usize = 24;

/// Renders the sampler table for `preset`, highlighting its wanted columns.
pub fn render_stats(
    frame: &mut Frame,
    area: Rect,
    table: &StatTable,
    preset: &MetricPreset,
    scroll: &mut usize,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(
            " {} (sar {}) ",
            preset.label,
            preset.sampler_options.join(" ")
        ))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if table.is_empty() {
        let paragraph = Paragraph::new("No data available")
            .style(Styles::dim())
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_height = block.inner(area).height as usize;
    let visible = inner_height.saturating_sub(1);
    let offset = clamp_scroll(scroll, table.rows.len(), visible);

    let header = Row::new(table.columns.iter().map(|name| {
        let style = if preset.wants(name) {
            Styles::wanted_column().bg(Theme::HEADER_BG)
        } else {
            Styles::table_header()
        };
        Cell::from(name.as_str()).style(style)
    }));

    let rows: Vec<Row> = if table.has_rows() {
        table
            .rows
            .iter()
            .skip(offset)
            .take(visible)
            .map(|row| {
                Row::new(row.iter().zip(&table.columns).map(|(value, name)| {
                    let cell = Cell::from(value.as_str());
                    if preset.wants(name) {
                        cell.style(Styles::wanted_column())
                    } else {
                        cell
                    }
                }))
            })
            .collect()
    } else {
        vec![Row::new([Cell::from("no samples in window").style(Styles::dim())])]
    };

    let widths: Vec<Constraint> = column_widths(table)
        .into_iter()
        .map(Constraint::Length)
        .collect();

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .style(Styles::default())
        .block(block);
    frame.render_widget(widget, area);
}

/// Width of each column: the longest of its header and cells, capped.
fn column_widths(table: &StatTable) -> Vec<u16> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let widest = table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|v| v.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0);
            widest.min(MAX_COLUMN_WIDTH) as u16
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_take_longest_value() {
        let table = StatTable::parse_delimited(
            "# hostname;%idle;timestamp\nh;95.00;2026-03-14 11:10:00 UTC\nbuild-host-01;7.5;x\n",
        );
        assert_eq!(column_widths(&table), vec![13, 5, 23]);
    }

    #[test]
    fn test_column_widths_are_capped() {
        let table = StatTable::message("Error", "x".repeat(200));
        assert_eq!(column_widths(&table), vec![MAX_COLUMN_WIDTH as u16]);
    }
}
