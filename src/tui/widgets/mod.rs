//! TUI widgets.

mod footer;
mod header;
mod help;
mod journal;
mod quit_confirm;
mod stats;
mod time_jump;

pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use journal::render_journal;
pub use quit_confirm::render_quit_confirm;
pub use stats::render_stats;
pub use time_jump::render_time_jump;

use ratatui::layout::Rect;

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clamps `scroll` so that the last page stays full, returning the result.
pub(crate) fn clamp_scroll(scroll: &mut usize, content: usize, visible: usize) -> usize {
    let max_scroll = content.saturating_sub(visible);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }
    *scroll
}
