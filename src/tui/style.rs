//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Pane borders
    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER: Color = Color::DarkGray;

    // Severity colors
    pub const SEV_EMERG_BG: Color = Color::Red;
    pub const SEV_ERR: Color = Color::Red;
    pub const SEV_WARNING: Color = Color::Yellow;
    pub const SEV_NOTICE: Color = Color::Cyan;

    pub const WANTED_COLUMN: Color = Color::Green;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted table column.
    pub fn wanted_column() -> Style {
        Style::default()
            .fg(Theme::WANTED_COLUMN)
            .add_modifier(Modifier::BOLD)
    }

    /// Pane border, brighter when the pane has focus.
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Theme::BORDER_FOCUSED)
        } else {
            Style::default().fg(Theme::BORDER)
        }
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Section header style for popups.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Journal line style for a syslog severity. `None` marks lines that
    /// did not come from a record and are shown unstyled.
    pub fn severity(severity: Option<i64>) -> Style {
        match severity {
            Some(0 | 1) => Style::default()
                .fg(Theme::FG)
                .bg(Theme::SEV_EMERG_BG)
                .add_modifier(Modifier::BOLD),
            Some(2 | 3) => Style::default().fg(Theme::SEV_ERR),
            Some(4) => Style::default().fg(Theme::SEV_WARNING),
            Some(5) => Style::default().fg(Theme::SEV_NOTICE),
            Some(7) => Self::dim(),
            _ => Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_styles() {
        assert_eq!(Styles::severity(Some(1)).bg, Some(Color::Red));
        assert_eq!(Styles::severity(Some(3)).fg, Some(Color::Red));
        assert_eq!(Styles::severity(Some(3)).bg, None);
        assert_eq!(Styles::severity(Some(4)).fg, Some(Color::Yellow));
        assert_eq!(Styles::severity(Some(5)).fg, Some(Color::Cyan));
        assert_eq!(Styles::severity(Some(6)), Style::default());
        assert_eq!(Styles::severity(Some(7)).fg, Some(Color::DarkGray));
        assert_eq!(Styles::severity(None), Style::default());
    }
}
