/// Search box and active sport filter on one line
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct SearchBar<'a> {
    pub query: &'a str,
    pub focused: bool,
    /// Empty means "All"
    pub sport_filter: &'a str,
}

impl RenderableWidget for SearchBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let cursor = if self.focused { "_" } else { "" };
        let sport = if self.sport_filter.is_empty() {
            "All"
        } else {
            self.sport_filter
        };

        let width = area.width as usize;
        let (x, _) = buf.set_stringn(area.x, area.y, "Search: ", width, label_style);
        let used = (x - area.x) as usize;
        let (x, _) = buf.set_stringn(
            x,
            area.y,
            format!("{}{}", self.query, cursor),
            width.saturating_sub(used),
            Style::default(),
        );
        let used = (x - area.x) as usize;
        buf.set_stringn(
            x,
            area.y,
            format!("   Sport: {}", sport),
            width.saturating_sub(used),
            Style::default(),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
