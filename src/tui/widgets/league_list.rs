/// Scrolling list of the filtered leagues with a cursor
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::formatting::truncate_to_width;
use crate::tui::widgets::RenderableWidget;
use crate::types::League;

/// Width of the selector column
const SELECTOR_WIDTH: usize = 2;

/// Width of league name column
const NAME_COL_WIDTH: usize = 36;

/// Width of sport column
const SPORT_COL_WIDTH: usize = 18;

pub const EMPTY_MESSAGE: &str = "No leagues found matching your filters.";

#[derive(Debug)]
pub struct LeagueList<'a> {
    pub leagues: &'a [&'a League],
    pub cursor: usize,
    /// League whose badge panel is open
    pub selected_id: Option<&'a str>,
}

/// Rows available for leagues in an area of `height` lines (one goes to the header)
pub fn visible_rows(height: u16) -> usize {
    height.saturating_sub(1) as usize
}

/// First visible index so that `cursor` stays on screen
fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        (cursor + 1).saturating_sub(visible)
    }
}

fn format_row(selector: &str, league: &League, config: &DisplayConfig) -> String {
    let ellipsis = &config.box_chars.ellipsis;
    format!(
        "{:<sel$}{:<name$} {:<sport$} {}",
        selector,
        truncate_to_width(&league.name, NAME_COL_WIDTH, ellipsis),
        truncate_to_width(&league.sport, SPORT_COL_WIDTH, ellipsis),
        league.alternate_name().unwrap_or(""),
        sel = SELECTOR_WIDTH,
        name = NAME_COL_WIDTH,
        sport = SPORT_COL_WIDTH
    )
}

impl RenderableWidget for LeagueList<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        if self.leagues.is_empty() {
            buf.set_stringn(area.x, area.y, EMPTY_MESSAGE, width, Style::default());
            return;
        }

        let header = format!(
            "{:<sel$}{:<name$} {:<sport$} {}",
            "",
            "League",
            "Sport",
            "Also known as",
            sel = SELECTOR_WIDTH,
            name = NAME_COL_WIDTH,
            sport = SPORT_COL_WIDTH
        );
        buf.set_stringn(area.x, area.y, header, width, Style::default().add_modifier(Modifier::DIM));

        let visible = visible_rows(area.height);
        let offset = scroll_offset(self.cursor, visible);

        for (row, (index, league)) in self.leagues.iter().enumerate().skip(offset).take(visible).enumerate() {
            let y = area.y + 1 + row as u16;
            let is_cursor = index == self.cursor;
            let is_selected = self.selected_id == Some(league.id.as_str());

            let selector = if is_cursor { config.box_chars.selector.as_str() } else { "" };
            let mut style = Style::default();
            if is_cursor {
                style = style.fg(config.selection_fg);
            }
            if is_selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            buf.set_stringn(area.x, y, format_row(selector, league, config), width, style);
        }
    }
}
