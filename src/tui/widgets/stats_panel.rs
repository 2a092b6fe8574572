/// Per-sport statistics panel
///
/// One row per top sport with a number key, a proportional bar, the count and
/// the percentage, followed by the "Others" rollup when present. The row of
/// the active sport filter is highlighted.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::formatting::{format_percentage, stat_bar, truncate_to_width};
use crate::stats::{SportBreakdown, SportStat};
use crate::tui::widgets::RenderableWidget;

/// Width of sport label column
const SPORT_COL_WIDTH: usize = 18;

/// Key prefix + label + count + percentage + spacing
const FIXED_COLUMNS: usize = 4 + SPORT_COL_WIDTH + 1 + 6 + 8;

const MAX_BAR_WIDTH: usize = 40;

#[derive(Debug)]
pub struct StatsPanel<'a> {
    pub breakdown: &'a SportBreakdown,
    pub sport_filter: &'a str,
}

impl StatsPanel<'_> {
    fn row_count(&self) -> usize {
        self.breakdown.top.len() + usize::from(self.breakdown.others.is_some())
    }
}

fn format_row(key: &str, stat: &SportStat, bar_width: usize, config: &DisplayConfig) -> String {
    format!(
        "{:<3} {:<label$} {} {:>5} {:>7}",
        key,
        truncate_to_width(&stat.sport, SPORT_COL_WIDTH, &config.box_chars.ellipsis),
        stat_bar(stat.percentage, bar_width, &config.box_chars),
        stat.count,
        format_percentage(stat.percentage),
        label = SPORT_COL_WIDTH
    )
}

impl RenderableWidget for StatsPanel<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let header = format!("Leagues by Sport ({} total)", self.breakdown.total);
        buf.set_stringn(area.x, area.y, header, width, Style::default().add_modifier(Modifier::BOLD));

        let bar_width = width.saturating_sub(FIXED_COLUMNS).min(MAX_BAR_WIDTH);
        let rows = self
            .breakdown
            .top
            .iter()
            .enumerate()
            .map(|(i, stat)| (format!("{}", i + 1), stat))
            .chain(self.breakdown.others.iter().map(|stat| (String::new(), stat)));

        for (row, (key, stat)) in rows.enumerate() {
            let y = area.y + 1 + row as u16;
            if y >= area.y + area.height {
                break;
            }
            let style = if !key.is_empty() && stat.sport == self.sport_filter {
                Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            buf.set_stringn(area.x, y, format_row(&key, stat, bar_width, config), width, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1 + self.row_count() as u16)
    }
}
