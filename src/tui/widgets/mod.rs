/// Widget-based rendering for the TUI
///
/// Widgets render themselves directly to a ratatui Buffer and are composed
/// by `tui::view`.

#[cfg(test)]
pub mod testing;

pub mod badge_panel;
pub use badge_panel::BadgePanel;

pub mod league_list;
pub use league_list::LeagueList;

pub mod search_bar;
pub use search_bar::SearchBar;

pub mod stats_panel;
pub use stats_panel::StatsPanel;

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets receive the display configuration so colours and box characters
/// follow the user's config.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
