/// Top-level screen composition
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
};

use super::state::{AppState, CatalogState};
use super::widgets::badge_panel::centered_rect;
use super::widgets::league_list::visible_rows;
use super::widgets::{BadgePanel, LeagueList, RenderableWidget, SearchBar, StatsPanel, StatusBar};
use crate::config::DisplayConfig;
use crate::stats::SportBreakdown;

const TITLE: &str = "TheSportsDB Leagues";

/// Badge panel size (clamped to the screen)
const BADGE_PANEL_WIDTH: u16 = 72;
const BADGE_PANEL_HEIGHT: u16 = 12;

struct ViewLayout {
    title: Rect,
    search: Rect,
    stats: Rect,
    summary: Rect,
    list: Rect,
    status: Rect,
}

fn stats_height(breakdown: &SportBreakdown) -> u16 {
    StatsPanel {
        breakdown,
        sport_filter: "",
    }
    .preferred_height()
    .unwrap_or(0)
}

fn layout(area: Rect, stats_height: u16) -> ViewLayout {
    let [title, search, _, stats, _, summary, list, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(stats_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    ViewLayout {
        title,
        search,
        stats,
        summary,
        list,
        status,
    }
}

/// Number of league rows the list shows in `area`
pub fn page_size(state: &AppState, area: Rect) -> usize {
    visible_rows(layout(area, stats_height(&state.breakdown())).list.height)
}

pub fn render(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let breakdown = state.breakdown();
    let areas = layout(area, stats_height(&breakdown));

    buf.set_stringn(
        areas.title.x,
        areas.title.y,
        TITLE,
        areas.title.width as usize,
        Style::default().add_modifier(Modifier::BOLD),
    );

    StatusBar::new()
        .with_last_refresh(state.system.last_refresh)
        .with_time_format(state.system.config.time_format.clone())
        .render(areas.status, buf, config);

    render_catalog(state, &areas, &breakdown, buf, config);

    if let Some(league_id) = state.selection.league_id() {
        let league_name = match &state.catalog {
            CatalogState::Loaded(leagues) => leagues
                .iter()
                .find(|league| league.id == league_id)
                .map(|league| league.name.as_str()),
            _ => None,
        }
        .unwrap_or("League");
        BadgePanel {
            league_name,
            state: &state.selection,
        }
        .render(centered_rect(BADGE_PANEL_WIDTH, BADGE_PANEL_HEIGHT, area), buf, config);
    }
}

fn render_catalog(
    state: &AppState,
    areas: &ViewLayout,
    breakdown: &SportBreakdown,
    buf: &mut Buffer,
    config: &DisplayConfig,
) {
    let leagues = match &state.catalog {
        CatalogState::Loading => {
            buf.set_string(areas.search.x, areas.search.y, "Loading leagues...", Style::default());
            return;
        }
        CatalogState::Failed(message) => {
            buf.set_stringn(
                areas.search.x,
                areas.search.y,
                format!("Failed to load leagues: {}", message),
                areas.search.width as usize,
                Style::default().fg(config.error_fg),
            );
            return;
        }
        CatalogState::Loaded(leagues) => leagues,
    };

    SearchBar {
        query: &state.ui.search,
        focused: state.ui.search_focused,
        sport_filter: &state.ui.sport_filter,
    }
    .render(areas.search, buf, config);

    StatsPanel {
        breakdown,
        sport_filter: &state.ui.sport_filter,
    }
    .render(areas.stats, buf, config);

    let filtered = state.filtered_leagues();
    buf.set_stringn(
        areas.summary.x,
        areas.summary.y,
        format!("Showing {} of {} leagues", filtered.len(), leagues.len()),
        areas.summary.width as usize,
        Style::default().add_modifier(Modifier::ITALIC),
    );

    LeagueList {
        leagues: &filtered,
        cursor: state.ui.cursor,
        selected_id: state.selection.league_id(),
    }
    .render(areas.list, buf, config);
}
