use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::filters::filter_leagues;
use crate::selection::SelectionState;
use crate::stats::{sport_breakdown, SportBreakdown};
use crate::types::League;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer. Derived views (filtered
/// list, statistics) are recomputed from `catalog` and `ui` on demand.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub ui: UiState,
    /// Snapshot of the selection controller, owned by the runtime
    pub selection: SelectionState,
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Arc<Vec<League>>),
    Failed(String),
}

impl CatalogState {
    pub fn leagues(&self) -> &[League] {
        match self {
            CatalogState::Loaded(leagues) => leagues,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub search: String,
    pub search_focused: bool,
    /// Empty string means "All"
    pub sport_filter: String,
    /// Index into the filtered list
    pub cursor: usize,
    pub page_size: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_focused: false,
            sport_filter: String::new(),
            cursor: 0,
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub last_refresh: Option<DateTime<Local>>,
}

impl AppState {
    pub fn filtered_leagues(&self) -> Vec<&League> {
        filter_leagues(
            self.catalog.leagues(),
            &self.ui.search,
            &self.ui.sport_filter,
        )
    }

    pub fn breakdown(&self) -> SportBreakdown {
        sport_breakdown(self.catalog.leagues(), self.system.config.stats_top_n)
    }

    /// League under the cursor in the filtered list
    pub fn highlighted_league(&self) -> Option<&League> {
        self.filtered_leagues().get(self.ui.cursor).copied()
    }

    pub fn badge_panel_open(&self) -> bool {
        !matches!(self.selection, SelectionState::Idle)
    }
}
