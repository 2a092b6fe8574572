use std::sync::Arc;

use crate::error::ApiError;
use crate::selection::SelectionState;
use crate::types::League;

/// Global actions - like Redux actions
///
/// Every state change in the TUI goes through one of these. Actions come from
/// key presses or from finished effects.
#[derive(Debug, Clone)]
pub enum Action {
    /// (Re)load the catalog, cancelling a load already in flight
    RefreshLeagues,
    LeaguesLoaded(Result<Arc<Vec<League>>, ApiError>),

    // Search box
    FocusSearch,
    BlurSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // Sport filter
    CycleSport { forward: bool },
    /// Toggle the sport of the n-th statistics row (0-based)
    ToggleStatsRow(usize),

    // Cursor over the filtered list
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    CursorHome,
    CursorEnd,
    /// Rows visible in the list, reported by the render loop
    SetPageSize(usize),

    /// Open the badge panel for the highlighted league, or close it if already open for it
    ActivateLeague,
    CloseBadge,
    /// Mirror of the selection controller state after it changed
    SelectionChanged(SelectionState),

    Quit,
}
