use chrono::Local;
use tracing::{debug, trace, warn};

use super::action::Action;
use super::effects::Effect;
use super::state::{AppState, CatalogState};
use crate::error::ApiError;
use crate::filters::sport_types;

/// Pure state reducer - like Redux reducer
///
/// Takes the current state and an action, returns the new state and the
/// effect to run. No I/O happens here; fetches and selection changes are
/// returned as `Effect`s and executed by the runtime.
///
/// Sub-reducers return `Ok((state, effect))` when they handled the action
/// or `Err(state)` to hand ownership to the next one.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let state = match reduce_catalog(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_filters(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_cursor(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::ActivateLeague => {
            let Some(league_id) = state.highlighted_league().map(|league| league.id.clone()) else {
                return (state, Effect::None);
            };
            if state.selection.league_id() == Some(league_id.as_str()) {
                debug!("REDUCER: closing badge panel for league {}", league_id);
                (state, Effect::ClearSelection)
            } else {
                (state, Effect::SelectLeague(league_id))
            }
        }
        Action::CloseBadge => {
            if state.badge_panel_open() {
                (state, Effect::ClearSelection)
            } else {
                (state, Effect::None)
            }
        }
        Action::SelectionChanged(selection) => {
            let mut new_state = state;
            new_state.selection = selection;
            (new_state, Effect::None)
        }
        _ => (state, Effect::None),
    }
}

type Reduced = Result<(AppState, Effect), AppState>;

fn reduce_catalog(state: AppState, action: &Action) -> Reduced {
    match action {
        Action::RefreshLeagues => {
            let mut new_state = state;
            new_state.catalog = CatalogState::Loading;
            Ok((new_state, Effect::FetchLeagues))
        }
        Action::LeaguesLoaded(Ok(leagues)) => {
            debug!("REDUCER: {} leagues loaded", leagues.len());
            let mut new_state = state;
            new_state.catalog = CatalogState::Loaded(leagues.clone());
            new_state.system.last_refresh = Some(Local::now());
            clamp_cursor(&mut new_state);
            Ok((new_state, Effect::None))
        }
        Action::LeaguesLoaded(Err(ApiError::Cancelled)) => {
            trace!("REDUCER: ignoring cancelled catalog load");
            Ok((state, Effect::None))
        }
        Action::LeaguesLoaded(Err(e)) => {
            warn!("REDUCER: catalog load failed: {}", e);
            let mut new_state = state;
            new_state.catalog = CatalogState::Failed(e.to_string());
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

fn reduce_filters(state: AppState, action: &Action) -> Reduced {
    let mut new_state = state;
    match action {
        Action::FocusSearch => new_state.ui.search_focused = true,
        Action::BlurSearch => new_state.ui.search_focused = false,
        Action::SearchInput(c) => {
            new_state.ui.search.push(*c);
            new_state.ui.cursor = 0;
        }
        Action::SearchBackspace => {
            new_state.ui.search.pop();
            new_state.ui.cursor = 0;
        }
        Action::ClearSearch => {
            new_state.ui.search.clear();
            new_state.ui.cursor = 0;
        }
        Action::CycleSport { forward } => {
            let sport = next_sport(&new_state, *forward);
            debug!("REDUCER: sport filter -> {:?}", sport);
            new_state.ui.sport_filter = sport;
            new_state.ui.cursor = 0;
        }
        Action::ToggleStatsRow(row) => {
            let Some(stat) = new_state.breakdown().top.into_iter().nth(*row) else {
                return Ok((new_state, Effect::None));
            };
            new_state.ui.sport_filter = if new_state.ui.sport_filter == stat.sport {
                String::new()
            } else {
                stat.sport
            };
            new_state.ui.cursor = 0;
        }
        _ => return Err(new_state),
    }
    Ok((new_state, Effect::None))
}

/// "All" followed by the sorted sport categories, wrapping at both ends
fn next_sport(state: &AppState, forward: bool) -> String {
    let mut options = vec![String::new()];
    options.extend(sport_types(state.catalog.leagues()));

    let current = options
        .iter()
        .position(|sport| *sport == state.ui.sport_filter)
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % options.len()
    } else {
        (current + options.len() - 1) % options.len()
    };
    options.swap_remove(next)
}

fn reduce_cursor(state: AppState, action: &Action) -> Reduced {
    let mut new_state = state;
    let page = new_state.ui.page_size.max(1);
    let cursor = new_state.ui.cursor;
    match action {
        Action::CursorUp => new_state.ui.cursor = cursor.saturating_sub(1),
        Action::CursorDown => new_state.ui.cursor = cursor + 1,
        Action::PageUp => new_state.ui.cursor = cursor.saturating_sub(page),
        Action::PageDown => new_state.ui.cursor = cursor + page,
        Action::CursorHome => new_state.ui.cursor = 0,
        Action::CursorEnd => new_state.ui.cursor = usize::MAX,
        Action::SetPageSize(size) => new_state.ui.page_size = *size,
        _ => return Err(new_state),
    }
    clamp_cursor(&mut new_state);
    Ok((new_state, Effect::None))
}

fn clamp_cursor(state: &mut AppState) {
    let len = state.filtered_leagues().len();
    state.ui.cursor = state.ui.cursor.min(len.saturating_sub(1));
}
