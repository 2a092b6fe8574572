/// Keyboard event to action mapping
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::AppState;

/// Keys while the search box has focus: everything printable goes to the query
fn handle_search_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(Action::BlurSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::SearchInput(c))
        }
        _ => None,
    }
}

/// ESC closes the badge panel first, then clears the search query
fn handle_esc_key(state: &AppState) -> Option<Action> {
    if state.badge_panel_open() {
        Some(Action::CloseBadge)
    } else if !state.ui.search.is_empty() {
        Some(Action::ClearSearch)
    } else {
        None
    }
}

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?}", key.code);

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if state.ui.search_focused {
        return handle_search_keys(key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::FocusSearch),
        KeyCode::Char('r') => Some(Action::RefreshLeagues),
        KeyCode::Char(c @ '1'..='9') => {
            let row = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Action::ToggleStatsRow(row))
        }
        KeyCode::Tab => Some(Action::CycleSport { forward: true }),
        KeyCode::BackTab => Some(Action::CycleSport { forward: false }),
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Enter => Some(Action::ActivateLeague),
        KeyCode::Esc => handle_esc_key(state),
        _ => None,
    }
}
