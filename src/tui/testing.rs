//! General test utilities for TUI tests.
//!
//! For widget rendering helpers, see `crate::tui::widgets::testing`.

use std::sync::Arc;

use ratatui::buffer::Buffer;

use super::effects::DataEffects;
use super::runtime::Runtime;
use super::state::AppState;
use crate::badge::BadgeClient;
use crate::cache::BadgeCache;
use crate::catalog::CatalogClient;
use crate::selection::SelectionController;
use crate::testing::ScriptedProvider;

/// A runtime wired to a scripted provider with a fresh badge cache
pub fn create_runtime(provider: Arc<ScriptedProvider>) -> Runtime {
    let badges = Arc::new(BadgeClient::new(provider.clone(), Arc::new(BadgeCache::new())));
    Runtime::new(
        AppState::default(),
        DataEffects::new(CatalogClient::new(provider)),
        SelectionController::new(badges),
    )
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
