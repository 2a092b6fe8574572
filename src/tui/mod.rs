pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::badge::BadgeClient;
use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::selection::SelectionController;

/// Main entry point for TUI mode
pub async fn run(
    catalog: CatalogClient,
    badges: Arc<BadgeClient>,
    config: Config,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut initial_state = AppState::default();
    initial_state.system.config = config;

    let mut runtime = Runtime::new(
        initial_state,
        DataEffects::new(catalog),
        SelectionController::new(badges.clone()),
    );

    // Trigger initial data load
    runtime.dispatch(Action::RefreshLeagues);

    let result = event_loop(&mut terminal, &mut runtime);
    tracing::debug!("BADGE: cache stats at exit: {:?}", badges.cache().stats());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Process results from effects first so loads trigger a re-render
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        let area = terminal.get_frame().area();
        let page_size = view::page_size(runtime.state(), area);
        if page_size != runtime.state().ui.page_size {
            runtime.dispatch(Action::SetPageSize(page_size));
        }

        terminal.draw(|f| {
            let area = f.area();
            let state = runtime.state();
            view::render(state, area, f.buffer_mut(), &state.system.config.display);
        })?;

        if actions_processed > 0 {
            continue;
        }

        // Poll for keyboard events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let Some(action) = key_to_action(key, runtime.state()) else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    tracing::debug!("ACTION: Quitting application");
                    return Ok(());
                }
                runtime.dispatch(action);
            }
        }
    }
}
