use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;
use crate::selection::SelectionController;

/// Runtime - owns the state and runs the effects the reducer asks for
///
/// Catalog loads go through `DataEffects`; badge loads go through the
/// `SelectionController`, whose state is mirrored into `AppState` with
/// `Action::SelectionChanged` whenever it changes.
pub struct Runtime {
    state: AppState,
    selection: SelectionController,
    data_effects: DataEffects,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,
}

impl Runtime {
    /// Must be called from within a Tokio runtime (spawns the effect executor)
    pub fn new(
        initial_state: AppState,
        data_effects: DataEffects,
        selection: SelectionController,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            selection,
            data_effects,
            action_tx,
            action_rx,
            effect_tx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Dispatch an action to be processed by the reducer
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        // Take ownership temporarily, run reducer, put back
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchLeagues => {
                debug!("EFFECT: Executing catalog fetch");
                let fetch_effect = self.data_effects.fetch_leagues();
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::SelectLeague(league_id) => {
                self.selection.select(&league_id);
                self.sync_selection();
            }
            Effect::ClearSelection => {
                self.selection.clear();
                self.sync_selection();
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Push the controller's state into `AppState` if it differs
    fn sync_selection(&mut self) {
        if self.selection.state() != &self.state.selection {
            let selection = self.selection.state().clone();
            self.dispatch(Action::SelectionChanged(selection));
        }
    }

    /// Process all pending actions and settled badge requests
    ///
    /// Returns the number of state changes applied
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        if self.selection.process_outcomes() > 0 {
            self.sync_selection();
            count += 1;
        }
        count
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            Effect::FetchLeagues | Effect::SelectLeague(_) | Effect::ClearSelection => {
                tracing::warn!("Runtime effect reached async executor - this should be handled by execute_effect()");
            }
        }
    }
}
