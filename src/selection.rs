use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::badge::BadgeClient;
use crate::error::ApiError;
use crate::types::{Season, SeasonsResponse};

/// What the badge panel shows for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No league selected
    #[default]
    Idle,
    /// Badge fetch in flight
    Loading { league_id: String },
    /// Fetch done; `season` is `None` when the league has no seasons
    Loaded {
        league_id: String,
        season: Option<Season>,
    },
    Failed { league_id: String, message: String },
}

impl SelectionState {
    pub fn league_id(&self) -> Option<&str> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Loading { league_id }
            | SelectionState::Loaded { league_id, .. }
            | SelectionState::Failed { league_id, .. } => Some(league_id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SelectionState::Loading { .. })
    }

    pub fn season(&self) -> Option<&Season> {
        match self {
            SelectionState::Loaded { season, .. } => season.as_ref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SelectionState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result of one badge fetch, tagged with the request that produced it
#[derive(Debug)]
pub struct BadgeOutcome {
    generation: u64,
    league_id: String,
    result: Result<SeasonsResponse, ApiError>,
}

/// Drives the "select a league, show its badge" flow
///
/// At most one badge request is active per controller. `select` cancels the
/// previous request before issuing the next, and every outcome carries the
/// generation of the request that produced it, so a late answer for an
/// earlier selection is dropped instead of overwriting the current one.
pub struct SelectionController {
    badges: Arc<BadgeClient>,
    state: SelectionState,
    generation: u64,
    in_flight: Option<CancellationToken>,
    outcome_tx: mpsc::UnboundedSender<BadgeOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<BadgeOutcome>,
}

impl SelectionController {
    pub fn new(badges: Arc<BadgeClient>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            badges,
            state: SelectionState::Idle,
            generation: 0,
            in_flight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_league_id(&self) -> Option<&str> {
        self.state.league_id()
    }

    /// Whether a badge request is currently outstanding
    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            trace!("SELECTION: cancelling in-flight badge request");
            token.cancel();
        }
    }

    /// Select a league and start loading its badge
    ///
    /// Must be called from within a Tokio runtime: a cache miss spawns the
    /// request as a task.
    pub fn select(&mut self, league_id: &str) {
        self.cancel_in_flight();
        self.generation += 1;

        debug!("SELECTION: select league {} (request {})", league_id, self.generation);
        self.state = SelectionState::Loading {
            league_id: league_id.to_string(),
        };

        if let Some(response) = self.badges.cached(league_id) {
            self.state = loaded(league_id, &response);
            return;
        }

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let badges = self.badges.clone();
        let tx = self.outcome_tx.clone();
        let generation = self.generation;
        let league_id = league_id.to_string();
        tokio::spawn(async move {
            let result = badges.fetch_season_badge(&league_id, Some(&token)).await;
            let _ = tx.send(BadgeOutcome {
                generation,
                league_id,
                result,
            });
        });
    }

    /// Deselect: cancel any in-flight request and go back to `Idle`
    pub fn clear(&mut self) {
        self.cancel_in_flight();
        // Outcomes of anything issued before this point are now stale
        self.generation += 1;
        debug!("SELECTION: cleared");
        self.state = SelectionState::Idle;
    }

    /// Apply one outcome; returns whether the visible state changed
    pub fn apply(&mut self, outcome: BadgeOutcome) -> bool {
        if outcome.generation != self.generation {
            trace!(
                "SELECTION: dropping stale outcome for league {} (request {}, current {})",
                outcome.league_id,
                outcome.generation,
                self.generation
            );
            return false;
        }

        self.in_flight = None;
        match outcome.result {
            Ok(response) => {
                self.state = loaded(&outcome.league_id, &response);
                true
            }
            Err(ApiError::Cancelled) => {
                trace!("SELECTION: request for league {} cancelled", outcome.league_id);
                false
            }
            Err(e) => {
                debug!("SELECTION: badge fetch for league {} failed: {}", outcome.league_id, e);
                self.state = SelectionState::Failed {
                    league_id: outcome.league_id,
                    message: e.to_string(),
                };
                true
            }
        }
    }

    /// Apply every outcome that has already arrived, without waiting
    ///
    /// Returns the number of outcomes that changed the visible state.
    pub fn process_outcomes(&mut self) -> usize {
        let mut changed = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if self.apply(outcome) {
                changed += 1;
            }
        }
        changed
    }

    /// Wait until the current selection settles (`Loaded` or `Failed`)
    ///
    /// Returns immediately when nothing is loading.
    pub async fn wait_until_settled(&mut self) -> &SelectionState {
        while self.state.is_loading() {
            match self.outcome_rx.recv().await {
                Some(outcome) => {
                    self.apply(outcome);
                }
                None => break,
            }
        }
        &self.state
    }
}

fn loaded(league_id: &str, response: &SeasonsResponse) -> SelectionState {
    SelectionState::Loaded {
        league_id: league_id.to_string(),
        season: response.first_season().cloned(),
    }
}
