//! General test utilities shared by the client, selection and TUI tests.
//!
//! `ScriptedProvider` is an in-memory `SportsDataProvider` that records every
//! call and can hold a response back until the test releases it, which is how
//! the cancellation and stale-response tests control ordering.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::data_provider::SportsDataProvider;
use crate::error::ApiError;
use crate::types::{AllLeaguesResponse, League, Season, SeasonsResponse};

/// EPL / NBA / La Liga / Formula 1 catalog used across tests
pub fn sample_leagues() -> Vec<League> {
    vec![
        League::new("1", "English Premier League", "Soccer").with_alternate_name("EPL"),
        League::new("2", "NBA", "Basketball").with_alternate_name("National Basketball Association"),
        League::new("3", "La Liga", "Soccer"),
        League::new("4", "Formula 1", "Motorsport").with_alternate_name("F1"),
    ]
}

/// Seasons response with a single season
pub fn single_season(label: &str, badge: Option<&str>) -> SeasonsResponse {
    SeasonsResponse {
        seasons: Some(vec![Season {
            season: label.to_string(),
            badge: badge.map(str::to_string),
            description: None,
        }]),
    }
}

#[derive(Default)]
pub struct ScriptedProvider {
    leagues: Mutex<Option<Result<AllLeaguesResponse, ApiError>>>,
    seasons: Mutex<HashMap<String, Result<SeasonsResponse, ApiError>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    leagues_gate: Mutex<Option<Arc<Notify>>>,
    league_calls: AtomicUsize,
    season_calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leagues(self, leagues: Vec<League>) -> Self {
        *self.leagues.lock().unwrap() = Some(Ok(AllLeaguesResponse { leagues: Some(leagues) }));
        self
    }

    pub fn with_leagues_response(self, response: Result<AllLeaguesResponse, ApiError>) -> Self {
        *self.leagues.lock().unwrap() = Some(response);
        self
    }

    pub fn with_seasons(self, league_id: &str, response: SeasonsResponse) -> Self {
        self.seasons
            .lock()
            .unwrap()
            .insert(league_id.to_string(), Ok(response));
        self
    }

    pub fn with_seasons_error(self, league_id: &str, error: ApiError) -> Self {
        self.seasons
            .lock()
            .unwrap()
            .insert(league_id.to_string(), Err(error));
        self
    }

    /// Hold seasons responses for `league_id` until the returned handle is notified
    pub fn hold(&self, league_id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(league_id.to_string(), gate.clone());
        gate
    }

    /// Hold the catalog response until the returned handle is notified
    pub fn hold_leagues(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.leagues_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn league_calls(&self) -> usize {
        self.league_calls.load(Ordering::SeqCst)
    }

    pub fn season_calls(&self) -> Vec<String> {
        self.season_calls.lock().unwrap().clone()
    }

    pub fn season_call_count(&self, league_id: &str) -> usize {
        self.season_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|id| id.as_str() == league_id)
            .count()
    }
}

#[async_trait]
impl SportsDataProvider for ScriptedProvider {
    async fn all_leagues(&self) -> Result<AllLeaguesResponse, ApiError> {
        self.league_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.leagues_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let scripted = self.leagues.lock().unwrap().clone();
        scripted.unwrap_or_else(|| Ok(AllLeaguesResponse::default()))
    }

    async fn league_seasons(&self, league_id: &str) -> Result<SeasonsResponse, ApiError> {
        self.season_calls.lock().unwrap().push(league_id.to_string());
        let gate = self.gates.lock().unwrap().get(league_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let scripted = self.seasons.lock().unwrap().get(league_id).cloned();
        scripted.unwrap_or_else(|| Ok(SeasonsResponse::default()))
    }
}

/// Yield to the scheduler until `condition` holds, failing the test after a bounded wait
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!("condition not reached in time");
}
