use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::action::Action;
use crate::catalog::CatalogClient;

pub type ActionFuture = Pin<Box<dyn Future<Output = Action> + Send>>;

/// Side effects returned by the reducer and executed by the runtime
pub enum Effect {
    None,
    /// Dispatch an action on the next turn of the loop
    Action(Action),
    /// Run a future and dispatch the action it resolves to
    Async(ActionFuture),
    FetchLeagues,
    SelectLeague(String),
    ClearSelection,
    Batch(Vec<Effect>),
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::FetchLeagues => write!(f, "FetchLeagues"),
            Effect::SelectLeague(id) => f.debug_tuple("SelectLeague").field(id).finish(),
            Effect::ClearSelection => write!(f, "ClearSelection"),
            Effect::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
        }
    }
}

/// Effect handler for catalog loading
///
/// Only one catalog load is active at a time: starting a new one cancels the
/// previous request, whose `LeaguesLoaded(Err(Cancelled))` is then ignored
/// by the reducer.
pub struct DataEffects {
    catalog: CatalogClient,
    in_flight: Option<CancellationToken>,
}

impl DataEffects {
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            catalog,
            in_flight: None,
        }
    }

    /// Start a catalog load
    pub fn fetch_leagues(&mut self) -> Effect {
        if let Some(previous) = self.in_flight.take() {
            debug!("EFFECT: cancelling previous catalog load");
            previous.cancel();
        }

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let catalog = self.catalog.clone();
        Effect::Async(Box::pin(async move {
            let result = catalog.fetch_leagues(Some(&token)).await;
            Action::LeaguesLoaded(result.map(Arc::new))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::{sample_leagues, ScriptedProvider};

    #[tokio::test]
    async fn test_fetch_leagues_resolves_to_loaded_action() {
        let provider = Arc::new(ScriptedProvider::new().with_leagues(sample_leagues()));
        let mut effects = DataEffects::new(CatalogClient::new(provider));

        let Effect::Async(future) = effects.fetch_leagues() else {
            panic!("expected an async effect");
        };
        match future.await {
            Action::LeaguesLoaded(Ok(leagues)) => assert_eq!(leagues.len(), 4),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_second_fetch_cancels_first() {
        let provider = Arc::new(ScriptedProvider::new().with_leagues(sample_leagues()));
        let gate = provider.hold_leagues();
        let mut effects = DataEffects::new(CatalogClient::new(provider.clone()));

        let Effect::Async(first) = effects.fetch_leagues() else {
            panic!("expected an async effect");
        };
        let first = tokio::spawn(first);

        let Effect::Async(_second) = effects.fetch_leagues() else {
            panic!("expected an async effect");
        };

        match first.await.unwrap() {
            Action::LeaguesLoaded(Err(ApiError::Cancelled)) => {}
            other => panic!("unexpected action: {:?}", other),
        }
        gate.notify_waiters();
    }
}
