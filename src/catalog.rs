use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cancellation::run_cancellable;
use crate::data_provider::SportsDataProvider;
use crate::error::ApiError;
use crate::types::League;

/// Fetches the full league catalog
///
/// The catalog is a single logical resource, so nothing is cached here; each
/// call is one request and a failure is final for that attempt.
#[derive(Clone)]
pub struct CatalogClient {
    provider: Arc<dyn SportsDataProvider>,
}

impl CatalogClient {
    pub fn new(provider: Arc<dyn SportsDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch every league; an omitted `leagues` field yields an empty list
    pub async fn fetch_leagues(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<League>, ApiError> {
        let response = run_cancellable(cancel, self.provider.all_leagues()).await?;
        let leagues = response.into_leagues();
        debug!("CATALOG: fetched {} leagues", leagues.len());
        Ok(leagues)
    }
}
