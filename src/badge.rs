use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cache::BadgeCache;
use crate::cancellation::run_cancellable;
use crate::data_provider::SportsDataProvider;
use crate::error::ApiError;
use crate::types::SeasonsResponse;

/// Fetches season badges, memoizing successful responses per league id
///
/// Concurrent fetches for the same id are not coalesced: each one issues its
/// own request and the last to finish writes the (equivalent) cache entry.
pub struct BadgeClient {
    provider: Arc<dyn SportsDataProvider>,
    cache: Arc<BadgeCache>,
}

impl BadgeClient {
    pub fn new(provider: Arc<dyn SportsDataProvider>, cache: Arc<BadgeCache>) -> Self {
        Self { provider, cache }
    }

    pub fn cache(&self) -> &BadgeCache {
        &self.cache
    }

    /// Cached response for `league_id`, without any I/O
    ///
    /// A lookup here is not recorded in the cache statistics.
    pub fn cached(&self, league_id: &str) -> Option<SeasonsResponse> {
        self.cache.peek(league_id)
    }

    /// Fetch the seasons of a league, serving repeats from the cache
    ///
    /// Only successful responses are stored; a failed or cancelled attempt
    /// leaves no entry, so a retry goes back to the provider.
    pub async fn fetch_season_badge(
        &self,
        league_id: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<SeasonsResponse, ApiError> {
        if let Some(hit) = self.cache.get(league_id) {
            debug!("BADGE: cache hit for league {}", league_id);
            return Ok(hit);
        }

        debug!("BADGE: fetching seasons for league {}", league_id);
        let response = run_cancellable(cancel, self.provider.league_seasons(league_id)).await?;
        self.cache.insert(league_id, response.clone());
        Ok(response)
    }
}
