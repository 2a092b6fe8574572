/// Trait for providing catalog data, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{AllLeaguesResponse, SeasonsResponse};

/// Source of league and season data, implemented by both `HttpClient` and `MockClient`
///
/// Implementations report a non-success upstream status as
/// `ApiError::RequestFailed` and never cache; caching and cancellation live
/// in the catalog and badge clients above this seam.
#[async_trait]
pub trait SportsDataProvider: Send + Sync {
    /// Get every league in the catalog
    async fn all_leagues(&self) -> Result<AllLeaguesResponse, ApiError>;

    /// Get the seasons of a league, with badge metadata
    async fn league_seasons(&self, league_id: &str) -> Result<SeasonsResponse, ApiError>;
}
