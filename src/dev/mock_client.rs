/// Mock catalog client for development and testing
use async_trait::async_trait;
use tracing::info;

use crate::data_provider::SportsDataProvider;
use crate::error::ApiError;
use crate::fixtures;
use crate::types::{AllLeaguesResponse, SeasonsResponse};

/// Mock client that returns fixture data instead of making real API calls
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SportsDataProvider for MockClient {
    async fn all_leagues(&self) -> Result<AllLeaguesResponse, ApiError> {
        info!("MockClient: Returning mock leagues");
        Ok(AllLeaguesResponse {
            leagues: Some(fixtures::create_mock_leagues()),
        })
    }

    async fn league_seasons(&self, league_id: &str) -> Result<SeasonsResponse, ApiError> {
        info!("MockClient: Returning mock seasons for league {}", league_id);
        Ok(fixtures::create_mock_seasons(league_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_serves_fixtures() {
        let client = MockClient::new();
        let leagues = client.all_leagues().await.unwrap().into_leagues();
        assert_eq!(leagues, fixtures::create_mock_leagues());

        let seasons = client.league_seasons("4328").await.unwrap();
        assert_eq!(seasons, fixtures::create_mock_seasons("4328"));
    }
}
