use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::data_provider::SportsDataProvider;
use crate::error::{ApiError, Resource};
use crate::types::{AllLeaguesResponse, SeasonsResponse, DEFAULT_API_BASE_URL};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the TheSportsDB v1 API
///
/// Plain GETs against a fixed base URL: no auth, no retries, no timeouts.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client against the public API
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// Create a client against a custom base URL (trailing slashes are ignored)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the catalog endpoint
    pub fn leagues_url(&self) -> Result<Url, ApiError> {
        Url::parse(&format!("{}/all_leagues.php", self.base_url))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    /// URL of the seasons endpoint for one league, with badge metadata requested
    pub fn seasons_url(&self, league_id: &str) -> Result<Url, ApiError> {
        Url::parse_with_params(
            &format!("{}/search_all_seasons.php", self.base_url),
            &[("badge", "1"), ("id", league_id)],
        )
        .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, resource: Resource) -> Result<T, ApiError> {
        debug!("HTTP: GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        check_status(status, resource)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        trace!("HTTP: {} response body is {} bytes", resource, body.len());

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn check_status(status: StatusCode, resource: Resource) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        debug!("HTTP: {} request failed with status {}", resource, status.as_u16());
        Err(ApiError::RequestFailed {
            resource,
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl SportsDataProvider for HttpClient {
    async fn all_leagues(&self) -> Result<AllLeaguesResponse, ApiError> {
        let url = self.leagues_url()?;
        self.get_json(url, Resource::Leagues).await
    }

    async fn league_seasons(&self, league_id: &str) -> Result<SeasonsResponse, ApiError> {
        let url = self.seasons_url(league_id)?;
        self.get_json(url, Resource::Badge).await
    }
}
