pub mod badge;
pub mod list;
pub mod sports;
pub mod stats;

use anyhow::{Context, Result};

use crate::catalog::CatalogClient;
use crate::types::League;

/// Fetch the catalog for a one-shot command
pub async fn load_leagues(catalog: &CatalogClient) -> Result<Vec<League>> {
    catalog
        .fetch_leagues(None)
        .await
        .context("Failed to load leagues")
}
