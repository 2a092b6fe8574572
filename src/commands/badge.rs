use anyhow::{bail, Result};

use crate::catalog::CatalogClient;
use crate::config::DisplayConfig;
use crate::formatting::format_header;
use crate::selection::{SelectionController, SelectionState};

/// Text of the badge panel for a settled selection
pub fn format_badge(league_name: &str, state: &SelectionState, display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(league_name, true, display));
    output.push('\n');

    match state {
        SelectionState::Idle => {}
        SelectionState::Loading { .. } => output.push_str("Loading badge...\n"),
        SelectionState::Failed { message, .. } => {
            output.push_str(&format!("Error: {}\n", message));
        }
        SelectionState::Loaded { season: Some(season), .. } => {
            output.push_str(&format!("Season: {}\n", season.season));
            match &season.badge {
                Some(badge) => output.push_str(&format!("Badge: {}\n", badge)),
                None => output.push_str("No badge available for this season.\n"),
            }
            if let Some(description) = season.description.as_deref().filter(|d| !d.is_empty()) {
                output.push('\n');
                output.push_str(description);
                output.push('\n');
            }
        }
        SelectionState::Loaded { season: None, .. } => {
            output.push_str("No season data available for this league.\n");
        }
    }
    output
}

pub async fn run(
    catalog: &CatalogClient,
    selection: &mut SelectionController,
    league_id: &str,
    display: &DisplayConfig,
) -> Result<()> {
    selection.select(league_id);

    // The name is cosmetic; a catalog failure falls back to a generic title
    let (leagues, state) = tokio::join!(catalog.fetch_leagues(None), selection.wait_until_settled());
    let league_name = leagues
        .ok()
        .and_then(|leagues| leagues.into_iter().find(|league| league.id == league_id))
        .map(|league| league.name)
        .unwrap_or_else(|| "League".to_string());

    print!("{}", format_badge(&league_name, state, display));

    if let SelectionState::Failed { message, .. } = state {
        bail!("{}", message);
    }
    Ok(())
}
