use anyhow::Result;

use crate::catalog::CatalogClient;
use crate::commands::load_leagues;
use crate::config::DisplayConfig;
use crate::filters::filter_leagues;
use crate::formatting::{format_header, truncate_to_width};
use crate::types::League;

/// Width of league id column
const ID_COL_WIDTH: usize = 6;

/// Width of league name column
const NAME_COL_WIDTH: usize = 40;

/// Width of sport column
const SPORT_COL_WIDTH: usize = 20;

pub fn format_leagues(
    leagues: &[League],
    query: &str,
    sport: &str,
    display: &DisplayConfig,
) -> String {
    let filtered = filter_leagues(leagues, query, sport);
    let ellipsis = &display.box_chars.ellipsis;

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Sports Leagues", true, display));
    output.push('\n');

    if filtered.is_empty() {
        output.push_str("No leagues found matching your filters.\n");
    } else {
        output.push_str(&format!(
            "{:<id$} {:<name$} {:<sport$} Alternate Name\n",
            "ID",
            "League",
            "Sport",
            id = ID_COL_WIDTH,
            name = NAME_COL_WIDTH,
            sport = SPORT_COL_WIDTH
        ));
        output.push_str(&format!("{}\n", display.box_chars.horizontal.repeat(100)));

        for league in &filtered {
            output.push_str(&format!(
                "{:<id$} {:<name$} {:<sport$} {}\n",
                league.id,
                truncate_to_width(&league.name, NAME_COL_WIDTH, ellipsis),
                truncate_to_width(&league.sport, SPORT_COL_WIDTH, ellipsis),
                league.alternate_name().unwrap_or(""),
                id = ID_COL_WIDTH,
                name = NAME_COL_WIDTH,
                sport = SPORT_COL_WIDTH
            ));
        }
    }

    output.push_str(&format!(
        "\nShowing {} of {} leagues\n",
        filtered.len(),
        leagues.len()
    ));
    output
}

pub async fn run(
    catalog: &CatalogClient,
    query: Option<String>,
    sport: Option<String>,
    display: &DisplayConfig,
) -> Result<()> {
    let leagues = load_leagues(catalog).await?;
    print!(
        "{}",
        format_leagues(
            &leagues,
            query.as_deref().unwrap_or(""),
            sport.as_deref().unwrap_or(""),
            display
        )
    );
    Ok(())
}
