use anyhow::Result;

use crate::catalog::CatalogClient;
use crate::commands::load_leagues;
use crate::filters::sport_types;
use crate::types::League;

pub fn format_sports(leagues: &[League]) -> String {
    let sports = sport_types(leagues);
    let mut output = String::new();
    for sport in &sports {
        output.push_str(sport);
        output.push('\n');
    }
    output
}

pub async fn run(catalog: &CatalogClient) -> Result<()> {
    let leagues = load_leagues(catalog).await?;
    print!("{}", format_sports(&leagues));
    Ok(())
}
