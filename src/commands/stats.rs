use anyhow::Result;

use crate::catalog::CatalogClient;
use crate::commands::load_leagues;
use crate::config::DisplayConfig;
use crate::formatting::{format_header, format_percentage, stat_bar, truncate_to_width};
use crate::stats::{sport_breakdown, SportStat};
use crate::types::League;

/// Width of sport label column
const SPORT_COL_WIDTH: usize = 20;

/// Width of the proportional bar
const BAR_WIDTH: usize = 30;

fn format_row(stat: &SportStat, display: &DisplayConfig) -> String {
    format!(
        "{:<width$} {} {:>5} {:>7}\n",
        truncate_to_width(&stat.sport, SPORT_COL_WIDTH, &display.box_chars.ellipsis),
        stat_bar(stat.percentage, BAR_WIDTH, &display.box_chars),
        stat.count,
        format_percentage(stat.percentage),
        width = SPORT_COL_WIDTH
    )
}

pub fn format_stats(leagues: &[League], top_n: usize, display: &DisplayConfig) -> String {
    let breakdown = sport_breakdown(leagues, top_n);

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(
        &format!("Leagues by Sport ({} total)", breakdown.total),
        true,
        display,
    ));
    output.push('\n');

    for stat in &breakdown.top {
        output.push_str(&format_row(stat, display));
    }
    if let Some(others) = &breakdown.others {
        output.push_str(&format_row(others, display));
    }
    output
}

pub async fn run(catalog: &CatalogClient, top_n: usize, display: &DisplayConfig) -> Result<()> {
    let leagues = load_leagues(catalog).await?;
    print!("{}", format_stats(&leagues, top_n, display));
    Ok(())
}
