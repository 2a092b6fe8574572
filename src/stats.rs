/// Per-sport league counts for the statistics panel
use std::collections::HashMap;

use crate::types::League;

/// Number of sports shown individually before the rest roll up into "Others"
pub const DEFAULT_TOP_SPORTS: usize = 8;

/// Label of the synthetic rollup row
pub const OTHERS_LABEL: &str = "Others";

#[derive(Debug, Clone, PartialEq)]
pub struct SportStat {
    pub sport: String,
    pub count: usize,
    /// Share of all leagues, 0.0..=100.0
    pub percentage: f64,
}

/// Top-N sports plus the rollup of everything below them
#[derive(Debug, Clone, PartialEq)]
pub struct SportBreakdown {
    pub total: usize,
    pub top: Vec<SportStat>,
    /// Present only when more sports exist than fit in `top`
    pub others: Option<SportStat>,
}

fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Count leagues per sport, most common first
///
/// Sports with equal counts keep the order in which they first appear in
/// `leagues`.
pub fn sport_stats(leagues: &[League]) -> Vec<SportStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for league in leagues {
        match index.get(league.sport.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(league.sport.as_str(), counts.len());
                counts.push((league.sport.as_str(), 1));
            }
        }
    }

    // sort_by is stable, ties stay in encounter order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = leagues.len();
    counts
        .into_iter()
        .map(|(sport, count)| SportStat {
            sport: sport.to_string(),
            count,
            percentage: percentage_of(count, total),
        })
        .collect()
}

/// Split `sport_stats` into the first `top_n` rows and an "Others" rollup
pub fn sport_breakdown(leagues: &[League], top_n: usize) -> SportBreakdown {
    let total = leagues.len();
    let mut top = sport_stats(leagues);
    let rest = top.split_off(top_n.min(top.len()));

    let others = if rest.is_empty() {
        None
    } else {
        let count = rest.iter().map(|stat| stat.count).sum();
        Some(SportStat {
            sport: OTHERS_LABEL.to_string(),
            count,
            percentage: percentage_of(count, total),
        })
    };

    SportBreakdown { total, top, others }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_leagues;

    const EPSILON: f64 = 1e-9;

    fn leagues_with_sports(sports: &[&str]) -> Vec<League> {
        sports
            .iter()
            .enumerate()
            .map(|(i, sport)| League::new(i.to_string(), format!("League {}", i), *sport))
            .collect()
    }

    #[test]
    fn test_epl_nba_la_liga() {
        let leagues = vec![
            League::new("1", "EPL", "Soccer"),
            League::new("2", "NBA", "Basketball"),
            League::new("3", "La Liga", "Soccer"),
        ];

        let stats = sport_stats(&leagues);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].sport, "Soccer");
        assert_eq!(stats[0].count, 2);
        assert_eq!(format!("{:.1}", stats[0].percentage), "66.7");
        assert_eq!(stats[1].sport, "Basketball");
        assert_eq!(stats[1].count, 1);
        assert_eq!(format!("{:.1}", stats[1].percentage), "33.3");
    }

    #[test]
    fn test_empty_input() {
        assert!(sport_stats(&[]).is_empty());

        let breakdown = sport_breakdown(&[], DEFAULT_TOP_SPORTS);
        assert_eq!(breakdown.total, 0);
        assert!(breakdown.top.is_empty());
        assert!(breakdown.others.is_none());
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let stats = sport_stats(&sample_leagues());
        let sum: f64 = stats.iter().map(|stat| stat.percentage).sum();
        assert!((sum - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let leagues = leagues_with_sports(&["Rugby", "Golf", "Golf", "Cricket", "Rugby", "Cricket", "Darts"]);

        let sports: Vec<_> = sport_stats(&leagues).into_iter().map(|s| s.sport).collect();

        assert_eq!(sports, vec!["Rugby", "Golf", "Cricket", "Darts"]);
    }

    #[test]
    fn test_breakdown_without_remainder_has_no_others() {
        let breakdown = sport_breakdown(&sample_leagues(), DEFAULT_TOP_SPORTS);
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.top.len(), 3);
        assert!(breakdown.others.is_none());
    }

    #[test]
    fn test_breakdown_rolls_up_remainder() {
        // 10 sports: "S0" has 3 leagues, "S1" has 2, the rest 1 each
        let mut sports = vec!["S0", "S0", "S0", "S1", "S1"];
        sports.extend(["S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9"]);
        let leagues = leagues_with_sports(&sports);

        let breakdown = sport_breakdown(&leagues, DEFAULT_TOP_SPORTS);

        assert_eq!(breakdown.total, 13);
        assert_eq!(breakdown.top.len(), 8);
        assert_eq!(breakdown.top[0].sport, "S0");
        assert_eq!(breakdown.top[7].sport, "S7");

        let others = breakdown.others.unwrap();
        assert_eq!(others.sport, OTHERS_LABEL);
        assert_eq!(others.count, 2);
        assert!((others.percentage - 2.0 / 13.0 * 100.0).abs() < EPSILON);

        let shown: usize = breakdown.top.iter().map(|s| s.count).sum();
        assert_eq!(shown + others.count, breakdown.total);
    }

    #[test]
    fn test_breakdown_top_zero_rolls_up_everything() {
        let breakdown = sport_breakdown(&sample_leagues(), 0);
        assert!(breakdown.top.is_empty());
        let others = breakdown.others.unwrap();
        assert_eq!(others.count, 4);
        assert!((others.percentage - 100.0).abs() < EPSILON);
    }
}
