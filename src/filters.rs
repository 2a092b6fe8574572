/// League list derivations: sport categories and search/sport filtering
///
/// Pure functions over the fetched catalog, recomputed by callers whenever
/// the catalog, the query or the sport filter changes.
use std::collections::BTreeSet;

use crate::types::League;

/// Distinct sport labels, sorted ascending
pub fn sport_types(leagues: &[League]) -> Vec<String> {
    leagues
        .iter()
        .map(|league| league.sport.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Normalize a search query the way `filter_leagues` compares it
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Leagues matching both the search query and the sport filter, in input order
///
/// An empty (or whitespace-only) query matches every name; an empty sport
/// filter matches every sport. Name matching is a case-insensitive substring
/// test, sport matching is exact.
pub fn filter_leagues<'a>(leagues: &'a [League], query: &str, sport_filter: &str) -> Vec<&'a League> {
    let query = normalize_query(query);
    leagues
        .iter()
        .filter(|league| sport_filter.is_empty() || league.sport == sport_filter)
        .filter(|league| query.is_empty() || league.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_leagues;

    fn names<'a>(leagues: &[&'a League]) -> Vec<&'a str> {
        leagues.iter().map(|league| league.name.as_str()).collect()
    }

    #[test]
    fn test_sport_types_sorted_unique() {
        assert_eq!(
            sport_types(&sample_leagues()),
            vec!["Basketball", "Motorsport", "Soccer"]
        );
    }

    #[test]
    fn test_sport_types_empty() {
        assert!(sport_types(&[]).is_empty());
    }

    #[test]
    fn test_no_filters_returns_all() {
        let leagues = sample_leagues();
        assert_eq!(filter_leagues(&leagues, "", "").len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let leagues = sample_leagues();
        let result = filter_leagues(&leagues, "premier", "");
        assert_eq!(names(&result), vec!["English Premier League"]);

        let result = filter_leagues(&leagues, "PREMIER", "");
        assert_eq!(names(&result), vec!["English Premier League"]);
    }

    #[test]
    fn test_search_ignores_alternate_names() {
        let leagues = sample_leagues();
        assert!(filter_leagues(&leagues, "EPL", "").is_empty());
        assert!(filter_leagues(&leagues, "Association", "").is_empty());
    }

    #[test]
    fn test_filter_by_sport() {
        let leagues = sample_leagues();
        let result = filter_leagues(&leagues, "", "Soccer");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|league| league.sport == "Soccer"));
    }

    #[test]
    fn test_sport_filter_is_case_sensitive() {
        let leagues = sample_leagues();
        assert!(filter_leagues(&leagues, "", "soccer").is_empty());
    }

    #[test]
    fn test_search_and_sport_combine() {
        let leagues = vec![
            League::new("1", "EPL", "Soccer"),
            League::new("2", "NBA", "Basketball"),
            League::new("3", "La Liga", "Soccer"),
        ];
        let result = filter_leagues(&leagues, "la", "Soccer");
        assert_eq!(result, vec![&leagues[2]]);
    }

    #[test]
    fn test_nothing_matches() {
        let leagues = sample_leagues();
        assert!(filter_leagues(&leagues, "zzzzz", "").is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let leagues = sample_leagues();
        let result = filter_leagues(&leagues, "  nba  ", "");
        assert_eq!(names(&result), vec!["NBA"]);
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let leagues = sample_leagues();
        assert_eq!(filter_leagues(&leagues, "   ", "").len(), leagues.len());
        assert_eq!(filter_leagues(&leagues, "\t", "Soccer").len(), 2);
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let leagues = sample_leagues();
        for query in ["", "l", "a", "e", "zz"] {
            for sport in ["", "Soccer", "Basketball", "Curling"] {
                let result = filter_leagues(&leagues, query, sport);
                assert!(result.len() <= leagues.len());

                // Each result points into the input, strictly advancing
                let mut last_index = None;
                for league in &result {
                    let index = leagues
                        .iter()
                        .position(|candidate| std::ptr::eq(candidate, *league))
                        .expect("result must reference an input league");
                    assert!(last_index.map_or(true, |last| index > last));
                    last_index = Some(index);

                    if !sport.is_empty() {
                        assert_eq!(league.sport, sport);
                    }
                    assert!(league.name.to_lowercase().contains(&normalize_query(query)));
                }
            }
        }
    }
}
