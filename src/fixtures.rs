/// Mock fixture data for testing and development
///
/// Deterministic catalog data used by:
/// 1. The development mock client - running the app without network access
/// 2. Benchmarks - consistent input for filtering and statistics
/// 3. Tests that want a realistic catalog rather than a handful of leagues
use crate::types::{League, Season, SeasonsResponse};

/// (id, name, sport, alternate name)
const MOCK_LEAGUES: &[(&str, &str, &str, Option<&str>)] = &[
    ("4328", "English Premier League", "Soccer", Some("Premier League, EPL")),
    ("4329", "English League Championship", "Soccer", Some("Championship")),
    ("4331", "German Bundesliga", "Soccer", Some("Bundesliga")),
    ("4332", "Italian Serie A", "Soccer", Some("Serie A")),
    ("4334", "French Ligue 1", "Soccer", Some("Ligue 1 Conforama")),
    ("4335", "Spanish La Liga", "Soccer", Some("LaLiga Santander, La Liga")),
    ("4346", "American Major League Soccer", "Soccer", Some("MLS")),
    ("4387", "NBA", "Basketball", Some("National Basketball Association")),
    ("4388", "NBA G League", "Basketball", None),
    ("4408", "Euroleague Basketball", "Basketball", None),
    ("4380", "NHL", "Ice Hockey", Some("National Hockey League")),
    ("4419", "Swedish Hockey League", "Ice Hockey", Some("SHL")),
    ("4391", "NFL", "American Football", Some("National Football League")),
    ("4479", "NCAA Division I FBS", "American Football", None),
    ("4424", "MLB", "Baseball", Some("Major League Baseball")),
    ("4591", "Nippon Professional Baseball", "Baseball", Some("NPB")),
    ("4370", "Formula 1", "Motorsport", Some("F1")),
    ("4373", "IndyCar Series", "Motorsport", None),
    ("4407", "MotoGP", "Motorsport", None),
    ("4414", "English Premiership Rugby", "Rugby", Some("Gallagher Premiership")),
    ("4446", "United Rugby Championship", "Rugby", Some("URC")),
    ("4464", "ATP World Tour", "Tennis", Some("ATP")),
    ("4517", "WTA Tour", "Tennis", None),
    ("4425", "PGA Tour", "Golf", None),
    ("4443", "UFC", "Fighting", Some("Ultimate Fighting Championship")),
    ("4444", "WWE", "Fighting", None),
    ("4460", "Indian Premier League", "Cricket", Some("IPL")),
    ("4554", "Tour de France", "Cycling", None),
    ("4486", "Volleyball Nations League", "Volleyball", Some("VNL")),
    ("4508", "Darts Premier League", "Darts", None),
    ("4587", "ESL Pro League", "ESports", Some("CS:GO ESL")),
];

/// The mock catalog, in upstream order
pub fn create_mock_leagues() -> Vec<League> {
    MOCK_LEAGUES
        .iter()
        .map(|(id, name, sport, alternate)| {
            let league = League::new(*id, *name, *sport);
            match alternate {
                Some(alternate) => league.with_alternate_name(*alternate),
                None => league,
            }
        })
        .collect()
}

/// A large synthetic catalog for benchmarks: `count` leagues spread over the mock sports
pub fn create_large_catalog(count: usize) -> Vec<League> {
    (0..count)
        .map(|i| {
            let (_, name, sport, _) = MOCK_LEAGUES[i % MOCK_LEAGUES.len()];
            League::new(format!("{}", 100_000 + i), format!("{} {}", name, i), sport)
        })
        .collect()
}

/// Mock seasons for a league id
///
/// Ids ending in `0` have no seasons at all and ids ending in `5` have
/// seasons without badge artwork, so every badge panel state can be exercised.
pub fn create_mock_seasons(league_id: &str) -> SeasonsResponse {
    if league_id.ends_with('0') {
        return SeasonsResponse { seasons: None };
    }

    let badge = if league_id.ends_with('5') {
        None
    } else {
        Some(format!(
            "https://www.thesportsdb.com/images/media/league/badge/{}-2023-2024.png",
            league_id
        ))
    };

    SeasonsResponse {
        seasons: Some(vec![
            Season {
                season: "2023-2024".to_string(),
                badge,
                description: Some(format!("Season 2023-2024 of league {}.", league_id)),
            },
            Season {
                season: "2022-2023".to_string(),
                badge: None,
                description: None,
            },
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::sport_types;
    use std::collections::HashSet;

    #[test]
    fn test_mock_league_ids_are_unique() {
        let leagues = create_mock_leagues();
        let ids: HashSet<_> = leagues.iter().map(|league| league.id.as_str()).collect();
        assert_eq!(ids.len(), leagues.len());
    }

    #[test]
    fn test_mock_catalog_has_more_than_eight_sports() {
        // Exercises the "Others" rollup in the statistics panel
        assert!(sport_types(&create_mock_leagues()).len() > 8);
    }

    #[test]
    fn test_large_catalog_size() {
        assert_eq!(create_large_catalog(1000).len(), 1000);
    }

    #[test]
    fn test_mock_seasons_variants() {
        assert!(create_mock_seasons("4380").first_season().is_none());
        assert!(create_mock_seasons("4335").first_season().unwrap().badge.is_none());
        let season = create_mock_seasons("4328");
        let first = season.first_season().unwrap();
        assert_eq!(first.season, "2023-2024");
        assert!(first.badge.as_deref().unwrap().contains("4328"));
    }
}
