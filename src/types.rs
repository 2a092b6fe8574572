/// Wire types for the TheSportsDB catalog
///
/// Field names follow the upstream JSON (`idLeague`, `strSport`, ...) through
/// serde renames; the Rust side uses plain names.
use serde::{Deserialize, Serialize};

/// Base URL of the public TheSportsDB v1 API (free tier key "3")
pub const DEFAULT_API_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json/3";

/// A named competition with its sport category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    #[serde(rename = "idLeague")]
    pub id: String,
    #[serde(rename = "strLeague")]
    pub name: String,
    #[serde(rename = "strSport")]
    pub sport: String,
    #[serde(rename = "strLeagueAlternate", default)]
    pub alternate_name: Option<String>,
}

impl League {
    pub fn new(id: impl Into<String>, name: impl Into<String>, sport: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sport: sport.into(),
            alternate_name: None,
        }
    }

    pub fn with_alternate_name(mut self, alternate_name: impl Into<String>) -> Self {
        self.alternate_name = Some(alternate_name.into());
        self
    }

    /// Alternate name, ignoring the empty strings upstream sometimes sends
    pub fn alternate_name(&self) -> Option<&str> {
        self.alternate_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// One season of a league, optionally carrying badge artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "strSeason")]
    pub season: String,
    #[serde(rename = "strBadge", default)]
    pub badge: Option<String>,
    #[serde(rename = "strDescriptionEN", default)]
    pub description: Option<String>,
}

/// Payload of `all_leagues.php`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllLeaguesResponse {
    #[serde(default)]
    pub leagues: Option<Vec<League>>,
}

impl AllLeaguesResponse {
    pub fn into_leagues(self) -> Vec<League> {
        self.leagues.unwrap_or_default()
    }
}

/// Payload of `search_all_seasons.php`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonsResponse {
    #[serde(default)]
    pub seasons: Option<Vec<Season>>,
}

impl SeasonsResponse {
    /// The season the upstream lists first. Ordering is the upstream's, never re-sorted here.
    pub fn first_season(&self) -> Option<&Season> {
        self.seasons.as_ref().and_then(|seasons| seasons.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_deserializes_from_upstream_names() {
        let json = r#"{
            "idLeague": "4328",
            "strLeague": "English Premier League",
            "strSport": "Soccer",
            "strLeagueAlternate": "Premier League, EPL"
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.id, "4328");
        assert_eq!(league.name, "English Premier League");
        assert_eq!(league.sport, "Soccer");
        assert_eq!(league.alternate_name(), Some("Premier League, EPL"));
    }

    #[test]
    fn test_league_null_and_blank_alternate_name() {
        let json = r#"{"idLeague":"1","strLeague":"A","strSport":"B","strLeagueAlternate":null}"#;
        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.alternate_name, None);

        let json = r#"{"idLeague":"1","strLeague":"A","strSport":"B","strLeagueAlternate":"  "}"#;
        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.alternate_name(), None);
    }

    #[test]
    fn test_all_leagues_missing_or_null_field_is_empty() {
        let missing: AllLeaguesResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.into_leagues().is_empty());

        let null: AllLeaguesResponse = serde_json::from_str(r#"{"leagues":null}"#).unwrap();
        assert!(null.into_leagues().is_empty());
    }

    #[test]
    fn test_first_season_keeps_upstream_order() {
        let json = r#"{"seasons":[
            {"strSeason":"2023-2024","strBadge":"http://x/badge.png","strDescriptionEN":null},
            {"strSeason":"2024-2025","strBadge":null,"strDescriptionEN":null}
        ]}"#;
        let response: SeasonsResponse = serde_json::from_str(json).unwrap();

        let first = response.first_season().unwrap();
        assert_eq!(first.season, "2023-2024");
        assert_eq!(first.badge.as_deref(), Some("http://x/badge.png"));
    }

    #[test]
    fn test_first_season_none_for_null_or_empty() {
        let null: SeasonsResponse = serde_json::from_str(r#"{"seasons":null}"#).unwrap();
        assert!(null.first_season().is_none());

        let empty: SeasonsResponse = serde_json::from_str(r#"{"seasons":[]}"#).unwrap();
        assert!(empty.first_season().is_none());
    }
}
