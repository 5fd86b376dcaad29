use serde::{Deserialize, Serialize};

/// One row of the match results file, cells kept as read.
///
/// Parsing happens during normalization so that a malformed cell drops the
/// row instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<String>,
    pub away_score: Option<String>,
    pub tournament: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub neutral: Option<String>,
}

impl RawMatch {
    pub fn new(
        date: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_score: Option<u32>,
        away_score: Option<u32>,
    ) -> Self {
        Self {
            date: date.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: home_score.map(|s| s.to_string()),
            away_score: away_score.map(|s| s.to_string()),
            ..Self::default()
        }
    }

    pub fn with_tournament(mut self, tournament: impl Into<String>) -> Self {
        self.tournament = Some(tournament.into());
        self
    }

    pub fn with_venue(
        mut self,
        city: impl Into<String>,
        country: impl Into<String>,
        neutral: bool,
    ) -> Self {
        self.city = Some(city.into());
        self.country = Some(country.into());
        self.neutral = Some(neutral.to_string());
        self
    }
}
