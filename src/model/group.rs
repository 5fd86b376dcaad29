use chrono::Month;
use serde::Serialize;
use strum_macros::EnumString;

use super::normalized::NormalizedMatch;
use super::summary::Metrics;

/// Built-in grouping dimensions for breakdown tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum GroupKey {
    Opponent,
    Competition,
    Month,
    Year,
    Venue,
}

impl GroupKey {
    /// The label of `record` along this dimension.
    pub fn label(self, record: &NormalizedMatch) -> String {
        match self {
            GroupKey::Opponent => record.opponent.clone(),
            GroupKey::Competition => record.competition.clone(),
            GroupKey::Month => month_name(record.month).to_string(),
            GroupKey::Year => record.year.to_string(),
            GroupKey::Venue => record.venue().to_string(),
        }
    }
}

/// English name of a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// Metrics for one group of matches sharing a key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary<K> {
    pub key: K,
    pub matches_played: usize,
    pub metrics: Metrics,
}
