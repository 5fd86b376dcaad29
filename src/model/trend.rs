use serde::Serialize;

use super::normalized::NormalizedMatch;

/// A match together with trailing rolling averages ending at it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRecord {
    #[serde(flatten)]
    pub record: NormalizedMatch,
    pub points: u32,
    pub rolling_points: f64,
    pub rolling_goals_scored: f64,
    pub rolling_goals_conceded: f64,
}
