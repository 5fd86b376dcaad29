use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::{EnumIter, EnumString};

use super::normalized::MatchResult;
use super::summary::Metrics;

/// Recent form set against the longer history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodComparison {
    pub recent: Metrics,
    pub historical: Metrics,
    /// Recent minus historical, in percentage points.
    pub win_rate_delta: f64,
    /// Recent minus historical goals per match.
    pub goals_scored_delta: f64,
    /// Historical minus recent conceded per match; positive means fewer conceded.
    pub goals_conceded_delta: f64,
}

/// Run of identical results ending with the latest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub result: MatchResult,
    pub length: usize,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
pub enum TrendDirection {
    Rising,
    Steady,
    Falling,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Momentum {
    pub streak: Streak,
    pub wins_last_five: usize,
    /// `wins_last_five` expressed out of five matches.
    pub form_percentage: f64,
    pub points_trend: Option<f64>,
    pub direction: Option<TrendDirection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPerformance {
    pub month: u32,
    pub month_name: &'static str,
    pub matches: usize,
    pub win_rate: f64,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
pub enum SeasonPreference {
    Summer,
    Winter,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalPattern {
    pub months: Vec<MonthlyPerformance>,
    pub best_month: u32,
    pub worst_month: u32,
    pub preference: Option<SeasonPreference>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
pub enum ProjectionDirection {
    Improving,
    Stable,
    Declining,
}

/// Linear win-rate extrapolation from the change between two halves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub current_win_rate: f64,
    /// Win-rate change between the halves, as a fraction.
    pub change: f64,
    pub in_three_months: f64,
    pub in_six_months: f64,
    pub in_twelve_months: f64,
    pub direction: ProjectionDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Targets {
    pub win_rate: f64,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
}

/// Reference levels of international teams.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumIter,
    EnumString,
    strum_macros::Display,
)]
pub enum BenchmarkTier {
    #[strum(serialize = "Top 5")]
    Top5,
    #[strum(serialize = "Top 10")]
    Top10,
    #[strum(serialize = "Top 20")]
    Top20,
}

impl BenchmarkTier {
    pub fn win_rate(self) -> f64 {
        match self {
            BenchmarkTier::Top5 => 70.0,
            BenchmarkTier::Top10 => 60.0,
            BenchmarkTier::Top20 => 50.0,
        }
    }

    pub fn goals_per_match(self) -> f64 {
        match self {
            BenchmarkTier::Top5 => 2.1,
            BenchmarkTier::Top10 => 1.8,
            BenchmarkTier::Top20 => 1.5,
        }
    }

    pub fn conceded_per_match(self) -> f64 {
        match self {
            BenchmarkTier::Top5 => 0.8,
            BenchmarkTier::Top10 => 1.1,
            BenchmarkTier::Top20 => 1.4,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
pub enum GapPriority {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkGap {
    pub tier: BenchmarkTier,
    /// Percentage points below the tier's win rate.
    pub win_rate_gap: f64,
    /// Extra wins needed over a 20-match cycle.
    pub wins_needed_per_20: u32,
    pub priority: GapPriority,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Strength {
    HighWinRate,
    PotentAttack,
    SolidDefence,
    StrongHomeAdvantage,
    RegularCleanSheets,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Weakness {
    LowWinRate,
    BluntAttack,
    LeakyDefence,
    NoHomeAdvantage,
    FewConvincingWins,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
}

/// How often each score line component occurs, keyed by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    pub goals_scored: BTreeMap<u32, usize>,
    pub goals_conceded: BTreeMap<u32, usize>,
    pub goal_difference: BTreeMap<i64, usize>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum TacticalTrait {
    ClutchWinner,
    Dominant,
    Resilient,
    Fragile,
}

/// Close and lopsided results. Shares are percentages of all matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TacticalProfile {
    pub narrow_wins: usize,
    pub big_wins: usize,
    pub narrow_defeats: usize,
    pub heavy_defeats: usize,
    pub clutch_share: f64,
    pub dominance_share: f64,
    pub fragility_share: f64,
    pub traits: Vec<TacticalTrait>,
}
