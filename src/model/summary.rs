use serde::Serialize;

/// Summary statistics over a non-empty set of matches.
///
/// Rates are percentages in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total_matches: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    pub goals_scored: u64,
    pub goals_conceded: u64,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
    pub goal_difference_total: i64,
    pub avg_goal_difference: f64,
    pub clean_sheets: usize,
    /// Matches won by three goals or more.
    pub big_wins: usize,
    /// Matches won by exactly one goal.
    pub narrow_wins: usize,
    /// Matches lost by exactly one goal.
    pub narrow_defeats: usize,
    /// Matches lost by three goals or more.
    pub heavy_defeats: usize,
}

impl Metrics {
    /// Share of matches without conceding, as a fraction.
    pub fn clean_sheet_share(&self) -> f64 {
        self.clean_sheets as f64 / self.total_matches as f64
    }

    pub fn big_win_share(&self) -> f64 {
        self.big_wins as f64 / self.total_matches as f64
    }
}

/// Result of aggregating a match subset.
///
/// An empty subset yields [`MetricsSummary::Empty`] instead of undefined
/// averages; callers match on it before reading any field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "metrics", rename_all = "lowercase")]
pub enum MetricsSummary {
    Empty,
    Summary(Metrics),
}

impl MetricsSummary {
    pub fn is_empty(&self) -> bool {
        matches!(self, MetricsSummary::Empty)
    }

    pub fn as_metrics(&self) -> Option<&Metrics> {
        match self {
            MetricsSummary::Empty => None,
            MetricsSummary::Summary(metrics) => Some(metrics),
        }
    }

    pub fn into_metrics(self) -> Option<Metrics> {
        match self {
            MetricsSummary::Empty => None,
            MetricsSummary::Summary(metrics) => Some(metrics),
        }
    }
}
