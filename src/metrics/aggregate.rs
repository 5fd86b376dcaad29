use crate::model::{MatchResult, Metrics, MetricsSummary, NormalizedMatch};

const BIG_MARGIN: i64 = 3;

#[derive(Debug, Default)]
struct Tally {
    total: usize,
    wins: usize,
    draws: usize,
    losses: usize,
    goals_scored: u64,
    goals_conceded: u64,
    goal_difference: i64,
    clean_sheets: usize,
    big_wins: usize,
    narrow_wins: usize,
    narrow_defeats: usize,
    heavy_defeats: usize,
}

impl Tally {
    fn add(mut self, record: &NormalizedMatch) -> Self {
        self.total += 1;
        match record.result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Draw => self.draws += 1,
            MatchResult::Loss => self.losses += 1,
        }
        self.goals_scored += u64::from(record.subject_score);
        self.goals_conceded += u64::from(record.opponent_score);
        self.goal_difference += record.goal_difference;
        if record.is_clean_sheet() {
            self.clean_sheets += 1;
        }
        if record.goal_difference >= BIG_MARGIN {
            self.big_wins += 1;
        }
        if record.result == MatchResult::Win && record.goal_difference == 1 {
            self.narrow_wins += 1;
        }
        if record.result == MatchResult::Loss && record.goal_difference == -1 {
            self.narrow_defeats += 1;
        }
        if record.goal_difference <= -BIG_MARGIN {
            self.heavy_defeats += 1;
        }
        self
    }

    fn into_summary(self) -> MetricsSummary {
        if self.total == 0 {
            return MetricsSummary::Empty;
        }
        let total = self.total as f64;
        let rate = |count: usize| count as f64 / total * 100.0;
        MetricsSummary::Summary(Metrics {
            total_matches: self.total,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            win_rate: rate(self.wins),
            draw_rate: rate(self.draws),
            loss_rate: rate(self.losses),
            goals_scored: self.goals_scored,
            goals_conceded: self.goals_conceded,
            avg_goals_scored: self.goals_scored as f64 / total,
            avg_goals_conceded: self.goals_conceded as f64 / total,
            goal_difference_total: self.goal_difference,
            avg_goal_difference: self.goal_difference as f64 / total,
            clean_sheets: self.clean_sheets,
            big_wins: self.big_wins,
            narrow_wins: self.narrow_wins,
            narrow_defeats: self.narrow_defeats,
            heavy_defeats: self.heavy_defeats,
        })
    }
}

/// Aggregate any subset of matches into a [`MetricsSummary`].
///
/// Works the same for the whole history, a filtered period or a single
/// opponent; an empty subset yields [`MetricsSummary::Empty`].
pub fn summarize<'a, I>(matches: I) -> MetricsSummary
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    matches
        .into_iter()
        .fold(Tally::default(), Tally::add)
        .into_summary()
}

/// Percentage of matches won, `None` for an empty subset.
pub fn win_rate<'a, I>(matches: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    summarize(matches).as_metrics().map(|m| m.win_rate)
}

/// Home win rate minus away win rate, in percentage points.
///
/// Returns 0 when the subject has no home matches or no away matches: a
/// missing side is treated as parity.
pub fn home_advantage<'a, I>(matches: I) -> f64
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    let (home, away): (Vec<_>, Vec<_>) = matches.into_iter().partition(|m| m.is_home);
    match (win_rate(home), win_rate(away)) {
        (Some(home), Some(away)) => home - away,
        _ => 0.0,
    }
}
