//! Derived insights built on top of the aggregator: recent form, momentum,
//! seasonality, projections, score patterns and benchmark comparisons.

use std::collections::BTreeMap;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::metrics::aggregate::{summarize, win_rate};
use crate::metrics::filter::latest;
use crate::model::{
    month_name, Assessment, BenchmarkGap, BenchmarkTier, GapPriority, MatchResult, Metrics,
    Momentum, MonthlyPerformance, NormalizedMatch, PeriodComparison, Projection,
    ProjectionDirection, ScoreDistribution, SeasonPreference, SeasonalPattern, Streak,
    Strength, TacticalProfile, TacticalTrait, Targets, TrendDirection, Weakness,
};

const MOMENTUM_LOOKBACK: usize = 10;
const FORM_MATCHES: usize = 5;
const POINTS_TREND_THRESHOLD: f64 = 0.3;

const SUMMER_MONTHS: [u32; 3] = [6, 7, 8];
const WINTER_MONTHS: [u32; 3] = [12, 1, 2];
const SEASON_MARGIN: f64 = 10.0;

const PROJECTION_MIN_MATCHES: usize = 10;
const PROJECTION_THRESHOLD: f64 = 0.1;

const TARGET_WIN_RATE_STEP: f64 = 5.0;
const TARGET_WIN_RATE_CAP: f64 = 75.0;
const TARGET_GOALS_STEP: f64 = 0.2;
const TARGET_CONCEDED_STEP: f64 = 0.1;
const TARGET_CONCEDED_FLOOR: f64 = 0.5;

const CLUTCH_SHARE: f64 = 20.0;
const DOMINANCE_SHARE: f64 = 15.0;
const RESILIENT_SHARE: f64 = 5.0;
const FRAGILE_SHARE: f64 = 15.0;

/// Split into (recent, historical): recent is `year >= reference_year - recent_years`.
pub fn split_recent<'a, I>(
    matches: I,
    reference_year: i32,
    recent_years: i32,
) -> (Vec<&'a NormalizedMatch>, Vec<&'a NormalizedMatch>)
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    let cutoff = reference_year - recent_years;
    matches.into_iter().partition(|m| m.year >= cutoff)
}

/// Compare two periods; `None` unless both contain matches.
pub fn compare_periods<'a, R, H>(recent: R, historical: H) -> Option<PeriodComparison>
where
    R: IntoIterator<Item = &'a NormalizedMatch>,
    H: IntoIterator<Item = &'a NormalizedMatch>,
{
    let recent = summarize(recent).into_metrics()?;
    let historical = summarize(historical).into_metrics()?;
    Some(PeriodComparison {
        win_rate_delta: recent.win_rate - historical.win_rate,
        goals_scored_delta: recent.avg_goals_scored - historical.avg_goals_scored,
        goals_conceded_delta: historical.avg_goals_conceded - recent.avg_goals_conceded,
        recent,
        historical,
    })
}

fn mean_points(matches: &[&NormalizedMatch]) -> f64 {
    let total: u32 = matches.iter().map(|m| m.points()).sum();
    f64::from(total) / matches.len() as f64
}

/// Streak and short-term form over the last ten matches.
///
/// `None` when fewer than `min_matches` matches are available.
pub fn momentum<'a, I>(matches: I, min_matches: usize) -> Option<Momentum>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    let all = matches.into_iter().collect_vec();
    if all.len() < min_matches {
        return None;
    }

    let recent = latest(all, MOMENTUM_LOOKBACK);
    let last = recent.last()?;
    let streak = Streak {
        result: last.result,
        length: recent
            .iter()
            .rev()
            .take_while(|m| m.result == last.result)
            .count(),
    };

    let last_five = &recent[recent.len().saturating_sub(FORM_MATCHES)..];
    let wins_last_five = last_five
        .iter()
        .filter(|m| m.result == MatchResult::Win)
        .count();

    let points_trend = (recent.len() >= FORM_MATCHES).then(|| {
        let recent_avg = mean_points(last_five);
        let previous_avg = if recent.len() >= MOMENTUM_LOOKBACK {
            mean_points(&recent[..FORM_MATCHES])
        } else {
            recent_avg
        };
        recent_avg - previous_avg
    });
    let direction = points_trend.map(|trend| {
        if trend > POINTS_TREND_THRESHOLD {
            TrendDirection::Rising
        } else if trend < -POINTS_TREND_THRESHOLD {
            TrendDirection::Falling
        } else {
            TrendDirection::Steady
        }
    });

    Some(Momentum {
        streak,
        wins_last_five,
        form_percentage: wins_last_five as f64 * (100.0 / FORM_MATCHES as f64),
        points_trend,
        direction,
    })
}

/// Per-calendar-month performance with best/worst month and season lean.
pub fn seasonal_pattern<'a, I>(matches: I) -> Option<SeasonalPattern>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    let mut by_month: BTreeMap<u32, Vec<&NormalizedMatch>> = BTreeMap::new();
    for record in matches {
        by_month.entry(record.month).or_default().push(record);
    }

    let months = by_month
        .into_iter()
        .filter_map(|(month, group)| {
            summarize(group).into_metrics().map(|m| MonthlyPerformance {
                month,
                month_name: month_name(month),
                matches: m.total_matches,
                win_rate: m.win_rate,
                avg_goals_scored: m.avg_goals_scored,
                avg_goals_conceded: m.avg_goals_conceded,
            })
        })
        .collect_vec();

    let first = months.first()?;
    let (mut best, mut worst) = (first, first);
    for month in &months[1..] {
        if month.win_rate > best.win_rate {
            best = month;
        }
        if month.win_rate < worst.win_rate {
            worst = month;
        }
    }

    let season_rate = |season: &[u32]| {
        let rates = months
            .iter()
            .filter(|m| season.contains(&m.month))
            .map(|m| m.win_rate)
            .collect_vec();
        (!rates.is_empty()).then(|| rates.iter().sum::<f64>() / rates.len() as f64)
    };
    let preference = match (season_rate(&SUMMER_MONTHS), season_rate(&WINTER_MONTHS)) {
        (Some(summer), Some(winter)) if summer > winter + SEASON_MARGIN => {
            Some(SeasonPreference::Summer)
        }
        (Some(summer), Some(winter)) if winter > summer + SEASON_MARGIN => {
            Some(SeasonPreference::Winter)
        }
        (Some(_), Some(_)) => Some(SeasonPreference::Balanced),
        _ => None,
    };

    Some(SeasonalPattern {
        best_month: best.month,
        worst_month: worst.month,
        months,
        preference,
    })
}

/// Extrapolate the win rate from the change between the older and newer half.
///
/// Needs at least ten matches.
pub fn project_win_rate<'a, I>(matches: I) -> Option<Projection>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    let sorted = matches.into_iter().sorted_by_key(|m| m.date).collect_vec();
    if sorted.len() < PROJECTION_MIN_MATCHES {
        return None;
    }

    let half = sorted.len() / 2;
    let older = win_rate(sorted[..half].iter().copied())?;
    let newer = win_rate(sorted[sorted.len() - half..].iter().copied())?;
    let current_win_rate = win_rate(sorted.iter().copied())?;
    let change = (newer - older) / 100.0;
    let project = |factor: f64| (current_win_rate + change * factor).clamp(0.0, 100.0);

    let direction = if change > PROJECTION_THRESHOLD {
        ProjectionDirection::Improving
    } else if change < -PROJECTION_THRESHOLD {
        ProjectionDirection::Declining
    } else {
        ProjectionDirection::Stable
    };

    Some(Projection {
        current_win_rate,
        change,
        in_three_months: project(50.0),
        in_six_months: project(100.0),
        in_twelve_months: project(200.0),
        direction,
    })
}

/// Modest improvement goals for the next period.
pub fn targets(metrics: &Metrics) -> Targets {
    Targets {
        win_rate: (metrics.win_rate + TARGET_WIN_RATE_STEP).min(TARGET_WIN_RATE_CAP),
        avg_goals_scored: metrics.avg_goals_scored + TARGET_GOALS_STEP,
        avg_goals_conceded: (metrics.avg_goals_conceded - TARGET_CONCEDED_STEP)
            .max(TARGET_CONCEDED_FLOOR),
    }
}

/// Tiers whose win rate is above the current one, with the size of the gap.
pub fn benchmark_gaps(metrics: &Metrics) -> Vec<BenchmarkGap> {
    BenchmarkTier::iter()
        .filter_map(|tier| {
            let gap = tier.win_rate() - metrics.win_rate;
            (gap > 0.0).then(|| BenchmarkGap {
                tier,
                win_rate_gap: gap,
                wins_needed_per_20: (gap / 100.0 * 20.0).round() as u32,
                priority: if gap > 20.0 {
                    GapPriority::High
                } else if gap > 10.0 {
                    GapPriority::Moderate
                } else {
                    GapPriority::Low
                },
            })
        })
        .collect()
}

/// Flag strengths and weaknesses from headline metrics.
pub fn assess(metrics: &Metrics, home_advantage: f64) -> Assessment {
    let mut assessment = Assessment::default();

    let strengths = [
        (metrics.win_rate > 55.0, Strength::HighWinRate),
        (metrics.avg_goals_scored > 1.7, Strength::PotentAttack),
        (metrics.avg_goals_conceded < 1.2, Strength::SolidDefence),
        (home_advantage > 10.0, Strength::StrongHomeAdvantage),
        (metrics.clean_sheet_share() > 0.3, Strength::RegularCleanSheets),
    ];
    let weaknesses = [
        (metrics.win_rate < 45.0, Weakness::LowWinRate),
        (metrics.avg_goals_scored < 1.3, Weakness::BluntAttack),
        (metrics.avg_goals_conceded > 1.5, Weakness::LeakyDefence),
        (home_advantage < 0.0, Weakness::NoHomeAdvantage),
        (metrics.big_win_share() < 0.1, Weakness::FewConvincingWins),
    ];

    assessment.strengths = strengths
        .into_iter()
        .filter_map(|(hit, s)| hit.then_some(s))
        .collect();
    assessment.weaknesses = weaknesses
        .into_iter()
        .filter_map(|(hit, w)| hit.then_some(w))
        .collect();
    assessment
}

/// Frequency of each goals-scored, goals-conceded and goal-difference value.
pub fn score_distribution<'a, I>(matches: I) -> ScoreDistribution
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    let mut distribution = ScoreDistribution::default();
    for record in matches {
        *distribution
            .goals_scored
            .entry(record.subject_score)
            .or_default() += 1;
        *distribution
            .goals_conceded
            .entry(record.opponent_score)
            .or_default() += 1;
        *distribution
            .goal_difference
            .entry(record.goal_difference)
            .or_default() += 1;
    }
    distribution
}

/// Read the margin counters as a tactical profile.
pub fn tactical_profile(metrics: &Metrics) -> TacticalProfile {
    let share = |count: usize| count as f64 / metrics.total_matches as f64 * 100.0;
    let clutch_share = share(metrics.narrow_wins);
    let dominance_share = share(metrics.big_wins);
    let fragility_share = share(metrics.heavy_defeats);

    let traits = [
        (clutch_share > CLUTCH_SHARE, TacticalTrait::ClutchWinner),
        (dominance_share > DOMINANCE_SHARE, TacticalTrait::Dominant),
        (fragility_share < RESILIENT_SHARE, TacticalTrait::Resilient),
        (fragility_share > FRAGILE_SHARE, TacticalTrait::Fragile),
    ]
    .into_iter()
    .filter_map(|(hit, t)| hit.then_some(t))
    .collect();

    TacticalProfile {
        narrow_wins: metrics.narrow_wins,
        big_wins: metrics.big_wins,
        narrow_defeats: metrics.narrow_defeats,
        heavy_defeats: metrics.heavy_defeats,
        clutch_share,
        dominance_share,
        fragility_share,
        traits,
    }
}
