use itertools::Itertools;

use crate::model::{NormalizedMatch, TrendRecord};

/// Chronological matches with trailing rolling means of points and goals.
///
/// The mean at position `i` covers the `min(window, i + 1)` matches ending
/// at `i`, so there is no undefined leading segment. Matches on the same
/// date keep their input order.
///
/// # Panics
///
/// Panics if `window` is 0.
pub fn trend<'a, I>(matches: I, window: usize) -> Vec<TrendRecord>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    assert!(window > 0, "rolling window must be at least 1");

    let sorted = matches.into_iter().sorted_by_key(|m| m.date).collect_vec();
    let mut points = 0u64;
    let mut scored = 0u64;
    let mut conceded = 0u64;

    sorted
        .iter()
        .enumerate()
        .map(|(i, record)| {
            points += u64::from(record.points());
            scored += u64::from(record.subject_score);
            conceded += u64::from(record.opponent_score);
            if i >= window {
                let expired = sorted[i - window];
                points -= u64::from(expired.points());
                scored -= u64::from(expired.subject_score);
                conceded -= u64::from(expired.opponent_score);
            }
            let span = (i + 1).min(window) as f64;
            TrendRecord {
                record: (*record).clone(),
                points: record.points(),
                rolling_points: points as f64 / span,
                rolling_goals_scored: scored as f64 / span,
                rolling_goals_conceded: conceded as f64 / span,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate::tests::{assert_close, record};

    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    #[test]
    fn test_rolling_points_window_three() {
        // W, L, D, W, W
        let matches = vec![
            record("2021-01-01", true, 2, 0),
            record("2021-02-01", true, 0, 1),
            record("2021-03-01", true, 1, 1),
            record("2021-04-01", true, 3, 2),
            record("2021-05-01", true, 1, 0),
        ];
        let records = trend(&matches, 3);
        let points = records.iter().map(|r| r.points).collect_vec();
        assert_eq!(points, vec![3, 0, 1, 3, 3]);
        let rolling = records.iter().map(|r| round2(r.rolling_points)).collect_vec();
        assert_eq!(rolling, vec![3.0, 1.5, 1.33, 1.33, 2.33]);
    }

    #[test]
    fn test_rolling_goals() {
        let matches = vec![
            record("2021-01-01", true, 2, 0),
            record("2021-01-02", true, 0, 4),
            record("2021-01-03", true, 1, 1),
        ];
        let records = trend(&matches, 2);
        assert_close(records[0].rolling_goals_scored, 2.0);
        assert_close(records[1].rolling_goals_scored, 1.0);
        assert_close(records[1].rolling_goals_conceded, 2.0);
        assert_close(records[2].rolling_goals_scored, 0.5);
        assert_close(records[2].rolling_goals_conceded, 2.5);
    }

    #[test]
    fn test_window_matches_direct_mean() {
        let matches = (1..=12u32)
            .map(|day| record(&format!("2022-03-{day:02}"), day % 2 == 0, day % 4, day % 3))
            .collect_vec();
        for window in [1, 3, 8, 10, 20] {
            let records = trend(&matches, window);
            for (i, r) in records.iter().enumerate() {
                let start = (i + 1).saturating_sub(window);
                let slice = &records[start..=i];
                let expected =
                    slice.iter().map(|t| f64::from(t.points)).sum::<f64>() / slice.len() as f64;
                assert_close(r.rolling_points, expected);
            }
        }
    }

    #[test]
    fn test_sorted_by_date_and_stable_on_ties() {
        let mut first_same_day = record("2021-06-01", true, 1, 0);
        first_same_day.opponent = "Sweden".to_string();
        let mut second_same_day = record("2021-06-01", true, 0, 0);
        second_same_day.opponent = "Norway".to_string();
        let matches = vec![
            record("2021-09-01", false, 0, 1),
            first_same_day,
            second_same_day,
            record("2021-01-01", true, 2, 2),
        ];
        let records = trend(&matches, 10);
        let opponents = records.iter().map(|r| r.record.opponent.as_str()).collect_vec();
        assert_eq!(opponents, vec!["Germany", "Sweden", "Norway", "Germany"]);
        assert!(records.windows(2).all(|w| w[0].record.date <= w[1].record.date));
    }

    #[test]
    fn test_large_scores_do_not_overflow_window_sums() {
        let matches = vec![
            record("2021-01-01", true, 4_000_000_000, 0),
            record("2021-01-02", true, 4_000_000_000, 1),
            record("2021-01-03", true, 0, 4_000_000_000),
        ];
        let records = trend(&matches, 2);
        assert_close(records[1].rolling_goals_scored, 4_000_000_000.0);
        assert_close(records[2].rolling_goals_scored, 2_000_000_000.0);
        assert_close(records[2].rolling_goals_conceded, 2_000_000_000.5);
    }

    #[test]
    fn test_empty_input_yields_empty_trend() {
        assert!(trend(&[] as &[NormalizedMatch], 8).is_empty());
    }

    #[test]
    fn test_trend_is_restartable() {
        let matches = vec![
            record("2021-01-01", true, 2, 0),
            record("2021-02-01", false, 1, 1),
        ];
        assert_eq!(trend(&matches, 8), trend(&matches, 8));
    }

    #[test]
    #[should_panic(expected = "rolling window must be at least 1")]
    fn test_zero_window_panics() {
        let matches = vec![record("2021-01-01", true, 2, 0)];
        trend(&matches, 0);
    }
}
