use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::NormalizedMatch;

/// Year-range and competition selection applied before any analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFilter {
    /// Inclusive `(start, end)` years.
    pub years: Option<(i32, i32)>,
    /// Empty means every competition.
    pub competitions: Vec<String>,
}

impl MatchFilter {
    pub fn with_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.years = Some((start_year, end_year));
        self
    }

    pub fn with_competitions<S: Into<String>>(
        mut self,
        competitions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.competitions = competitions.into_iter().map(Into::into).collect();
        self
    }

    pub fn matches(&self, record: &NormalizedMatch) -> bool {
        let in_period = self
            .years
            .map_or(true, |(start, end)| (start..=end).contains(&record.year));
        let in_competition = self.competitions.is_empty()
            || self.competitions.iter().any(|c| *c == record.competition);
        in_period && in_competition
    }

    pub fn apply<'a, I>(&self, matches: I) -> Vec<&'a NormalizedMatch>
    where
        I: IntoIterator<Item = &'a NormalizedMatch>,
    {
        matches.into_iter().filter(|m| self.matches(m)).collect()
    }
}

/// Matches played between `start_year` and `end_year`, both inclusive.
pub fn filter_by_period<'a, I>(matches: I, start_year: i32, end_year: i32) -> Vec<&'a NormalizedMatch>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    MatchFilter::default()
        .with_years(start_year, end_year)
        .apply(matches)
}

/// The `n` most recent matches, oldest first.
pub fn latest<'a, I>(matches: I, n: usize) -> Vec<&'a NormalizedMatch>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    let sorted = matches.into_iter().sorted_by_key(|m| m.date).collect_vec();
    let skip = sorted.len().saturating_sub(n);
    sorted.into_iter().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate::tests::record;

    fn in_competition(date: &str, competition: &str) -> NormalizedMatch {
        NormalizedMatch {
            competition: competition.to_string(),
            ..record(date, true, 1, 0)
        }
    }

    #[test]
    fn test_period_is_inclusive() {
        let matches = vec![
            record("2015-12-31", true, 1, 0),
            record("2016-01-01", true, 1, 0),
            record("2020-12-31", true, 1, 0),
            record("2021-01-01", true, 1, 0),
        ];
        let filtered = filter_by_period(&matches, 2016, 2020);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|m| (2016..=2020).contains(&m.year)));
    }

    #[test]
    fn test_competition_filter() {
        let matches = vec![
            in_competition("2019-06-07", "FIFA World Cup"),
            in_competition("2019-04-01", "Friendly"),
            in_competition("2022-07-10", "UEFA European Championship"),
        ];
        let all = MatchFilter::default().apply(&matches);
        assert_eq!(all.len(), 3);

        let filter = MatchFilter::default()
            .with_competitions(["FIFA World Cup", "UEFA European Championship"])
            .with_years(2019, 2019);
        let filtered = filter.apply(&matches);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].competition, "FIFA World Cup");
    }

    #[test]
    fn test_latest_returns_most_recent_in_order() {
        let matches = vec![
            record("2021-03-01", true, 1, 0),
            record("2021-01-01", true, 1, 0),
            record("2021-04-01", true, 1, 0),
            record("2021-02-01", true, 1, 0),
        ];
        let last_two = latest(&matches, 2);
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[0].month, 3);
        assert_eq!(last_two[1].month, 4);
        assert_eq!(latest(&matches, 10).len(), 4);
    }
}
