use std::ops::RangeInclusive;
use std::path::PathBuf;

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::config::StatsConfig;
use crate::error::Result;
use crate::loader::{self, sample};
use crate::metrics::{self, MatchFilter};
use crate::model::*;

/// Where the matches of a [`MatchDataset`] came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DataSource {
    File(PathBuf),
    Sample { seed: u64 },
}

/// The normalized match history of one team, built once and shared.
///
/// `MatchDataset` is the single place data gets loaded; every analysis is a
/// read-only view over the records it holds.
///
/// # Examples
///
/// ```no_run
/// # fn example() -> team_stats::Result<()> {
/// use team_stats::{MatchDataset, StatsConfig};
///
/// let dataset = MatchDataset::load_or_sample(&StatsConfig::from_env())?;
/// if let Some(metrics) = dataset.summary().as_metrics() {
///     println!("{} matches, {:.1}% won", metrics.total_matches, metrics.win_rate);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MatchDataset {
    subject: String,
    source: DataSource,
    matches: Vec<NormalizedMatch>,
}

impl MatchDataset {
    /// Normalize already-read rows for `subject`.
    pub fn from_raw(
        subject: &str,
        rows: &[RawMatch],
        config: &StatsConfig,
        source: DataSource,
    ) -> Result<Self> {
        let matches = metrics::normalize_matches(rows, subject, &config.friendly_label)?;
        Ok(Self {
            subject: subject.trim().to_string(),
            source,
            matches,
        })
    }

    /// Load the configured results file. Never falls back to sample data.
    #[instrument(skip(config), fields(path = %config.data_path.display(), subject = %config.subject_team))]
    pub fn load(config: &StatsConfig) -> Result<Self> {
        let rows = loader::read_raw_matches(&config.data_path)?;
        let dataset = Self::from_raw(
            &config.subject_team,
            &rows,
            config,
            DataSource::File(config.data_path.clone()),
        )?;
        info!(matches = dataset.matches.len(), "loaded match history");
        Ok(dataset)
    }

    /// Build the synthetic dataset for the configured team and seed.
    #[instrument(skip(config), fields(seed = config.sample_seed, subject = %config.subject_team))]
    pub fn sample(config: &StatsConfig) -> Result<Self> {
        let rows = sample::generate_sample(&config.subject_team, config.sample_seed);
        Self::from_raw(
            &config.subject_team,
            &rows,
            config,
            DataSource::Sample {
                seed: config.sample_seed,
            },
        )
    }

    /// [`load`](Self::load), substituting [`sample`](Self::sample) when the
    /// file is absent, lacks required columns or has no match for the team.
    pub fn load_or_sample(config: &StatsConfig) -> Result<Self> {
        match Self::load(config) {
            Err(e) if e.is_recoverable_by_sample() => {
                warn!(error = %e, "falling back to sample data");
                Self::sample(config)
            }
            other => other,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn matches(&self) -> &[NormalizedMatch] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Range of seasons covered, `None` when there are no matches.
    pub fn years(&self) -> Option<RangeInclusive<i32>> {
        match self.matches.iter().map(|m| m.year).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(year) => Some(year..=year),
            MinMaxResult::MinMax(min, max) => Some(min..=max),
        }
    }

    /// Distinct competitions in first-seen order.
    pub fn competitions(&self) -> Vec<&str> {
        self.matches
            .iter()
            .map(|m| m.competition.as_str())
            .unique()
            .collect()
    }

    pub fn summary(&self) -> MetricsSummary {
        metrics::summarize(&self.matches)
    }

    pub fn home_advantage(&self) -> f64 {
        metrics::home_advantage(&self.matches)
    }

    pub fn by_opponent(&self, min_matches: usize) -> Vec<GroupSummary<String>> {
        metrics::by_opponent(&self.matches, min_matches)
    }

    pub fn grouped(&self, key: GroupKey, min_matches: usize) -> Vec<GroupSummary<String>> {
        metrics::group_by_key(&self.matches, key, min_matches)
    }

    /// See [`metrics::trend`]; panics if `window` is 0.
    pub fn trend(&self, window: usize) -> Vec<TrendRecord> {
        metrics::trend(&self.matches, window)
    }

    pub fn filter(&self, filter: &MatchFilter) -> Vec<&NormalizedMatch> {
        filter.apply(&self.matches)
    }

    pub fn latest(&self, n: usize) -> Vec<&NormalizedMatch> {
        metrics::latest(&self.matches, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;

    fn rows() -> Vec<RawMatch> {
        vec![
            RawMatch::new("2021-01-01", "France", "Germany", Some(2), Some(1))
                .with_tournament("Friendly"),
            RawMatch::new("2021-02-01", "Spain", "France", Some(3), Some(1))
                .with_tournament("UEFA European Championship"),
            RawMatch::new("2022-04-01", "France", "Germany", Some(0), Some(0)),
            RawMatch::new("2019-06-07", "France", "Korea Republic", Some(4), Some(0))
                .with_tournament("FIFA World Cup"),
        ]
    }

    fn dataset() -> MatchDataset {
        MatchDataset::from_raw(
            "France",
            &rows(),
            &StatsConfig::default(),
            DataSource::Sample { seed: 0 },
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let dataset = dataset();
        assert_eq!(dataset.subject(), "France");
        assert_eq!(dataset.matches().len(), 4);
        assert_eq!(dataset.years(), Some(2019..=2022));
        assert_eq!(
            dataset.competitions(),
            vec!["Friendly", "UEFA European Championship", "FIFA World Cup"]
        );
    }

    #[test]
    fn test_delegated_operations() {
        let dataset = dataset();
        let summary = dataset.summary().into_metrics().unwrap();
        assert_eq!(summary.total_matches, 4);
        assert_eq!(summary.clean_sheets, 2);

        let opponents = dataset.by_opponent(2);
        assert_eq!(opponents.len(), 1);
        assert_eq!(opponents[0].key, "Germany");

        let trend = dataset.trend(8);
        assert_eq!(trend.len(), 4);
        assert_eq!(trend[0].record.opponent, "Korea Republic");

        let filtered = dataset.filter(&MatchFilter::default().with_years(2021, 2021));
        assert_eq!(filtered.len(), 2);
        assert_eq!(dataset.latest(1)[0].year, 2022);
    }

    #[test]
    fn test_sample_source() {
        let config = StatsConfig::default().with_sample_seed(9);
        let dataset = MatchDataset::sample(&config).unwrap();
        assert_eq!(dataset.source(), &DataSource::Sample { seed: 9 });
        assert!(!dataset.is_empty());
        assert!(dataset.summary().as_metrics().is_some());
    }

    #[test]
    fn test_load_or_sample_falls_back_for_missing_file() {
        let config = StatsConfig::default().with_data_path("/nonexistent/results.csv");
        assert!(matches!(
            MatchDataset::load(&config),
            Err(StatsError::MissingFile { .. })
        ));
        let dataset = MatchDataset::load_or_sample(&config).unwrap();
        assert!(matches!(dataset.source(), DataSource::Sample { .. }));
    }
}
