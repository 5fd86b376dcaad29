use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

/// Team analysed when none is configured.
pub const DEFAULT_SUBJECT_TEAM: &str = "France";
/// Competition label for rows without a tournament.
pub const FRIENDLY_COMPETITION: &str = "Friendly";
/// Results file read relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/results.csv";

/// Rolling window used by the long-run trend chart.
pub const DEFAULT_TREND_WINDOW: usize = 10;
/// Rolling window used by the momentum chart.
pub const MOMENTUM_WINDOW: usize = 8;
/// Minimum head-to-head count for an opponent to be listed.
pub const DEFAULT_MIN_MATCHES: usize = 3;
/// Below this many matches momentum analysis is not meaningful.
pub const MOMENTUM_MIN_MATCHES: usize = 15;
/// Seasons counted as "recent" before the reference year.
pub const RECENT_YEARS: i32 = 2;

/// Seed of the synthetic dataset used when no real data is available.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;
/// Number of matches in the synthetic dataset.
pub const SAMPLE_MATCH_COUNT: usize = 300;

/// Overrides the subject team.
pub const ENV_SUBJECT: &str = "TEAM_STATS_SUBJECT";
/// Overrides the results file path.
pub const ENV_DATA_PATH: &str = "TEAM_STATS_DATA_PATH";
/// Overrides the sample seed; values that are not a `u64` are ignored.
pub const ENV_SAMPLE_SEED: &str = "TEAM_STATS_SAMPLE_SEED";

/// Settings for building a [`MatchDataset`](crate::MatchDataset).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub subject_team: String,
    pub data_path: PathBuf,
    /// Competition label used when a row has none.
    pub friendly_label: String,
    pub sample_seed: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            subject_team: DEFAULT_SUBJECT_TEAM.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            friendly_label: FRIENDLY_COMPETITION.to_string(),
            sample_seed: DEFAULT_SAMPLE_SEED,
        }
    }
}

impl StatsConfig {
    /// Defaults overridden by `TEAM_STATS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(subject) = lookup(ENV_SUBJECT).filter(|s| !s.trim().is_empty()) {
            config.subject_team = subject.trim().to_string();
        }
        if let Some(path) = lookup(ENV_DATA_PATH).filter(|s| !s.trim().is_empty()) {
            config.data_path = PathBuf::from(path.trim());
        }
        if let Some(seed) = lookup(ENV_SAMPLE_SEED) {
            match seed.trim().parse() {
                Ok(seed) => config.sample_seed = seed,
                Err(e) => warn!(value = %seed, error = %e, "ignoring invalid sample seed"),
            }
        }
        config
    }

    /// Set the team whose matches are analysed.
    pub fn with_subject(mut self, subject_team: impl Into<String>) -> Self {
        self.subject_team = subject_team.into();
        self
    }

    /// Set the results file to load.
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Set the seed used when falling back to synthetic data.
    pub fn with_sample_seed(mut self, sample_seed: u64) -> Self {
        self.sample_seed = sample_seed;
        self
    }
}
