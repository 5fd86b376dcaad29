use std::path::PathBuf;

/// All errors that can occur while loading and preparing match data.
///
/// Row-level data problems (bad dates, missing scores) are not errors: the
/// normalizer drops those rows and logs them.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    /// The match results file does not exist.
    #[error("match file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// The match results file exists but could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The header row of the file could not be parsed as CSV.
    #[error("failed to parse csv header in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// One or more required columns are absent from the header row.
    #[error("{} is missing required columns: {}", path.display(), columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// No row in the input names the subject team on either side.
    #[error("no matches found for team {team:?}")]
    NoSubjectData { team: String },

    /// The subject team name is blank after trimming.
    #[error("subject team name is empty")]
    EmptySubject,
}

impl StatsError {
    /// Whether a caller should substitute the synthetic sample dataset.
    pub fn is_recoverable_by_sample(&self) -> bool {
        matches!(
            self,
            StatsError::MissingFile { .. }
                | StatsError::MissingColumns { .. }
                | StatsError::NoSubjectData { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
