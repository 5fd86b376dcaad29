pub mod sample;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::error::{Result, StatsError};
use crate::model::RawMatch;

pub const REQUIRED_COLUMNS: [&str; 9] = [
    "date",
    "home_team",
    "away_team",
    "home_score",
    "away_score",
    "tournament",
    "city",
    "country",
    "neutral",
];

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Read every row of a match results file.
///
/// Rows that cannot be deserialized are skipped; cell contents are not
/// validated here.
#[instrument]
pub fn read_raw_matches(path: &Path) -> Result<Vec<RawMatch>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StatsError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => StatsError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse_raw_matches(file, path)
}

pub(crate) fn parse_raw_matches<R: Read>(input: R, path: &Path) -> Result<Vec<RawMatch>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| StatsError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect_vec();
    if !missing.is_empty() {
        return Err(StatsError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let mut matches = Vec::new();
    for (index, row) in reader.deserialize::<RawMatch>().enumerate() {
        match row {
            Ok(row) => matches.push(row),
            Err(e) => warn!(row = index + 1, error = %e, "skipping unparsable match row"),
        }
    }

    debug!(count = matches.len(), "read match rows");
    Ok(matches)
}

/// Trimmed cell content, `None` when absent or blank.
pub(crate) fn clean_cell(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|c| !c.is_empty())
}

/// Parse a score cell; integer-valued floats such as `"2.0"` are accepted.
pub(crate) fn parse_score(cell: &str) -> Option<u32> {
    let cell = cell.trim();
    if let Ok(score) = cell.parse::<u32>() {
        return Some(score);
    }
    let value: f64 = cell.parse().ok()?;
    let integral = value.is_finite() && value.fract() == 0.0;
    (integral && (0.0..=f64::from(u32::MAX)).contains(&value)).then_some(value as u32)
}

/// Parse an ISO date, ignoring a trailing time component if present.
pub(crate) fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    NaiveDate::parse_from_str(cell, DATE_FORMAT).ok().or_else(|| {
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(cell, format).ok())
            .map(|dt| dt.date())
    })
}

pub(crate) fn parse_flag(cell: Option<&str>) -> bool {
    clean_cell(cell).is_some_and(|c| {
        matches!(
            c.to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "y"
        )
    })
}
