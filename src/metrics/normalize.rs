use chrono::Datelike;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::error::{Result, StatsError};
use crate::loader::{clean_cell, parse_date, parse_flag, parse_score};
use crate::model::{MatchResult, NormalizedMatch, RawMatch};

/// Comparison key for team names: trimmed and lowercased.
pub(crate) fn team_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Reorient every row involving `subject` to the subject's perspective.
///
/// Fails with [`StatsError::NoSubjectData`] when no row names the subject
/// team at all. Rows that do name it but carry an unparseable date, a
/// missing score, or the subject on both sides are dropped, so the result
/// may still be empty.
#[instrument(skip(rows, friendly_label), fields(row_count = rows.len()))]
pub fn normalize_matches(
    rows: &[RawMatch],
    subject: &str,
    friendly_label: &str,
) -> Result<Vec<NormalizedMatch>> {
    let subject_key = team_key(subject);
    if subject_key.is_empty() {
        return Err(StatsError::EmptySubject);
    }

    let involved = rows
        .iter()
        .filter(|row| {
            team_key(&row.home_team) == subject_key || team_key(&row.away_team) == subject_key
        })
        .collect_vec();
    if involved.is_empty() {
        return Err(StatsError::NoSubjectData {
            team: subject.trim().to_string(),
        });
    }

    let matches = involved
        .iter()
        .filter_map(|row| normalize_row(row, &subject_key, friendly_label))
        .collect_vec();

    debug!(
        involved = involved.len(),
        kept = matches.len(),
        dropped = involved.len() - matches.len(),
        "normalized subject matches"
    );
    Ok(matches)
}

fn normalize_row(
    row: &RawMatch,
    subject_key: &str,
    friendly_label: &str,
) -> Option<NormalizedMatch> {
    let is_home = team_key(&row.home_team) == subject_key;
    if is_home && team_key(&row.away_team) == subject_key {
        warn!(date = %row.date, "dropping match with the subject team on both sides");
        return None;
    }

    let Some(date) = parse_date(&row.date) else {
        debug!(date = %row.date, "dropping row with unparseable date");
        return None;
    };
    let home_score = clean_cell(row.home_score.as_deref()).and_then(parse_score);
    let away_score = clean_cell(row.away_score.as_deref()).and_then(parse_score);
    let (Some(home_score), Some(away_score)) = (home_score, away_score) else {
        debug!(%date, "dropping row with missing score");
        return None;
    };

    let (subject_score, opponent_score, opponent) = if is_home {
        (home_score, away_score, &row.away_team)
    } else {
        (away_score, home_score, &row.home_team)
    };

    Some(NormalizedMatch {
        date,
        year: date.year(),
        month: date.month(),
        is_home,
        neutral: parse_flag(row.neutral.as_deref()),
        subject_score,
        opponent_score,
        opponent: opponent.trim().to_string(),
        competition: clean_cell(row.tournament.as_deref())
            .unwrap_or(friendly_label)
            .to_string(),
        city: clean_cell(row.city.as_deref()).map(str::to_string),
        country: clean_cell(row.country.as_deref()).map(str::to_string),
        result: MatchResult::from_scores(subject_score, opponent_score),
        goal_difference: i64::from(subject_score) - i64::from(opponent_score),
    })
}
