use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;
use strum_macros::EnumString;

/// Outcome of a match from the subject team's point of view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn from_scores(subject_score: u32, opponent_score: u32) -> Self {
        match subject_score.cmp(&opponent_score) {
            Ordering::Greater => MatchResult::Win,
            Ordering::Less => MatchResult::Loss,
            Ordering::Equal => MatchResult::Draw,
        }
    }

    /// League points: 3 for a win, 1 for a draw, 0 for a loss.
    pub fn points(self) -> u32 {
        match self {
            MatchResult::Win => 3,
            MatchResult::Draw => 1,
            MatchResult::Loss => 0,
        }
    }
}

/// Where the subject team played.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
pub enum Venue {
    Home,
    Away,
    Neutral,
}

/// A single match reoriented to the subject team's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedMatch {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub is_home: bool,
    pub neutral: bool,
    pub subject_score: u32,
    pub opponent_score: u32,
    pub opponent: String,
    pub competition: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub result: MatchResult,
    pub goal_difference: i64,
}

impl NormalizedMatch {
    pub fn venue(&self) -> Venue {
        match (self.neutral, self.is_home) {
            (true, _) => Venue::Neutral,
            (false, true) => Venue::Home,
            (false, false) => Venue::Away,
        }
    }

    pub fn points(&self) -> u32 {
        self.result.points()
    }

    pub fn is_clean_sheet(&self) -> bool {
        self.opponent_score == 0
    }
}
