pub mod aggregate;
pub mod filter;
pub mod grouping;
pub mod insights;
pub mod normalize;
pub mod trend;

pub use aggregate::{home_advantage, summarize, win_rate};
pub use filter::{filter_by_period, latest, MatchFilter};
pub use grouping::{by_opponent, group_by, group_by_key};
pub use insights::{
    assess, benchmark_gaps, compare_periods, momentum, project_win_rate, score_distribution,
    seasonal_pattern, split_recent, tactical_profile, targets,
};
pub use normalize::normalize_matches;
pub use trend::trend;
