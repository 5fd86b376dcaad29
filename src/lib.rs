pub use config::StatsConfig;
pub use dataset::{DataSource, MatchDataset};
pub use error::{Result, StatsError};
pub use metrics::MatchFilter;
pub use model::*;

pub mod config;
mod dataset;
pub mod error;
pub mod loader;
pub mod metrics;
mod model;
