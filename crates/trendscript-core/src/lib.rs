//! Shared types, configuration, and trend processing for trendscript.
//!
//! The trend parser turns a `SerpAPI` related-topics CSV export into a
//! [`TrendSet`]; the aggregator merges ranked trend lists into the capped,
//! case-insensitively deduplicated [`TrendCandidates`] handed to the
//! viral-angle generator.

pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod trends;
pub mod types;

use thiserror::Error;

pub use aggregate::{aggregate_candidates, TrendCandidates, DEFAULT_CANDIDATE_CAP};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use trends::{parse_related_topics, TrendParser, TrendSet, DEFAULT_VALUE_SUFFIX_PATTERN};
pub use types::{Phase, PipelineResult, TrendsData, ViralAngle};

/// Category id used when a request does not name one (Google Trends "Food & Drink").
pub const DEFAULT_CATEGORY_ID: &str = "71";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
