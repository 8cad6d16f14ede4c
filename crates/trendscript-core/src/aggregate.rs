//! Merging of ranked trend lists into one candidate list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::trends::TrendSet;

/// Maximum number of candidates handed to the viral-angle generator.
pub const DEFAULT_CANDIDATE_CAP: usize = 25;

/// Ordered trend candidates, unique under case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendCandidates(Vec<String>);

impl TrendCandidates {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Merges `sources` (highest priority first) into at most `cap` candidates.
///
/// A trend is kept only the first time its lowercase form is seen, so the
/// output preserves first-occurrence order across the priority-ordered
/// sources.
pub fn aggregate_candidates<'a, I, S>(sources: I, cap: usize) -> TrendCandidates
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for source in sources {
        for trend in source {
            if seen.insert(trend.to_lowercase()) {
                merged.push(trend.clone());
            }
        }
    }

    merged.truncate(cap);
    TrendCandidates(merged)
}

impl TrendSet {
    /// Candidates in priority order: rising, then top, then `global`.
    #[must_use]
    pub fn candidates(&self, global: &[String], cap: usize) -> TrendCandidates {
        aggregate_candidates([&self.rising[..], &self.top[..], global], cap)
    }
}
