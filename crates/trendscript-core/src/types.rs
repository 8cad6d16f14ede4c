use serde::{Deserialize, Serialize};

use crate::trends::TrendSet;

/// Raw trend data gathered for one keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendsData {
    pub category_trends: TrendSet,
    pub global_trends: Vec<String>,
}

/// Instruction sentence for the script writer plus the trends it draws on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViralAngle {
    pub viral_angle: String,
    pub selected_trends: Vec<String>,
}

impl ViralAngle {
    /// Angle used when no trend candidates exist: the idea itself, no trends.
    #[must_use]
    pub fn passthrough(original_idea: &str) -> Self {
        Self {
            viral_angle: original_idea.to_string(),
            selected_trends: Vec::new(),
        }
    }
}

/// Everything produced by one full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub original_idea: String,
    pub keyword: String,
    pub viral_angle: String,
    pub selected_trends: Vec<String>,
    pub script: String,
    pub trends_data: TrendsData,
}

/// One discrete step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    ExtractKeyword,
    FetchTrends,
    GenerateViralAngle,
    GenerateScript,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::ExtractKeyword => "extract-keyword",
            Phase::FetchTrends => "fetch-trends",
            Phase::GenerateViralAngle => "generate-viral-angle",
            Phase::GenerateScript => "generate-script",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
