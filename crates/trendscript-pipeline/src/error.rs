use thiserror::Error;
use trendscript_core::Phase;
use trendscript_llm::LlmError;
use trendscript_serpapi::SerpApiError;

/// A pipeline step failed; carries the phase it failed in.
#[derive(Debug, Error)]
#[error("{phase} failed: {source}")]
pub struct PipelineError {
    pub phase: Phase,
    #[source]
    pub source: LlmError,
}

impl PipelineError {
    #[must_use]
    pub fn new(phase: Phase, source: LlmError) -> Self {
        Self { phase, source }
    }
}

/// The collaborator clients could not be constructed from configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to build SerpAPI client: {0}")]
    SerpApi(#[from] SerpApiError),

    #[error("failed to build Gemini client: {0}")]
    Llm(#[from] LlmError),

    #[error("invalid trend suffix pattern: {0}")]
    SuffixPattern(#[from] regex::Error),
}
