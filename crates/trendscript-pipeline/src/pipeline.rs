//! Pipeline orchestration.

use trendscript_core::{
    AppConfig, Phase, PipelineResult, TrendCandidates, TrendParser, TrendsData, ViralAngle,
};
use trendscript_llm::{GeminiClient, LlmService};
use trendscript_serpapi::SerpApiClient;

use crate::error::{BuildError, PipelineError};

/// Chains keyword extraction, trend fetching, viral-angle generation, and
/// script writing.
///
/// Holds only read-only clients, so one instance is shared by every request.
#[derive(Clone)]
pub struct Pipeline {
    llm: LlmService,
    serpapi: SerpApiClient,
    candidate_cap: usize,
}

impl Pipeline {
    #[must_use]
    pub fn new(llm: LlmService, serpapi: SerpApiClient, candidate_cap: usize) -> Self {
        Self {
            llm,
            serpapi,
            candidate_cap,
        }
    }

    /// Builds both collaborator clients from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if a client cannot be constructed or the trend
    /// suffix pattern does not compile.
    pub fn from_config(config: &AppConfig) -> Result<Self, BuildError> {
        let parser = TrendParser::with_suffix_pattern(&config.trend_suffix_pattern)?;
        let serpapi = SerpApiClient::with_base_url(
            &config.serpapi_api_key,
            config.request_timeout_secs,
            &config.serpapi_base_url,
        )?
        .with_parser(parser);

        let gemini = GeminiClient::with_base_url(
            &config.gemini_api_key,
            config.request_timeout_secs,
            &config.gemini_base_url,
        )?;
        let llm = LlmService::new(gemini, &config.utility_model, &config.creative_model);

        Ok(Self::new(llm, serpapi, config.candidate_cap))
    }

    /// Extracts the trend search keyword from `video_idea`.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] tagged [`Phase::ExtractKeyword`].
    pub async fn extract_keyword(&self, video_idea: &str) -> Result<String, PipelineError> {
        self.llm
            .extract_keyword(video_idea)
            .await
            .map_err(|e| PipelineError::new(Phase::ExtractKeyword, e))
    }

    /// Fetches category and global trends. Upstream failures yield empty data.
    pub async fn fetch_trends(&self, keyword: &str, category_id: &str) -> TrendsData {
        self.serpapi.fetch_trends(keyword, category_id).await
    }

    /// Merges fetched trends into the capped candidate list.
    #[must_use]
    pub fn candidates(&self, trends: &TrendsData) -> TrendCandidates {
        trends
            .category_trends
            .candidates(&trends.global_trends, self.candidate_cap)
    }

    /// Generates the viral angle for `original_idea` from fetched trends.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] tagged [`Phase::GenerateViralAngle`].
    pub async fn generate_viral_angle(
        &self,
        original_idea: &str,
        trends: &TrendsData,
    ) -> Result<ViralAngle, PipelineError> {
        let candidates = self.candidates(trends);
        self.llm
            .generate_viral_angle(original_idea, &candidates)
            .await
            .map_err(|e| PipelineError::new(Phase::GenerateViralAngle, e))
    }

    /// Writes the script for `viral_angle`.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] tagged [`Phase::GenerateScript`].
    pub async fn generate_script(&self, viral_angle: &str) -> Result<String, PipelineError> {
        self.llm
            .generate_script(viral_angle)
            .await
            .map_err(|e| PipelineError::new(Phase::GenerateScript, e))
    }

    /// Runs every phase in order and collects the results.
    ///
    /// The first failing phase ends the run; nothing from earlier phases is
    /// returned alongside the error.
    ///
    /// # Errors
    ///
    /// Returns the [`PipelineError`] of the phase that failed.
    pub async fn run(
        &self,
        video_idea: &str,
        category_id: &str,
    ) -> Result<PipelineResult, PipelineError> {
        let keyword = self.extract_keyword(video_idea).await.inspect_err(log_failure)?;
        tracing::info!(phase = %Phase::ExtractKeyword, keyword = %keyword, "keyword extracted");

        let trends_data = self.fetch_trends(&keyword, category_id).await;
        tracing::info!(
            phase = %Phase::FetchTrends,
            top = trends_data.category_trends.top.len(),
            rising = trends_data.category_trends.rising.len(),
            global = trends_data.global_trends.len(),
            "trends fetched"
        );

        let angle = self
            .generate_viral_angle(video_idea, &trends_data)
            .await
            .inspect_err(log_failure)?;
        tracing::info!(
            phase = %Phase::GenerateViralAngle,
            selected = angle.selected_trends.len(),
            "viral angle generated"
        );

        let script = self
            .generate_script(&angle.viral_angle)
            .await
            .inspect_err(log_failure)?;
        tracing::info!(phase = %Phase::GenerateScript, "script generated");

        Ok(PipelineResult {
            original_idea: video_idea.to_string(),
            keyword,
            viral_angle: angle.viral_angle,
            selected_trends: angle.selected_trends,
            script,
            trends_data,
        })
    }
}

fn log_failure(err: &PipelineError) {
    tracing::warn!(phase = %err.phase, error = %err.source, "pipeline phase failed");
}
