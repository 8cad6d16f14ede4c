//! Keyword extraction, viral-angle generation, and script writing.

use trendscript_core::{TrendCandidates, ViralAngle};

use crate::client::GeminiClient;
use crate::envelope::parse_viral_angle_envelope;
use crate::error::LlmError;
use crate::prompts::{keyword_prompt, script_prompt, viral_angle_prompt};

/// Longest keyword (in characters) accepted from the extractor.
pub const MAX_KEYWORD_CHARS: usize = 50;

/// The three prompt-driven stages, bound to their models.
///
/// Keyword extraction and angle selection run on the utility model; the
/// script is written by the creative model.
#[derive(Clone)]
pub struct LlmService {
    client: GeminiClient,
    utility_model: String,
    creative_model: String,
}

impl LlmService {
    #[must_use]
    pub fn new(client: GeminiClient, utility_model: &str, creative_model: &str) -> Self {
        Self {
            client,
            utility_model: utility_model.to_owned(),
            creative_model: creative_model.to_owned(),
        }
    }

    /// Extracts the core search keyword from a free-text video idea.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::InvalidKeyword`] if the reply is blank or longer
    /// than [`MAX_KEYWORD_CHARS`], or any client error from the call.
    pub async fn extract_keyword(&self, video_idea: &str) -> Result<String, LlmError> {
        let reply = self
            .client
            .generate(&self.utility_model, &keyword_prompt(video_idea))
            .await?;
        validate_keyword(&reply)
    }

    /// Picks the most viral trends and folds them into one instruction sentence.
    ///
    /// With no candidates the model is not called and the idea itself becomes
    /// the angle.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Envelope`] if the reply cannot be parsed, or any
    /// client error from the call.
    pub async fn generate_viral_angle(
        &self,
        original_idea: &str,
        candidates: &TrendCandidates,
    ) -> Result<ViralAngle, LlmError> {
        if candidates.is_empty() {
            tracing::info!("no trend candidates; using original idea as viral angle");
            return Ok(ViralAngle::passthrough(original_idea));
        }

        let prompt = viral_angle_prompt(original_idea, candidates.as_slice());
        let reply = self.client.generate(&self.utility_model, &prompt).await?;
        let angle = parse_viral_angle_envelope(&reply)?;

        tracing::debug!(
            candidates = candidates.len(),
            selected = angle.selected_trends.len(),
            "viral angle generated"
        );
        Ok(angle)
    }

    /// Writes a short-form video script for `viral_angle`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::EmptyScript`] if the reply is blank, or any client
    /// error from the call.
    pub async fn generate_script(&self, viral_angle: &str) -> Result<String, LlmError> {
        let reply = self
            .client
            .generate(&self.creative_model, &script_prompt(viral_angle))
            .await?;
        let script = reply.trim();
        if script.is_empty() {
            return Err(LlmError::EmptyScript);
        }
        Ok(script.to_string())
    }
}

/// Normalises an extractor reply into a keyword.
///
/// # Errors
///
/// Returns [`LlmError::InvalidKeyword`] if the trimmed reply is empty or
/// longer than [`MAX_KEYWORD_CHARS`] characters.
pub fn validate_keyword(reply: &str) -> Result<String, LlmError> {
    let keyword = reply.trim().to_lowercase();
    if keyword.is_empty() {
        return Err(LlmError::InvalidKeyword("empty keyword".to_string()));
    }
    let chars = keyword.chars().count();
    if chars > MAX_KEYWORD_CHARS {
        return Err(LlmError::InvalidKeyword(format!(
            "{chars} characters exceeds the {MAX_KEYWORD_CHARS}-character limit"
        )));
    }
    Ok(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_keyword_trims_and_lowercases() {
        assert_eq!(validate_keyword("  Iced Coffee\n").unwrap(), "iced coffee");
    }

    #[test]
    fn validate_keyword_rejects_blank() {
        assert!(matches!(
            validate_keyword(" \n "),
            Err(LlmError::InvalidKeyword(_))
        ));
    }

    #[test]
    fn validate_keyword_length_boundary() {
        let fifty = "a".repeat(50);
        assert_eq!(validate_keyword(&fifty).unwrap(), fifty);

        let eighty = "b".repeat(80);
        assert!(matches!(
            validate_keyword(&eighty),
            Err(LlmError::InvalidKeyword(_))
        ));
    }

    #[test]
    fn validate_keyword_counts_characters_not_bytes() {
        let accented = "é".repeat(50);
        assert!(validate_keyword(&accented).is_ok());
    }
}
