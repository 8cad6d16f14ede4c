//! Tolerant parsing of the viral-angle JSON reply.

use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use trendscript_core::ViralAngle;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("reply is not a JSON object")]
    NotAnObject,

    #[error("reply is missing a non-empty \"viral_angle\" string")]
    MissingViralAngle,

    #[error("\"selected_trends\" is not a list")]
    SelectedTrendsNotList,
}

/// Parses a `{"selected_trends": [...], "viral_angle": "..."}` reply.
///
/// Markdown code fences (```` ```json ```` and ```` ``` ````) are removed
/// wherever they appear before parsing. A missing `selected_trends` means no
/// trends were selected; non-string entries in it are ignored.
///
/// # Errors
///
/// Returns [`EnvelopeError`] if the text is not a JSON object, lacks a
/// non-blank `viral_angle` string, or has a non-array `selected_trends`.
pub fn parse_viral_angle_envelope(text: &str) -> Result<ViralAngle, EnvelopeError> {
    let fence = Regex::new(r"```json\n?|```").expect("valid code fence regex");
    let cleaned = fence.replace_all(text.trim(), "");

    let value: Value = serde_json::from_str(cleaned.trim())?;
    let object = value.as_object().ok_or(EnvelopeError::NotAnObject)?;

    let viral_angle = object
        .get("viral_angle")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(EnvelopeError::MissingViralAngle)?
        .to_string();

    let selected_trends = match object.get("selected_trends") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(ToOwned::to_owned)
            .collect(),
        Some(_) => return Err(EnvelopeError::SelectedTrendsNotList),
    };

    Ok(ViralAngle {
        viral_angle,
        selected_trends,
    })
}
