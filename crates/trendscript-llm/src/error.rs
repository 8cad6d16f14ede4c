use thiserror::Error;

use crate::envelope::EnvelopeError;

/// Errors returned by the Gemini client and the stages built on it.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Gemini returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The configured base URL or model name does not form a valid URL.
    #[error("invalid Gemini URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The response body could not be deserialized.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response carried no candidate text.
    #[error("Gemini response contained no text")]
    EmptyResponse,

    /// The extracted keyword was empty or too long.
    #[error("invalid keyword returned: {0}")]
    InvalidKeyword(String),

    /// The viral-angle reply could not be parsed.
    #[error("invalid viral angle response: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The script reply was blank.
    #[error("script generation returned no text")]
    EmptyScript,
}
