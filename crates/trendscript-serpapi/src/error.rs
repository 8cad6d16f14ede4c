use thiserror::Error;

/// Errors returned by the `SerpAPI` client.
#[derive(Debug, Error)]
pub enum SerpApiError {
    /// Network or TLS failure, or a non-2xx status from the API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body carried an `"error"` field.
    #[error("SerpAPI error: {0}")]
    ApiError(String),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
