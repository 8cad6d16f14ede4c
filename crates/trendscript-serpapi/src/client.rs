//! HTTP client for the `SerpAPI` Google Trends engines.

use std::time::Duration;

use reqwest::{Client, Url};
use trendscript_core::{TrendParser, TrendSet, TrendsData};

use crate::error::SerpApiError;
use crate::trending::{csv_lines, extract_trending_queries};

const DEFAULT_BASE_URL: &str = "https://serpapi.com/";
const SEARCH_PATH: &str = "search.json";

/// Client for `SerpAPI`.
///
/// Use [`SerpApiClient::new`] for production or
/// [`SerpApiClient::with_base_url`] to point at a mock server in tests.
#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
    parser: TrendParser,
}

impl SerpApiClient {
    /// Creates a new client pointed at the production `SerpAPI` host.
    ///
    /// # Errors
    ///
    /// Returns [`SerpApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SerpApiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SerpApiError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`SerpApiError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SerpApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("trendscript/0.1")
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SerpApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            parser: TrendParser::default(),
        })
    }

    /// Replaces the parser used for the related-topics CSV export.
    #[must_use]
    pub fn with_parser(mut self, parser: TrendParser) -> Self {
        self.parser = parser;
        self
    }

    /// Fetches category and global trends for `keyword`.
    ///
    /// The two queries run concurrently and fail independently: an error on
    /// either side is logged and that side comes back empty.
    pub async fn fetch_trends(&self, keyword: &str, category_id: &str) -> TrendsData {
        let (category, global) = tokio::join!(
            self.fetch_related_topics(keyword, category_id),
            self.fetch_trending_now()
        );

        let category_trends = category.unwrap_or_else(|e| {
            tracing::warn!(keyword, category_id, error = %e, "category trends unavailable");
            TrendSet::default()
        });
        let global_trends = global.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "global trends unavailable");
            Vec::new()
        });

        tracing::debug!(
            keyword,
            top = category_trends.top.len(),
            rising = category_trends.rising.len(),
            global = global_trends.len(),
            "fetched trends"
        );

        TrendsData {
            category_trends,
            global_trends,
        }
    }

    /// Fetches YouTube related topics for `keyword` over the last month.
    ///
    /// # Errors
    ///
    /// - [`SerpApiError::ApiError`] if the body carries an `error` field.
    /// - [`SerpApiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SerpApiError::Deserialize`] if the body is not JSON.
    pub async fn fetch_related_topics(
        &self,
        keyword: &str,
        category_id: &str,
    ) -> Result<TrendSet, SerpApiError> {
        let url = self.build_url(
            "google_trends",
            &[
                ("q", keyword),
                ("cat", category_id),
                ("data_type", "RELATED_TOPICS"),
                ("date", "today 1-m"),
                ("gprop", "youtube"),
                ("csv", "true"),
            ],
        );
        let body = self.request_json(&url, "google_trends").await?;
        Self::check_api_error(&body)?;

        Ok(self.parser.parse(csv_lines(body.get("csv"))))
    }

    /// Fetches the global "trending now" search list.
    ///
    /// # Errors
    ///
    /// Same as [`SerpApiClient::fetch_related_topics`].
    pub async fn fetch_trending_now(&self) -> Result<Vec<String>, SerpApiError> {
        let url = self.build_url("google_trends_trending_now", &[]);
        let body = self
            .request_json(&url, "google_trends_trending_now")
            .await?;
        Self::check_api_error(&body)?;

        Ok(extract_trending_queries(&body))
    }

    /// Builds the search URL with `engine`, `api_key`, and `extra` as
    /// percent-encoded query parameters.
    fn build_url(&self, engine: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", engine);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("api_key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    ///
    /// The URL carries the API key, so it is stripped from transport errors
    /// and `context` names the engine instead.
    async fn request_json(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<serde_json::Value, SerpApiError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| SerpApiError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    fn check_api_error(body: &serde_json::Value) -> Result<(), SerpApiError> {
        match body.get("error") {
            None | Some(serde_json::Value::Null) => Ok(()),
            Some(serde_json::Value::String(msg)) => Err(SerpApiError::ApiError(msg.clone())),
            Some(other) => Err(SerpApiError::ApiError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
