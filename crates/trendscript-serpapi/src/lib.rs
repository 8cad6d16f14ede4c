//! `SerpAPI` Google Trends client.
//!
//! Fetches category-scoped related topics (parsed into a
//! [`trendscript_core::TrendSet`]) and the global "trending now" list. The
//! combined [`SerpApiClient::fetch_trends`] never fails: each half degrades
//! to empty data on its own.

pub mod client;
pub mod error;
pub mod trending;

pub use client::SerpApiClient;
pub use error::SerpApiError;
pub use trending::{csv_lines, extract_trending_queries};
