//! Best-effort extraction from `SerpAPI` response bodies.
//!
//! The trending-now payload shape is not a stable contract, so these helpers
//! sniff for the expected structure and return empty data on any mismatch.

use serde_json::Value;

/// Key that normally holds the trending-now entries.
const TRENDING_KEY: &str = "trending_searches";

/// Pulls trending search queries out of a `google_trends_trending_now` body.
///
/// Looks at `trending_searches` first, then at any other top-level array whose
/// first element is an object with a `title` key. Each entry contributes
/// `title.query`, or `title` itself when it is a plain string. Blank or
/// missing queries are skipped.
#[must_use]
pub fn extract_trending_queries(body: &Value) -> Vec<String> {
    let Some(object) = body.as_object() else {
        return Vec::new();
    };

    let entries = object
        .get(TRENDING_KEY)
        .filter(|v| looks_like_trending_list(v))
        .or_else(|| object.values().find(|v| looks_like_trending_list(v)))
        .and_then(Value::as_array);

    let Some(entries) = entries else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let title = entry.get("title")?;
            let query = title
                .get("query")
                .and_then(Value::as_str)
                .or_else(|| title.as_str())?;
            let query = query.trim();
            (!query.is_empty()).then(|| query.to_string())
        })
        .collect()
}

fn looks_like_trending_list(value: &Value) -> bool {
    value
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_object)
        .is_some_and(|first| first.contains_key("title"))
}

/// Normalises the related-topics `csv` field into lines.
///
/// The field is normally an array of strings; a single newline-joined string
/// is also accepted. Anything else yields no lines.
#[must_use]
pub fn csv_lines(csv: Option<&Value>) -> Vec<String> {
    match csv {
        Some(Value::Array(rows)) => rows
            .iter()
            .filter_map(Value::as_str)
            .map(ToOwned::to_owned)
            .collect(),
        Some(Value::String(text)) => text.lines().map(ToOwned::to_owned).collect(),
        _ => Vec::new(),
    }
}
