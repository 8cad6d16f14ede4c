//! Parser for the `SerpAPI` Google Trends related-topics CSV export.
//!
//! The export is a list of lines split into `TOP` and `RISING` sections,
//! interleaved with metadata lines (`Category: All categories`) and blank
//! separators. Data lines look like `Dalgona coffee,100`, `Matcha,+250%`, or
//! `Cold brew,Breakout`.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Anchored pattern matching the trailing value column of a data line.
pub const DEFAULT_VALUE_SUFFIX_PATTERN: &str = r",(\+?\d+%?|Breakout)$";

/// Ranked related topics for one keyword, split by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSet {
    #[serde(default)]
    pub top: Vec<String>,
    #[serde(default)]
    pub rising: Vec<String>,
}

impl TrendSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.rising.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Top,
    Rising,
}

/// Line-oriented parser producing a [`TrendSet`].
#[derive(Debug, Clone)]
pub struct TrendParser {
    value_suffix: Regex,
}

impl Default for TrendParser {
    fn default() -> Self {
        Self {
            value_suffix: Regex::new(DEFAULT_VALUE_SUFFIX_PATTERN)
                .expect("valid value suffix regex"),
        }
    }
}

impl TrendParser {
    /// Creates a parser that strips value columns matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if `pattern` does not compile.
    pub fn with_suffix_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            value_suffix: Regex::new(pattern)?,
        })
    }

    /// Parses export lines into top and rising topic lists.
    ///
    /// Data lines seen before any section header are dropped, as are lines
    /// that reduce to nothing but commas once the value column is removed.
    /// A line whose value column does not match is kept whole.
    /// Within a section a topic is kept only on its first occurrence.
    pub fn parse<I, S>(&self, lines: I) -> TrendSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trends = TrendSet::default();
        let mut current: Option<Section> = None;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("TOP") {
                current = Some(Section::Top);
                continue;
            }
            if line.eq_ignore_ascii_case("RISING") {
                current = Some(Section::Rising);
                continue;
            }
            // Metadata rows ("Category: ...", "Top: ...") carry a colon.
            if line.contains(':') {
                continue;
            }
            let Some(section) = current else {
                continue;
            };

            let Some(topic) = self.topic_name(line) else {
                continue;
            };
            let list = match section {
                Section::Top => &mut trends.top,
                Section::Rising => &mut trends.rising,
            };
            if !list.contains(&topic) {
                list.push(topic);
            }
        }

        trends
    }

    fn topic_name(&self, line: &str) -> Option<String> {
        let stripped = self.value_suffix.replace_all(line, "");
        let topic = stripped.trim();
        (!topic.chars().all(|c| c == ',')).then(|| topic.to_string())
    }
}

/// Parses export lines with the default value-suffix pattern.
pub fn parse_related_topics<I, S>(lines: I) -> TrendSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TrendParser::default().parse(lines)
}

#[cfg(test)]
#[path = "trends_test.rs"]
mod tests;
