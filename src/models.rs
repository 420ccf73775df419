//! Data models for the news search service's responses.
//!
//! This module defines the wire types returned by the backend:
//! - [`SearchResult`]: One response to one search activation
//! - [`NewsItem`]: A single scored headline inside a result
//! - [`RelevanceTier`]: The visual classification derived from the score
//!
//! The service speaks Portuguese field names (`titulo`, `fonte`, ...); a
//! sibling deployment uses English spellings, so every field also accepts
//! the English name as a serde alias. Both types are transient render
//! inputs: the client never mutates or persists them.

use std::fmt;

use serde::Deserialize;

/// A single scored headline as returned by the search service.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsItem {
    /// Publication date, display-only (the service formats it, we don't).
    #[serde(rename = "data", alias = "date")]
    pub date: String,
    /// Headline text.
    #[serde(rename = "titulo", alias = "title")]
    pub title: String,
    /// Publisher name.
    #[serde(rename = "fonte", alias = "source")]
    pub source: String,
    /// Relevance score; only used for tier classification.
    #[serde(rename = "relevancia", alias = "relevance")]
    pub relevance: f64,
    /// Link to the full story, opened in a new browsing context.
    pub link: String,
}

/// One complete response to a search activation.
///
/// `count` is announced by the service and expected to equal `items.len()`;
/// the panel logs a mismatch but does not treat it as an error.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Display label for the kind of search (e.g. "royalties").
    #[serde(rename = "tipo", alias = "kind")]
    pub kind: String,
    /// Display label for the queried time window (e.g. "Últimos 7 dias").
    #[serde(rename = "periodo", alias = "period")]
    pub period: String,
    /// Display label for the search method; only some deployments send it.
    #[serde(rename = "metodo", alias = "method", default)]
    pub method: Option<String>,
    /// Announced item total.
    #[serde(rename = "quantidade", alias = "count")]
    pub count: u64,
    /// Scored headlines, in service order. The panel preserves this order
    /// and performs no dedup or sort of its own.
    #[serde(rename = "noticias", alias = "items")]
    pub items: Vec<NewsItem>,
}

impl SearchResult {
    /// The status-line summary shown after a successful search.
    ///
    /// The method segment is only included when the service sent one.
    pub fn summary_line(&self) -> String {
        match &self.method {
            Some(method) => format!(
                "{} | {} | Método: {} | Total encontrado: {}",
                self.kind, self.period, method, self.count
            ),
            None => format!(
                "{} | {} | Total encontrado: {}",
                self.kind, self.period, self.count
            ),
        }
    }
}

/// Visual classification of a headline, a pure function of its score.
///
/// | relevance | tier |
/// |-----------|--------|
/// | ≥ 6 | `High` |
/// | 3 ≤ r < 6 | `Medium` |
/// | < 3 | `Base` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceTier {
    High,
    Medium,
    Base,
}

impl RelevanceTier {
    /// Classify a relevance score. Depends on nothing but the score.
    pub fn of(relevance: f64) -> Self {
        if relevance >= 6.0 {
            Self::High
        } else if relevance >= 3.0 {
            Self::Medium
        } else {
            Self::Base
        }
    }

    /// The extra card class for this tier, if any. Base-tier cards carry
    /// only the shared `card` class.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::High => Some("card-high"),
            Self::Medium => Some("card-medium"),
            Self::Base => None,
        }
    }
}

impl fmt::Display for RelevanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Base => "base",
        };
        f.write_str(name)
    }
}
