//! News articles supplied by ingestion and their scored form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news item about one entity, as delivered by the ingestion layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Symbol of the entity this article was routed to
    pub symbol: String,
    /// Feed source name
    pub source: String,
    /// Publication time, when the feed provided one
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
    /// Headline
    pub title: String,
    /// Summary or body text, possibly empty
    #[serde(default)]
    pub summary: String,
    /// Link to the original article
    #[serde(default)]
    pub url: String,
}

impl Article {
    /// Create an article with an empty summary and no timestamp
    pub fn new(
        symbol: impl Into<String>,
        source: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            source: source.into(),
            published: None,
            title: title.into(),
            summary: String::new(),
            url: String::new(),
        }
    }

    /// Set the summary text
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the publication time
    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = Some(published);
        self
    }

    /// Set the URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Text fed to the polarity signals: headline and summary joined by a space
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.title, self.summary).trim().to_string()
    }
}

/// An article together with both polarity readings and their blend
///
/// Lives only for the duration of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    /// The source article
    pub article: Article,
    /// Polarity from the rule/lexicon signal
    pub lexicon: f64,
    /// Polarity from the statistical signal
    pub statistical: f64,
    /// Weighted blend of both polarities, in [-1, 1]
    pub combined: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_text_joins_title_and_summary() {
        let article = Article::new("AAPL", "Reuters Business", "Apple beats estimates")
            .with_summary("Strong iPhone demand lifts revenue");
        assert_eq!(
            article.scoring_text(),
            "Apple beats estimates Strong iPhone demand lifts revenue"
        );
    }

    #[test]
    fn test_scoring_text_without_summary() {
        let article = Article::new("AAPL", "MarketWatch", "  Apple slips  ");
        assert_eq!(article.scoring_text(), "Apple slips");

        let blank = Article::new("AAPL", "MarketWatch", "   ").with_summary("\t");
        assert!(blank.scoring_text().is_empty());
    }

    #[test]
    fn test_article_deserializes_with_defaults() {
        let article: Article = serde_json::from_str(
            r#"{"symbol":"ZM","source":"The Verge","title":"Zoom adds AI notes"}"#,
        )
        .unwrap();
        assert!(article.published.is_none());
        assert!(article.summary.is_empty());
        assert!(article.url.is_empty());
    }
}
