//! Per-entity input supplied by the ingestion and price collaborators

use sentiment_core::{Article, Entity};
use serde::{Deserialize, Serialize};

/// Everything the engine needs to summarise one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInput {
    /// The tracked entity
    pub entity: Entity,
    /// Raw articles in ingestion order; may be empty or contain duplicates
    #[serde(default)]
    pub articles: Vec<Article>,
    /// Price change over the analysis period, in percent
    #[serde(default)]
    pub price_change: Option<f64>,
}

impl EntityInput {
    /// Input with no articles and no price change
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            articles: Vec::new(),
            price_change: None,
        }
    }

    /// Set the articles
    pub fn with_articles(mut self, articles: Vec<Article>) -> Self {
        self.articles = articles;
        self
    }

    /// Add one article
    pub fn push_article(&mut self, article: Article) {
        self.articles.push(article);
    }

    /// Set the price change
    pub fn with_price_change(mut self, price_change: f64) -> Self {
        self.price_change = Some(price_change);
        self
    }

    /// Entity symbol
    pub fn symbol(&self) -> &str {
        &self.entity.symbol
    }
}
