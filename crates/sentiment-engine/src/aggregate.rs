//! Per-entity roll-up of scored articles

use crate::correlate::PriceRelationship;
use sentiment_core::{Category, CategoryThresholds, Entity, ScoredArticle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Articles dropped before they could contribute to a summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipCounts {
    /// Collapsed as duplicates of an earlier story
    pub duplicates: usize,
    /// Empty or unusable text
    pub invalid_input: usize,
    /// A polarity signal failed on the text
    pub signal_failure: usize,
}

impl SkipCounts {
    /// Total articles skipped
    pub fn total(&self) -> usize {
        self.duplicates + self.invalid_input + self.signal_failure
    }
}

/// Aggregate sentiment of one entity
///
/// `NoData` is a distinct state: an entity without usable articles never
/// reports a neutral 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SentimentStats {
    /// No usable articles survived filtering
    NoData,
    /// At least one article was scored
    Scored {
        /// Arithmetic mean of combined scores
        mean: f64,
        /// Lowest combined score
        min: f64,
        /// Highest combined score
        max: f64,
        /// Category of the mean
        category: Category,
    },
}

/// Summary of one entity for one run
///
/// Built once; recomputation produces a new summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    /// The entity summarised
    pub entity: Entity,
    /// Number of scored articles
    pub article_count: usize,
    /// Aggregate sentiment, or the no-data marker
    pub stats: SentimentStats,
    /// Scored articles per feed source
    pub sources: BTreeMap<String, usize>,
    /// Articles excluded before aggregation
    pub skipped: SkipCounts,
    /// Price change over the same period, when supplied
    pub price_change: Option<f64>,
    /// Direction agreement between sentiment and price
    pub price_relationship: Option<PriceRelationship>,
}

impl EntitySummary {
    /// Entity symbol
    pub fn symbol(&self) -> &str {
        &self.entity.symbol
    }

    /// Whether any article was scored
    pub fn has_data(&self) -> bool {
        matches!(self.stats, SentimentStats::Scored { .. })
    }

    /// Mean combined score, `None` for no data
    pub fn mean(&self) -> Option<f64> {
        match self.stats {
            SentimentStats::Scored { mean, .. } => Some(mean),
            SentimentStats::NoData => None,
        }
    }

    /// Category of the mean, `None` for no data
    pub fn category(&self) -> Option<Category> {
        match self.stats {
            SentimentStats::Scored { category, .. } => Some(category),
            SentimentStats::NoData => None,
        }
    }

    /// Record the articles skipped upstream
    pub fn with_skipped(mut self, skipped: SkipCounts) -> Self {
        self.skipped = skipped;
        self
    }

    /// Attach a price change and derive the sentiment/price relationship
    pub fn with_price_change(mut self, price_change: Option<f64>) -> Self {
        self.price_change = price_change.filter(|p| p.is_finite());
        self.price_relationship = match (self.mean(), self.price_change) {
            (Some(mean), Some(price)) => Some(PriceRelationship::new(self.symbol(), mean, price)),
            _ => None,
        };
        self
    }
}

/// Compensated (Neumaier) summation
pub(crate) fn stable_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for value in values {
        let t = sum + value;
        if f64::abs(sum) >= f64::abs(value) {
            compensation += (sum - t) + value;
        } else {
            compensation += (value - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

/// Compensated arithmetic mean, `None` for an empty input
pub(crate) fn stable_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(stable_sum(values.iter().copied()) / values.len() as f64)
}

/// Roll up the scored articles of one entity
///
/// The category is assigned from the mean, not from per-article categories.
pub fn aggregate(
    entity: &Entity,
    scored: &[ScoredArticle],
    thresholds: &CategoryThresholds,
) -> EntitySummary {
    let scores: Vec<f64> = scored.iter().map(|s| s.combined).collect();

    let stats = match stable_mean(&scores) {
        None => SentimentStats::NoData,
        Some(mean) => {
            let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
            let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            SentimentStats::Scored {
                mean,
                min,
                max,
                category: thresholds.categorize(mean),
            }
        }
    };

    let mut sources = BTreeMap::new();
    for s in scored {
        *sources.entry(s.article.source.clone()).or_insert(0) += 1;
    }

    EntitySummary {
        entity: entity.clone(),
        article_count: scored.len(),
        stats,
        sources,
        skipped: SkipCounts::default(),
        price_change: None,
        price_relationship: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_core::{Article, Sector};

    fn entity() -> Entity {
        Entity::new("X", "Example Corp", Sector::Financial)
    }

    fn scored(combined: f64, source: &str) -> ScoredArticle {
        ScoredArticle {
            article: Article::new("X", source, format!("story {combined}")),
            lexicon: combined,
            statistical: combined,
            combined,
        }
    }

    #[test]
    fn test_empty_input_is_no_data() {
        let summary = aggregate(&entity(), &[], &CategoryThresholds::default());
        assert_eq!(summary.stats, SentimentStats::NoData);
        assert_eq!(summary.article_count, 0);
        assert!(!summary.has_data());
        assert_eq!(summary.mean(), None);
        assert_eq!(summary.category(), None);
    }

    #[test]
    fn test_mean_min_max_and_category() {
        let articles = [scored(0.5, "A"), scored(0.4, "A"), scored(0.6, "B")];
        let summary = aggregate(&entity(), &articles, &CategoryThresholds::default());

        match summary.stats {
            SentimentStats::Scored {
                mean,
                min,
                max,
                category,
            } => {
                assert!((mean - 0.5).abs() < 1e-12);
                assert_eq!(min, 0.4);
                assert_eq!(max, 0.6);
                assert_eq!(category, Category::VeryPositive);
            }
            SentimentStats::NoData => panic!("Expected scored stats"),
        }
        assert_eq!(summary.article_count, 3);
        assert_eq!(summary.sources.get("A"), Some(&2));
        assert_eq!(summary.sources.get("B"), Some(&1));
    }

    #[test]
    fn test_category_comes_from_mean_not_articles() {
        // two very positive and one very negative article average to neutral
        let articles = [scored(0.5, "A"), scored(0.5, "A"), scored(-1.0, "A")];
        let summary = aggregate(&entity(), &articles, &CategoryThresholds::default());
        assert_eq!(summary.category(), Some(Category::Neutral));
    }

    #[test]
    fn test_true_neutral_differs_from_no_data() {
        let summary = aggregate(&entity(), &[scored(0.0, "A")], &CategoryThresholds::default());
        assert!(summary.has_data());
        assert_eq!(summary.mean(), Some(0.0));
        assert_eq!(summary.category(), Some(Category::Neutral));

        let empty = aggregate(&entity(), &[], &CategoryThresholds::default());
        assert_ne!(summary.stats, empty.stats);
    }

    #[test]
    fn test_mean_is_order_invariant() {
        let values = [0.91, -0.37, 0.12, 0.5, -0.88, 0.33, 0.07, -0.2, 0.64, 0.01];
        let forward: Vec<_> = values.iter().map(|v| scored(*v, "A")).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(3);

        let t = CategoryThresholds::default();
        let a = aggregate(&entity(), &forward, &t).mean().unwrap();
        let b = aggregate(&entity(), &reversed, &t).mean().unwrap();
        let c = aggregate(&entity(), &rotated, &t).mean().unwrap();
        assert!((a - b).abs() < 1e-15);
        assert!((a - c).abs() < 1e-15);
    }

    #[test]
    fn test_stable_sum_recovers_small_terms() {
        let values = [1.0, 1e-16, 1e-16, 1e-16, 1e-16, -1.0];
        let naive: f64 = values.iter().sum();
        let stable = stable_sum(values);
        assert_eq!(naive, 0.0);
        assert!((stable - 4e-16).abs() < 1e-30);
    }

    #[test]
    fn test_price_change_relationship() {
        let summary = aggregate(&entity(), &[scored(0.5, "A")], &CategoryThresholds::default())
            .with_price_change(Some(2.0));
        assert_eq!(summary.price_change, Some(2.0));
        assert!(summary.price_relationship.is_some());

        let no_data = aggregate(&entity(), &[], &CategoryThresholds::default())
            .with_price_change(Some(2.0));
        assert_eq!(no_data.price_change, Some(2.0));
        assert!(no_data.price_relationship.is_none());
    }

    #[test]
    fn test_non_finite_price_change_is_dropped() {
        let summary = aggregate(&entity(), &[scored(0.5, "A")], &CategoryThresholds::default())
            .with_price_change(Some(f64::NAN));
        assert_eq!(summary.price_change, None);
        assert!(summary.price_relationship.is_none());
    }

    #[test]
    fn test_skip_counts_total() {
        let skipped = SkipCounts {
            duplicates: 2,
            invalid_input: 1,
            signal_failure: 3,
        };
        let summary =
            aggregate(&entity(), &[], &CategoryThresholds::default()).with_skipped(skipped);
        assert_eq!(summary.skipped.total(), 6);
    }
}
