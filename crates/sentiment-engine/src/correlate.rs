//! Sentiment versus price-change agreement

use crate::aggregate::{EntitySummary, stable_mean};
use serde::{Deserialize, Serialize};

/// Direction agreement between an entity's sentiment and its price move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Sentiment and price moved the same way
    SameDirection,
    /// Sentiment and price moved in opposite directions
    OppositeDirection,
    /// Sentiment or price change was exactly zero
    Indeterminate,
}

/// Relationship between one entity's mean sentiment and its price change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRelationship {
    pub symbol: String,
    /// Mean combined sentiment
    pub sentiment: f64,
    /// Price change over the period, in percent
    pub price_change: f64,
    pub alignment: Alignment,
    /// Signed product of sentiment and price change
    pub strength: f64,
}

impl PriceRelationship {
    pub fn new(symbol: impl Into<String>, sentiment: f64, price_change: f64) -> Self {
        let alignment = if sentiment == 0.0 || price_change == 0.0 {
            Alignment::Indeterminate
        } else if sentiment.signum() == price_change.signum() {
            Alignment::SameDirection
        } else {
            Alignment::OppositeDirection
        };

        Self {
            symbol: symbol.into(),
            sentiment,
            price_change,
            alignment,
            strength: sentiment * price_change,
        }
    }
}

/// Cross-entity view of sentiment against price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// One entry per entity with both data and a price change, in input order
    pub relationships: Vec<PriceRelationship>,
    /// Share of determinate entities whose sentiment matched the price direction
    pub agreement_ratio: Option<f64>,
    /// Pearson correlation of mean sentiment against price change
    pub pearson: Option<f64>,
}

impl CorrelationReport {
    /// Entities with the given alignment
    pub fn with_alignment(&self, alignment: Alignment) -> impl Iterator<Item = &PriceRelationship> {
        self.relationships
            .iter()
            .filter(move |r| r.alignment == alignment)
    }
}

/// Correlate sentiment with price across summaries
///
/// Returns `None` when no summary carries a price change. Entities without a
/// price change or without data are left out without affecting the others.
pub fn correlate(summaries: &[EntitySummary]) -> Option<CorrelationReport> {
    if summaries.iter().all(|s| s.price_change.is_none()) {
        return None;
    }

    let relationships: Vec<PriceRelationship> = summaries
        .iter()
        .filter_map(|s| s.price_relationship.clone())
        .collect();

    let same = relationships
        .iter()
        .filter(|r| r.alignment == Alignment::SameDirection)
        .count();
    let opposite = relationships
        .iter()
        .filter(|r| r.alignment == Alignment::OppositeDirection)
        .count();
    let agreement_ratio = (same + opposite > 0).then(|| same as f64 / (same + opposite) as f64);

    let sentiment: Vec<f64> = relationships.iter().map(|r| r.sentiment).collect();
    let price: Vec<f64> = relationships.iter().map(|r| r.price_change).collect();

    Some(CorrelationReport {
        pearson: pearson(&sentiment, &price),
        agreement_ratio,
        relationships,
    })
}

/// Pearson correlation coefficient; `None` below two points or with zero variance
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let mean_x = stable_mean(xs)?;
    let mean_y = stable_mean(ys)?;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
