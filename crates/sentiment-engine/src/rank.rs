//! Cross-entity ranking and category grouping

use crate::aggregate::EntitySummary;
use sentiment_core::Category;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Ordered views over one run's summaries
///
/// Entities without data appear only in `unranked`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReport {
    /// Entities with data, highest mean first
    pub descending: Vec<EntitySummary>,
    /// Entities with data, lowest mean first
    pub ascending: Vec<EntitySummary>,
    /// First `top_n` of `descending`
    pub top_movers: Vec<EntitySummary>,
    /// First `top_n` of `ascending`
    pub bottom_movers: Vec<EntitySummary>,
    /// Top `top_n` by absolute mean, strongest sentiment either way
    pub strongest: Vec<EntitySummary>,
    /// Symbols per category; every category is present, possibly empty
    pub categories: BTreeMap<Category, Vec<String>>,
    /// Symbols of entities without data, in input order
    pub unranked: Vec<String>,
}

impl RankedReport {
    /// Number of entities per category, including empty categories
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        self.categories
            .iter()
            .map(|(category, members)| (*category, members.len()))
            .collect()
    }

    /// Highest ranked entity
    pub fn most_positive(&self) -> Option<&EntitySummary> {
        self.descending.first()
    }

    /// Lowest ranked entity
    pub fn most_negative(&self) -> Option<&EntitySummary> {
        self.ascending.first()
    }
}

fn mean_of(summary: &EntitySummary) -> f64 {
    summary.mean().unwrap_or(0.0)
}

fn by_symbol(a: &EntitySummary, b: &EntitySummary) -> Ordering {
    a.symbol().cmp(b.symbol())
}

/// Rank summaries by mean score
///
/// Ties on the mean are broken by symbol, lexicographically, in every view,
/// so repeated runs order equal scores identically.
pub fn rank(summaries: &[EntitySummary], top_n: usize) -> RankedReport {
    let (ranked, unranked): (Vec<&EntitySummary>, Vec<&EntitySummary>) =
        summaries.iter().partition(|s| s.has_data());

    let mut descending: Vec<EntitySummary> = ranked.iter().map(|s| (*s).clone()).collect();
    descending.sort_by(|a, b| {
        mean_of(b)
            .total_cmp(&mean_of(a))
            .then_with(|| by_symbol(a, b))
    });

    let mut ascending = descending.clone();
    ascending.sort_by(|a, b| {
        mean_of(a)
            .total_cmp(&mean_of(b))
            .then_with(|| by_symbol(a, b))
    });

    let mut strongest = descending.clone();
    strongest.sort_by(|a, b| {
        mean_of(b)
            .abs()
            .total_cmp(&mean_of(a).abs())
            .then_with(|| by_symbol(a, b))
    });
    strongest.truncate(top_n);

    let mut categories: BTreeMap<Category, Vec<String>> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
    for summary in &descending {
        if let Some(category) = summary.category() {
            categories
                .entry(category)
                .or_default()
                .push(summary.symbol().to_string());
        }
    }

    RankedReport {
        top_movers: descending.iter().take(top_n).cloned().collect(),
        bottom_movers: ascending.iter().take(top_n).cloned().collect(),
        strongest,
        descending,
        ascending,
        categories,
        unranked: unranked.iter().map(|s| s.symbol().to_string()).collect(),
    }
}
