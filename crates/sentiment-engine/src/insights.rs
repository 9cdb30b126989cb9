//! Run-level insights: coverage, sector comparison, score distribution

use crate::aggregate::{EntitySummary, stable_mean};
use sentiment_core::{Category, CategoryThresholds, Sector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An entity and its mean score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntity {
    pub symbol: String,
    pub mean: f64,
}

/// Most positive and most negative entity in a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorLeaders {
    pub most_positive: ScoredEntity,
    pub most_negative: ScoredEntity,
}

/// Mean sentiment across all entities with data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    pub score: f64,
    pub category: Category,
}

/// Entity with the most scored articles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub symbol: String,
    pub articles: usize,
}

/// Distribution of every combined article score in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Scores above the `positive` threshold
    pub positive: usize,
    /// Scores within the neutral band
    pub neutral: usize,
    /// Scores below the `negative` threshold
    pub negative: usize,
}

impl ScoreDistribution {
    /// Describe a set of scores; `None` when empty
    pub fn from_scores(scores: &[f64], thresholds: &CategoryThresholds) -> Option<Self> {
        let mean = stable_mean(scores)?;

        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let variance = stable_mean(
            &scores
                .iter()
                .map(|s| (s - mean).powi(2))
                .collect::<Vec<_>>(),
        )
        .unwrap_or(0.0);

        let positive = scores.iter().filter(|s| **s > thresholds.positive).count();
        let negative = scores.iter().filter(|s| **s < thresholds.negative).count();

        Some(Self {
            count: scores.len(),
            mean,
            median,
            std_dev: variance.sqrt(),
            positive,
            neutral: scores.len() - positive - negative,
            negative,
        })
    }
}

/// Headline facts about one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunInsights {
    /// Scored articles across all entities
    pub total_articles: usize,
    /// Entity with the widest news coverage
    pub most_covered: Option<Coverage>,
    /// Mean of entity means
    pub market_sentiment: Option<MarketSentiment>,
    /// Mean of entity means per sector
    pub sector_averages: BTreeMap<Sector, f64>,
    /// Extremes per sector
    pub sector_leaders: BTreeMap<Sector, SectorLeaders>,
    /// Scored articles per feed source
    pub source_volume: BTreeMap<String, usize>,
    /// Distribution of article scores
    pub distribution: Option<ScoreDistribution>,
}

impl RunInsights {
    /// Derive insights from the summaries and all combined article scores
    pub fn build(
        summaries: &[EntitySummary],
        article_scores: &[f64],
        thresholds: &CategoryThresholds,
    ) -> Self {
        let total_articles = summaries.iter().map(|s| s.article_count).sum();

        let most_covered = summaries
            .iter()
            .filter(|s| s.article_count > 0)
            .min_by(|a, b| {
                b.article_count
                    .cmp(&a.article_count)
                    .then_with(|| a.symbol().cmp(b.symbol()))
            })
            .map(|s| Coverage {
                symbol: s.symbol().to_string(),
                articles: s.article_count,
            });

        let means: Vec<f64> = summaries.iter().filter_map(EntitySummary::mean).collect();
        let market_sentiment = stable_mean(&means).map(|score| MarketSentiment {
            score,
            category: thresholds.categorize(score),
        });

        let mut by_sector: BTreeMap<Sector, Vec<&EntitySummary>> = BTreeMap::new();
        for summary in summaries.iter().filter(|s| s.has_data()) {
            by_sector.entry(summary.entity.sector).or_default().push(summary);
        }

        let mut sector_averages = BTreeMap::new();
        let mut sector_leaders = BTreeMap::new();
        for (sector, members) in &by_sector {
            let scored: Vec<ScoredEntity> = members
                .iter()
                .filter_map(|s| {
                    s.mean().map(|mean| ScoredEntity {
                        symbol: s.symbol().to_string(),
                        mean,
                    })
                })
                .collect();
            let means: Vec<f64> = scored.iter().map(|e| e.mean).collect();
            if let Some(avg) = stable_mean(&means) {
                sector_averages.insert(*sector, avg);
            }

            let best = scored.iter().min_by(|a, b| {
                b.mean
                    .total_cmp(&a.mean)
                    .then_with(|| a.symbol.cmp(&b.symbol))
            });
            let worst = scored.iter().min_by(|a, b| {
                a.mean
                    .total_cmp(&b.mean)
                    .then_with(|| a.symbol.cmp(&b.symbol))
            });
            if let (Some(best), Some(worst)) = (best, worst) {
                sector_leaders.insert(
                    *sector,
                    SectorLeaders {
                        most_positive: best.clone(),
                        most_negative: worst.clone(),
                    },
                );
            }
        }

        let mut source_volume = BTreeMap::new();
        for summary in summaries {
            for (source, count) in &summary.sources {
                *source_volume.entry(source.clone()).or_insert(0) += count;
            }
        }

        Self {
            total_articles,
            most_covered,
            market_sentiment,
            sector_averages,
            sector_leaders,
            source_volume,
            distribution: ScoreDistribution::from_scores(article_scores, thresholds),
        }
    }
}
