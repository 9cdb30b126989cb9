//! Analysis run result types

use crate::aggregate::EntitySummary;
use crate::correlate::CorrelationReport;
use crate::insights::RunInsights;
use crate::rank::RankedReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entity whose pipeline did not complete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFailure {
    pub symbol: String,
    pub reason: String,
}

/// Output of one entity's pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct EntityAnalysis {
    /// The entity summary
    pub summary: EntitySummary,
    /// Combined score of every scored article, in article order
    pub scores: Vec<f64>,
}

/// Complete result of one analysis run
///
/// Plain data for the rendering and persistence layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    /// One summary per entity that completed, in input order
    pub summaries: Vec<EntitySummary>,
    pub report: RankedReport,
    /// Present when at least one entity supplied a price change
    pub correlation: Option<CorrelationReport>,
    pub insights: RunInsights,
    pub failures: Vec<EntityFailure>,
}

impl AnalysisRun {
    /// Summary of one entity
    pub fn summary(&self, symbol: &str) -> Option<&EntitySummary> {
        self.summaries.iter().find(|s| s.symbol() == symbol)
    }

    /// Whether every entity completed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Share of entities with at least one scored article
    pub fn coverage_rate(&self) -> f64 {
        if self.summaries.is_empty() {
            return 0.0;
        }
        self.report.descending.len() as f64 / self.summaries.len() as f64
    }

    /// Serialize the run as pretty JSON
    pub fn to_json(&self) -> sentiment_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
