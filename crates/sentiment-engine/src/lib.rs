//! News sentiment scoring and aggregation engine
//!
//! Turns raw news articles about tracked entities into per-entity sentiment
//! summaries and cross-entity rankings. It includes:
//!
//! - Two independent polarity signals (VADER and a financial word lexicon)
//!   combined into one score per article
//! - Near-duplicate removal before scoring
//! - Per-entity aggregation with explicit no-data handling
//! - Five-way categorization against configurable thresholds
//! - Ranking, top/bottom movers and category grouping
//! - Sentiment versus price-change agreement
//! - Run insights: coverage, sector averages, score distribution
//!
//! # Architecture
//!
//! Each entity runs through its own pipeline (dedup, score, aggregate) on the
//! blocking pool; `SentimentEngine::analyze` gathers the summaries and only
//! then ranks and correlates them.
//!
//! # Example
//!
//! ```rust,ignore
//! use sentiment_engine::{EngineConfig, EntityInput, SentimentEngine};
//! use sentiment_core::{Article, EntityCatalog};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = SentimentEngine::with_default_signals(EngineConfig::default())?;
//!     let catalog = EntityCatalog::default_catalog();
//!
//!     let apple = catalog.get("AAPL").cloned().unwrap();
//!     let input = EntityInput::new(apple).with_articles(vec![
//!         Article::new("AAPL", "Reuters Business", "Apple beats earnings estimates"),
//!     ]);
//!
//!     let run = engine.analyze(vec![input]).await?;
//!     println!("{}", run.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod combiner;
pub mod config;
pub mod correlate;
pub mod dedup;
pub mod engine;
pub mod insights;
pub mod rank;
pub mod signals;

// Re-export main types for convenience
pub use aggregate::{EntitySummary, SentimentStats, SkipCounts, aggregate};
pub use combiner::{combine, combine_reading};
pub use config::{EngineConfig, EngineConfigBuilder, SignalWeights};
pub use correlate::{Alignment, CorrelationReport, PriceRelationship, correlate};
pub use dedup::deduplicate;
pub use engine::{AnalysisRun, EntityAnalysis, EntityFailure, EntityInput, SentimentEngine};
pub use insights::RunInsights;
pub use rank::{RankedReport, rank};
pub use signals::{LexiconSignal, PolarityReading, SignalAdapter, VaderSignal};

// Re-export the shared domain types
pub use sentiment_core::{
    Article, Category, CategoryThresholds, Entity, EntityCatalog, PolaritySignal, Result,
    ScoredArticle, Sector, SentimentError,
};
