//! Sentiment analysis engine - the per-entity pipeline and the cross-entity gather

use crate::aggregate::{SkipCounts, aggregate};
use crate::combiner::combine_reading;
use crate::config::EngineConfig;
use crate::correlate::correlate;
use crate::dedup::deduplicate;
use crate::insights::RunInsights;
use crate::rank::rank;
use crate::signals::SignalAdapter;
use chrono::Utc;
use sentiment_core::{Article, Result, ScoredArticle, SentimentError};
use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::input::EntityInput;
use super::result::{AnalysisRun, EntityAnalysis, EntityFailure};

/// Runs dedup, scoring, aggregation, ranking and correlation
///
/// Cheap to clone: configuration and signals are shared. Each entity's
/// pipeline reads only its own input, so entities run as independent tasks.
#[derive(Debug, Clone)]
pub struct SentimentEngine {
    config: Arc<EngineConfig>,
    signals: SignalAdapter,
}

impl SentimentEngine {
    /// Create an engine, validating the configuration first
    pub fn new(config: EngineConfig, signals: SignalAdapter) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            signals,
        })
    }

    /// Engine with the VADER and financial lexicon signals
    pub fn with_default_signals(config: EngineConfig) -> Result<Self> {
        Self::new(config, SignalAdapter::default_signals())
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one article from its headline and summary
    pub fn score_article(&self, article: &Article) -> Result<ScoredArticle> {
        let reading = self.signals.read(&article.scoring_text())?;
        Ok(ScoredArticle {
            article: article.clone(),
            lexicon: reading.lexicon,
            statistical: reading.statistical,
            combined: combine_reading(reading, &self.config.weights),
        })
    }

    /// Run the full pipeline for one entity
    ///
    /// Unusable articles are skipped and counted; they never fail the entity.
    pub fn analyze_entity(&self, input: EntityInput) -> EntityAnalysis {
        let EntityInput {
            entity,
            articles,
            price_change,
        } = input;
        let symbol = entity.symbol.clone();
        let mut skipped = SkipCounts::default();

        let (articles, foreign): (Vec<Article>, Vec<Article>) =
            articles.into_iter().partition(|a| a.symbol == symbol);
        for article in &foreign {
            warn!(
                "Skipping article routed to {} but tagged {}: {}",
                symbol, article.symbol, article.title
            );
        }
        skipped.invalid_input += foreign.len();

        let received = articles.len();
        let articles = deduplicate(articles);
        skipped.duplicates = received - articles.len();

        let mut scored = Vec::with_capacity(articles.len());
        for article in &articles {
            match self.score_article(article) {
                Ok(s) => scored.push(s),
                Err(SentimentError::InvalidInput(reason)) => {
                    warn!("Skipping article for {}: {}", symbol, reason);
                    skipped.invalid_input += 1;
                }
                Err(e) => {
                    warn!("Skipping article for {} ({}): {}", symbol, article.title, e);
                    skipped.signal_failure += 1;
                }
            }
        }

        let summary = aggregate(&entity, &scored, &self.config.thresholds)
            .with_skipped(skipped)
            .with_price_change(price_change);

        debug!(
            "Analysed {}: {} scored, {} skipped, mean {:?}",
            symbol,
            summary.article_count,
            summary.skipped.total(),
            summary.mean()
        );

        EntityAnalysis {
            summary,
            scores: scored.iter().map(|s| s.combined).collect(),
        }
    }

    /// Analyse every entity in parallel, then rank and correlate
    ///
    /// Each entity runs on the blocking pool; the ranking waits for all of
    /// them. A task that panics is reported in `failures` and the remaining
    /// entities are still summarised.
    pub async fn analyze(&self, inputs: Vec<EntityInput>) -> Result<AnalysisRun> {
        check_unique(&inputs)?;
        info!("Starting sentiment analysis for {} entities", inputs.len());

        let (symbols, handles): (Vec<String>, Vec<_>) = inputs
            .into_iter()
            .map(|input| {
                let symbol = input.symbol().to_string();
                let engine = self.clone();
                (
                    symbol,
                    tokio::task::spawn_blocking(move || engine.analyze_entity(input)),
                )
            })
            .unzip();

        let results = futures::future::join_all(handles).await;

        let mut analyses = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (symbol, result) in symbols.into_iter().zip(results) {
            match result {
                Ok(analysis) => analyses.push(analysis),
                Err(e) => failures.push(entity_failure(symbol, e.to_string())),
            }
        }

        Ok(self.finish(analyses, failures))
    }

    /// Analyse every entity on the calling thread, then rank and correlate
    ///
    /// A panicking entity is reported in `failures`, as in `analyze`.
    pub fn analyze_sequential(&self, inputs: Vec<EntityInput>) -> Result<AnalysisRun> {
        check_unique(&inputs)?;
        info!(
            "Starting sequential sentiment analysis for {} entities",
            inputs.len()
        );

        let mut analyses = Vec::with_capacity(inputs.len());
        let mut failures = Vec::new();
        for input in inputs {
            let symbol = input.symbol().to_string();
            match panic::catch_unwind(AssertUnwindSafe(|| self.analyze_entity(input))) {
                Ok(analysis) => analyses.push(analysis),
                Err(payload) => failures.push(entity_failure(symbol, panic_message(&*payload))),
            }
        }

        Ok(self.finish(analyses, failures))
    }

    fn finish(&self, analyses: Vec<EntityAnalysis>, failures: Vec<EntityFailure>) -> AnalysisRun {
        let mut summaries = Vec::with_capacity(analyses.len());
        let mut scores = Vec::new();
        for analysis in analyses {
            scores.extend(analysis.scores);
            summaries.push(analysis.summary);
        }

        let report = rank(&summaries, self.config.top_n);
        let correlation = correlate(&summaries);
        let insights = RunInsights::build(&summaries, &scores, &self.config.thresholds);

        info!(
            "Sentiment analysis complete: {} ranked, {} without data, {} failed, {} articles",
            report.descending.len(),
            report.unranked.len(),
            failures.len(),
            insights.total_articles
        );

        AnalysisRun {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            summaries,
            report,
            correlation,
            insights,
            failures,
        }
    }
}

fn entity_failure(symbol: String, reason: String) -> EntityFailure {
    warn!("Analysis task for {} failed: {}", symbol, reason);
    EntityFailure { symbol, reason }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}

fn check_unique(inputs: &[EntityInput]) -> Result<()> {
    let mut seen = HashSet::new();
    for input in inputs {
        if !seen.insert(input.symbol()) {
            return Err(SentimentError::DuplicateEntity(input.symbol().to_string()));
        }
    }
    Ok(())
}
