//! Basic usage example for sentiment-engine
//!
//! This example demonstrates:
//! - Reading settings and initialising logging
//! - Routing headlines to catalog entities by name and alias
//! - Running the parallel analysis
//! - Printing rankings, price agreement and the full JSON report
//!
//! Run with: cargo run --example basic_analysis
//! Set SENTIMENT_LOG_FORMAT=json for structured logs.

use sentiment_engine::{Article, EngineConfig, EntityCatalog, EntityInput, SentimentEngine};
use sentiment_utils::{Settings, init_tracing_with};
use std::collections::BTreeMap;

const HEADLINES: &[(&str, &str, &str)] = &[
    (
        "Reuters Business",
        "Apple beats earnings estimates on strong iPhone demand",
        "Revenue growth tops expectations as services hit a record",
    ),
    (
        "MarketWatch",
        "Apple beats earnings estimates on strong iPhone demand",
        "Syndicated copy of the Reuters story",
    ),
    (
        "CNBC",
        "Nvidia shares surge as GPU orders soar",
        "Data center demand lifts guidance",
    ),
    (
        "Financial Times",
        "HSBC warns of weaker profit amid rising loan losses",
        "",
    ),
    (
        "TechCrunch",
        "Zoom shares plunge after weak outlook",
        "The company cuts guidance and announces layoffs",
    ),
    (
        "VentureBeat",
        "Snowflake unveils new AI features for enterprise customers",
        "",
    ),
];

const PRICE_CHANGES: &[(&str, f64)] = &[
    ("AAPL", 1.8),
    ("NVDA", 4.2),
    ("HSBA.L", -0.9),
    ("ZM", 2.5),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing_with(settings.log_format);

    println!("=== Sentiment Engine Basic Analysis ===\n");

    // 1. Configuration
    let config = EngineConfig::from_settings(&settings)?;
    let engine = SentimentEngine::with_default_signals(config)?;
    println!("1. Engine ready: {:?}\n", engine.config().weights);

    // 2. Route headlines to the entities they mention
    let catalog = EntityCatalog::default_catalog();
    let mut inputs: BTreeMap<String, EntityInput> = catalog
        .iter()
        .map(|e| (e.symbol.clone(), EntityInput::new(e.clone())))
        .collect();

    for (source, title, summary) in HEADLINES {
        for entity in catalog.matching(title, summary) {
            if let Some(input) = inputs.get_mut(&entity.symbol) {
                input.push_article(
                    Article::new(entity.symbol.as_str(), *source, *title).with_summary(*summary),
                );
            }
        }
    }
    for (symbol, change) in PRICE_CHANGES {
        if let Some(input) = inputs.get_mut(*symbol) {
            input.price_change = Some(*change);
        }
    }

    // 3. Analyse
    let run = engine.analyze(inputs.into_values().collect()).await?;

    println!("2. Ranking");
    for (position, summary) in run.report.descending.iter().enumerate() {
        println!(
            "   {}. {:<8} {:+.3} ({} articles, {})",
            position + 1,
            summary.symbol(),
            summary.mean().unwrap_or_default(),
            summary.article_count,
            summary
                .category()
                .map(|c| c.label().to_string())
                .unwrap_or_default()
        );
    }
    println!("   {} entities without news\n", run.report.unranked.len());

    println!("3. Sentiment vs price");
    if let Some(correlation) = &run.correlation {
        for relationship in &correlation.relationships {
            println!(
                "   {:<8} sentiment {:+.3} price {:+.1}% -> {:?}",
                relationship.symbol,
                relationship.sentiment,
                relationship.price_change,
                relationship.alignment
            );
        }
    }
    println!();

    println!("4. Full report\n{}", run.to_json()?);

    Ok(())
}
