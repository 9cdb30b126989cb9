//! End-to-end runs through the public engine API

use chrono::{TimeZone, Utc};
use sentiment_engine::{
    Alignment, Article, Category, CategoryThresholds, EngineConfig, Entity, EntityCatalog,
    EntityInput, PolaritySignal, Result, SentimentEngine, SentimentError, SentimentStats, Sector,
    SignalAdapter,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Returns a fixed polarity per headline, so both signals agree and the
/// combined score equals the table value
struct HeadlineTable(HashMap<String, f64>);

impl HeadlineTable {
    fn engine(rows: &[(&str, f64)]) -> SentimentEngine {
        let table = Arc::new(Self(
            rows.iter().map(|(t, v)| ((*t).to_string(), *v)).collect(),
        ));
        SentimentEngine::new(EngineConfig::default(), SignalAdapter::new(table.clone(), table))
            .unwrap()
    }
}

impl PolaritySignal for HeadlineTable {
    fn name(&self) -> &str {
        "headline-table"
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        self.0
            .get(text)
            .copied()
            .ok_or_else(|| SentimentError::signal("headline-table", "unknown headline"))
    }
}

fn entity(symbol: &str) -> Entity {
    Entity::new(symbol, symbol, Sector::Financial)
}

fn headlines(symbol: &str, titles: &[&str]) -> Vec<Article> {
    titles
        .iter()
        .map(|t| Article::new(symbol, "Reuters Business", *t))
        .collect()
}

#[tokio::test]
async fn test_consistently_positive_entity_is_very_positive() {
    let engine = HeadlineTable::engine(&[("beat", 0.5), ("raise", 0.4), ("record", 0.6)]);
    let input = EntityInput::new(entity("X"))
        .with_articles(headlines("X", &["beat", "raise", "record"]));

    let run = engine.analyze(vec![input]).await.unwrap();
    let summary = run.summary("X").unwrap();

    match summary.stats {
        SentimentStats::Scored {
            mean,
            min,
            max,
            category,
        } => {
            assert!((mean - 0.5).abs() < 1e-9);
            assert!((min - 0.4).abs() < 1e-9);
            assert!((max - 0.6).abs() < 1e-9);
            assert_eq!(category, Category::VeryPositive);
        }
        SentimentStats::NoData => panic!("expected a scored summary"),
    }
    assert_eq!(summary.article_count, 3);
    assert_eq!(run.report.categories[&Category::VeryPositive], vec!["X"]);
}

#[tokio::test]
async fn test_entity_without_articles_is_excluded_from_ranking() {
    let engine = HeadlineTable::engine(&[("beat", 0.5), ("miss", -0.2)]);
    let inputs = vec![
        EntityInput::new(entity("X")).with_articles(headlines("X", &["beat"])),
        EntityInput::new(entity("Y")),
        EntityInput::new(entity("Z")).with_articles(headlines("Z", &["miss"])),
    ];

    let run = engine.analyze(inputs).await.unwrap();

    let y = run.summary("Y").unwrap();
    assert_eq!(y.stats, SentimentStats::NoData);
    assert_eq!(y.article_count, 0);
    assert!(y.category().is_none());

    let ranked: Vec<&str> = run.report.descending.iter().map(|s| s.symbol()).collect();
    assert_eq!(ranked, vec!["X", "Z"]);
    assert_eq!(run.report.unranked, vec!["Y"]);
    let grouped: usize = run.report.category_counts().values().sum();
    assert_eq!(grouped, 2);
}

#[tokio::test]
async fn test_sentiment_and_price_agreement() {
    let engine = HeadlineTable::engine(&[("up", 0.5), ("down", -0.4), ("mild", 0.2)]);
    let inputs = vec![
        EntityInput::new(entity("X"))
            .with_articles(headlines("X", &["up"]))
            .with_price_change(2.0),
        EntityInput::new(entity("Z"))
            .with_articles(headlines("Z", &["down"]))
            .with_price_change(-3.0),
        EntityInput::new(entity("W"))
            .with_articles(headlines("W", &["mild"]))
            .with_price_change(-1.0),
    ];

    let run = engine.analyze(inputs).await.unwrap();
    let correlation = run.correlation.as_ref().unwrap();

    let alignment = |symbol: &str| {
        run.summary(symbol)
            .and_then(|s| s.price_relationship.as_ref())
            .map(|r| r.alignment)
    };
    assert_eq!(alignment("X"), Some(Alignment::SameDirection));
    assert_eq!(alignment("Z"), Some(Alignment::SameDirection));
    assert_eq!(alignment("W"), Some(Alignment::OppositeDirection));

    let agreeing: Vec<&str> = correlation
        .with_alignment(Alignment::SameDirection)
        .map(|r| r.symbol.as_str())
        .collect();
    assert_eq!(agreeing.len(), 2);
    assert!((correlation.agreement_ratio.unwrap() - 2.0 / 3.0).abs() < 1e-12);
}

#[tokio::test]
async fn test_syndicated_story_counts_once() {
    let engine = HeadlineTable::engine(&[
        ("Apple beats estimates", 0.4),
        ("Apple  BEATS estimates", 0.4),
    ]);
    let early = Utc.with_ymd_and_hms(2024, 5, 2, 20, 30, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 5, 2, 22, 0, 0).unwrap();

    let articles = vec![
        Article::new("AAPL", "MarketWatch", "Apple beats estimates").with_published(late),
        Article::new("AAPL", "Reuters Business", "Apple  BEATS estimates").with_published(early),
    ];
    let apple = EntityCatalog::default_catalog().get("AAPL").cloned().unwrap();

    let run = engine
        .analyze(vec![EntityInput::new(apple).with_articles(articles)])
        .await
        .unwrap();
    let summary = run.summary("AAPL").unwrap();

    assert_eq!(summary.article_count, 1);
    assert_eq!(summary.skipped.duplicates, 1);
    // the earlier copy survives
    assert_eq!(summary.sources.get("Reuters Business"), Some(&1));
    assert!(!summary.sources.contains_key("MarketWatch"));
}

#[tokio::test]
async fn test_parallel_and_sequential_runs_agree() {
    let engine = HeadlineTable::engine(&[("a", 0.3), ("b", -0.35), ("c", 0.05), ("d", 0.3)]);
    let plan: [(&str, &[&str]); 5] = [
        ("AA", &["a", "c"]),
        ("BB", &["b"]),
        ("CC", &["c", "d"]),
        ("DD", &[]),
        ("EE", &["a"]),
    ];
    let inputs: Vec<EntityInput> = plan
        .iter()
        .map(|(symbol, titles)| {
            EntityInput::new(entity(symbol)).with_articles(headlines(symbol, titles))
        })
        .collect();

    let parallel = engine.analyze(inputs.clone()).await.unwrap();
    let sequential = engine.analyze_sequential(inputs).unwrap();

    assert_eq!(parallel.summaries, sequential.summaries);
    assert_eq!(parallel.report, sequential.report);
    assert_eq!(parallel.insights, sequential.insights);
    assert_ne!(parallel.run_id, sequential.run_id);
}

#[test]
fn test_invalid_thresholds_fail_before_any_work() {
    let inverted = r#"{"thresholds": {
        "very_positive": 0.1, "positive": 0.3, "negative": -0.1, "very_negative": -0.3
    }}"#;
    let err = EngineConfig::from_json_str(inverted).unwrap_err();
    assert!(matches!(err, SentimentError::ConfigError(_)));

    let config = EngineConfig {
        thresholds: CategoryThresholds {
            very_positive: f64::NAN,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(SentimentEngine::with_default_signals(config).is_err());
}

#[tokio::test]
async fn test_default_signals_score_real_headlines() {
    let engine = SentimentEngine::with_default_signals(EngineConfig::default()).unwrap();
    let catalog = EntityCatalog::default_catalog();

    let inputs = vec![
        EntityInput::new(catalog.get("MSFT").cloned().unwrap()).with_articles(vec![
            Article::new("MSFT", "CNBC", "Microsoft posts record profit and strong growth")
                .with_summary("Cloud revenue surges as demand beats expectations"),
        ]),
        EntityInput::new(catalog.get("ZM").cloned().unwrap()).with_articles(vec![
            Article::new("ZM", "TechCrunch", "Zoom shares plunge after weak outlook")
                .with_summary("Losses widen and the company warns of layoffs"),
        ]),
    ];

    let run = engine.analyze(inputs).await.unwrap();
    let msft = run.summary("MSFT").unwrap().mean().unwrap();
    let zm = run.summary("ZM").unwrap().mean().unwrap();
    assert!(msft > 0.0, "expected positive sentiment, got {msft}");
    assert!(zm < 0.0, "expected negative sentiment, got {zm}");
    assert_eq!(run.report.most_positive().unwrap().symbol(), "MSFT");
}
