//! Sentiment Analysis Engine
//!
//! Coordination layer: per-entity pipelines and the cross-entity gather

pub mod analysis_engine;
pub mod input;
pub mod result;

pub use analysis_engine::SentimentEngine;
pub use input::EntityInput;
pub use result::{AnalysisRun, EntityAnalysis, EntityFailure};
