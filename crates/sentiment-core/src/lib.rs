//! Core domain types for news sentiment scoring
//!
//! This crate defines the data model shared by the sentiment engine: tracked
//! entities and their catalog, articles, the five-way sentiment taxonomy,
//! the polarity signal trait and the error type.

pub mod article;
pub mod category;
pub mod entity;
pub mod error;
pub mod signal;

pub use article::{Article, ScoredArticle};
pub use category::{Category, CategoryThresholds};
pub use entity::{Entity, EntityCatalog, Sector};
pub use error::{Result, SentimentError};
pub use signal::PolaritySignal;
