//! Five-way sentiment taxonomy and its threshold partition

use crate::error::{Result, SentimentError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sentiment categories, most negative first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl Category {
    /// All categories in ascending order
    pub const ALL: [Category; 5] = [
        Category::VeryNegative,
        Category::Negative,
        Category::Neutral,
        Category::Positive,
        Category::VeryPositive,
    ];

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryNegative => "Very Negative",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::VeryPositive => "Very Positive",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Boundaries that split the real line into the five categories
///
/// The partition is:
/// - `score > very_positive` is VeryPositive
/// - `positive < score <= very_positive` is Positive
/// - `negative <= score <= positive` is Neutral
/// - `very_negative <= score < negative` is Negative
/// - `score < very_negative` is VeryNegative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryThresholds {
    /// Scores strictly above this are VeryPositive
    pub very_positive: f64,
    /// Scores strictly above this (up to `very_positive`) are Positive
    pub positive: f64,
    /// Scores strictly below this (down to `very_negative`) are Negative
    pub negative: f64,
    /// Scores strictly below this are VeryNegative
    pub very_negative: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            very_positive: 0.3,
            positive: 0.1,
            negative: -0.1,
            very_negative: -0.3,
        }
    }
}

impl CategoryThresholds {
    /// Check the thresholds form a gap-free, non-overlapping partition
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("very_positive", self.very_positive),
            ("positive", self.positive),
            ("negative", self.negative),
            ("very_negative", self.very_negative),
        ];
        if let Some((name, value)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SentimentError::ConfigError(format!(
                "threshold {name} must be finite, got {value}"
            )));
        }

        if self.very_negative >= self.negative {
            return Err(SentimentError::ConfigError(format!(
                "very_negative ({}) must be below negative ({})",
                self.very_negative, self.negative
            )));
        }
        if self.negative > self.positive {
            return Err(SentimentError::ConfigError(format!(
                "negative ({}) must not exceed positive ({})",
                self.negative, self.positive
            )));
        }
        if self.positive >= self.very_positive {
            return Err(SentimentError::ConfigError(format!(
                "positive ({}) must be below very_positive ({})",
                self.positive, self.very_positive
            )));
        }

        Ok(())
    }

    /// Map a score to its category
    ///
    /// Total over finite scores. Callers never pass NaN: polarities are
    /// validated finite before they are combined.
    pub fn categorize(&self, score: f64) -> Category {
        if score > self.very_positive {
            Category::VeryPositive
        } else if score > self.positive {
            Category::Positive
        } else if score >= self.negative {
            Category::Neutral
        } else if score >= self.very_negative {
            Category::Negative
        } else {
            Category::VeryNegative
        }
    }
}
