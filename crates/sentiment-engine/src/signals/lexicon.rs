//! Averaged word-polarity signal over a financial lexicon
//!
//! Each sentiment-bearing word contributes its lexicon polarity, scaled by a
//! preceding intensifier and damped and flipped (`x -0.5`) by a preceding
//! negation. The text polarity is the mean of those contributions, so a long
//! summary does not outweigh a short headline just by being longer.

use sentiment_core::{PolaritySignal, Result, SentimentError};
use std::collections::HashMap;

const SIGNAL_NAME: &str = "lexicon";

/// Multiplier applied to a negated word
const NEGATION_FACTOR: f64 = -0.5;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("bullish", 0.8),
    ("surge", 0.7),
    ("surges", 0.7),
    ("surged", 0.7),
    ("rally", 0.7),
    ("rallies", 0.7),
    ("soar", 0.8),
    ("soars", 0.8),
    ("soared", 0.8),
    ("gain", 0.5),
    ("gains", 0.5),
    ("profit", 0.6),
    ("profits", 0.6),
    ("profitable", 0.6),
    ("growth", 0.6),
    ("grow", 0.5),
    ("grows", 0.5),
    ("rise", 0.5),
    ("rises", 0.5),
    ("climb", 0.5),
    ("climbs", 0.5),
    ("increase", 0.5),
    ("improve", 0.5),
    ("improves", 0.5),
    ("outperform", 0.7),
    ("beat", 0.6),
    ("beats", 0.6),
    ("exceed", 0.6),
    ("exceeds", 0.6),
    ("strong", 0.5),
    ("stronger", 0.5),
    ("positive", 0.5),
    ("optimistic", 0.6),
    ("confident", 0.5),
    ("record", 0.6),
    ("upgrade", 0.6),
    ("upgraded", 0.6),
    ("breakout", 0.6),
    ("momentum", 0.4),
    ("recovery", 0.5),
    ("rebound", 0.5),
    ("success", 0.7),
    ("successful", 0.7),
    ("win", 0.6),
    ("wins", 0.6),
    ("expand", 0.4),
    ("expands", 0.4),
    ("partnership", 0.3),
    ("innovative", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("best", 1.0),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bearish", -0.8),
    ("crash", -0.9),
    ("crashes", -0.9),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("plunged", -0.8),
    ("drop", -0.6),
    ("drops", -0.6),
    ("fall", -0.5),
    ("falls", -0.5),
    ("slump", -0.6),
    ("slumps", -0.6),
    ("decline", -0.6),
    ("declines", -0.6),
    ("loss", -0.6),
    ("losses", -0.6),
    ("decrease", -0.5),
    ("weak", -0.5),
    ("weaker", -0.5),
    ("negative", -0.5),
    ("pessimistic", -0.6),
    ("concern", -0.5),
    ("concerns", -0.5),
    ("worry", -0.5),
    ("fear", -0.6),
    ("fears", -0.6),
    ("risk", -0.4),
    ("volatile", -0.3),
    ("uncertainty", -0.5),
    ("miss", -0.6),
    ("misses", -0.6),
    ("disappoint", -0.7),
    ("disappointing", -0.7),
    ("underperform", -0.6),
    ("downgrade", -0.6),
    ("downgraded", -0.6),
    ("layoffs", -0.6),
    ("lawsuit", -0.6),
    ("outage", -0.5),
    ("breach", -0.7),
    ("crisis", -0.8),
    ("warning", -0.5),
    ("trouble", -0.6),
    ("problem", -0.5),
    ("fail", -0.7),
    ("fails", -0.7),
    ("scandal", -0.8),
    ("fraud", -0.9),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("worst", -1.0),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "cannot", "cant", "can't", "don't", "dont",
    "doesn't", "doesnt", "didn't", "didnt", "won't", "wont", "isn't", "isnt", "aren't", "arent",
    "wasn't", "wasnt", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("significantly", 1.3),
    ("sharply", 1.4),
    ("dramatically", 1.5),
    ("massively", 1.5),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("marginally", 0.5),
];

/// Financial lexicon scorer averaging per-word polarities
#[derive(Debug, Clone)]
pub struct LexiconSignal {
    words: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconSignal {
    /// Create a lexicon signal with the built-in financial vocabulary
    pub fn new() -> Self {
        Self {
            words: POSITIVE_WORDS
                .iter()
                .chain(NEGATIVE_WORDS)
                .copied()
                .collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Add or override a word's polarity
    pub fn with_word(mut self, word: &'static str, polarity: f64) -> Self {
        self.words.insert(word, polarity.clamp(-1.0, 1.0));
        self
    }

    fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
            .map(|t| t.trim_matches(|c: char| c == '\'' || c == '-').to_lowercase())
            .filter(|t| !t.is_empty())
    }
}

impl Default for LexiconSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl PolaritySignal for LexiconSignal {
    fn name(&self) -> &str {
        SIGNAL_NAME
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        if text.chars().any(|c| c == '\u{FFFD}') {
            return Err(SentimentError::signal(
                SIGNAL_NAME,
                "text contains replacement characters from a lossy decode",
            ));
        }

        let mut contributions = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0;

        for token in Self::tokens(text) {
            if NEGATIONS.contains(&token.as_str()) {
                negated = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(token.as_str()) {
                intensity *= factor;
                continue;
            }

            if let Some(polarity) = self.words.get(token.as_str()) {
                let mut value = polarity * intensity;
                if negated {
                    value *= NEGATION_FACTOR;
                }
                contributions.push(value.clamp(-1.0, 1.0));
            }

            negated = false;
            intensity = 1.0;
        }

        if contributions.is_empty() {
            return Ok(0.0);
        }

        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}
