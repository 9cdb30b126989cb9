//! VADER polarity signal
//!
//! VADER (Valence Aware Dictionary and sEntiment Reasoner) is a rule-based
//! analyzer tuned for short news and social text. Its compound score is
//! already normalized to `[-1, 1]`.

use sentiment_core::{PolaritySignal, Result, SentimentError};
use vader_sentiment::SentimentIntensityAnalyzer;

const SIGNAL_NAME: &str = "vader";

/// Punctuation VADER treats as emphasis
const EMPHASIS: &[char] = &['!', '?'];

/// Rule/lexicon-based polarity from VADER's compound score
pub struct VaderSignal {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderSignal {
    /// Create a new VADER signal
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    fn compound(&self, text: &str) -> Result<f64> {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .ok_or_else(|| SentimentError::signal(SIGNAL_NAME, "no compound score produced"))
    }
}

impl Default for VaderSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl PolaritySignal for VaderSignal {
    fn name(&self) -> &str {
        SIGNAL_NAME
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        let compound = self.compound(text)?;
        if compound == 0.0 || !text.contains(EMPHASIS) {
            return Ok(compound);
        }

        // Emphasis without any sentiment-bearing word reads neutral
        let bare: String = text.chars().filter(|c| !EMPHASIS.contains(c)).collect();
        if bare.trim().is_empty() || self.compound(&bare)? == 0.0 {
            return Ok(0.0);
        }
        Ok(compound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_headlines() {
        let signal = VaderSignal::new();
        for headline in [
            "Nvidia shares soar on great earnings and excellent guidance",
            "Goldman Sachs wins praise for strong, successful quarter",
        ] {
            let score = signal.polarity(headline).unwrap();
            assert!(score > 0.3, "Expected positive score for '{headline}', got {score}");
        }
    }

    #[test]
    fn test_negative_headlines() {
        let signal = VaderSignal::new();
        for headline in [
            "Bank of America hit by terrible losses and fraud scandal",
            "Zoom outage leaves angry customers, shares crash",
        ] {
            let score = signal.polarity(headline).unwrap();
            assert!(score < -0.3, "Expected negative score for '{headline}', got {score}");
        }
    }

    #[test]
    fn test_emphasis_alone_stays_neutral() {
        let signal = VaderSignal::new();
        let plain = signal.polarity("Apple unveils new iPhone").unwrap();
        assert_eq!(plain, 0.0);
        for text in [
            "Apple unveils new iPhone!",
            "Apple unveils new iPhone!!",
            "Is Apple overvalued??",
            "!!!",
        ] {
            assert_eq!(signal.polarity(text).unwrap(), plain, "'{text}' should read neutral");
        }
    }

    #[test]
    fn test_emphasis_still_amplifies_sentiment() {
        let signal = VaderSignal::new();
        let calm = signal.polarity("Nvidia posts great results").unwrap();
        let loud = signal.polarity("Nvidia posts great results!!").unwrap();
        assert!(calm > 0.0);
        assert!(loud > calm, "expected {loud} > {calm}");
    }

    #[test]
    fn test_score_is_bounded_and_deterministic() {
        let signal = VaderSignal::new();
        let text = "Spotify AMAZING!!! best quarter ever, love it, great great great";
        let first = signal.polarity(text).unwrap();
        let second = signal.polarity(text).unwrap();
        assert!((-1.0..=1.0).contains(&first));
        assert_eq!(first, second);
    }
}
