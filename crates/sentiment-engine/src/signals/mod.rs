//! Polarity signals and the adapter that reads both for one text
//!
//! - `VaderSignal`: rule/lexicon-based VADER compound score (primary signal)
//! - `LexiconSignal`: averaged word-polarity over a financial lexicon
//!   (corroborating signal)

pub mod lexicon;
pub mod vader;

pub use lexicon::LexiconSignal;
pub use vader::VaderSignal;

use sentiment_core::{PolaritySignal, Result, SentimentError};
use std::fmt;
use std::sync::Arc;

/// Both polarity readings for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityReading {
    /// Reading of the rule/lexicon signal
    pub lexicon: f64,
    /// Reading of the statistical signal
    pub statistical: f64,
}

/// Wraps the two independent signals behind one interface
#[derive(Clone)]
pub struct SignalAdapter {
    lexicon: Arc<dyn PolaritySignal>,
    statistical: Arc<dyn PolaritySignal>,
}

impl SignalAdapter {
    /// Create an adapter over two signals
    pub fn new(lexicon: Arc<dyn PolaritySignal>, statistical: Arc<dyn PolaritySignal>) -> Self {
        Self {
            lexicon,
            statistical,
        }
    }

    /// VADER as the primary signal, the financial lexicon as the second
    pub fn default_signals() -> Self {
        Self::new(Arc::new(VaderSignal::new()), Arc::new(LexiconSignal::new()))
    }

    /// Read both polarities for a text
    ///
    /// Empty or whitespace-only text is `InvalidInput`. A signal error, or a
    /// reading that is not a finite value in `[-1, 1]`, is `SignalComputation`.
    pub fn read(&self, text: &str) -> Result<PolarityReading> {
        if text.trim().is_empty() {
            return Err(SentimentError::InvalidInput(
                "text is empty or whitespace only".to_string(),
            ));
        }

        Ok(PolarityReading {
            lexicon: checked(self.lexicon.as_ref(), text)?,
            statistical: checked(self.statistical.as_ref(), text)?,
        })
    }
}

impl fmt::Debug for SignalAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalAdapter")
            .field("lexicon", &self.lexicon.name())
            .field("statistical", &self.statistical.name())
            .finish()
    }
}

fn checked(signal: &dyn PolaritySignal, text: &str) -> Result<f64> {
    let value = signal.polarity(text)?;
    if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
        return Err(SentimentError::signal(
            signal.name(),
            format!("polarity {value} outside [-1, 1]"),
        ));
    }
    Ok(value)
}
