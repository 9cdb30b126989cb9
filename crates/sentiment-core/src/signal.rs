//! Polarity signal trait

use crate::error::Result;

/// A text-polarity function
///
/// Implementations score a piece of text on `[-1, 1]`, where -1 is the most
/// negative and 1 the most positive reading. They must be pure: the same text
/// always yields the same polarity, so a signal can be shared across threads
/// and called from any entity's pipeline.
pub trait PolaritySignal: Send + Sync {
    /// Short identifier used in logs and errors
    fn name(&self) -> &str;

    /// Score a non-empty text
    ///
    /// Returns `SentimentError::SignalComputation` when the text cannot be
    /// scored. Never coerce a failure into a neutral 0.0.
    fn polarity(&self, text: &str) -> Result<f64>;
}
