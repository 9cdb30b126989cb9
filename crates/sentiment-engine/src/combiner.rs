//! Blending of the two polarity readings into one article score

use crate::config::SignalWeights;
use crate::signals::PolarityReading;

/// Weighted blend of two polarities, clipped to `[-1, 1]`
///
/// Total and pure for every finite input. With the default 0.6/0.4 weights
/// the primary signal dominates and the second one corroborates.
pub fn combine(lexicon: f64, statistical: f64, weights: &SignalWeights) -> f64 {
    (weights.lexicon * lexicon + weights.statistical * statistical).clamp(-1.0, 1.0)
}

/// Blend an adapter reading
pub fn combine_reading(reading: PolarityReading, weights: &SignalWeights) -> f64 {
    combine(reading.lexicon, reading.statistical, weights)
}
