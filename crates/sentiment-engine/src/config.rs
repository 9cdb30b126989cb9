//! Configuration for sentiment analysis runs

use sentiment_core::{CategoryThresholds, Result, SentimentError};
use sentiment_utils::Settings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tolerance on the sum of the signal weights
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Blend weights for the two polarity signals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    /// Weight of the rule/lexicon signal
    pub lexicon: f64,
    /// Weight of the statistical signal
    pub statistical: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            lexicon: 0.6,
            statistical: 0.4,
        }
    }
}

impl SignalWeights {
    /// Validate the weights
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [("lexicon", self.lexicon), ("statistical", self.statistical)] {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(SentimentError::ConfigError(format!(
                    "{name} weight must be within [0, 1], got {weight}"
                )));
            }
        }

        let sum = self.lexicon + self.statistical;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SentimentError::ConfigError(format!(
                "signal weights must sum to 1, got {sum}"
            )));
        }

        Ok(())
    }
}

/// Configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Signal blend weights
    pub weights: SignalWeights,

    /// Category boundaries
    pub thresholds: CategoryThresholds,

    /// Size of the top and bottom movers lists
    pub top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            thresholds: CategoryThresholds::default(),
            top_n: 10,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.thresholds.validate()?;

        if self.top_n == 0 {
            return Err(SentimentError::ConfigError(
                "top_n must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded engine configuration from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Configuration named by the process settings, or the defaults
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        match &settings.config_path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    weights: Option<SignalWeights>,
    thresholds: Option<CategoryThresholds>,
    top_n: Option<usize>,
}

impl EngineConfigBuilder {
    /// Set the signal blend weights
    pub fn weights(mut self, lexicon: f64, statistical: f64) -> Self {
        self.weights = Some(SignalWeights {
            lexicon,
            statistical,
        });
        self
    }

    /// Set the category boundaries
    pub fn thresholds(mut self, thresholds: CategoryThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Set the movers list size
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let defaults = EngineConfig::default();

        let config = EngineConfig {
            weights: self.weights.unwrap_or(defaults.weights),
            thresholds: self.thresholds.unwrap_or(defaults.thresholds),
            top_n: self.top_n.unwrap_or(defaults.top_n),
        };

        config.validate()?;
        Ok(config)
    }
}
