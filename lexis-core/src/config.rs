//! Metric parameters

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default metric parameters
pub mod defaults {
    /// MTLD type-token ratio cutoff
    pub const MTLD_THRESHOLD: f64 = crate::diversity::DEFAULT_MTLD_THRESHOLD;

    /// MATTR sliding window length in tokens
    pub const MATTR_WINDOW: usize = crate::diversity::DEFAULT_MATTR_WINDOW;

    /// Sentences with fewer words are short
    pub const SHORT_SENTENCE_LT: usize = crate::sentence_stats::DEFAULT_SHORT_LT;

    /// Sentences with more words are long
    pub const LONG_SENTENCE_GT: usize = crate::sentence_stats::DEFAULT_LONG_GT;
}

/// Parameters for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub mtld_threshold: f64,
    pub mattr_window: usize,
    pub short_sentence_lt: usize,
    pub long_sentence_gt: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            mtld_threshold: defaults::MTLD_THRESHOLD,
            mattr_window: defaults::MATTR_WINDOW,
            short_sentence_lt: defaults::SHORT_SENTENCE_LT,
            long_sentence_gt: defaults::LONG_SENTENCE_GT,
        }
    }
}

impl MetricsConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.mtld_threshold > 0.0 && self.mtld_threshold < 1.0) {
            return Err(Error::Configuration(format!(
                "mtld_threshold must be between 0 and 1 (exclusive), got {}",
                self.mtld_threshold
            )));
        }

        if self.mattr_window == 0 {
            return Err(Error::Configuration(
                "mattr_window must be greater than 0".into(),
            ));
        }

        if self.short_sentence_lt > self.long_sentence_gt {
            return Err(Error::Configuration(format!(
                "short_sentence_lt ({}) must not exceed long_sentence_gt ({})",
                self.short_sentence_lt, self.long_sentence_gt
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    mtld_threshold: Option<f64>,
    mattr_window: Option<usize>,
    short_sentence_lt: Option<usize>,
    long_sentence_gt: Option<usize>,
}

impl ConfigBuilder {
    /// Set the MTLD threshold
    pub fn mtld_threshold(mut self, threshold: f64) -> Self {
        self.mtld_threshold = Some(threshold);
        self
    }

    /// Set the MATTR window length
    pub fn mattr_window(mut self, window: usize) -> Self {
        self.mattr_window = Some(window);
        self
    }

    /// Set the short sentence threshold (exclusive)
    pub fn short_sentence_lt(mut self, words: usize) -> Self {
        self.short_sentence_lt = Some(words);
        self
    }

    /// Set the long sentence threshold (exclusive)
    pub fn long_sentence_gt(mut self, words: usize) -> Self {
        self.long_sentence_gt = Some(words);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<MetricsConfig, Error> {
        let mut config = MetricsConfig::default();

        if let Some(threshold) = self.mtld_threshold {
            config.mtld_threshold = threshold;
        }
        if let Some(window) = self.mattr_window {
            config.mattr_window = window;
        }
        if let Some(words) = self.short_sentence_lt {
            config.short_sentence_lt = words;
        }
        if let Some(words) = self.long_sentence_gt {
            config.long_sentence_gt = words;
        }

        config.validate()?;
        Ok(config)
    }
}
