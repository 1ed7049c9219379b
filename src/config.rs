//! Configuration for sample extraction.

use crate::error::{FeatureError, Result};

/// Tunable parameters for [`extract_sample_features`].
///
/// [`extract_sample_features`]: crate::extractor::extract_sample_features
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Minimum number of successfully extracted rows a sample must yield.
    ///
    /// Below this floor the sample is rejected with
    /// [`FeatureError::InsufficientRows`] instead of producing statistics
    /// over too little data. Must be at least 1: mean and standard deviation
    /// over an empty series are undefined and never allowed to reach the
    /// classifier.
    pub min_valid_frames: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { min_valid_frames: 1 }
    }
}

impl ExtractionConfig {
    /// Validate configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidConfig`] if any parameter is out of
    /// range.
    pub fn validate(&self) -> Result<()> {
        if self.min_valid_frames < 1 {
            return Err(FeatureError::invalid_config(
                "min_valid_frames must be at least 1",
            ));
        }
        Ok(())
    }
}
