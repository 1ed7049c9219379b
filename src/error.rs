//! Error types for keypoint feature extraction.
//!
//! Two tiers exist in the pipeline: row-level failures are recoverable and
//! never surface here (they become skip diagnostics on the extraction
//! result), while sample-level failures are reported through
//! [`FeatureError`].

use thiserror::Error;

/// Main error type for feature extraction and classification.
#[derive(Error, Debug)]
pub enum FeatureError {
    /// A required keypoint column is absent from the table header.
    #[error("Missing required column: {name}")]
    MissingColumn { name: String },

    /// The table holds no rows at all.
    #[error("Table contains no rows")]
    EmptyTable,

    /// Too few rows survived extraction for the aggregate to be meaningful.
    ///
    /// The field holding the sample identifier must not be called `source`:
    /// thiserror reserves that name for an underlying error cause.
    #[error(
        "Insufficient usable rows in sample {sample}: {valid} of {total} extracted, need {min}"
    )]
    InsufficientRows {
        sample: String,
        valid: usize,
        total: usize,
        min: usize,
    },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Classifier layer dimensions do not chain.
    #[error("Layer shape mismatch: expected {expected} inputs, got {actual}")]
    LayerShapeMismatch { expected: usize, actual: usize },

    /// CSV ingestion failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for feature extraction operations.
pub type Result<T> = std::result::Result<T, FeatureError>;

impl FeatureError {
    /// Create a missing column error.
    #[must_use]
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn { name: name.into() }
    }

    /// Create an insufficient rows error.
    #[must_use]
    pub fn insufficient_rows(
        sample: impl Into<String>,
        valid: usize,
        total: usize,
        min: usize,
    ) -> Self {
        Self::InsufficientRows {
            sample: sample.into(),
            valid,
            total,
            min,
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a layer shape mismatch error.
    #[must_use]
    pub const fn layer_shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::LayerShapeMismatch { expected, actual }
    }
}
