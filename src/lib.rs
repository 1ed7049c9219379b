//! Posture Severity Features
//!
//! Joint-angle feature extraction for severity classification of 2D
//! body-keypoint sequences.
//!
//! Each video frame arrives as 18 numeric keypoint fields (`kpt_1`..
//! `kpt_18`, nine 2D landmarks). The pipeline derives three joint angles per
//! frame (head-torso tilt, arm flexion, hip flexion), tolerates and skips
//! malformed rows, and reduces each angle series to mean / population
//! standard deviation. The resulting 6D feature vector feeds a small
//! feed-forward classifier producing one of four severity classes.
//!
//! # Features
//!
//! - **Degenerate-safe geometry**: coincident points and zero-magnitude
//!   vectors resolve to 0°, never NaN
//! - **Row fault tolerance**: rows with unparseable fields are skipped and
//!   reported as diagnostics, never fatal
//! - **Explicit insufficiency**: samples without enough usable rows are
//!   rejected with an error instead of producing NaN aggregates
//! - **Fixed schema**: column names resolved once at ingestion
//!
//! # Quick Start
//!
//! ```
//! use posture_severity::{extract_sample_features, ExtractionConfig, KeypointTable};
//!
//! let rows = vec![[
//!     0.0, 0.0, 1.0, 1.0, // head landmarks
//!     0.0, 0.0, 0.0, 0.0, // shoulder landmarks
//!     1.0, 0.0, // elbow
//!     1.0, 1.0, // wrist
//!     0.0, -1.0, 0.0, -1.0, // hip landmarks
//!     0.0, -2.0, // knee
//! ]];
//! let table = KeypointTable::from_rows(rows);
//!
//! let extraction =
//!     extract_sample_features(&table, 1, "session_01.csv", &ExtractionConfig::default())?;
//!
//! // Get the 6D statistical feature vector for classification
//! let features = extraction.statistical_features.to_feature_array();
//! assert_eq!(features.len(), 6);
//! # Ok::<(), posture_severity::FeatureError>(())
//! ```
//!
//! # Feature Vector
//!
//! | Index | Feature |
//! |-------|---------|
//! | 0 | mean head-torso angle |
//! | 1 | std head-torso angle |
//! | 2 | mean arm angle |
//! | 3 | std arm angle |
//! | 4 | mean hip angle |
//! | 5 | std hip angle |
//!
//! Label and source identifier ride alongside the vector as metadata and
//! are excluded from classifier input.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod extractor;
pub mod features;
pub mod keypoints;
pub mod math;
pub mod table;

// Re-exports for convenient access
pub use classifier::{DenseLayer, DenseNetwork, Severity, SeverityClassifier, NUM_CLASSES};
pub use config::ExtractionConfig;
pub use error::{FeatureError, Result};
pub use extractor::{extract_frame_angles, extract_sample_features, SampleExtraction, SkippedRow};
pub use features::{FrameAngles, SampleFeatures, FEATURE_DIM};
pub use keypoints::{KeypointFrame, KEYPOINT_COLUMNS, KEYPOINT_FIELDS};
pub use table::{KeypointTable, RawFrame};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
