//! Feature records produced by extraction.
//!
//! # Feature Vector Layout (6D)
//!
//! | Index | Feature | Unit |
//! |-------|---------|------|
//! | 0 | mean head-torso angle | degrees |
//! | 1 | std head-torso angle | degrees |
//! | 2 | mean arm angle | degrees |
//! | 3 | std arm angle | degrees |
//! | 4 | mean hip angle | degrees |
//! | 5 | std hip angle | degrees |
//!
//! Label and source identifier travel alongside the numeric features but are
//! excluded from [`SampleFeatures::to_feature_array`], which is the exact
//! vector handed to a severity classifier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimension of the statistical feature vector (always 6).
pub const FEATURE_DIM: usize = 6;

/// Joint angles computed from one frame.
///
/// Immutable after creation; one record per successfully extracted row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameAngles {
    /// Tilt of the shoulder→head vector, degrees in `(-180°, 180°]`.
    pub head_torso_angle: f64,

    /// Included angle of shoulder→elbow and elbow→wrist, degrees in `[0°, 180°]`.
    pub arm_angle: f64,

    /// Included angle of hip→shoulder and hip→knee, degrees in `[0°, 180°]`.
    pub hip_angle: f64,

    /// Class tag the sample was submitted with.
    pub label: u8,

    /// Identifier of the originating sample (typically the file name).
    pub source: String,
}

/// Mean / population-std aggregates of one sample's angle series.
///
/// This is the unit handed to the classification adapter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleFeatures {
    /// Mean of the head-torso angle series.
    pub mean_head_torso_angle: f64,
    /// Population standard deviation of the head-torso angle series.
    pub std_head_torso_angle: f64,
    /// Mean of the arm angle series.
    pub mean_arm_angle: f64,
    /// Population standard deviation of the arm angle series.
    pub std_arm_angle: f64,
    /// Mean of the hip angle series.
    pub mean_hip_angle: f64,
    /// Population standard deviation of the hip angle series.
    pub std_hip_angle: f64,
    /// Class tag the sample was submitted with.
    pub label: u8,
    /// Identifier of the originating sample.
    pub source: String,
}

impl SampleFeatures {
    /// Flatten to the fixed-order 6D classifier input.
    ///
    /// Label and source are metadata and are not part of the vector.
    #[must_use]
    pub fn to_feature_array(&self) -> [f64; FEATURE_DIM] {
        [
            self.mean_head_torso_angle,
            self.std_head_torso_angle,
            self.mean_arm_angle,
            self.std_arm_angle,
            self.mean_hip_angle,
            self.std_hip_angle,
        ]
    }

    /// Flatten to a `Vec`.
    #[must_use]
    pub fn to_feature_vec(&self) -> Vec<f64> {
        self.to_feature_array().to_vec()
    }
}
