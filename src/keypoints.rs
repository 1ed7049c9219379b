//! Fixed-size keypoint schema for a single video frame.
//!
//! Each frame carries nine 2D anatomical landmarks flattened into 18 numeric
//! fields named `kpt_1`..`kpt_18`. The column-to-landmark mapping is fixed:
//!
//! | Landmark | x column | y column |
//! |----------|----------|----------|
//! | head-left | `kpt_1` | `kpt_3` |
//! | head-right | `kpt_2` | `kpt_4` |
//! | shoulder-left | `kpt_5` | `kpt_7` |
//! | shoulder-right | `kpt_6` | `kpt_8` |
//! | elbow | `kpt_9` | `kpt_10` |
//! | wrist | `kpt_11` | `kpt_12` |
//! | hip-left | `kpt_13` | `kpt_14` |
//! | hip-right | `kpt_15` | `kpt_16` |
//! | knee | `kpt_17` | `kpt_18` |
//!
//! Paired left/right landmarks (head, shoulder, hip) are averaged into a
//! single point before any angle is computed; elbow, wrist, and knee are
//! used directly.

use nalgebra::Point2;

use crate::math::geometry::midpoint;

/// Number of numeric keypoint fields per frame.
pub const KEYPOINT_FIELDS: usize = 18;

/// Required column names, in field order.
pub const KEYPOINT_COLUMNS: [&str; KEYPOINT_FIELDS] = [
    "kpt_1", "kpt_2", "kpt_3", "kpt_4", "kpt_5", "kpt_6", "kpt_7", "kpt_8", "kpt_9", "kpt_10",
    "kpt_11", "kpt_12", "kpt_13", "kpt_14", "kpt_15", "kpt_16", "kpt_17", "kpt_18",
];

/// Nine named landmarks of one validated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeypointFrame {
    /// Left head landmark.
    pub head_left: Point2<f64>,
    /// Right head landmark.
    pub head_right: Point2<f64>,
    /// Left shoulder landmark.
    pub shoulder_left: Point2<f64>,
    /// Right shoulder landmark.
    pub shoulder_right: Point2<f64>,
    /// Elbow landmark (single, no left/right pair).
    pub elbow: Point2<f64>,
    /// Wrist landmark (single).
    pub wrist: Point2<f64>,
    /// Left hip landmark.
    pub hip_left: Point2<f64>,
    /// Right hip landmark.
    pub hip_right: Point2<f64>,
    /// Knee landmark (single).
    pub knee: Point2<f64>,
}

impl KeypointFrame {
    /// Build a frame from the 18 fields in `kpt_1`..`kpt_18` order.
    #[must_use]
    pub fn from_values(v: &[f64; KEYPOINT_FIELDS]) -> Self {
        Self {
            head_left: Point2::new(v[0], v[2]),
            head_right: Point2::new(v[1], v[3]),
            shoulder_left: Point2::new(v[4], v[6]),
            shoulder_right: Point2::new(v[5], v[7]),
            elbow: Point2::new(v[8], v[9]),
            wrist: Point2::new(v[10], v[11]),
            hip_left: Point2::new(v[12], v[13]),
            hip_right: Point2::new(v[14], v[15]),
            knee: Point2::new(v[16], v[17]),
        }
    }

    /// Averaged head position.
    #[must_use]
    pub fn head(&self) -> Point2<f64> {
        midpoint(&self.head_left, &self.head_right)
    }

    /// Averaged shoulder position.
    #[must_use]
    pub fn shoulder(&self) -> Point2<f64> {
        midpoint(&self.shoulder_left, &self.shoulder_right)
    }

    /// Averaged hip position, the pivot for the hip angle.
    #[must_use]
    pub fn hip(&self) -> Point2<f64> {
        midpoint(&self.hip_left, &self.hip_right)
    }
}
