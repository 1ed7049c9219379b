//! Angle feature extraction pipeline.
//!
//! # Pipeline Overview
//!
//! 1. Validate configuration and reject empty tables
//! 2. Per row: check the 18 keypoint cells and build a [`KeypointFrame`]
//! 3. Per row: compute head-torso, arm, and hip angles
//! 4. Skip unusable rows, recording one [`SkippedRow`] diagnostic each
//! 5. Reduce the three angle series to mean / population std
//!
//! Row-level failures are never fatal: a row whose fields cannot be read as
//! numbers is logged, reported in the result's skip list, and excluded from
//! every aggregate. A sample where fewer than the configured minimum of
//! rows survive is rejected with an explicit error so that NaN aggregates
//! can never reach the classifier.

use tracing::warn;

use crate::config::ExtractionConfig;
use crate::error::{FeatureError, Result};
use crate::features::{FrameAngles, SampleFeatures};
use crate::keypoints::KeypointFrame;
use crate::math::{head_torso_angle, included_angle, mean, population_std};
use crate::table::KeypointTable;

/// Diagnostic for one skipped row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based row index in the source table.
    pub row: usize,
    /// First column that could not be read as a number.
    pub column: &'static str,
}

/// Result of extracting one sample.
#[derive(Debug, Clone)]
pub struct SampleExtraction {
    /// Per-row angle records, in table order.
    pub row_features: Vec<FrameAngles>,
    /// Mean / population-std aggregates over the three angle series.
    pub statistical_features: SampleFeatures,
    /// Rows that failed numeric conversion and were excluded.
    pub skipped: Vec<SkippedRow>,
}

/// Compute the three joint angles for a single frame.
///
/// Paired landmarks are averaged first: the head-torso angle uses the
/// averaged head and shoulder points, the arm angle the shoulder→elbow and
/// elbow→wrist vectors, and the hip angle the hip→shoulder and hip→knee
/// vectors pivoting at the averaged hip.
///
/// Deterministic: the same frame always yields bit-identical angles.
#[must_use]
pub fn extract_frame_angles(frame: &KeypointFrame, label: u8, source: &str) -> FrameAngles {
    let head = frame.head();
    let shoulder = frame.shoulder();
    let hip = frame.hip();

    let arm_angle = included_angle(&(frame.elbow - shoulder), &(frame.wrist - frame.elbow));
    let hip_angle = included_angle(&(shoulder - hip), &(frame.knee - hip));

    FrameAngles {
        head_torso_angle: head_torso_angle(&head, &shoulder),
        arm_angle,
        hip_angle,
        label,
        source: source.to_owned(),
    }
}

/// Extract per-row angles and statistical features for one sample.
///
/// Rows are processed in table order and that order is preserved in
/// `row_features`. Membership in the aggregate is deterministic: exactly the
/// rows whose 18 fields all parse as numbers contribute.
///
/// # Errors
///
/// - [`FeatureError::EmptyTable`] if the table has no rows.
/// - [`FeatureError::InsufficientRows`] if fewer than
///   `config.min_valid_frames` rows survive extraction.
/// - [`FeatureError::InvalidConfig`] if the configuration is rejected.
pub fn extract_sample_features(
    table: &KeypointTable,
    label: u8,
    source: &str,
    config: &ExtractionConfig,
) -> Result<SampleExtraction> {
    config.validate()?;

    if table.is_empty() {
        return Err(FeatureError::EmptyTable);
    }

    let mut row_features = Vec::with_capacity(table.len());
    let mut skipped = Vec::new();
    let mut head_torso_angles = Vec::with_capacity(table.len());
    let mut arm_angles = Vec::with_capacity(table.len());
    let mut hip_angles = Vec::with_capacity(table.len());

    for (row, raw) in table.frames().iter().enumerate() {
        let values = match raw.values() {
            Ok(v) => v,
            Err(column) => {
                warn!(source, row, column, "skipping row: field not numeric");
                skipped.push(SkippedRow { row, column });
                continue;
            }
        };

        let frame = KeypointFrame::from_values(&values);
        let angles = extract_frame_angles(&frame, label, source);

        head_torso_angles.push(angles.head_torso_angle);
        arm_angles.push(angles.arm_angle);
        hip_angles.push(angles.hip_angle);
        row_features.push(angles);
    }

    if row_features.len() < config.min_valid_frames {
        return Err(FeatureError::insufficient_rows(
            source,
            row_features.len(),
            table.len(),
            config.min_valid_frames,
        ));
    }

    let (mean_head_torso_angle, std_head_torso_angle) = series_stats(&head_torso_angles);
    let (mean_arm_angle, std_arm_angle) = series_stats(&arm_angles);
    let (mean_hip_angle, std_hip_angle) = series_stats(&hip_angles);

    let statistical_features = SampleFeatures {
        mean_head_torso_angle,
        std_head_torso_angle,
        mean_arm_angle,
        std_arm_angle,
        mean_hip_angle,
        std_hip_angle,
        label,
        source: source.to_owned(),
    };

    Ok(SampleExtraction {
        row_features,
        statistical_features,
        skipped,
    })
}

/// Mean and population std of a series.
///
/// The caller guarantees a non-empty series via the `min_valid_frames`
/// floor, so the empty fallback is unreachable in practice.
fn series_stats(series: &[f64]) -> (f64, f64) {
    (
        mean(series).unwrap_or(0.0),
        population_std(series).unwrap_or(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoints::KEYPOINT_FIELDS;
    use crate::table::RawFrame;

    /// Row with every landmark at distinct positions:
    /// head (0, 1), shoulder (0, 0), elbow (1, 0), wrist (1, 1),
    /// hip (0, -1), knee (0, -2).
    fn reference_row() -> [f64; KEYPOINT_FIELDS] {
        [
            0.0, 0.0, 1.0, 1.0, // head-left, head-right at (0, 1)
            0.0, 0.0, 0.0, 0.0, // shoulders at (0, 0)
            1.0, 0.0, // elbow
            1.0, 1.0, // wrist
            0.0, -1.0, 0.0, -1.0, // hips at (0, -1)
            0.0, -2.0, // knee
        ]
    }

    fn frame_with_hole(column: usize) -> RawFrame {
        let mut cells = [None; KEYPOINT_FIELDS];
        for (i, cell) in cells.iter_mut().enumerate() {
            if i != column {
                *cell = Some(1.0);
            }
        }
        RawFrame::new(cells)
    }

    #[test]
    fn test_reference_frame_angles() {
        let frame = KeypointFrame::from_values(&reference_row());
        let angles = extract_frame_angles(&frame, 2, "ref.csv");

        // shoulder (0,0) -> head (0,1) points straight up
        assert!((angles.head_torso_angle - 90.0).abs() < 1e-9);
        // shoulder->elbow (1,0) vs elbow->wrist (0,1): perpendicular
        assert!((angles.arm_angle - 90.0).abs() < 1e-9);
        // shoulder, hip, knee collinear with hip between: straight
        assert!((angles.hip_angle - 180.0).abs() < 1e-9);
        assert_eq!(angles.label, 2);
        assert_eq!(angles.source, "ref.csv");
    }

    #[test]
    fn test_degenerate_frame_is_all_zero() {
        let frame = KeypointFrame::from_values(&[0.0; KEYPOINT_FIELDS]);
        let angles = extract_frame_angles(&frame, 0, "zero.csv");

        assert_eq!(angles.head_torso_angle, 0.0);
        assert_eq!(angles.arm_angle, 0.0);
        assert_eq!(angles.hip_angle, 0.0);
    }

    #[test]
    fn test_extractor_is_idempotent() {
        let frame = KeypointFrame::from_values(&reference_row());
        let first = extract_frame_angles(&frame, 1, "s.csv");
        let second = extract_frame_angles(&frame, 1, "s.csv");

        assert_eq!(first.head_torso_angle.to_bits(), second.head_torso_angle.to_bits());
        assert_eq!(first.arm_angle.to_bits(), second.arm_angle.to_bits());
        assert_eq!(first.hip_angle.to_bits(), second.hip_angle.to_bits());
    }

    fn numeric_frame(row: &[f64; KEYPOINT_FIELDS]) -> RawFrame {
        let mut cells = [None; KEYPOINT_FIELDS];
        for (cell, value) in cells.iter_mut().zip(row.iter()) {
            *cell = Some(*value);
        }
        RawFrame::new(cells)
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        // 5-row table with holes punched in rows 1 and 3.
        let table = KeypointTable::from_frames(vec![
            numeric_frame(&reference_row()),
            frame_with_hole(8), // kpt_9
            numeric_frame(&reference_row()),
            frame_with_hole(8),
            numeric_frame(&reference_row()),
        ]);

        let result =
            extract_sample_features(&table, 1, "mixed.csv", &ExtractionConfig::default()).unwrap();

        assert_eq!(result.row_features.len(), 3);
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.skipped[0], SkippedRow { row: 1, column: "kpt_9" });
        assert_eq!(result.skipped[1], SkippedRow { row: 3, column: "kpt_9" });
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = KeypointTable::from_rows(Vec::new());
        let err = extract_sample_features(&table, 0, "empty.csv", &ExtractionConfig::default())
            .unwrap_err();
        assert!(matches!(err, FeatureError::EmptyTable));
    }

    #[test]
    fn test_all_rows_malformed_rejected() {
        let table = KeypointTable::from_frames(vec![frame_with_hole(0), frame_with_hole(5)]);
        let err = extract_sample_features(&table, 0, "bad.csv", &ExtractionConfig::default())
            .unwrap_err();

        match err {
            FeatureError::InsufficientRows { valid, total, .. } => {
                assert_eq!(valid, 0);
                assert_eq!(total, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_min_valid_frames_floor() {
        let table = KeypointTable::from_rows(vec![reference_row(); 2]);
        let config = ExtractionConfig {
            min_valid_frames: 3,
        };
        let err = extract_sample_features(&table, 0, "short.csv", &config).unwrap_err();
        assert!(matches!(err, FeatureError::InsufficientRows { .. }));
    }

    #[test]
    fn test_aggregates_over_valid_rows_only() {
        let mut rows = vec![reference_row(); 2];
        // Second valid row with the head moved so the tilt differs.
        rows[1][2] = 0.0; // head-left y
        rows[1][3] = 0.0; // head-right y
        rows[1][0] = 1.0; // head-left x
        rows[1][1] = 1.0; // head-right x

        let mut frames: Vec<RawFrame> = rows.iter().map(numeric_frame).collect();
        frames.push(frame_with_hole(17));
        let table = KeypointTable::from_frames(frames);

        let result =
            extract_sample_features(&table, 1, "agg.csv", &ExtractionConfig::default()).unwrap();

        // Tilts are 90 and 0: mean 45, population std 45.
        let stats = &result.statistical_features;
        assert!((stats.mean_head_torso_angle - 45.0).abs() < 1e-9);
        assert!((stats.std_head_torso_angle - 45.0).abs() < 1e-9);
        assert_eq!(result.skipped.len(), 1);
    }
}
