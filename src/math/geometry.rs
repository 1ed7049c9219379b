//! Planar angle primitives.
//!
//! Pure functions over 2D points and vectors. Degenerate inputs never panic
//! and never produce NaN: coincident points and zero-magnitude vectors both
//! resolve to 0°.

use nalgebra::{Point2, Vector2};

/// Midpoint of two planar points.
#[must_use]
pub fn midpoint(a: &Point2<f64>, b: &Point2<f64>) -> Point2<f64> {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Tilt of the shoulder→head vector in degrees.
///
/// Computed as `atan2(Δy, Δx)` and converted to degrees, so the result lies
/// in `(-180°, 180°]`. Coincident points yield 0° through the `atan2(0, 0)`
/// convention; this is the documented behavior, not a special case.
#[must_use]
pub fn head_torso_angle(head: &Point2<f64>, shoulder: &Point2<f64>) -> f64 {
    let delta = head - shoulder;
    delta.y.atan2(delta.x).to_degrees()
}

/// Angle between two vectors in degrees, in `[0°, 180°]`.
///
/// Uses the dot-product formula `acos(a·b / (|a||b|))` with the cosine
/// clamped to `[-1, 1]` to guard against floating-point overshoot. If either
/// vector has zero magnitude the angle is 0°.
///
/// Anchor selection is up to the caller: the arm angle uses the
/// shoulder→elbow and elbow→wrist vectors, the hip angle uses the
/// hip→shoulder and hip→knee vectors (both pivoting at the averaged hip).
#[must_use]
pub fn included_angle(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    let mag_a = a.norm();
    let mag_b = b.norm();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    let cos_angle = (a.dot(b) / (mag_a * mag_b)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coincident_points_zero_tilt() {
        let p = Point2::new(3.5, -1.25);
        assert_eq!(head_torso_angle(&p, &p), 0.0);
    }

    #[test]
    fn test_tilt_quadrants() {
        let origin = Point2::new(0.0, 0.0);
        assert!((head_torso_angle(&Point2::new(1.0, 0.0), &origin)).abs() < 1e-12);
        assert!((head_torso_angle(&Point2::new(0.0, 1.0), &origin) - 90.0).abs() < 1e-12);
        assert!((head_torso_angle(&Point2::new(-1.0, 0.0), &origin) - 180.0).abs() < 1e-12);
        assert!((head_torso_angle(&Point2::new(0.0, -1.0), &origin) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_magnitude_returns_zero() {
        let zero = Vector2::new(0.0, 0.0);
        let v = Vector2::new(2.0, -1.0);
        assert_eq!(included_angle(&zero, &v), 0.0);
        assert_eq!(included_angle(&v, &zero), 0.0);
        assert_eq!(included_angle(&zero, &zero), 0.0);
    }

    #[test]
    fn test_perpendicular_vectors() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert!((included_angle(&a, &b) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = Vector2::new(0.0, 1.0);
        let b = Vector2::new(0.0, -1.0);
        assert!((included_angle(&a, &b) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_result_in_range() {
        let vectors = [
            Vector2::new(1.0, 0.0),
            Vector2::new(-3.0, 4.0),
            Vector2::new(0.001, -0.002),
            Vector2::new(1e9, 1e9),
            Vector2::new(-7.0, -0.5),
        ];
        for a in &vectors {
            for b in &vectors {
                let angle = included_angle(a, b);
                assert!((0.0..=180.0).contains(&angle), "angle out of range: {angle}");
            }
        }
    }

    #[test]
    fn test_clamp_guards_parallel_vectors() {
        // Parallel vectors can push the cosine slightly past 1; the clamp
        // keeps acos in domain but rounding leaves a sub-1e-4-degree angle.
        let a = Vector2::new(0.1, 0.2);
        let b = Vector2::new(0.3, 0.6);
        let angle = included_angle(&a, &b);
        assert!(angle.is_finite());
        assert!(angle < 1e-4);
    }

    #[test]
    fn test_midpoint() {
        let a = Point2::new(0.0, 4.0);
        let b = Point2::new(2.0, -4.0);
        assert_eq!(midpoint(&a, &b), Point2::new(1.0, 0.0));
    }
}
