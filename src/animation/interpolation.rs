//! Centralized interpolation primitives.
//!
//! Every controller resolves values through these helpers; call sites
//! never reimplement the blends locally.

use glam::Vec3;

use crate::util::angle::lerp_angle;

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Linear interpolation between two points.
#[inline]
#[must_use]
pub fn lerp_vec3(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start + (end - start) * t
}

/// Component-wise shortest-arc interpolation between two Euler rotations
/// in radians.
///
/// Raw linear blending jumps the long way around when an angle wraps past
/// ±π; this never does.
#[inline]
#[must_use]
pub fn lerp_euler(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    Vec3::new(
        lerp_angle(start.x, end.x, t),
        lerp_angle(start.y, end.y, t),
        lerp_angle(start.z, end.z, t),
    )
}

/// Evaluate a quadratic Bezier through `p0`, control `p1`, and `p2`.
///
/// Standard Bernstein blend: `(1−t)²·p0 + 2(1−t)t·p1 + t²·p2`.
#[inline]
#[must_use]
pub fn bezier_point(t: f32, p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn test_lerp_midpoint() {
        assert!((lerp(0.0, 100.0, 0.25) - 25.0).abs() < 1e-5);
    }

    #[test]
    fn test_lerp_vec3() {
        let result =
            lerp_vec3(Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0), 0.5);
        assert!((result - Vec3::new(5.0, 10.0, 15.0)).length() < 1e-5);
    }

    #[test]
    fn test_bezier_endpoints() {
        let p0 = Vec3::new(-10.0, -1.2, 0.0);
        let p1 = Vec3::new(3.0, -4.0, 0.0);
        let p2 = Vec3::new(10.0, -6.0, 0.0);

        assert!((bezier_point(0.0, p0, p1, p2) - p0).length() < 1e-5);
        assert!((bezier_point(1.0, p0, p1, p2) - p2).length() < 1e-5);
    }

    #[test]
    fn test_bezier_midpoint_pulls_toward_control() {
        let p0 = Vec3::new(-1.0, 0.0, 0.0);
        let p1 = Vec3::new(0.0, 2.0, 0.0);
        let p2 = Vec3::new(1.0, 0.0, 0.0);

        let mid = bezier_point(0.5, p0, p1, p2);
        // 0.25·p0 + 0.5·p1 + 0.25·p2
        assert!((mid - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_lerp_euler_wraps_short_path() {
        let start = Vec3::new(0.0, PI - 0.1, 0.0);
        let end = Vec3::new(0.0, -PI + 0.1, 0.0);
        let mid = lerp_euler(start, end, 0.5);
        // Halfway along the short arc sits at the seam, not at zero.
        assert!(mid.y.abs() > 3.0);
    }

    #[test]
    fn test_lerp_euler_plain_components() {
        let start = Vec3::new(0.0, 0.2, -0.05);
        let end = Vec3::new(0.0, -0.2, 0.05);
        let mid = lerp_euler(start, end, 0.5);
        assert!(mid.length() < 1e-5);
    }
}
