//! Angular wrap and shortest-arc helpers.
//!
//! Euler rotation tracks and the month dial both need shortest-path
//! angular motion; interpolating raw angle values jumps the long way
//! around whenever a target wraps past the ±half-turn seam.

use std::f32::consts::PI;

/// Wrap an angle in radians to the interval (-π, π].
#[must_use]
pub fn wrap_rad(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped > PI {
        wrapped - 2.0 * PI
    } else {
        wrapped
    }
}

/// Signed shortest arc in radians from `from` to `to`, in (-π, π].
#[must_use]
pub fn shortest_arc_rad(from: f32, to: f32) -> f32 {
    wrap_rad(to - from)
}

/// Interpolate between two angles in radians along the shortest arc.
///
/// `t` is expected to already be clamped/eased by the caller.
#[inline]
#[must_use]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + shortest_arc_rad(from, to) * t
}

/// Signed shortest arc in degrees from `from` to `to`, in (-180, 180].
#[must_use]
pub fn shortest_arc_deg(from: f32, to: f32) -> f32 {
    let wrapped = (to - from).rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_rad_identity_in_range() {
        assert!((wrap_rad(1.0) - 1.0).abs() < 1e-6);
        assert!((wrap_rad(-1.0) - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_rad_past_pi() {
        assert!((wrap_rad(PI + 0.1) - (-PI + 0.1)).abs() < 1e-5);
        assert!((wrap_rad(-PI - 0.1) - (PI - 0.1)).abs() < 1e-5);
        assert!((wrap_rad(3.0 * PI) - PI).abs() < 1e-5);
    }

    #[test]
    fn test_shortest_arc_crosses_seam() {
        // From just below +π to just above -π: the short way is forward.
        let from = PI - 0.1;
        let to = -PI + 0.1;
        assert!((shortest_arc_rad(from, to) - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_lerp_angle_takes_short_path() {
        let from = PI - 0.2;
        let to = -PI + 0.2;
        let mid = lerp_angle(from, to, 0.5);
        // Midpoint sits on the seam, not at zero.
        assert!((wrap_rad(mid).abs() - PI).abs() < 1e-5);
    }

    #[test]
    fn test_lerp_angle_endpoints() {
        assert!((lerp_angle(0.5, 2.0, 0.0) - 0.5).abs() < 1e-6);
        assert!((lerp_angle(0.5, 2.0, 1.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_shortest_arc_deg_wraps() {
        assert!((shortest_arc_deg(350.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((shortest_arc_deg(10.0, 350.0) - (-20.0)).abs() < 1e-4);
        assert!((shortest_arc_deg(0.0, 180.0) - 180.0).abs() < 1e-4);
    }
}
