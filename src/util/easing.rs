//! Easing functions for animation interpolation.
//!
//! One shared palette used by every controller in the crate. The morph
//! cross-fade runs linear; transform curves typically decelerate into
//! their final pose with [`Easing::EaseOutCubic`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve variants selectable per curve segment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// No easing.
    #[default]
    Linear,
    /// `t²(3−2t)` — zero first derivative at both ends. Use where a
    /// cycle must start and end at rest.
    Smoothstep,
    /// `1−(1−t)³` — fast start, slow finish. Use where a moving object
    /// decelerates into a final pose.
    EaseOutCubic,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
}

impl Easing {
    /// Evaluate the easing curve at time `t`.
    ///
    /// Input is clamped to [0.0, 1.0]; the result stays in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(Easing::Linear.evaluate(0.0), 0.0);
        assert_eq!(Easing::Linear.evaluate(0.5), 0.5);
        assert_eq!(Easing::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_smoothstep_endpoints_and_midpoint() {
        assert_eq!(Easing::Smoothstep.evaluate(0.0), 0.0);
        assert_eq!(Easing::Smoothstep.evaluate(1.0), 1.0);
        // Symmetric around the midpoint.
        assert!((Easing::Smoothstep.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smoothstep_rests_at_ends() {
        // Near-zero slope at both ends: values hug the endpoints.
        assert!(Easing::Smoothstep.evaluate(0.01) < 0.001);
        assert!(Easing::Smoothstep.evaluate(0.99) > 0.999);
    }

    #[test]
    fn test_ease_out_cubic_shape() {
        let e = Easing::EaseOutCubic;
        assert_eq!(e.evaluate(0.0), 0.0);
        assert!((e.evaluate(1.0) - 1.0).abs() < 1e-6);
        // Ease-out: early progress outruns linear.
        assert!(e.evaluate(0.25) > 0.25);
        // 1 - 0.5³ = 0.875
        assert!((e.evaluate(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_pair() {
        assert_eq!(Easing::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(Easing::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_input_clamping() {
        for e in [
            Easing::Linear,
            Easing::Smoothstep,
            Easing::EaseOutCubic,
            Easing::QuadraticIn,
            Easing::QuadraticOut,
        ] {
            assert_eq!(e.evaluate(-0.5), e.evaluate(0.0));
            assert_eq!(e.evaluate(1.5), e.evaluate(1.0));
        }
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(Easing::default(), Easing::Linear);
    }
}
