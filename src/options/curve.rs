//! Declarative multi-segment curve descriptions.
//!
//! Where [`super::SceneOptions`] covers the common one-segment glide,
//! `CurveSpec` expresses arbitrary segmented curves as data — hold
//! phases, turns, per-segment easing — and compiles them through the
//! same validated builder.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::curve::{Segment, TransformCurve};
use crate::error::BreachError;
use crate::util::easing::Easing;

/// Position track description for one segment.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
pub struct PositionSpec {
    /// Start point.
    pub from: [f32; 3],
    /// Optional Bezier control point; straight line when absent.
    #[serde(default)]
    pub via: Option<[f32; 3]>,
    /// End point.
    pub to: [f32; 3],
}

/// Rotation track description, in degrees for config ergonomics.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
pub struct RotationSpec {
    /// Start rotation, Euler degrees.
    pub from_deg: [f32; 3],
    /// End rotation, Euler degrees.
    pub to_deg: [f32; 3],
}

/// Uniform scale track description.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema,
)]
pub struct ScaleSpec {
    /// Start scale.
    pub from: f32,
    /// End scale.
    pub to: f32,
}

/// One declarative segment.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
pub struct SegmentSpec {
    /// Right breakpoint; the final segment's must be 1.0.
    pub until: f32,
    /// Easing within this segment.
    #[serde(default)]
    pub easing: Easing,
    /// Optional position motion.
    #[serde(default)]
    pub position: Option<PositionSpec>,
    /// Optional rotation motion.
    #[serde(default)]
    pub rotation: Option<RotationSpec>,
    /// Optional scale motion.
    #[serde(default)]
    pub scale: Option<ScaleSpec>,
}

/// Declarative curve: an ordered list of segments.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
pub struct CurveSpec {
    /// Segments in breakpoint order.
    pub segments: Vec<SegmentSpec>,
}

impl CurveSpec {
    /// Compile into a validated [`TransformCurve`].
    ///
    /// # Errors
    ///
    /// Propagates all curve validation (breakpoint layout, finiteness).
    pub fn build(&self) -> Result<TransformCurve, BreachError> {
        let segments = self
            .segments
            .iter()
            .map(|spec| {
                let mut segment = Segment::new(spec.until, spec.easing);
                if let Some(position) = &spec.position {
                    segment = match position.via {
                        Some(via) => segment.position_arc(
                            Vec3::from(position.from),
                            Vec3::from(via),
                            Vec3::from(position.to),
                        ),
                        None => segment.position_line(
                            Vec3::from(position.from),
                            Vec3::from(position.to),
                        ),
                    };
                }
                if let Some(rotation) = &spec.rotation {
                    segment = segment.rotate(
                        degrees_to_radians(rotation.from_deg),
                        degrees_to_radians(rotation.to_deg),
                    );
                }
                if let Some(scale) = &spec.scale {
                    segment = segment.rescale(scale.from, scale.to);
                }
                segment
            })
            .collect();

        TransformCurve::new(segments)
    }
}

fn degrees_to_radians(degrees: [f32; 3]) -> Vec3 {
    Vec3::new(
        degrees[0].to_radians(),
        degrees[1].to_radians(),
        degrees[2].to_radians(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_phase_spec_from_toml() {
        let spec: CurveSpec = toml::from_str(
            r#"
            [[segments]]
            until = 0.45

            [[segments]]
            until = 0.75
            easing = "smoothstep"
            rotation = { from_deg = [0.0, 60.0, 0.0], to_deg = [0.0, -60.0, 0.0] }

            [[segments]]
            until = 1.0
            "#,
        )
        .unwrap();

        let curve = spec.build().unwrap();
        let turn_start = curve.resolve(0.45);
        let turn_end = curve.resolve(0.75);

        assert!((turn_start.rotation.y.to_degrees() - 60.0).abs() < 1e-3);
        assert!((turn_end.rotation.y.to_degrees() + 60.0).abs() < 1e-3);
        // Hold segments pin the rotation on both sides.
        assert!(
            (curve.resolve(0.9).rotation.y.to_degrees() + 60.0).abs()
                < 1e-3
        );
    }

    #[test]
    fn test_invalid_spec_rejected_at_build() {
        let spec = CurveSpec {
            segments: vec![SegmentSpec {
                until: 0.5,
                easing: Easing::Linear,
                position: None,
                rotation: None,
                scale: None,
            }],
        };
        assert!(spec.build().is_err());
    }

    #[test]
    fn test_bezier_position_spec() {
        let spec = CurveSpec {
            segments: vec![SegmentSpec {
                until: 1.0,
                easing: Easing::EaseOutCubic,
                position: Some(PositionSpec {
                    from: [-1.0, 0.0, 0.0],
                    via: Some([0.0, 2.0, 0.0]),
                    to: [1.0, 0.0, 0.0],
                }),
                rotation: None,
                scale: None,
            }],
        };

        let curve = spec.build().unwrap();
        let mid = curve.resolve(0.5);
        // The arc bows toward the control point.
        assert!(mid.position.y > 0.5);
    }
}
