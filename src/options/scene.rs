//! Scene controller options.
//!
//! Defaults describe the hero whale's glide; [`SceneOptions::compact`]
//! is the tighter small-viewport variant that keeps the whale visible
//! longer.

use std::f32::consts::PI;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::curve::TransformCurve;
use crate::error::BreachError;
use crate::scene::clip::ClipWindow;
use crate::scene::modulation::SwimModulation;
use crate::util::easing::Easing;

/// Declarative description of one scene object's progress animation:
/// an arced path, a yaw/roll sweep, a scale-up, swim modulation, and an
/// external clip window.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct SceneOptions {
    /// Path start point.
    pub start_pos: [f32; 3],
    /// Bezier control point the path bows toward.
    pub mid_pos: [f32; 3],
    /// Path end point.
    pub end_pos: [f32; 3],
    /// Rotation at progress 0, Euler radians.
    pub start_rotation: [f32; 3],
    /// Rotation at progress 1, Euler radians.
    pub end_rotation: [f32; 3],
    /// Uniform scale at progress 0.
    pub start_scale: f32,
    /// Uniform scale at progress 1.
    pub end_scale: f32,
    /// Easing over the whole sweep.
    pub easing: Easing,
    /// External clip window start fraction.
    pub clip_start: f32,
    /// External clip window end fraction.
    pub clip_end: f32,
    /// Vertical bob amplitude.
    pub bob_amplitude: f32,
    /// Bob cycles across the sweep.
    pub bob_cycles: f32,
    /// Roll amplitude, radians.
    pub roll_amplitude: f32,
    /// Roll cycles across the sweep.
    pub roll_cycles: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            start_pos: [-10.0, -1.2, 0.0],
            mid_pos: [3.0, -4.0, 0.0],
            end_pos: [10.0, -6.0, 0.0],
            start_rotation: [0.0, PI * 0.3, 0.05],
            end_rotation: [0.0, -PI * 0.3, -0.05],
            start_scale: 0.2,
            end_scale: 0.7,
            easing: Easing::Linear,
            clip_start: 0.0,
            clip_end: 0.37,
            bob_amplitude: 0.3,
            bob_cycles: 2.0,
            roll_amplitude: 0.1,
            roll_cycles: 1.5,
        }
    }
}

impl SceneOptions {
    /// Small-viewport variant: tighter path, softer turn, larger start
    /// scale.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            start_pos: [-4.0, -0.8, 0.0],
            mid_pos: [1.0, -2.5, 0.0],
            end_pos: [4.0, -3.5, 0.0],
            start_rotation: [0.0, PI * 0.2, 0.03],
            end_rotation: [0.0, -PI * 0.2, -0.03],
            start_scale: 0.25,
            end_scale: 0.6,
            ..Self::default()
        }
    }

    /// Build the single-segment transform curve these options describe.
    ///
    /// # Errors
    ///
    /// Propagates curve validation (non-finite values).
    pub fn curve(&self) -> Result<TransformCurve, BreachError> {
        TransformCurve::single(self.easing, |segment| {
            segment
                .position_arc(
                    Vec3::from(self.start_pos),
                    Vec3::from(self.mid_pos),
                    Vec3::from(self.end_pos),
                )
                .rotate(
                    Vec3::from(self.start_rotation),
                    Vec3::from(self.end_rotation),
                )
                .rescale(self.start_scale, self.end_scale)
        })
    }

    /// The swim modulation these options describe.
    #[must_use]
    pub fn modulation(&self) -> SwimModulation {
        SwimModulation {
            bob_amplitude: self.bob_amplitude,
            bob_cycles: self.bob_cycles,
            roll_amplitude: self.roll_amplitude,
            roll_cycles: self.roll_cycles,
        }
    }

    /// The external clip window these options describe.
    #[must_use]
    pub fn clip_window(&self) -> ClipWindow {
        ClipWindow::new(self.clip_start, self.clip_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curve_endpoints() {
        let curve = SceneOptions::default().curve().unwrap();
        let start = curve.resolve(0.0);
        let end = curve.resolve(1.0);

        assert!(
            (start.position - Vec3::new(-10.0, -1.2, 0.0)).length() < 1e-5
        );
        assert!(
            (end.position - Vec3::new(10.0, -6.0, 0.0)).length() < 1e-5
        );
        assert!((start.scale - 0.2).abs() < 1e-6);
        assert!((end.scale - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_compact_variant_tightens_path() {
        let options = SceneOptions::compact();
        assert!((options.start_pos[0] - (-4.0)).abs() < 1e-6);
        // Clip window and modulation carry over from the defaults.
        assert!((options.clip_end - 0.37).abs() < 1e-6);
        assert!((options.bob_amplitude - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_sweep_is_symmetric() {
        let curve = SceneOptions::default().curve().unwrap();
        let mid = curve.resolve(0.5);
        // Yaw passes through zero at the midpoint of the turn.
        assert!(mid.rotation.y.abs() < 1e-5);
    }
}
