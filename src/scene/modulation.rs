//! Sinusoidal swim modulation layered onto a resolved pose.
//!
//! The base curve carries the whale from entry to exit; the modulation
//! adds the gentle bob and roll that keep the glide from reading as a
//! mechanical slide.

use std::f32::consts::TAU;

use crate::animation::curve::Pose;

/// Progress-locked sinusoidal offsets applied after curve resolution.
///
/// Both waves complete a whole number of half-cycles over [0, 1] and
/// vanish at both endpoints, so modulation never breaks endpoint
/// exactness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimModulation {
    /// Vertical bob amplitude, world units.
    pub bob_amplitude: f32,
    /// Bob cycles completed across the full progress range.
    pub bob_cycles: f32,
    /// Roll amplitude added to z-rotation, radians.
    pub roll_amplitude: f32,
    /// Roll cycles completed across the full progress range.
    pub roll_cycles: f32,
}

impl SwimModulation {
    /// No modulation; the pose passes through untouched.
    pub const NONE: Self = Self {
        bob_amplitude: 0.0,
        bob_cycles: 0.0,
        roll_amplitude: 0.0,
        roll_cycles: 0.0,
    };

    /// The hero whale's glide: two bob cycles, one and a half roll
    /// cycles.
    #[must_use]
    pub fn gentle() -> Self {
        Self {
            bob_amplitude: 0.3,
            bob_cycles: 2.0,
            roll_amplitude: 0.1,
            roll_cycles: 1.5,
        }
    }

    /// Offset `pose` by the modulation waves at `progress`.
    #[must_use]
    pub fn apply(&self, mut pose: Pose, progress: f32) -> Pose {
        pose.position.y +=
            (progress * self.bob_cycles * TAU).sin() * self.bob_amplitude;
        pose.rotation.z +=
            (progress * self.roll_cycles * TAU).sin() * self.roll_amplitude;
        pose
    }
}

impl Default for SwimModulation {
    fn default() -> Self {
        Self::NONE
    }
}
