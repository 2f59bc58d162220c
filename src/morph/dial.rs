//! Angle↔month math for the circular month selector.
//!
//! The dial itself is host UI; this module only maps pointer angles to
//! months and keeps the needle indicator from spinning the long way
//! around. All angles are in degrees.

use super::cycle::Month;
use crate::util::angle::shortest_arc_deg;

/// Month under a pointer at `angle`, where 0° is 12 o'clock and angles
/// grow clockwise (the caller normalizes its atan2 output to this frame
/// before calling).
#[must_use]
pub fn month_at_angle(angle: f32) -> Month {
    let normalized = angle.rem_euclid(360.0);
    let slot = (normalized / 360.0 * 12.0).round() as u8;
    // Rounding past November wraps back to January.
    if slot >= 12 {
        Month::JANUARY
    } else {
        Month::new(slot + 1).unwrap_or(Month::JANUARY)
    }
}

/// Screen angle of a month's marker in the standard atan2 frame
/// (0° = 3 o'clock, January at the top).
#[must_use]
pub fn angle_of(month: Month) -> f32 {
    f32::from(month.number() - 1) / 12.0 * 360.0 - 90.0
}

/// Needle angle accumulator taking the shortest arc to each new month.
///
/// Plain `rotate(angle_of(month))` snaps the long way around when the
/// selection wraps from December to January; accumulating wrapped
/// deltas keeps the motion continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationIndicator {
    angle: f32,
}

impl RotationIndicator {
    /// Indicator pointing at January.
    #[must_use]
    pub fn new() -> Self {
        Self { angle: -90.0 }
    }

    /// Rotate toward `month` along the shortest arc; returns the new
    /// accumulated needle angle.
    pub fn point_to(&mut self, month: Month) -> f32 {
        let diff = shortest_arc_deg(self.angle, angle_of(month));
        self.angle += diff;
        self.angle
    }

    /// Current accumulated needle angle.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Default for RotationIndicator {
    fn default() -> Self {
        Self::new()
    }
}
