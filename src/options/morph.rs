//! Month-morph controller options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::phase::PhaseClock;
use crate::error::BreachError;
use crate::morph::cycle::Month;

/// User-tunable morph settings, mirroring the settings panel: fade
/// speed plus heat intensity/radius multipliers.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct MorphOptions {
    /// Fade duration in milliseconds. Values below the clock minimum
    /// are clamped with a warning.
    pub duration_ms: u64,
    /// 1-based starting month.
    pub start_month: u8,
    /// Heat intensity multiplier (1.0 = base ramp).
    pub intensity_scale: f32,
    /// Heat radius multiplier (1.0 = base ramp).
    pub radius_scale: f32,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            start_month: 1,
            intensity_scale: 1.0,
            radius_scale: 1.0,
        }
    }
}

impl MorphOptions {
    /// Fade duration, clamped to the clock's minimum so a zero from an
    /// external settings source can never divide by zero downstream.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let requested = Duration::from_millis(self.duration_ms);
        if requested < PhaseClock::MIN_DURATION {
            log::warn!(
                "morph duration {}ms below minimum; clamping",
                self.duration_ms
            );
            PhaseClock::MIN_DURATION
        } else {
            requested
        }
    }

    /// Validated starting month.
    ///
    /// # Errors
    ///
    /// Rejects month numbers outside 1..=12.
    pub fn start_month(&self) -> Result<Month, BreachError> {
        Month::new(self.start_month).ok_or_else(|| {
            BreachError::Config(format!(
                "start month must be 1..=12, got {}",
                self.start_month
            ))
        })
    }
}
