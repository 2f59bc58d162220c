//! Clock-driven phase state.
//!
//! Converts injected frame timestamps into a normalized [0,1] phase.
//! The clock never reads wall time itself; hosts pass `Instant`s in, so
//! playback is fully deterministic under test.

use web_time::{Duration, Instant};

use crate::error::BreachError;

/// One tick's worth of phase progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Phase in [0, 1] after this tick.
    pub phase: f32,
    /// Raised exactly once per cycle, on the tick that reaches phase 1.
    pub completed: bool,
}

/// Phase state advanced by host-supplied timestamps.
///
/// Lifecycle: [`start`](Self::start) marks the clock running with the
/// reference timestamp unset; the first [`tick`](Self::tick) latches its
/// timestamp as the cycle origin; [`rearm`](Self::rearm) begins the next
/// cycle; [`stop`](Self::stop) freezes the last computed phase.
#[derive(Debug, Clone)]
pub struct PhaseClock {
    duration: Duration,
    started_at: Option<Instant>,
    running: bool,
    phase: f32,
    completed: bool,
}

impl PhaseClock {
    /// Smallest accepted cycle duration. Anything below this is a
    /// configuration error; durations are clamped here at the options
    /// boundary before reaching the constructor.
    pub const MIN_DURATION: Duration = Duration::from_millis(1);

    /// Create a stopped clock with the given cycle duration.
    ///
    /// # Errors
    ///
    /// Rejects durations below [`Self::MIN_DURATION`] — an unvalidated
    /// zero would divide by zero on the first tick.
    pub fn new(duration: Duration) -> Result<Self, BreachError> {
        Self::validate_duration(duration)?;
        Ok(Self {
            duration,
            started_at: None,
            running: false,
            phase: 0.0,
            completed: false,
        })
    }

    fn validate_duration(duration: Duration) -> Result<(), BreachError> {
        if duration < Self::MIN_DURATION {
            return Err(BreachError::Config(format!(
                "cycle duration must be at least {:?}, got {duration:?}",
                Self::MIN_DURATION
            )));
        }
        Ok(())
    }

    /// Mark the clock running. The reference timestamp stays unset until
    /// the next tick latches it.
    pub fn start(&mut self) {
        self.running = true;
        self.started_at = None;
    }

    /// Stop the clock, freezing the last computed phase. Idempotent; no
    /// completion signal is produced after this returns.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reset for the next cycle: phase 0, reference timestamp unset.
    /// Running state is unchanged.
    pub fn rearm(&mut self) {
        self.started_at = None;
        self.phase = 0.0;
        self.completed = false;
    }

    /// Advance to `now`.
    ///
    /// The first tick after start/rearm latches `now` as the cycle
    /// origin and reports phase 0. Completion is signalled on the tick
    /// that reaches phase 1 and never again until [`rearm`](Self::rearm).
    /// Ticks on a stopped clock report the frozen phase.
    pub fn tick(&mut self, now: Instant) -> Tick {
        if !self.running {
            return Tick {
                phase: self.phase,
                completed: false,
            };
        }

        let origin = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(origin);
        self.phase =
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);

        let completed = self.phase >= 1.0 && !self.completed;
        if completed {
            self.completed = true;
        }

        Tick {
            phase: self.phase,
            completed,
        }
    }

    /// Change the cycle duration. Takes effect immediately, re-scaling
    /// the in-flight cycle the way the live speed slider does.
    ///
    /// # Errors
    ///
    /// Rejects durations below [`Self::MIN_DURATION`].
    pub fn set_duration(
        &mut self,
        duration: Duration,
    ) -> Result<(), BreachError> {
        Self::validate_duration(duration)?;
        self.duration = duration;
        Ok(())
    }

    /// Current cycle duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Last computed phase.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Whether the clock is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_ms(ms: u64) -> PhaseClock {
        PhaseClock::new(Duration::from_millis(ms)).unwrap()
    }

    #[test]
    fn test_rejects_zero_duration() {
        assert!(PhaseClock::new(Duration::ZERO).is_err());
        assert!(PhaseClock::new(Duration::from_micros(500)).is_err());
        assert!(PhaseClock::new(Duration::from_millis(1)).is_ok());
    }

    #[test]
    fn test_monotonic_cycle_completion() {
        let mut clock = clock_ms(1000);
        clock.start();

        let t0 = Instant::now();
        let first = clock.tick(t0);
        assert!((first.phase - 0.0).abs() < 1e-6);
        assert!(!first.completed);

        let mid = clock.tick(t0 + Duration::from_millis(500));
        assert!((mid.phase - 0.5).abs() < 1e-3);
        assert!(!mid.completed);

        let done = clock.tick(t0 + Duration::from_millis(1000));
        assert!((done.phase - 1.0).abs() < 1e-6);
        assert!(done.completed);
    }

    #[test]
    fn test_completion_signalled_once() {
        let mut clock = clock_ms(100);
        clock.start();

        let t0 = Instant::now();
        let _ = clock.tick(t0);
        let done = clock.tick(t0 + Duration::from_millis(100));
        assert!(done.completed);

        let after = clock.tick(t0 + Duration::from_millis(200));
        assert!((after.phase - 1.0).abs() < 1e-6);
        assert!(!after.completed);
    }

    #[test]
    fn test_rearm_starts_fresh_cycle() {
        let mut clock = clock_ms(100);
        clock.start();

        let t0 = Instant::now();
        let _ = clock.tick(t0);
        let _ = clock.tick(t0 + Duration::from_millis(100));

        clock.rearm();
        assert!((clock.phase() - 0.0).abs() < 1e-6);

        // The next tick latches a new origin.
        let t1 = t0 + Duration::from_millis(250);
        let first = clock.tick(t1);
        assert!((first.phase - 0.0).abs() < 1e-6);

        let done = clock.tick(t1 + Duration::from_millis(100));
        assert!(done.completed);
    }

    #[test]
    fn test_stop_freezes_phase() {
        let mut clock = clock_ms(1000);
        clock.start();

        let t0 = Instant::now();
        let _ = clock.tick(t0);
        let _ = clock.tick(t0 + Duration::from_millis(300));
        clock.stop();
        // Stopping twice is fine.
        clock.stop();

        let frozen = clock.tick(t0 + Duration::from_millis(900));
        assert!((frozen.phase - 0.3).abs() < 1e-3);
        assert!(!frozen.completed);
    }

    #[test]
    fn test_set_duration_rescales_in_flight() {
        let mut clock = clock_ms(1000);
        clock.start();

        let t0 = Instant::now();
        let _ = clock.tick(t0);
        clock.set_duration(Duration::from_millis(500)).unwrap();

        let tick = clock.tick(t0 + Duration::from_millis(500));
        assert!(tick.completed);
    }

    #[test]
    fn test_timestamps_before_origin_saturate() {
        let mut clock = clock_ms(100);
        clock.start();

        let t0 = Instant::now() + Duration::from_secs(1);
        let _ = clock.tick(t0);
        // An out-of-order timestamp clamps to phase 0 instead of going
        // negative.
        let earlier = clock.tick(t0 - Duration::from_millis(50));
        assert!((earlier.phase - 0.0).abs() < 1e-6);
    }
}
