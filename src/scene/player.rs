//! Timer-driven progress source for scenes without scroll input.
//!
//! The ambient whale glides on a timer rather than scroll position; the
//! player converts frame timestamps into looping progress and feeds the
//! same controller path the scroll handler uses.

use web_time::{Duration, Instant};

use super::controller::SceneController;
use super::sink::ObjectSink;
use crate::animation::phase::PhaseClock;
use crate::error::BreachError;

/// Looping (or one-shot) progress generator over a fixed sweep
/// duration.
#[derive(Debug, Clone)]
pub struct TimelinePlayer {
    clock: PhaseClock,
    looping: bool,
}

impl TimelinePlayer {
    /// Player sweeping [0, 1] over `duration`, initially paused.
    ///
    /// # Errors
    ///
    /// Rejects durations below the clock minimum.
    pub fn new(duration: Duration) -> Result<Self, BreachError> {
        Ok(Self {
            clock: PhaseClock::new(duration)?,
            looping: false,
        })
    }

    /// Restart from 0 when a sweep completes instead of stopping.
    #[must_use]
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Begin (or restart) the sweep. Resuming after a pause restarts
    /// the current sweep from 0.
    pub fn play(&mut self) {
        self.clock.rearm();
        self.clock.start();
    }

    /// Pause, freezing the current progress.
    pub fn pause(&mut self) {
        self.clock.stop();
    }

    /// Toggle between playing and paused.
    pub fn toggle_playback(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Whether the sweep is advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.clock.is_running()
    }

    /// Progress at `now`, or `None` while paused. A completed sweep
    /// yields 1.0, then either rearms (looping) or stops.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.clock.is_running() {
            return None;
        }

        let tick = self.clock.tick(now);
        if tick.completed {
            if self.looping {
                self.clock.rearm();
            } else {
                self.clock.stop();
            }
        }
        Some(tick.phase)
    }

    /// Tick and push the resulting progress into `controller`.
    pub fn drive<S: ObjectSink>(
        &mut self,
        now: Instant,
        controller: &mut SceneController<S>,
    ) {
        if let Some(progress) = self.tick(now) {
            controller.set_progress(progress);
        }
    }
}
