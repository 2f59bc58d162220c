//! Scene transform controller: externally-pushed progress resolved into
//! object transforms.
//!
//! Unlike the month morph there is no internal clock and no cycle:
//! every [`set_progress`](SceneController::set_progress) is a one-shot
//! synchronous mapping from progress to pose.

use super::clip::ClipWindow;
use super::modulation::SwimModulation;
use super::sink::ObjectSink;
use crate::animation::curve::{Pose, TransformCurve};
use crate::sink::SinkWrite;

/// Progress-driven transform controller for one 3D object.
///
/// Owns its curve, modulation, and progress; one instance per animated
/// object, each writing to a disjoint sink.
pub struct SceneController<S: ObjectSink> {
    curve: TransformCurve,
    modulation: SwimModulation,
    clip: Option<ClipWindow>,
    clip_duration: Option<f32>,
    progress: f32,
    sink: S,
}

impl<S: ObjectSink> SceneController<S> {
    /// Controller over `curve`, writing to `sink`. Starts at progress 0
    /// without emitting; the first host update publishes the pose.
    #[must_use]
    pub fn new(curve: TransformCurve, sink: S) -> Self {
        Self {
            curve,
            modulation: SwimModulation::NONE,
            clip: None,
            clip_duration: None,
            progress: 0.0,
            sink,
        }
    }

    /// Layer swim modulation onto resolved poses.
    #[must_use]
    pub fn with_modulation(mut self, modulation: SwimModulation) -> Self {
        self.modulation = modulation;
        self
    }

    /// Scrub an external clip window alongside the transform.
    #[must_use]
    pub fn with_clip_window(mut self, window: ClipWindow) -> Self {
        self.clip = Some(window);
        self
    }

    /// Record the external clip's duration once the host has loaded the
    /// model. Non-finite or non-positive durations are dropped with a
    /// warning and clip scrubbing stays disabled.
    pub fn set_clip_duration(&mut self, seconds: f32) {
        if seconds.is_finite() && seconds > 0.0 {
            self.clip_duration = Some(seconds);
        } else {
            log::warn!(
                "ignoring clip duration {seconds}; clip scrubbing disabled"
            );
            self.clip_duration = None;
        }
    }

    /// Push an externally computed progress value (scroll fraction,
    /// slider, drag). Clamps to [0, 1], resolves the pose, and emits it
    /// synchronously.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
        self.emit();
    }

    /// Last accepted progress value.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Resolve the modulated pose at `progress` without emitting.
    /// Out-of-range input clamps.
    #[must_use]
    pub fn resolve(&self, progress: f32) -> Pose {
        let progress = progress.clamp(0.0, 1.0);
        self.modulation
            .apply(self.curve.resolve(progress), progress)
    }

    /// The attribute sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the attribute sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn emit(&mut self) {
        let pose = self.resolve(self.progress);
        if self.sink.set_transform(&pose) == SinkWrite::NotReady {
            // Model still loading; the next progress push retries.
            log::debug!("object sink not ready; transform skipped");
            return;
        }

        if let (Some(window), Some(duration)) =
            (self.clip, self.clip_duration)
        {
            let seconds = window.time_at(self.progress, duration);
            if self.sink.set_clip_time(seconds) == SinkWrite::NotReady {
                log::debug!("object sink not ready; clip scrub skipped");
            }
        }
    }
}

impl<S: ObjectSink> std::fmt::Debug for SceneController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneController")
            .field("progress", &self.progress)
            .field("segments", &self.curve.segments().len())
            .field("clip", &self.clip)
            .finish_non_exhaustive()
    }
}
