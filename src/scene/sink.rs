//! 3D object sink boundary.

use crate::animation::curve::Pose;
use crate::sink::SinkWrite;

/// Write surface onto one external 3D object.
///
/// Implementations forward to the renderer's transform setters. While
/// the model is still loading they report [`SinkWrite::NotReady`]; the
/// controller skips the frame and retries on the next progress push.
pub trait ObjectSink {
    /// Apply position, rotation, and scale to the object.
    fn set_transform(&mut self, pose: &Pose) -> SinkWrite;

    /// Scrub the object's external animation clip to `seconds`.
    fn set_clip_time(&mut self, seconds: f32) -> SinkWrite;
}
