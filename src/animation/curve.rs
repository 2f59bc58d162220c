//! Piecewise transform curves: the segment model behind every
//! progress-driven animation.
//!
//! A curve covers [0, 1] with ordered segments, each carrying its own
//! easing and optional per-attribute tracks. Construction validates the
//! breakpoint layout up front; resolution is pure and cannot fail.

use glam::Vec3;

use super::interpolation::{bezier_point, lerp, lerp_euler, lerp_vec3};
use crate::error::BreachError;
use crate::util::easing::Easing;

/// Resolved attribute bundle at one phase value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
}

impl Pose {
    /// Rest pose: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Position track for one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionTrack {
    /// Straight-line interpolation.
    Line {
        /// Start of the segment's motion.
        from: Vec3,
        /// End of the segment's motion.
        to: Vec3,
    },
    /// Quadratic Bezier arc pulled toward a control point.
    Arc {
        /// Start of the segment's motion.
        from: Vec3,
        /// Bezier control point.
        via: Vec3,
        /// End of the segment's motion.
        to: Vec3,
    },
}

impl PositionTrack {
    fn sample(&self, u: f32) -> Vec3 {
        match *self {
            Self::Line { from, to } => lerp_vec3(from, to, u),
            Self::Arc { from, via, to } => bezier_point(u, from, via, to),
        }
    }

    fn start(&self) -> Vec3 {
        match *self {
            Self::Line { from, .. } | Self::Arc { from, .. } => from,
        }
    }

    fn end(&self) -> Vec3 {
        match *self {
            Self::Line { to, .. } | Self::Arc { to, .. } => to,
        }
    }

    fn is_finite(&self) -> bool {
        match *self {
            Self::Line { from, to } => from.is_finite() && to.is_finite(),
            Self::Arc { from, via, to } => {
                from.is_finite() && via.is_finite() && to.is_finite()
            }
        }
    }
}

/// Euler rotation track, interpolated shortest-path per component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTrack {
    /// Start rotation in radians.
    pub from: Vec3,
    /// End rotation in radians.
    pub to: Vec3,
}

/// Uniform scale track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTrack {
    /// Start scale.
    pub from: f32,
    /// End scale.
    pub to: f32,
}

/// One sub-range of [0, 1] with its own easing and attribute tracks.
///
/// A segment spans from the previous segment's breakpoint (0 for the
/// first) up to `until`. Attributes without a track hold their most
/// recently resolved value for the segment's whole span.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Right breakpoint of this segment; the final segment's must be 1.
    pub until: f32,
    /// Easing applied to the local fraction within this segment.
    pub easing: Easing,
    /// Optional position motion.
    pub position: Option<PositionTrack>,
    /// Optional rotation motion.
    pub rotation: Option<RotationTrack>,
    /// Optional scale motion.
    pub scale: Option<ScaleTrack>,
}

impl Segment {
    /// Empty (hold-everything) segment ending at `until`.
    #[must_use]
    pub fn new(until: f32, easing: Easing) -> Self {
        Self {
            until,
            easing,
            position: None,
            rotation: None,
            scale: None,
        }
    }

    /// Attach a straight-line position track.
    #[must_use]
    pub fn position_line(mut self, from: Vec3, to: Vec3) -> Self {
        self.position = Some(PositionTrack::Line { from, to });
        self
    }

    /// Attach a quadratic Bezier position track.
    #[must_use]
    pub fn position_arc(mut self, from: Vec3, via: Vec3, to: Vec3) -> Self {
        self.position = Some(PositionTrack::Arc { from, via, to });
        self
    }

    /// Attach a rotation track (Euler radians).
    #[must_use]
    pub fn rotate(mut self, from: Vec3, to: Vec3) -> Self {
        self.rotation = Some(RotationTrack { from, to });
        self
    }

    /// Attach a uniform scale track.
    #[must_use]
    pub fn rescale(mut self, from: f32, to: f32) -> Self {
        self.scale = Some(ScaleTrack { from, to });
        self
    }

    fn is_finite(&self) -> bool {
        self.position.as_ref().is_none_or(PositionTrack::is_finite)
            && self.rotation.as_ref().is_none_or(|r| {
                r.from.is_finite() && r.to.is_finite()
            })
            && self.scale.as_ref().is_none_or(|s| {
                s.from.is_finite() && s.to.is_finite()
            })
    }
}

/// Validated, immutable piecewise curve over [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct TransformCurve {
    segments: Vec<Segment>,
}

impl TransformCurve {
    /// Build a curve from ordered segments.
    ///
    /// # Errors
    ///
    /// Rejects an empty segment list, non-increasing or out-of-range
    /// breakpoints, a final breakpoint other than 1, and non-finite
    /// track values. Validation happens here so playback never has to.
    pub fn new(segments: Vec<Segment>) -> Result<Self, BreachError> {
        if segments.is_empty() {
            return Err(BreachError::Curve(
                "curve needs at least one segment".into(),
            ));
        }

        let mut previous = 0.0f32;
        for (i, segment) in segments.iter().enumerate() {
            if !segment.until.is_finite() || segment.until <= previous {
                return Err(BreachError::Curve(format!(
                    "segment {i} breakpoint {} must be greater than {}",
                    segment.until, previous
                )));
            }
            if segment.until > 1.0 {
                return Err(BreachError::Curve(format!(
                    "segment {i} breakpoint {} exceeds 1.0",
                    segment.until
                )));
            }
            if !segment.is_finite() {
                return Err(BreachError::Curve(format!(
                    "segment {i} contains non-finite track values"
                )));
            }
            previous = segment.until;
        }

        // Strictly-increasing breakpoints guarantee coverage has no
        // gaps; only the right edge needs pinning.
        if (previous - 1.0).abs() > f32::EPSILON {
            return Err(BreachError::Curve(format!(
                "final breakpoint must be 1.0, got {previous}"
            )));
        }

        Ok(Self { segments })
    }

    /// Single-segment curve spanning all of [0, 1].
    ///
    /// # Errors
    ///
    /// Propagates [`Self::new`] validation (non-finite track values).
    pub fn single(
        easing: Easing,
        build: impl FnOnce(Segment) -> Segment,
    ) -> Result<Self, BreachError> {
        Self::new(vec![build(Segment::new(1.0, easing))])
    }

    /// The validated segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolve the attribute bundle at `phase`.
    ///
    /// Out-of-range phases clamp to [0, 1]. A phase exactly on a
    /// breakpoint belongs to the following segment; phase 1 belongs to
    /// the final segment.
    #[must_use]
    pub fn resolve(&self, phase: f32) -> Pose {
        let phase = phase.clamp(0.0, 1.0);
        let idx = self.segment_index(phase);
        let segment = &self.segments[idx];

        let span_start = if idx == 0 {
            0.0
        } else {
            self.segments[idx - 1].until
        };
        let span = segment.until - span_start;
        let u = ((phase - span_start) / span).clamp(0.0, 1.0);
        let eased = segment.easing.evaluate(u);

        Pose {
            position: segment.position.as_ref().map_or_else(
                || self.held_position(idx),
                |track| track.sample(eased),
            ),
            rotation: segment.rotation.as_ref().map_or_else(
                || self.held_rotation(idx),
                |track| lerp_euler(track.from, track.to, eased),
            ),
            scale: segment.scale.as_ref().map_or_else(
                || self.held_scale(idx),
                |track| lerp(track.from, track.to, eased),
            ),
        }
    }

    fn segment_index(&self, phase: f32) -> usize {
        self.segments
            .iter()
            .position(|s| phase < s.until)
            .unwrap_or(self.segments.len() - 1)
    }

    // Hold semantics: an attribute with no track in the active segment
    // resolves to the end of the last earlier segment that moved it, or
    // to the start of the first later one, or to the rest pose.

    fn held_position(&self, idx: usize) -> Vec3 {
        if let Some(track) = self.segments[..idx]
            .iter()
            .rev()
            .find_map(|s| s.position.as_ref())
        {
            return track.end();
        }
        self.segments[idx..]
            .iter()
            .find_map(|s| s.position.as_ref())
            .map_or(Pose::IDENTITY.position, PositionTrack::start)
    }

    fn held_rotation(&self, idx: usize) -> Vec3 {
        if let Some(track) = self.segments[..idx]
            .iter()
            .rev()
            .find_map(|s| s.rotation.as_ref())
        {
            return track.to;
        }
        self.segments[idx..]
            .iter()
            .find_map(|s| s.rotation.as_ref())
            .map_or(Pose::IDENTITY.rotation, |track| track.from)
    }

    fn held_scale(&self, idx: usize) -> f32 {
        if let Some(track) = self.segments[..idx]
            .iter()
            .rev()
            .find_map(|s| s.scale.as_ref())
        {
            return track.to;
        }
        self.segments[idx..]
            .iter()
            .find_map(|s| s.scale.as_ref())
            .map_or(Pose::IDENTITY.scale, |track| track.from)
    }
}
