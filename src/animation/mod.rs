//! Progress-driven interpolation engine shared by the map morph and the
//! 3D scene controllers.
//!
//! - [`interpolation`]: the one shared home for lerp/Bezier/angular
//!   blends
//! - [`phase`]: clock-driven phase state
//! - [`curve`]: validated piecewise segment model

pub mod curve;
pub mod interpolation;
pub mod phase;

pub use curve::{Pose, Segment, TransformCurve};
pub use phase::{PhaseClock, Tick};
