//! Scene transform subsystem: progress-driven 3D object animation.
//!
//! - [`controller`]: the externally-driven transform controller
//! - [`player`]: timer-driven progress source for ambient scenes
//! - [`modulation`]: sinusoidal swim offsets
//! - [`clip`]: external clip scrub window
//! - [`sink`]: the object write boundary

pub mod clip;
pub mod controller;
pub mod modulation;
pub mod player;
pub mod sink;

pub use clip::ClipWindow;
pub use controller::SceneController;
pub use modulation::SwimModulation;
pub use player::TimelinePlayer;
pub use sink::ObjectSink;
