//! Declarative configuration with TOML preset support.
//!
//! All tunables (fade timing, heat multipliers, scene paths, segmented
//! curves) are consolidated here. Sub-structs use `#[serde(default)]`
//! so a partial preset — say only `[morph]` — overlays the defaults.
//! Presets travel as TOML strings; the host decides where they live.

mod curve;
mod morph;
mod scene;

pub use curve::{
    CurveSpec, PositionSpec, RotationSpec, ScaleSpec, SegmentSpec,
};
pub use morph::MorphOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BreachError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Month-morph settings.
    pub morph: MorphOptions,
    /// Hero scene settings.
    pub scene: SceneOptions,
}

impl Options {
    /// Parse options from a TOML preset string.
    ///
    /// # Errors
    ///
    /// Returns a config error describing the parse failure.
    pub fn from_toml_str(text: &str) -> Result<Self, BreachError> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize options to a TOML preset string.
    ///
    /// # Errors
    ///
    /// Returns a config error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, BreachError> {
        toml::to_string_pretty(self)
            .map_err(|e| BreachError::Config(e.to_string()))
    }
}
