//! Crate-level error types.

use std::fmt;

/// Errors produced by the breach crate.
///
/// All variants are raised at construction/configuration boundaries;
/// steady-state interpolation is pure and cannot fail.
#[derive(Debug)]
pub enum BreachError {
    /// Invalid segment model (non-increasing breakpoints, bad coverage,
    /// non-finite track values).
    Curve(String),
    /// Invalid controller configuration (zero duration, empty layer set,
    /// preset parse failure).
    Config(String),
}

impl fmt::Display for BreachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curve(msg) => write!(f, "curve error: {msg}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for BreachError {}

impl From<toml::de::Error> for BreachError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
