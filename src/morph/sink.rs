//! Heat-layer sink boundary.

use std::fmt;

use super::expression::{HeatPaint, MonthFilter, WeightExpr};
use crate::sink::SinkWrite;

/// Identifier of one heat-map layer on the external map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(String);

impl LayerId {
    /// Wrap a layer id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Write surface onto the external map's heat layers.
///
/// Implementations translate the symbolic values into the map library's
/// paint/filter calls. A layer that has not been created yet reports
/// [`SinkWrite::NotReady`]; the controller retries on a later tick.
pub trait HeatLayerSink {
    /// Set the cross-fade weight expression on a layer.
    fn set_weight(&mut self, layer: &LayerId, weight: &WeightExpr)
        -> SinkWrite;

    /// Restrict a layer's visible features to the filter's months.
    fn set_filter(&mut self, layer: &LayerId, filter: &MonthFilter)
        -> SinkWrite;

    /// Set zoom-dependent paint parameters on a layer.
    fn set_paint(&mut self, layer: &LayerId, paint: &HeatPaint) -> SinkWrite;
}
