//! Month-morph subsystem: cyclic cross-fade between adjacent months on
//! a set of heat-map layers.
//!
//! - [`cycle`]: month pair state
//! - [`expression`]: symbolic weight/filter/paint values
//! - [`controller`]: the clock-driven controller
//! - [`dial`]: angle↔month math for the circular selector
//! - [`sink`]: the map-layer write boundary

pub mod controller;
pub mod cycle;
pub mod dial;
pub mod expression;
pub mod sink;

pub use controller::{FilterProvider, MonthListener, MorphController};
pub use cycle::{Month, MonthCycle};
pub use expression::{HeatPaint, MonthFilter, WeightExpr, ZoomRamp};
pub use sink::{HeatLayerSink, LayerId};
