//! Declarative paint values emitted to heat-map layers.
//!
//! These are plain data; the sink translates them into whatever
//! expression syntax the map library wants. Keeping them symbolic lets
//! tests assert on semantics instead of serialized strings.

use super::cycle::{Month, MonthCycle};
use crate::animation::interpolation::lerp;

/// Cross-fade weight pair: the fading-out month carries `1 − phase`,
/// the fading-in month carries `phase`, every other month weighs 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightExpr {
    /// Month fading out.
    pub month_a: Month,
    /// Weight of the fading-out month.
    pub weight_a: f32,
    /// Month fading in.
    pub month_b: Month,
    /// Weight of the fading-in month.
    pub weight_b: f32,
}

impl WeightExpr {
    /// Weight pair for the cycle at the given phase. Out-of-range
    /// phases clamp to [0, 1].
    #[must_use]
    pub fn for_phase(cycle: MonthCycle, phase: f32) -> Self {
        let phase = phase.clamp(0.0, 1.0);
        Self {
            month_a: cycle.a(),
            weight_a: 1.0 - phase,
            month_b: cycle.b(),
            weight_b: phase,
        }
    }

    /// Weight a feature tagged with `month` receives.
    #[must_use]
    pub fn weight_for(&self, month: Month) -> f32 {
        if month == self.month_a {
            self.weight_a
        } else if month == self.month_b {
            self.weight_b
        } else {
            0.0
        }
    }
}

/// Feature filter restricting a layer to the active month pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFilter {
    months: [Month; 2],
}

impl MonthFilter {
    /// Filter matching exactly the cycle's two months.
    #[must_use]
    pub fn for_cycle(cycle: MonthCycle) -> Self {
        Self {
            months: [cycle.a(), cycle.b()],
        }
    }

    /// The visible months.
    #[must_use]
    pub fn months(&self) -> [Month; 2] {
        self.months
    }

    /// Whether features tagged with `month` pass the filter.
    #[must_use]
    pub fn contains(&self, month: Month) -> bool {
        self.months.contains(&month)
    }
}

/// Piecewise-linear ramp over map zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomRamp {
    stops: Vec<(f32, f32)>,
}

impl ZoomRamp {
    /// Ramp through the given `(zoom, value)` stops. Callers supply
    /// stops in ascending zoom order.
    #[must_use]
    pub fn new(stops: Vec<(f32, f32)>) -> Self {
        Self { stops }
    }

    /// The raw stops.
    #[must_use]
    pub fn stops(&self) -> &[(f32, f32)] {
        &self.stops
    }

    /// Value at `zoom`, interpolating linearly between stops and
    /// holding the edge values outside the stop range.
    #[must_use]
    pub fn sample(&self, zoom: f32) -> f32 {
        let Some(first) = self.stops.first() else {
            return 0.0;
        };
        if zoom <= first.0 {
            return first.1;
        }

        for pair in self.stops.windows(2) {
            let (z0, v0) = pair[0];
            let (z1, v1) = pair[1];
            if zoom <= z1 {
                let u = (zoom - z0) / (z1 - z0);
                return lerp(v0, v1, u);
            }
        }

        // Past the last stop.
        self.stops[self.stops.len() - 1].1
    }

    /// Ramp with every stop value multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            stops: self
                .stops
                .iter()
                .map(|&(zoom, value)| (zoom, value * factor))
                .collect(),
        }
    }
}

/// Zoom-dependent heat-layer paint parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatPaint {
    /// Heat intensity ramp over zoom.
    pub intensity: ZoomRamp,
    /// Kernel radius ramp over zoom, in pixels.
    pub radius: ZoomRamp,
    /// Layer opacity.
    pub opacity: f32,
}

impl HeatPaint {
    /// The shared base paint every species layer starts from.
    #[must_use]
    pub fn base() -> Self {
        Self {
            intensity: ZoomRamp::new(vec![
                (0.0, 0.5),
                (5.0, 1.0),
                (8.0, 1.5),
            ]),
            radius: ZoomRamp::new(vec![(0.0, 2.0), (4.0, 12.0), (8.0, 24.0)]),
            opacity: 0.85,
        }
    }

    /// Paint with intensity and radius ramps rescaled by the user's
    /// multipliers.
    #[must_use]
    pub fn scaled(&self, intensity_scale: f32, radius_scale: f32) -> Self {
        Self {
            intensity: self.intensity.scaled(intensity_scale),
            radius: self.radius.scaled(radius_scale),
            opacity: self.opacity,
        }
    }
}

impl Default for HeatPaint {
    fn default() -> Self {
        Self::base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_at(a: u8) -> MonthCycle {
        MonthCycle::new(Month::new(a).unwrap())
    }

    #[test]
    fn test_weight_pair_conservation() {
        let cycle = cycle_at(4);
        for phase in [0.0, 0.1, 0.33, 0.5, 0.77, 1.0] {
            let expr = WeightExpr::for_phase(cycle, phase);
            assert!((expr.weight_a + expr.weight_b - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_weights_at_phase_zero() {
        let expr = WeightExpr::for_phase(cycle_at(4), 0.0);
        assert!((expr.weight_a - 1.0).abs() < 1e-6);
        assert!(expr.weight_b.abs() < 1e-6);
    }

    #[test]
    fn test_weight_for_other_months_is_zero() {
        let expr = WeightExpr::for_phase(cycle_at(4), 0.5);
        assert!(expr.weight_for(Month::new(9).unwrap()).abs() < 1e-6);
        assert!((expr.weight_for(Month::new(4).unwrap()) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_weight_phase_clamped() {
        let expr = WeightExpr::for_phase(cycle_at(1), 1.8);
        assert!(expr.weight_a.abs() < 1e-6);
        assert!((expr.weight_b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_filter_matches_pair_only() {
        let filter = MonthFilter::for_cycle(cycle_at(12));
        assert!(filter.contains(Month::new(12).unwrap()));
        assert!(filter.contains(Month::new(1).unwrap()));
        assert!(!filter.contains(Month::new(6).unwrap()));
    }

    #[test]
    fn test_zoom_ramp_interpolates() {
        let ramp = ZoomRamp::new(vec![(0.0, 2.0), (4.0, 12.0), (8.0, 24.0)]);
        assert!((ramp.sample(0.0) - 2.0).abs() < 1e-6);
        assert!((ramp.sample(2.0) - 7.0).abs() < 1e-6);
        assert!((ramp.sample(6.0) - 18.0).abs() < 1e-6);
        // Edge holds beyond the stop range.
        assert!((ramp.sample(-1.0) - 2.0).abs() < 1e-6);
        assert!((ramp.sample(11.0) - 24.0).abs() < 1e-6);
    }

    #[test]
    fn test_paint_scaling() {
        let paint = HeatPaint::base().scaled(2.0, 0.5);
        assert!((paint.intensity.sample(5.0) - 2.0).abs() < 1e-6);
        assert!((paint.radius.sample(4.0) - 6.0).abs() < 1e-6);
        assert!((paint.opacity - 0.85).abs() < 1e-6);
    }
}
