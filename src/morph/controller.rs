//! Month-morph controller: clock-driven cross-fade over heat layers.
//!
//! Owns one [`PhaseClock`] and one [`MonthCycle`]; every tick publishes
//! the weight pair to all registered layers, and cycle completion
//! rotates the month pair and rearms for the next fade.

use rustc_hash::FxHashSet;
use web_time::{Duration, Instant};

use super::cycle::{Month, MonthCycle};
use super::expression::{HeatPaint, MonthFilter, WeightExpr};
use super::sink::{HeatLayerSink, LayerId};
use crate::animation::phase::PhaseClock;
use crate::driver::FrameScheduler;
use crate::error::BreachError;
use crate::options::MorphOptions;
use crate::sink::SinkWrite;

/// Optional custom filter source, consulted instead of the default
/// month-pair filter whenever the cycle changes. Supplied once at
/// construction; never re-probed per frame.
pub type FilterProvider = Box<dyn Fn(MonthCycle) -> MonthFilter>;

/// Callback notified whenever the origin month changes (cycle rotation
/// or direct selection). Hosts hang label updates off this.
pub type MonthListener = Box<dyn FnMut(Month)>;

/// Clock-driven cross-fade controller for a set of heat-map layers.
///
/// Each instance owns its phase, month pair, and layer registry;
/// independent controllers never share state.
pub struct MorphController<S: HeatLayerSink> {
    clock: PhaseClock,
    cycle: MonthCycle,
    layers: Vec<LayerId>,
    /// Layers whose last write was refused; re-synced on later updates.
    pending: FxHashSet<LayerId>,
    sink: S,
    scheduler: Box<dyn FrameScheduler>,
    paint: HeatPaint,
    intensity_scale: f32,
    radius_scale: f32,
    playing: bool,
    filter_provider: Option<FilterProvider>,
    month_listener: Option<MonthListener>,
}

impl<S: HeatLayerSink> MorphController<S> {
    /// Default fade duration, matching the speed control's reset value.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

    /// Build a stopped controller from validated options.
    ///
    /// # Errors
    ///
    /// Rejects an out-of-range start month. Durations are clamped to
    /// the clock's minimum by the options layer.
    pub fn new(
        options: &MorphOptions,
        sink: S,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Result<Self, BreachError> {
        let clock = PhaseClock::new(options.duration())?;
        let cycle = MonthCycle::new(options.start_month()?);

        Ok(Self {
            clock,
            cycle,
            layers: Vec::new(),
            pending: FxHashSet::default(),
            sink,
            scheduler,
            paint: HeatPaint::base(),
            intensity_scale: options.intensity_scale.max(0.0),
            radius_scale: options.radius_scale.max(0.0),
            playing: false,
            filter_provider: None,
            month_listener: None,
        })
    }

    /// Install a custom filter source.
    #[must_use]
    pub fn with_filter_provider(mut self, provider: FilterProvider) -> Self {
        self.filter_provider = Some(provider);
        self
    }

    /// Install a month-changed callback.
    #[must_use]
    pub fn with_month_listener(mut self, listener: MonthListener) -> Self {
        self.month_listener = Some(listener);
        self
    }

    /// Register a heat layer and push the current filter, paint, and
    /// weights to it. Registering the same id twice is a no-op. Layers
    /// the sink reports as not yet created are retried on later updates.
    pub fn register_layer(&mut self, layer: LayerId) {
        if self.layers.contains(&layer) {
            return;
        }
        self.layers.push(layer.clone());
        let _ = self.pending.insert(layer);
        self.resync_pending();
    }

    /// Begin cyclic playback from the current origin month.
    ///
    /// Without a frame source this is a warn-logged no-op; direct month
    /// selection keeps working.
    pub fn play(&mut self) {
        if self.playing {
            return;
        }

        // Fresh fade target from the current origin.
        self.cycle.set(self.cycle.a());
        self.apply_filters();
        self.clock.rearm();
        self.clock.start();

        if !self.scheduler.schedule() {
            log::warn!(
                "frame scheduler unavailable; month morph stays paused"
            );
            self.clock.stop();
            return;
        }
        self.playing = true;
    }

    /// Stop playback, freezing the current weights. Idempotent: no tick
    /// is delivered after this returns.
    pub fn pause(&mut self) {
        self.playing = false;
        self.clock.stop();
        self.scheduler.cancel();
    }

    /// Deliver one scheduled frame at `now`.
    ///
    /// Returns `true` while playback continues (another tick has been
    /// requested).
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }

        let tick = self.clock.tick(now);
        self.emit_weights(tick.phase);
        self.resync_pending();

        if tick.completed {
            self.cycle.rotate();
            self.apply_filters();
            self.clock.rearm();
            self.emit_weights(0.0);
            self.notify_month();
        }

        if !self.scheduler.schedule() {
            log::warn!("frame scheduler went away; pausing month morph");
            self.playing = false;
            self.clock.stop();
        }
        self.playing
    }

    /// Select a month directly: stops playback, snaps the fade to phase
    /// 0 on the new pair.
    pub fn set_month(&mut self, month: Month) {
        self.pause();
        self.cycle.set(month);
        self.clock.rearm();
        self.apply_filters();
        self.emit_weights(0.0);
        self.notify_month();
    }

    /// Step to the next month (December wraps to January).
    pub fn step_forward(&mut self) {
        self.set_month(self.cycle.a().next());
    }

    /// Step to the previous month (January wraps to December).
    pub fn step_back(&mut self) {
        self.set_month(self.cycle.a().prev());
    }

    /// Change the fade duration. Applies to the in-flight cycle, like
    /// the live speed slider.
    ///
    /// # Errors
    ///
    /// Rejects durations below the clock minimum.
    pub fn set_duration(
        &mut self,
        duration: Duration,
    ) -> Result<(), BreachError> {
        self.clock.set_duration(duration)
    }

    /// Rescale heat intensity and re-paint all layers. Negative values
    /// clamp to zero.
    pub fn set_intensity_scale(&mut self, scale: f32) {
        self.intensity_scale = scale.max(0.0);
        self.apply_paint();
    }

    /// Rescale heat radius and re-paint all layers. Negative values
    /// clamp to zero.
    pub fn set_radius_scale(&mut self, scale: f32) {
        self.radius_scale = scale.max(0.0);
        self.apply_paint();
    }

    /// Restore duration and paint multipliers to their defaults and
    /// re-paint all layers.
    pub fn reset_settings(&mut self) {
        // The default duration always passes validation.
        let _ = self.clock.set_duration(Self::DEFAULT_DURATION);
        self.intensity_scale = 1.0;
        self.radius_scale = 1.0;
        self.apply_paint();
    }

    /// Current origin month (the one fading out).
    #[must_use]
    pub fn month(&self) -> Month {
        self.cycle.a()
    }

    /// Month currently fading in.
    #[must_use]
    pub fn target_month(&self) -> Month {
        self.cycle.b()
    }

    /// Last computed fade phase.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.clock.phase()
    }

    /// Whether cyclic playback is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Registered layer ids, in registration order.
    #[must_use]
    pub fn layers(&self) -> &[LayerId] {
        &self.layers
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

    fn current_filter(&self) -> MonthFilter {
        self.filter_provider.as_ref().map_or_else(
            || MonthFilter::for_cycle(self.cycle),
            |provider| provider(self.cycle),
        )
    }

    fn notify_month(&mut self) {
        let month = self.cycle.a();
        if let Some(listener) = self.month_listener.as_mut() {
            listener(month);
        }
    }

    fn emit_weights(&mut self, phase: f32) {
        let expr = WeightExpr::for_phase(self.cycle, phase);
        for layer in &self.layers {
            if self.sink.set_weight(layer, &expr) == SinkWrite::NotReady {
                log::debug!("layer {layer} not ready; deferring weights");
                let _ = self.pending.insert(layer.clone());
            }
        }
    }

    fn apply_filters(&mut self) {
        let filter = self.current_filter();
        for layer in &self.layers {
            if self.sink.set_filter(layer, &filter) == SinkWrite::NotReady {
                log::debug!("layer {layer} not ready; deferring filter");
                let _ = self.pending.insert(layer.clone());
            }
        }
    }

    fn apply_paint(&mut self) {
        let paint =
            self.paint.scaled(self.intensity_scale, self.radius_scale);
        for layer in &self.layers {
            if self.sink.set_paint(layer, &paint) == SinkWrite::NotReady {
                log::debug!("layer {layer} not ready; deferring paint");
                let _ = self.pending.insert(layer.clone());
            }
        }
    }

    /// Re-push the full attribute set to layers that previously refused
    /// a write; each survives until all three writes land.
    fn resync_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let stale: Vec<LayerId> = self.pending.iter().cloned().collect();
        let filter = self.current_filter();
        let paint =
            self.paint.scaled(self.intensity_scale, self.radius_scale);
        let expr = WeightExpr::for_phase(self.cycle, self.clock.phase());

        for layer in stale {
            let applied = self.sink.set_filter(&layer, &filter).is_applied()
                && self.sink.set_paint(&layer, &paint).is_applied()
                && self.sink.set_weight(&layer, &expr).is_applied();
            if applied {
                let _ = self.pending.remove(&layer);
            }
        }
    }
}

impl<S: HeatLayerSink> std::fmt::Debug for MorphController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphController")
            .field("month", &self.cycle.a().number())
            .field("phase", &self.clock.phase())
            .field("playing", &self.playing)
            .field("layers", &self.layers.len())
            .finish_non_exhaustive()
    }
}
