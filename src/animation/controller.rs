//! Playback state owning the single mutable parameters/step pair

use std::time::{Duration, Instant};

use crate::animation::timer::{PeriodicTimer, Tick};
use crate::geometry::{AnimationStep, GeometryState, Parameters, advance};
use crate::io::configuration::TICK_INTERVAL;

/// Whether the timer advances the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Advancing once per tick
    Running,
    /// Holding the current step
    Paused,
}

/// Owns parameters, the stored step, hover override and the tick timer
///
/// Geometry is derived from the parameters whenever it is needed. Replacing
/// the parameters resets the step and restarts the timer, so no tick
/// scheduled under old parameters is ever applied to new ones.
#[derive(Debug, Clone)]
pub struct AnimationController {
    parameters: Parameters,
    step: AnimationStep,
    hover: Option<AnimationStep>,
    state: PlaybackState,
    timer: PeriodicTimer,
}

impl AnimationController {
    /// Start running at the origin with the default tick interval
    pub fn new(parameters: Parameters, now: Instant) -> Self {
        Self::with_interval(parameters, TICK_INTERVAL, now)
    }

    /// Start running at the origin, ticking every `interval`
    pub fn with_interval(parameters: Parameters, interval: Duration, now: Instant) -> Self {
        let mut controller = Self {
            parameters,
            step: AnimationStep::ORIGIN,
            hover: None,
            state: PlaybackState::Running,
            timer: PeriodicTimer::stopped(interval),
        };
        controller.reschedule(now);
        controller
    }

    /// Current parameters
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Geometry derived from the current parameters
    pub fn geometry(&self) -> GeometryState {
        GeometryState::derive(&self.parameters)
    }

    /// Running or paused
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// The step ticks advance, ignoring any hover
    pub const fn stored_step(&self) -> AnimationStep {
        self.step
    }

    /// The step to display, or `None` when the parameters are invalid
    pub fn displayed_step(&self) -> Option<AnimationStep> {
        self.geometry()
            .is_valid()
            .then(|| self.hover.unwrap_or(self.step))
    }

    /// Whether a hover is overriding the display
    pub const fn is_hovering(&self) -> bool {
        self.hover.is_some()
    }

    /// Instant of the next tick, if the timer is running
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_due()
    }

    /// Generation of the current timer
    pub const fn timer_generation(&self) -> u64 {
        self.timer.generation()
    }

    /// Replace the parameters, resetting the step and the timer
    pub fn set_parameters(&mut self, parameters: Parameters, now: Instant) {
        if parameters == self.parameters {
            return;
        }
        tracing::debug!(?parameters, "parameters changed, restarting animation");
        self.parameters = parameters;
        self.step = AnimationStep::ORIGIN;
        self.hover = None;
        self.reschedule(now);
    }

    /// Flip between running and paused, returning the new state
    pub fn toggle_pause(&mut self, now: Instant) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Running => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Running,
        };
        self.reschedule(now);
        self.state
    }

    /// Display `step` instead of the stored step
    ///
    /// Returns `false` and leaves the display unchanged when the step lies
    /// outside the current output or the parameters are invalid.
    pub fn hover(&mut self, step: AnimationStep) -> bool {
        let fits = self.geometry().valid().is_some_and(|geometry| {
            step.fits(geometry.output_size, self.parameters.number_of_filters())
        });
        if fits {
            self.hover = Some(step);
        }
        fits
    }

    /// Return to displaying the stored step
    pub const fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Poll the timer and apply a tick if one is due
    ///
    /// Returns whether the stored step advanced.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.timer.poll(now).is_some_and(|tick| self.apply_tick(tick))
    }

    /// Apply a tick obtained from this controller's timer
    ///
    /// Ticks from a cancelled timer, ticks while paused and ticks during a
    /// hover are consumed without moving the step. Missed intervals are not
    /// replayed; one tick advances one step.
    pub fn apply_tick(&mut self, tick: Tick) -> bool {
        if tick.generation != self.timer.generation() {
            tracing::trace!(
                stale = tick.generation,
                current = self.timer.generation(),
                "ignoring stale tick"
            );
            return false;
        }
        if self.state == PlaybackState::Paused || self.hover.is_some() {
            return false;
        }
        if !self.geometry().is_valid() {
            return false;
        }
        self.step = advance(self.step, &self.parameters);
        true
    }

    fn reschedule(&mut self, now: Instant) {
        let should_run = self.state == PlaybackState::Running && self.geometry().is_valid();
        if should_run {
            self.timer.restart(now);
        } else {
            self.timer.cancel();
        }
    }
}
