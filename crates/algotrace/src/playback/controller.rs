//! Playback controller: a state machine over one trace

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::TickTimer;
use crate::core::{validate_speed, Element, PlaybackConfig, Result, Step, Trace};

/// Where the controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No trace, or a trace with nothing in it
    Idle,
    /// Trace loaded at index 0, not playing
    Ready,
    /// Advancing on timed ticks
    Playing,
    /// Stopped somewhere in the trace
    Paused,
}

/// Notifications queued for the caller, drained with
/// [`PlaybackController::take_events`]
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    StateChanged {
        from: PlaybackState,
        to: PlaybackState,
    },
    StepChanged {
        index: usize,
    },
    /// The caller should restore its data view to `restore`, the element
    /// order before the algorithm ran (absent for non-reordering traces)
    Reset {
        restore: Option<Vec<Element>>,
    },
}

/// Drives timed and manual navigation through a [`Trace`]
///
/// Time is injected: every operation that may schedule a tick takes `now`,
/// and [`tick`](Self::tick) is polled by the caller's event loop.
#[derive(Debug)]
pub struct PlaybackController {
    config: PlaybackConfig,
    trace: Option<Arc<Trace>>,
    index: usize,
    state: PlaybackState,
    speed: f64,
    timer: TickTimer,
    events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            speed: config.default_speed,
            config,
            trace: None,
            index: 0,
            state: PlaybackState::Idle,
            timer: TickTimer::new(),
            events: Vec::new(),
        }
    }

    /// Replace the trace; always lands on index 0, not playing
    ///
    /// Any pending tick is discarded. An empty trace leaves the controller
    /// `Idle`.
    pub fn load(&mut self, trace: impl Into<Arc<Trace>>) {
        let trace = trace.into();
        self.timer.cancel();
        self.index = 0;

        let next = if trace.is_empty() {
            PlaybackState::Idle
        } else {
            PlaybackState::Ready
        };
        info!(
            algorithm = trace.algorithm(),
            steps = trace.len(),
            "Loaded trace"
        );
        let has_steps = !trace.is_empty();
        self.trace = Some(trace);
        self.transition(next);
        if has_steps {
            self.events.push(PlaybackEvent::StepChanged { index: 0 });
        }
    }

    /// Drop the trace and return to `Idle`
    pub fn unload(&mut self) {
        self.timer.cancel();
        self.trace = None;
        self.index = 0;
        self.transition(PlaybackState::Idle);
    }

    /// Start timed auto-advance
    ///
    /// Playing from the last step rewinds to the first. Returns false when
    /// there is nothing to play: the controller is `Idle`, or the trace has a
    /// single step.
    pub fn play(&mut self, now: Instant) -> bool {
        let len = self.len();
        if self.state == PlaybackState::Idle || len < 2 {
            return false;
        }
        if self.state == PlaybackState::Playing {
            return true;
        }
        if self.index == len - 1 {
            self.move_to(0);
        }
        self.transition(PlaybackState::Playing);
        self.schedule_tick(now);
        true
    }

    /// Stop auto-advance, keeping the current index
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.timer.cancel();
            self.transition(PlaybackState::Paused);
        }
    }

    /// Play if paused, pause if playing
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play(now)
        }
    }

    /// Advance one step if the pending tick is due
    ///
    /// Landing on the last step pauses. Returns true if the index moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Playing || self.timer.poll(now).is_none() {
            return false;
        }

        let last = self.len().saturating_sub(1);
        let moved = if self.index < last {
            self.move_to(self.index + 1);
            true
        } else {
            false
        };
        trace!(index = self.index, moved, "Tick");

        if self.index >= last {
            debug!("Reached the final step");
            self.transition(PlaybackState::Paused);
        } else {
            self.schedule_tick(now);
        }
        moved
    }

    /// Move one step forward; a no-op on the last step
    pub fn step_forward(&mut self, now: Instant) -> bool {
        self.navigate(self.index.saturating_add(1), now)
    }

    /// Move one step back; a no-op on the first step
    pub fn step_back(&mut self, now: Instant) -> bool {
        self.navigate(self.index.saturating_sub(1), now)
    }

    /// Jump to `index`, clamped into the trace
    pub fn seek(&mut self, index: usize, now: Instant) -> bool {
        self.navigate(index, now)
    }

    /// Back to index 0, not playing
    ///
    /// Queues a [`PlaybackEvent::Reset`] carrying the trace's initial element
    /// order.
    pub fn reset(&mut self) {
        self.timer.cancel();
        let Some(trace) = self.trace.clone() else {
            return;
        };
        if trace.is_empty() {
            return;
        }
        self.move_to(0);
        self.transition(PlaybackState::Ready);
        self.events.push(PlaybackEvent::Reset {
            restore: trace.initial_snapshot().map(<[Element]>::to_vec),
        });
        debug!("Playback reset");
    }

    /// Change the speed multiplier for ticks scheduled from now on
    ///
    /// The value is clamped into the configured range and the clamped value
    /// returned. A tick that is already pending keeps its deadline.
    pub fn set_speed(&mut self, speed: f64) -> Result<f64> {
        let speed = self.config.clamp_speed(validate_speed(speed)?);
        self.speed = speed;
        debug!(speed, "Playback speed changed");
        Ok(speed)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn trace(&self) -> Option<&Arc<Trace>> {
        self.trace.as_ref()
    }

    /// Number of steps in the loaded trace
    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, |trace| trace.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.trace.as_ref().and_then(|trace| trace.get(self.index))
    }

    /// Element order at the current step, for reordering algorithms
    pub fn data_snapshot(&self) -> Option<&[Element]> {
        self.current_step().and_then(Step::data_snapshot)
    }

    /// Fraction of the trace shown so far, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            len => (self.index + 1) as f64 / len as f64,
        }
    }

    /// When the caller should next call [`tick`](Self::tick)
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    /// Drain queued notifications
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }

    fn navigate(&mut self, target: usize, now: Instant) -> bool {
        if self.state == PlaybackState::Idle {
            return false;
        }
        let target = target.min(self.len().saturating_sub(1));
        if target == self.index {
            return false;
        }
        self.move_to(target);
        if self.is_playing() {
            self.schedule_tick(now);
        } else if self.state == PlaybackState::Ready {
            self.transition(PlaybackState::Paused);
        }
        true
    }

    fn move_to(&mut self, index: usize) {
        if index != self.index {
            self.index = index;
            self.events.push(PlaybackEvent::StepChanged { index });
        }
    }

    fn schedule_tick(&mut self, now: Instant) {
        let delay = self.config.interval_for(self.speed);
        self.timer.schedule(now, delay);
        trace!(?delay, "Scheduled tick");
    }

    fn transition(&mut self, to: PlaybackState) {
        let from = self.state;
        if from != to {
            self.state = to;
            debug!(?from, ?to, "Playback state changed");
            self.events.push(PlaybackEvent::StateChanged { from, to });
        }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

/// Serializable view of the controller for front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub current_index: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: f64,
    pub progress: f64,
}

impl From<&PlaybackController> for PlaybackStatus {
    fn from(controller: &PlaybackController) -> Self {
        Self {
            current_index: controller.current_index(),
            total_steps: controller.len(),
            state: controller.state(),
            speed: controller.speed(),
            progress: controller.progress(),
        }
    }
}
