//! Playback configuration

use std::time::Duration;

use super::{Result, TraceError};

/// Timing and speed limits for the playback controller
///
/// The delay between automatic ticks is `base_interval / speed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    /// Delay between ticks at 1x speed
    pub base_interval: Duration,
    /// Slowest allowed speed multiplier
    pub min_speed: f64,
    /// Fastest allowed speed multiplier
    pub max_speed: f64,
    /// Speed a fresh controller starts at
    pub default_speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(1000),
            min_speed: 0.5,
            max_speed: 4.0,
            default_speed: 1.0,
        }
    }
}

impl PlaybackConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_interval(mut self, base_interval: Duration) -> Self {
        self.base_interval = base_interval;
        self
    }

    /// Set the allowed speed range; the bounds are swapped if given backwards
    pub fn with_speed_range(mut self, min_speed: f64, max_speed: f64) -> Result<Self> {
        validate_speed(min_speed)?;
        validate_speed(max_speed)?;
        self.min_speed = min_speed.min(max_speed);
        self.max_speed = min_speed.max(max_speed);
        self.default_speed = self.clamp_speed(self.default_speed);
        Ok(self)
    }

    pub fn with_default_speed(mut self, speed: f64) -> Result<Self> {
        validate_speed(speed)?;
        self.default_speed = self.clamp_speed(speed);
        Ok(self)
    }

    /// Clamp a multiplier into the configured range
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.clamp(self.min_speed, self.max_speed)
    }

    /// Delay between ticks at the given speed
    pub fn interval_for(&self, speed: f64) -> Duration {
        self.base_interval.div_f64(self.clamp_speed(speed))
    }
}

/// Reject multipliers that are zero, negative, NaN, or infinite
pub fn validate_speed(speed: f64) -> Result<f64> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(TraceError::InvalidSpeed { speed })
    }
}
