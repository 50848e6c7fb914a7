//! Timed playback over a recorded trace
//!
//! [`PlaybackController`] owns the current index and state; [`TickTimer`]
//! is its single pending auto-advance tick.

mod controller;
mod timer;

pub use controller::*;
pub use timer::*;
