//! Single-slot tick timer

use std::time::{Duration, Instant};

/// Identifies one scheduled tick; a superseded token never fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    token: TickToken,
    due: Instant,
}

/// Holds at most one pending tick
///
/// Scheduling replaces whatever was pending, so two ticks can never race.
/// The timer never reads the clock itself; callers pass `now` in.
#[derive(Debug, Default)]
pub struct TickTimer {
    next_token: u64,
    pending: Option<PendingTick>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick `delay` after `now`, cancelling any pending tick
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TickToken {
        let token = TickToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(PendingTick {
            token,
            due: now + delay,
        });
        token
    }

    /// Drop the pending tick; returns true if there was one
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending tick is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|tick| tick.due)
    }

    /// Fire the pending tick if it is due at `now`
    ///
    /// A fired tick is consumed; the caller schedules the next one.
    pub fn poll(&mut self, now: Instant) -> Option<TickToken> {
        match self.pending {
            Some(tick) if tick.due <= now => {
                self.pending = None;
                Some(tick.token)
            }
            _ => None,
        }
    }
}
