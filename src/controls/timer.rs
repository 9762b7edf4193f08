//! Single-shot deadlines driven by the host loop.
//!
//! A `Deadline` holds at most one pending expiry. Arming it again replaces the
//! pending expiry instead of stacking a second one. Nothing runs in the
//! background: the owner calls [`Deadline::fire`] with the current instant
//! from its tick.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn new() -> Self {
        Self { at: None }
    }

    /// Schedule expiry `after` from `now`, cancelling any pending one.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.at = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.at.is_some()
    }

    /// Returns true exactly once, on the first call at or after the expiry.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before expiry, if pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.at.map(|at| at.saturating_duration_since(now))
    }
}
