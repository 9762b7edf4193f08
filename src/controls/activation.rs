//! Double-activation detection for taps on the playback surface.

use std::time::{Duration, Instant};

/// Recognizes two clicks within `window` as a double activation.
///
/// After a double, the remembered instant is pushed back by one window so a
/// third quick click starts a new pair instead of chaining.
#[derive(Debug, Clone)]
pub struct DoubleActivation {
    window: Duration,
    last: Option<Instant>,
}

impl DoubleActivation {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Record a click at `now`. Returns true when it completes a double.
    pub fn click(&mut self, now: Instant) -> bool {
        let previous = self.last.replace(now);
        let is_double = previous.is_some_and(|prev| now.saturating_duration_since(prev) < self.window);

        if is_double {
            self.last = now.checked_sub(self.window);
        }
        is_double
    }
}
