//! Control bar visibility.
//!
//! The bar is shown while the pointer is over the surface. Leaving the
//! surface hides it after a short delay; sitting still for the idle window
//! counts as leaving. Both are suppressed while the settings menu is open.

use std::time::{Duration, Instant};

use super::timer::Deadline;

#[derive(Debug, Clone)]
pub struct ControlsVisibility {
    hovered: bool,
    leave_delay: Duration,
    idle_delay: Duration,
    leave: Deadline,
    idle: Deadline,
}

impl ControlsVisibility {
    pub fn new(leave_delay: Duration, idle_delay: Duration) -> Self {
        Self {
            hovered: false,
            leave_delay,
            idle_delay,
            leave: Deadline::new(),
            idle: Deadline::new(),
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer entered the surface: show and drop any pending hide.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.leave.cancel();
    }

    /// Pointer moved: show, and restart the idle window.
    pub fn pointer_move(&mut self, now: Instant) {
        self.pointer_enter();
        self.idle.arm(now, self.idle_delay);
    }

    /// Pointer left the surface: hide after the leave delay.
    pub fn pointer_leave(&mut self, now: Instant, settings_open: bool) {
        if settings_open {
            return;
        }
        self.leave.arm(now, self.leave_delay);
    }

    /// Advance timers. Returns true when the hovered flag changed.
    pub fn tick(&mut self, now: Instant, settings_open: bool) -> bool {
        if self.idle.fire(now) {
            self.pointer_leave(now, settings_open);
        }
        if self.leave.fire(now) && self.hovered {
            self.hovered = false;
            return true;
        }
        false
    }
}
