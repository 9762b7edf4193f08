//! Gesture feedback pings.
//!
//! A ping shows a feedback glyph (seek arrows, play/pause) for a fixed window.
//! Pinging again inside the window extends it; the glyph goes through a
//! single visible-then-hidden cycle.

use std::time::{Duration, Instant};

use super::timer::Deadline;

/// Which feedback glyph a ping drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingKind {
    Forward,
    Backward,
    Play,
    Pause,
}

#[derive(Debug, Clone)]
pub struct Ping {
    visible: bool,
    window: Duration,
    expiry: Deadline,
}

impl Ping {
    pub fn new(window: Duration) -> Self {
        Self {
            visible: false,
            window,
            expiry: Deadline::new(),
        }
    }

    /// Show the glyph and (re)start the hide window.
    pub fn ping(&mut self, now: Instant) {
        self.visible = true;
        self.expiry.arm(now, self.window);
    }

    /// Hide immediately.
    pub fn hide(&mut self) {
        self.visible = false;
        self.expiry.cancel();
    }

    /// Hide when the window has elapsed. Returns true if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.expiry.fire(now) && self.visible {
            self.visible = false;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The four feedback glyphs of the player surface.
#[derive(Debug, Clone)]
pub struct Pings {
    pub forward: Ping,
    pub backward: Ping,
    pub play: Ping,
    pub pause: Ping,
}

impl Pings {
    pub fn new(window: Duration) -> Self {
        Self {
            forward: Ping::new(window),
            backward: Ping::new(window),
            play: Ping::new(window),
            pause: Ping::new(window),
        }
    }

    pub fn get(&self, kind: PingKind) -> &Ping {
        match kind {
            PingKind::Forward => &self.forward,
            PingKind::Backward => &self.backward,
            PingKind::Play => &self.play,
            PingKind::Pause => &self.pause,
        }
    }

    pub fn get_mut(&mut self, kind: PingKind) -> &mut Ping {
        match kind {
            PingKind::Forward => &mut self.forward,
            PingKind::Backward => &mut self.backward,
            PingKind::Play => &mut self.play,
            PingKind::Pause => &mut self.pause,
        }
    }

    /// Ping `show` and hide its counterpart.
    pub fn swap(&mut self, show: PingKind, hide: PingKind, now: Instant) {
        self.get_mut(hide).hide();
        self.get_mut(show).ping(now);
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        // Non-short-circuit: every ping must see the tick
        self.forward.tick(now) | self.backward.tick(now) | self.play.tick(now) | self.pause.tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn ping_shows_then_hides_after_window() {
        let t0 = Instant::now();
        let mut p = Ping::new(ms(1000));
        p.ping(t0);

        assert!(p.is_visible());
        assert!(!p.tick(t0 + ms(999)));
        assert!(p.is_visible());
        assert!(p.tick(t0 + ms(1000)));
        assert!(!p.is_visible());
    }

    #[test]
    fn double_ping_is_one_cycle() {
        let t0 = Instant::now();
        let mut p = Ping::new(ms(1000));
        p.ping(t0);
        p.ping(t0 + ms(500));

        let mut transitions = 0;
        let mut step = t0;
        while step <= t0 + ms(3000) {
            if p.tick(step) {
                transitions += 1;
            }
            step += ms(50);
        }

        assert_eq!(transitions, 1);
        assert!(!p.is_visible());
    }

    #[test]
    fn repinging_extends_window() {
        let t0 = Instant::now();
        let mut p = Ping::new(ms(1000));
        p.ping(t0);
        p.ping(t0 + ms(800));

        assert!(!p.tick(t0 + ms(1000)));
        assert!(p.is_visible());
        assert!(p.tick(t0 + ms(1800)));
    }

    #[test]
    fn hide_cancels_pending_expiry() {
        let t0 = Instant::now();
        let mut p = Ping::new(ms(1000));
        p.ping(t0);
        p.hide();

        assert!(!p.is_visible());
        assert!(!p.tick(t0 + ms(1000)));
    }

    #[test]
    fn swap_hides_counterpart() {
        let t0 = Instant::now();
        let mut pings = Pings::new(ms(1000));
        pings.backward.ping(t0);

        pings.swap(PingKind::Forward, PingKind::Backward, t0 + ms(10));

        assert!(pings.get(PingKind::Forward).is_visible());
        assert!(!pings.get(PingKind::Backward).is_visible());
    }

    #[test]
    fn tick_reaches_every_ping() {
        let t0 = Instant::now();
        let mut pings = Pings::new(ms(100));
        pings.forward.ping(t0);
        pings.pause.ping(t0);

        assert!(pings.tick(t0 + ms(100)));
        assert!(!pings.forward.is_visible());
        assert!(!pings.pause.is_visible());
    }
}
