//! Wall-clock media element for the terminal host.
//!
//! A terminal cannot decode video, so the terminal player drives a timeline
//! instead: position advances with wall time × playback rate, and data
//! "arrives" progressively at `download_rate` media seconds per wall second
//! starting from wherever the playhead is. When the playhead reaches the end
//! of its buffered range playback stalls (`Waiting`) until enough data is
//! ahead again (`CanPlay`).

use std::time::Instant;

use crate::player::media::{MediaElement, MediaEvent, TimeRange};
use crate::player::shell::Player;

/// Seconds that must be buffered ahead of a stalled playhead before resuming.
const RESUME_AHEAD: f64 = 1.0;

/// Default fetch speed, in media seconds per wall-clock second.
pub const DEFAULT_DOWNLOAD_RATE: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct TimelineMedia {
    duration: f64,
    position: f64,
    rate: f64,
    volume: f64,
    muted: bool,
    playing: bool,
    stalled: bool,
    ended: bool,
    download_rate: f64,
    buffered: Vec<TimeRange>,
    last_tick: Option<Instant>,
    metadata_sent: bool,
    events: Vec<MediaEvent>,
}

impl TimelineMedia {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            position: 0.0,
            rate: 1.0,
            volume: 1.0,
            muted: false,
            playing: false,
            stalled: false,
            ended: false,
            download_rate: DEFAULT_DOWNLOAD_RATE,
            buffered: Vec::new(),
            last_tick: None,
            metadata_sent: false,
            events: Vec::new(),
        }
    }

    /// Fetch speed in media seconds per wall second. `f64::INFINITY` makes
    /// the whole timeline available on the first tick.
    pub fn with_download_rate(mut self, rate: f64) -> Self {
        self.download_rate = rate.max(0.0);
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// Drain the notifications raised since the last call.
    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the timeline to `now`.
    pub fn tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map(|prev| now.saturating_duration_since(prev).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        if !self.metadata_sent {
            self.metadata_sent = true;
            self.events.push(MediaEvent::LoadedMetadata);
        }

        self.download(dt);
        if self.playing && !self.ended {
            self.advance(dt);
        }
    }

    /// End of the buffered range holding the playhead.
    fn buffered_end(&self) -> f64 {
        self.buffered
            .iter()
            .find(|r| r.contains(self.position))
            .map(|r| r.end)
            .unwrap_or(self.position)
    }

    fn download(&mut self, dt: f64) {
        let fetched = if self.download_rate.is_infinite() {
            self.duration
        } else {
            dt * self.download_rate
        };
        if fetched <= 0.0 && !self.buffered.is_empty() {
            return;
        }

        let idx = match self.buffered.iter().position(|r| r.contains(self.position)) {
            Some(idx) => idx,
            None => {
                self.buffered.push(TimeRange::new(self.position, self.position));
                self.buffered.len() - 1
            }
        };

        let before = self.buffered[idx].end;
        let range = &mut self.buffered[idx];
        range.end = (range.end + fetched).min(self.duration);
        let grew = range.end > before;

        self.merge_ranges();
        if grew {
            self.events.push(MediaEvent::Progress);
        }
    }

    fn merge_ranges(&mut self) {
        self.buffered.retain(|r| !r.is_empty());
        self.buffered.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut merged: Vec<TimeRange> = Vec::with_capacity(self.buffered.len());
        for range in self.buffered.drain(..) {
            match merged.last_mut() {
                Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
                _ => merged.push(range),
            }
        }
        self.buffered = merged;
    }

    fn advance(&mut self, dt: f64) {
        let available = self.buffered_end();

        if self.stalled {
            if available - self.position < RESUME_AHEAD && available < self.duration {
                return;
            }
            self.stalled = false;
            self.events.push(MediaEvent::CanPlay);
        }

        let target = self.position + dt * self.rate;
        if target >= self.duration && available >= self.duration {
            self.position = self.duration;
            self.playing = false;
            self.ended = true;
            self.events.push(MediaEvent::TimeUpdate);
            self.events.push(MediaEvent::Ended);
            return;
        }

        let next = target.min(available);
        if next > self.position {
            self.position = next;
            self.events.push(MediaEvent::TimeUpdate);
        }
        if target > available {
            self.stalled = true;
            self.events.push(MediaEvent::Waiting);
        }
    }
}

impl MediaElement for TimelineMedia {
    fn play(&mut self) {
        if self.ended {
            self.ended = false;
            self.position = 0.0;
            self.events.push(MediaEvent::TimeUpdate);
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds } else { 0.0 };
        self.position = seconds.clamp(0.0, self.duration);
        self.stalled = false;
        if self.position < self.duration {
            self.ended = false;
        }
        self.events.push(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.events.push(MediaEvent::VolumeChange);
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.events.push(MediaEvent::VolumeChange);
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
        self.events.push(MediaEvent::RateChange);
    }

    fn buffered(&self) -> Vec<TimeRange> {
        self.buffered.clone()
    }
}

impl Player<TimelineMedia> {
    /// Advance the timeline to `now`, feed its notifications to the shell
    /// and expire transient UI. Returns true when a redraw is due.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.media_mut().tick(now);
        let mut changed = false;
        for event in self.media_mut().take_events() {
            changed |= self.handle_media_event(event);
        }
        self.tick(now) || changed
    }
}
