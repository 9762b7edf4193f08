//! The host media element the player decorates.
//!
//! Decoding, buffering and seeking belong to the host. The player only
//! issues commands through [`MediaElement`] and reacts to [`MediaEvent`]s
//! the host delivers.

/// A buffered range in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }
}

/// Telemetry notifications from the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback position changed
    TimeUpdate,
    /// Duration and dimensions are known
    LoadedMetadata,
    /// Buffered ranges changed
    Progress,
    RateChange,
    VolumeChange,
    /// Playback stalled waiting for data
    Waiting,
    /// Enough data to resume after a stall
    CanPlay,
    Ended,
}

/// Commands and queries the player needs from a media element.
pub trait MediaElement {
    fn play(&mut self);
    fn pause(&mut self);

    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);

    /// Total duration in seconds; 0 or non-finite while unknown.
    fn duration(&self) -> f64;

    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);

    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);

    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);

    /// Buffered ranges in seconds, in ascending order.
    fn buffered(&self) -> Vec<TimeRange>;

    /// Intrinsic video height in pixels (0 when unknown or audio only).
    fn video_height(&self) -> u32 {
        0
    }
}
