//! Player state management
//!
//! Contains the `PlaybackSnapshot` the player shell owns, as well as shared
//! types used across player modules.

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
    /// The subtitles row of the settings menu was chosen
    ChooseSubtitles,
}

/// Coarse playback status shown by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Playing but starved for data
    Buffering,
    Playing,
    #[default]
    Paused,
    Ended,
}

/// A downloaded range, as fractions of the total duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferSegment {
    /// Start of the range in `[0, 1]`
    pub offset: f64,
    /// Length of the range in `[0, 1]`
    pub duration: f64,
}

/// Everything the controls render from.
///
/// Mutated only by the player shell, in response to media events or
/// explicit commands.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    /// Current playback time in seconds
    pub current_time: f64,
    /// Total duration in seconds (0 until metadata is known)
    pub duration: f64,
    pub muted: bool,
    /// Volume in `[0, 1]`
    pub volume: f64,
    /// Playback speed multiplier (1.0 = normal)
    pub playback_rate: f64,
    pub fullscreen: bool,
    pub status: PlaybackStatus,
    pub buffered: Vec<BufferSegment>,
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            muted: false,
            volume: 1.0,
            playback_rate: 1.0,
            fullscreen: false,
            status: PlaybackStatus::Paused,
            buffered: Vec::new(),
        }
    }
}

impl PlaybackSnapshot {
    /// Playback position as a fraction of the duration (0 when unknown).
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 && self.current_time > 0.0 {
            self.current_time / self.duration
        } else {
            0.0
        }
    }

    /// Audible volume: 0 while muted.
    pub fn volume_level(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Whether the play glyph should read "pause" (playing or stalled).
    pub fn is_running(&self) -> bool {
        matches!(self.status, PlaybackStatus::Playing | PlaybackStatus::Buffering)
    }
}
