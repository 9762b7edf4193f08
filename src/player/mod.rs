//! Video player shell and its terminal host
//!
//! The player decorates a host media element with transient controls:
//! scrubber, volume, fullscreen, speed menu, subtitle overlay and gesture
//! feedback.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `media`: the `MediaElement` trait the host implements, and its events
//! - `state`: `PlaybackSnapshot` and shared types (`PlaybackStatus`, `InputResult`)
//! - `shell`: `Player`, owning all UI state and its named transitions
//! - `timeline`: wall-clock media element used by the terminal host
//! - `input/`: crossterm keyboard and mouse mapping
//! - `render/`: ANSI rendering (title, pings, subtitles, settings, progress, status)
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Instant;
//! use vplay::player::{MediaEvent, Player, TimelineMedia};
//! use vplay::Config;
//!
//! let media = TimelineMedia::new(120.0);
//! let mut player = Player::new(media, "https://example.com/clip.mp4", &Config::default());
//! player.toggle_play(Instant::now());
//! player.handle_media_event(MediaEvent::TimeUpdate);
//! println!("{:?}", player.current_subtitle());
//! ```

pub(crate) mod input;
pub mod media;
mod native;
pub mod render;
pub mod shell;
pub mod state;
pub mod timeline;

pub use media::{MediaElement, MediaEvent, TimeRange};
pub use native::{build_player, play_session, run_loop, EventSource, PlayOptions, SessionSummary};
pub use shell::{format_timestamp, Key, Player};
pub use state::{BufferSegment, InputResult, PlaybackSnapshot, PlaybackStatus};
pub use timeline::TimelineMedia;
