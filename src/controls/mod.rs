//! Transient UI controls shared by every player host.
//!
//! - `timer`: single pending expiry, cancel-and-rearm
//! - `ping`: timed feedback glyphs (seek arrows, play/pause)
//! - `hover`: control bar show/hide on pointer activity
//! - `activation`: double-click detection
//! - `slider`: pointer position to `[0, 1]` fraction, drag state
//! - `settings`: speed/subtitles/quality menu
//!
//! None of these spawn anything. Time is passed in as an `Instant` and the
//! host advances it from its event loop.

pub mod activation;
pub mod hover;
pub mod ping;
pub mod settings;
pub mod slider;
pub mod timer;

pub use activation::DoubleActivation;
pub use hover::ControlsVisibility;
pub use ping::{Ping, PingKind, Pings};
pub use settings::{speed_label, MenuItem, SettingsAction, SettingsMenu, SettingsPage, SPEED_PRESETS};
pub use slider::{fraction_at, Slider, TrackGeometry};
pub use timer::Deadline;
