//! vplay: video player controls with SRT subtitles.
//!
//! The library holds everything that does not need a terminal: the SubRip
//! parser and cue lookup, the timers and sliders behind the controls, and the
//! [`player::Player`] shell that ties them to a media element. The `vplay`
//! binary adds a crossterm front-end on top.

pub mod cli;
pub mod config;
pub mod controls;
pub mod logging;
pub mod player;
pub mod subtitles;

pub use config::Config;
