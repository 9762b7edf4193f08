//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::subtitles::parse_timestamp;

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VPLAY_BUILD_DATE"), ")");

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VPLAY_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "vplay",
    version,
    long_version = LONG_VERSION,
    about = "Terminal video player with SRT subtitles",
    long_about = "vplay plays a media timeline in the terminal with a scrubber, \
                  volume bar, speed menu and SRT subtitle overlay.\n\n\
                  Logs go to a file; set VPLAY_LOG (e.g. VPLAY_LOG=debug) to change the level."
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a media source in the terminal
    #[command(long_about = "Play a media source in the terminal.\n\n\
        Keys: space play/pause, ←/→ seek, ↑/↓ volume, f fullscreen, ; mute,\n\
        s settings, q quit. The mouse drives the scrubber and volume bar.")]
    Play {
        /// Media URL or path; its last path segment becomes the title
        source: String,

        /// SubRip (.srt) subtitle file
        #[arg(short, long)]
        subtitles: Option<PathBuf>,

        /// Timeline length: seconds, MM:SS or HH:MM:SS (defaults to the end of the last cue)
        #[arg(short, long, value_parser = parse_clock)]
        duration: Option<f64>,

        /// Shift subtitles by this many seconds (positive shows them later)
        #[arg(long, allow_hyphen_values = true)]
        delay: Option<f64>,

        /// Initial playback rate
        #[arg(long)]
        speed: Option<f64>,

        /// Simulated download speed in media seconds per second
        #[arg(long)]
        download_rate: Option<f64>,
    },

    /// Inspect a subtitle file
    Subs {
        /// SubRip (.srt) file
        path: PathBuf,

        /// Print only the lines shown at this time
        #[arg(long, value_parser = parse_clock)]
        at: Option<f64>,

        /// Subtitle delay in seconds, applied with --at
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        delay: f64,

        /// Print cues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file if none exists
    Init,
    /// Print the configuration file path
    Path,
}

/// Parse a clock value: `90`, `1.5`, `01:30`, `00:01:30` or `00:01:30,500`.
pub fn parse_clock(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if s.contains(',') {
        return parse_timestamp(s).map_err(|e| e.to_string());
    }

    let parts: Vec<&str> = s.split(':').collect();
    let numbers = parts
        .iter()
        .map(|p| p.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| format!("invalid time: {:?}", s))?;

    let seconds = match numbers.as_slice() {
        [secs] => *secs,
        [mins, secs] => mins * 60.0 + secs,
        [hours, mins, secs] => hours * 3600.0 + mins * 60.0 + secs,
        _ => return Err(format!("invalid time: {:?}", s)),
    };

    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("time must be a non-negative number: {:?}", s))
    }
}
