//! Subtitle parsing and loading errors.

use std::path::PathBuf;

/// Reasons a single SRT block or timestamp was rejected.
///
/// The parser drops rejected blocks instead of failing the whole file, so
/// these only surface through [`parse_timestamp`](super::parse_timestamp)
/// and [`parse_block`](super::parse_block).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubtitleError {
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Timing line has no '-->' separator: {0:?}")]
    MissingSeparator(String),

    #[error("Block has no timing line")]
    MissingTiming,

    #[error("Cue ends before it starts ({start} > {end})")]
    Inverted { start: String, end: String },
}

/// Errors that can occur when loading a subtitle file from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Not an .srt file: {path}")]
    WrongExtension { path: PathBuf },

    #[error("Failed to read subtitle file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
