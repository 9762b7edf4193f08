//! Subtitle cues: SRT parsing, loading, and timestamp lookup.
//!
//! - `srt`: lenient SRT parser (corrupt blocks are skipped)
//! - `error`: parse and load error types
//!
//! Lookup is a linear scan over the cues in source order; when cues overlap
//! the first one defined wins.

mod error;
mod srt;

use std::fs;
use std::path::Path;

use serde::Serialize;

pub use error::{LoadError, SubtitleError};
pub use srt::{parse_block, parse_srt, parse_timestamp};

/// File suffix accepted by [`SubtitleTrack::load`].
pub const SRT_EXTENSION: &str = "srt";

/// A single timed subtitle entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    /// Ordinal identifier as written in the file
    pub index: String,
    /// Start offset in seconds
    pub start: f64,
    /// End offset in seconds (never before `start`)
    pub end: f64,
    /// Display rows
    pub lines: Vec<String>,
}

impl Cue {
    /// Whether `time` falls inside `[start + delay, end + delay]`.
    pub fn is_active(&self, time: f64, delay: f64) -> bool {
        self.start + delay <= time && self.end + delay >= time
    }
}

/// Lines of the first cue active at `time`, or an empty slice.
pub fn lines_at(cues: &[Cue], time: f64, delay: f64) -> &[String] {
    cues.iter()
        .find(|cue| cue.is_active(time, delay))
        .map(|cue| cue.lines.as_slice())
        .unwrap_or(&[])
}

/// A loaded set of cues and the name of the file they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleTrack {
    pub name: Option<String>,
    pub cues: Vec<Cue>,
}

impl SubtitleTrack {
    /// Parse SRT text into a track.
    pub fn from_srt(name: Option<String>, content: &str) -> Self {
        Self {
            name,
            cues: parse_srt(content),
        }
    }

    /// Load an `.srt` file from disk.
    ///
    /// Only the file name suffix is checked; the content is not sniffed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !has_srt_extension(path) {
            return Err(LoadError::WrongExtension {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Ok(Self::from_srt(name, &content))
    }

    /// Lines to display at `time`, shifted by `delay` seconds.
    pub fn lines_at(&self, time: f64, delay: f64) -> &[String] {
        lines_at(&self.cues, time, delay)
    }

    /// End of the latest cue, if any.
    pub fn last_end(&self) -> Option<f64> {
        self.cues.iter().map(|c| c.end).reduce(f64::max)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

/// Whether the path ends in `.srt` (case-sensitive, like a file picker filter).
pub fn has_srt_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SRT_EXTENSION)
}
