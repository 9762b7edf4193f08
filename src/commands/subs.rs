//! Subs subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use vplay::player::format_timestamp;
use vplay::subtitles::{Cue, SubtitleTrack};

/// One line per cue: `#3  00:12 → 00:15  first line / second line`.
pub fn format_cue(cue: &Cue) -> String {
    format!(
        "#{:<4} {} → {}  {}",
        cue.index,
        format_timestamp(cue.start),
        format_timestamp(cue.end),
        cue.lines.join(" / ")
    )
}

#[cfg(not(tarpaulin_include))]
pub fn handle(path: &Path, at: Option<f64>, delay: f64, json: bool) -> Result<()> {
    let track = SubtitleTrack::load(path)?;

    match (at, json) {
        (Some(time), true) => {
            let lines = track.lines_at(time, delay);
            println!("{}", serde_json::to_string_pretty(lines).context("Failed to serialize lines")?);
        }
        (Some(time), false) => {
            for line in track.lines_at(time, delay) {
                println!("{}", line);
            }
        }
        (None, true) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&track.cues).context("Failed to serialize cues")?
            );
        }
        (None, false) => {
            for cue in &track.cues {
                println!("{}", format_cue(cue));
            }
            println!("{} cues", track.len());
        }
    }

    Ok(())
}
