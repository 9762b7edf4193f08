//! Play subcommand handler

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use vplay::player::{format_timestamp, play_session, PlayOptions};
use vplay::subtitles::SubtitleTrack;
use vplay::Config;

/// Timeline length: the explicit duration, else the end of the last cue.
pub fn resolve_duration(duration: Option<f64>, subtitles: Option<&PathBuf>) -> Result<f64> {
    if let Some(duration) = duration {
        return Ok(duration);
    }
    let Some(path) = subtitles else {
        bail!("--duration is required when no subtitle file is given");
    };
    let track = SubtitleTrack::load(path)
        .with_context(|| format!("Cannot derive duration from {}", path.display()))?;
    match track.last_end() {
        Some(end) if end > 0.0 => Ok(end),
        _ => bail!(
            "{} has no cues; pass --duration to set the timeline length",
            path.display()
        ),
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(
    source: String,
    subtitles: Option<PathBuf>,
    duration: Option<f64>,
    delay: Option<f64>,
    speed: Option<f64>,
    download_rate: Option<f64>,
) -> Result<()> {
    let config = Config::load()?;
    let duration = resolve_duration(duration, subtitles.as_ref())?;

    let mut options = PlayOptions::new(source, duration);
    options.subtitles = subtitles;
    options.delay = delay;
    options.speed = speed;
    if let Some(rate) = download_rate {
        options.download_rate = rate;
    }

    let summary = play_session(&options, &config)?;
    println!(
        "Stopped {} at {} / {}",
        summary.title,
        format_timestamp(summary.position),
        format_timestamp(summary.duration)
    );
    Ok(())
}
