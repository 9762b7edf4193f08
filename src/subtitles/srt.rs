//! SRT parser.
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! First subtitle line
//!
//! 2
//! 00:00:05,000 --> 00:00:08,000
//! Second subtitle line
//! With multiple lines
//! ```
//!
//! Parsing is lenient: a block that cannot be understood is skipped and the
//! rest of the file still loads.

use super::error::SubtitleError;
use super::Cue;

const SEPARATOR: &str = "-->";

/// Parse an `HH:MM:SS,mmm` timestamp into seconds.
///
/// Returns `H*3600 + M*60 + S + mmm/1000`.
pub fn parse_timestamp(s: &str) -> Result<f64, SubtitleError> {
    let invalid = || SubtitleError::InvalidTimestamp(s.to_string());
    let s = s.trim();

    let (clock, millis) = s.split_once(',').ok_or_else(invalid)?;

    let mut parts = clock.split(':');
    let (Some(h), Some(m), Some(sec), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let field = |v: &str| v.trim().parse::<u32>().map_err(|_| invalid());
    let hours = field(h)?;
    let minutes = field(m)?;
    let seconds = field(sec)?;
    let millis = field(millis)?;

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + millis as f64 / 1000.0)
}

/// Parse one block (already split into lines, blank lines excluded).
pub fn parse_block(lines: &[&str]) -> Result<Cue, SubtitleError> {
    let [index, timing, text @ ..] = lines else {
        return Err(SubtitleError::MissingTiming);
    };

    let (start, end) = timing
        .split_once(SEPARATOR)
        .ok_or_else(|| SubtitleError::MissingSeparator(timing.to_string()))?;

    // Anything after the end stamp is a position hint ("X1:40 X2:600 ...")
    let end = end.split_whitespace().next().unwrap_or_default();

    let start_secs = parse_timestamp(start)?;
    let end_secs = parse_timestamp(end)?;
    if start_secs > end_secs {
        return Err(SubtitleError::Inverted {
            start: start.trim().to_string(),
            end: end.to_string(),
        });
    }

    Ok(Cue {
        index: index.trim().to_string(),
        start: start_secs,
        end: end_secs,
        lines: text.iter().map(|row| row.replace('\r', "")).collect(),
    })
}

/// Parse the text of an SRT file into cues, in source order.
///
/// Blocks are separated by lines that are empty or whitespace only. Malformed
/// blocks are dropped.
pub fn parse_srt(content: &str) -> Vec<Cue> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut cues = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            flush_block(&mut block, &mut cues);
        } else {
            block.push(line);
        }
    }
    flush_block(&mut block, &mut cues);

    cues
}

fn flush_block<'a>(block: &mut Vec<&'a str>, cues: &mut Vec<Cue>) {
    if block.is_empty() {
        return;
    }
    if let Ok(cue) = parse_block(block) {
        cues.push(cue);
    }
    block.clear();
}
