//! Scrubber rendering for the terminal player.
//!
//! Displays playback progress over the buffered ranges.

use std::io::Write;

use anyhow::Result;

use crate::player::state::BufferSegment;

/// What one column of the scrubber shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCell {
    /// Before the playhead
    Played,
    /// The playhead itself
    Head,
    /// After the playhead, already downloaded
    Buffered,
    /// After the playhead, not downloaded
    Empty,
}

/// Build the scrubber cells.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `progress` - Playback position in `[0, 1]`
/// * `buffered` - Downloaded ranges as fractions of the duration
pub fn build_track_cells(bar_width: usize, progress: f64, buffered: &[BufferSegment]) -> Vec<TrackCell> {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (bar_width as f64 * progress) as usize;

    let mut cells = vec![TrackCell::Empty; bar_width];

    for segment in buffered {
        let start = (segment.offset * bar_width as f64).floor().max(0.0) as usize;
        let end = ((segment.offset + segment.duration) * bar_width as f64).ceil() as usize;
        for cell in cells.iter_mut().take(end.min(bar_width)).skip(start) {
            *cell = TrackCell::Buffered;
        }
    }

    for cell in cells.iter_mut().take(filled) {
        *cell = TrackCell::Played;
    }
    if filled < bar_width {
        cells[filled] = TrackCell::Head;
    }

    cells
}

/// Render the scrubber row.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `progress` - Playback position in `[0, 1]`
/// * `buffered` - Downloaded ranges
/// * `dragging` - Whether the scrubber is being dragged (highlighted)
pub fn render_progress_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    progress: f64,
    buffered: &[BufferSegment],
    dragging: bool,
) -> Result<()> {
    let bar_width = (width as usize).saturating_sub(2);
    let cells = build_track_cells(bar_width, progress, buffered);

    const BLUE: &str = "\x1b[34m";
    const LIGHT_BLUE: &str = "\x1b[94m";
    const GREY: &str = "\x1b[37m";
    const DARK_GREY: &str = "\x1b[90m";

    let accent = if dragging { LIGHT_BLUE } else { BLUE };

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str("\x1b[48;5;236m ");

    for cell in cells {
        match cell {
            TrackCell::Played => {
                output.push_str(accent);
                output.push('━');
            }
            TrackCell::Head => {
                output.push_str(accent);
                output.push('⏺');
            }
            TrackCell::Buffered => {
                output.push_str(GREY);
                output.push('━');
            }
            TrackCell::Empty => {
                output.push_str(DARK_GREY);
                output.push('─');
            }
        }
    }

    output.push(' ');
    output.push_str("\x1b[0m");
    write!(out, "{}", output)?;

    Ok(())
}
