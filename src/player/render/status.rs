//! Status bar rendering for the terminal player.
//!
//! Play/pause glyph, volume icon and bar, time readout, speed, settings gear
//! and fullscreen icon.

use std::io::Write;

use anyhow::Result;

use super::layout::{Layout, PLAY_COL, VOLUME_BAR_COL, VOLUME_BAR_WIDTH, VOLUME_ICON_COL};
use crate::player::shell::format_timestamp;
use crate::player::state::PlaybackSnapshot;

const WHITE: &str = "\x1b[97m";
const BLUE: &str = "\x1b[34m";
const DARK_GREY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// `01:05 / 10:00`
pub fn time_readout(current: f64, duration: f64) -> String {
    format!("{} / {}", format_timestamp(current), format_timestamp(duration))
}

/// Volume bar cells: `filled` of `width` are lit.
pub fn volume_cells(level: f64, width: usize) -> usize {
    let level = if level.is_finite() {
        level.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (level * width as f64).round() as usize
}

fn move_to(output: &mut String, row: u16, col: u16) {
    output.push_str(&format!("\x1b[{};{}H", row + 1, col + 1));
}

/// Render the status bar.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `layout` - Current screen layout
/// * `snapshot` - Playback state to display
pub fn render_status_bar<W: Write>(out: &mut W, layout: &Layout, snapshot: &PlaybackSnapshot) -> Result<()> {
    let row = layout.status_row();
    let mut output = String::with_capacity(256);

    // Background across the whole row first, then place widgets by column
    move_to(&mut output, row, 0);
    output.push_str("\x1b[48;5;236m");
    output.push_str(&" ".repeat(layout.cols as usize));

    move_to(&mut output, row, PLAY_COL);
    output.push_str(WHITE);
    output.push(if snapshot.is_running() { '⏸' } else { '▶' });

    move_to(&mut output, row, VOLUME_ICON_COL);
    let silent = snapshot.muted || snapshot.volume == 0.0;
    output.push(if silent { '🔇' } else { '🔊' });

    if layout.volume_expanded {
        let lit = volume_cells(snapshot.volume_level(), VOLUME_BAR_WIDTH as usize);
        move_to(&mut output, row, VOLUME_BAR_COL);
        output.push_str(BLUE);
        output.push_str(&"█".repeat(lit));
        output.push_str(DARK_GREY);
        output.push_str(&"░".repeat(VOLUME_BAR_WIDTH as usize - lit));
    }

    move_to(&mut output, row, layout.time_col());
    output.push_str(WHITE);
    output.push_str(&time_readout(snapshot.current_time, snapshot.duration));

    if snapshot.playback_rate != 1.0 {
        output.push_str(DARK_GREY);
        output.push_str(&format!("  x{}", snapshot.playback_rate));
    }

    move_to(&mut output, row, layout.settings_col());
    output.push_str(WHITE);
    output.push('⚙');

    move_to(&mut output, row, layout.fullscreen_col());
    output.push(if snapshot.fullscreen { '🗗' } else { '⛶' });

    output.push_str(RESET);
    write!(out, "{}", output)?;
    Ok(())
}
