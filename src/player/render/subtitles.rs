//! Subtitle overlay rendering.
//!
//! Lines are centered horizontally and stacked upwards from just above the
//! control bar, on a dark background.

use std::io::Write;

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use super::layout::Layout;
use super::overlay::truncate_to_width;

/// Placement of one subtitle line: `(row, col, text)`.
pub fn place_lines(layout: &Layout, lines: &[String]) -> Vec<(u16, u16, String)> {
    let surface = layout.surface_rows();
    let max_width = (layout.cols as usize).saturating_sub(4);
    let bottom = layout.subtitle_bottom_row();

    let visible = lines.len().min(surface.len());
    let first = bottom + 1 - visible as u16;

    lines[lines.len() - visible..]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let text = truncate_to_width(line, max_width);
            let col = (layout.cols as usize).saturating_sub(text.width() + 2) / 2;
            (first + i as u16, col as u16, text)
        })
        .collect()
}

pub fn render_subtitles<W: Write>(out: &mut W, layout: &Layout, lines: &[String]) -> Result<()> {
    for (row, col, text) in place_lines(layout, lines) {
        write!(
            out,
            "\x1b[{};{}H\x1b[48;5;234m\x1b[97m {} \x1b[0m",
            row + 1,
            col + 1,
            text
        )?;
    }
    Ok(())
}
