//! Surface overlays: title bar, gesture feedback glyphs, buffering marker.

use std::io::Write;

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use super::layout::Layout;
use crate::controls::{PingKind, Pings};

/// Glyph drawn for a ping.
pub fn ping_glyph(kind: PingKind) -> &'static str {
    match kind {
        PingKind::Forward => "▶▶",
        PingKind::Backward => "◀◀",
        PingKind::Play => "▶",
        PingKind::Pause => "⏸",
    }
}

/// Column at which a ping glyph is drawn.
///
/// Seek arrows sit near the left and right edges, play/pause in the middle.
pub fn ping_col(kind: PingKind, cols: u16) -> u16 {
    let glyph_width = ping_glyph(kind).width() as u16;
    match kind {
        PingKind::Backward => 3,
        PingKind::Forward => cols.saturating_sub(3 + glyph_width),
        PingKind::Play | PingKind::Pause => cols.saturating_sub(glyph_width) / 2,
    }
}

/// Render the title bar (file name of the source).
pub fn render_title<W: Write>(out: &mut W, layout: &Layout, title: &str) -> Result<()> {
    let title = truncate_to_width(title, (layout.cols as usize).saturating_sub(2));
    write!(
        out,
        "\x1b[{};1H\x1b[48;5;236m\x1b[97m {}{}\x1b[0m",
        layout.title_row() + 1,
        title,
        " ".repeat((layout.cols as usize).saturating_sub(title.width() + 1))
    )?;
    Ok(())
}

/// Render every visible ping glyph on the center row.
pub fn render_pings<W: Write>(out: &mut W, layout: &Layout, pings: &Pings) -> Result<()> {
    let row = layout.center_row();
    for kind in [PingKind::Backward, PingKind::Forward, PingKind::Play, PingKind::Pause] {
        if pings.get(kind).is_visible() {
            write!(
                out,
                "\x1b[{};{}H\x1b[1;97m{}\x1b[0m",
                row + 1,
                ping_col(kind, layout.cols) + 1,
                ping_glyph(kind)
            )?;
        }
    }
    Ok(())
}

/// Render the stalled-playback marker under the center glyph.
pub fn render_buffering<W: Write>(out: &mut W, layout: &Layout, frame: usize) -> Result<()> {
    const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
    let row = layout.center_row() + 1;
    let col = layout.cols / 2;
    write!(
        out,
        "\x1b[{};{}H\x1b[97m{}\x1b[0m",
        row + 1,
        col + 1,
        SPINNER[frame % SPINNER.len()]
    )?;
    Ok(())
}

/// Cut `text` so its display width fits in `max` columns.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    if max > 0 {
        out.push('…');
    }
    out
}
