//! Settings panel rendering.
//!
//! Draws a boxed panel anchored above the right end of the control bar.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use unicode_width::UnicodeWidthStr;

use super::layout::{Layout, SETTINGS_WIDTH};
use super::overlay::truncate_to_width;
use crate::controls::MenuItem;

/// Inner width of the panel, borders excluded.
const INNER_WIDTH: usize = SETTINGS_WIDTH as usize - 2;

/// Format one menu row to exactly `INNER_WIDTH` columns.
///
/// Label on the left, value (or check mark) right-aligned.
pub fn format_item(item: &MenuItem) -> String {
    let mark = if item.checked { "✓ " } else { "  " };
    let right = item.value.as_deref().unwrap_or("");
    let right = truncate_to_width(right, INNER_WIDTH / 2);

    let label_room = INNER_WIDTH.saturating_sub(mark.width() + right.width() + 2);
    let label = truncate_to_width(&item.label, label_room);

    let gap = INNER_WIDTH.saturating_sub(mark.width() + label.width() + right.width() + 1);
    format!("{}{}{}{} ", mark, label, " ".repeat(gap), right)
}

/// Render the settings panel with `cursor` highlighted.
pub fn render_settings<W: Write>(
    out: &mut W,
    layout: &Layout,
    items: &[MenuItem],
    cursor: usize,
) -> Result<()> {
    let (col, row) = layout.settings_origin(items.len());
    let border = "─".repeat(INNER_WIDTH);

    queue!(
        out,
        MoveTo(col, row),
        SetBackgroundColor(Color::AnsiValue(235)),
        SetForegroundColor(Color::DarkGrey),
        Print(format!("╭{}╮", border)),
    )?;

    for (i, item) in items.iter().enumerate() {
        queue!(
            out,
            MoveTo(col, row + 1 + i as u16),
            SetForegroundColor(Color::DarkGrey),
            Print("│"),
        )?;
        if i == cursor {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            out,
            SetForegroundColor(Color::White),
            Print(format_item(item)),
            SetAttribute(Attribute::NoReverse),
            SetForegroundColor(Color::DarkGrey),
            Print("│"),
        )?;
    }

    queue!(
        out,
        MoveTo(col, row + 1 + items.len() as u16),
        Print(format!("╰{}╯", border)),
        ResetColor,
    )?;

    Ok(())
}
