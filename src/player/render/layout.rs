//! Screen layout of the terminal player.
//!
//! Rows, top to bottom: title bar, playback surface, scrubber, status bar.
//! The status bar is laid out left to right as play glyph, volume icon,
//! optional volume bar, time readout; the settings gear and fullscreen icon
//! sit at the right edge.

use crate::controls::TrackGeometry;

/// Rows taken by the control bar (scrubber + status bar).
pub const CONTROL_ROWS: u16 = 2;

pub const PLAY_COL: u16 = 1;
pub const VOLUME_ICON_COL: u16 = 4;
pub const VOLUME_BAR_COL: u16 = 7;
pub const VOLUME_BAR_WIDTH: u16 = 10;

/// Width of the settings panel, border included.
pub const SETTINGS_WIDTH: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cols: u16,
    pub rows: u16,
    /// Volume bar is shown (pointer over the volume zone or dragging it)
    pub volume_expanded: bool,
}

impl Layout {
    pub fn new(cols: u16, rows: u16, volume_expanded: bool) -> Self {
        Self {
            cols,
            rows,
            volume_expanded,
        }
    }

    pub fn title_row(&self) -> u16 {
        0
    }

    pub fn status_row(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    pub fn progress_row(&self) -> u16 {
        self.rows.saturating_sub(CONTROL_ROWS)
    }

    /// Rows of the playback surface, `first..last` exclusive of the controls.
    pub fn surface_rows(&self) -> std::ops::Range<u16> {
        1..self.progress_row()
    }

    /// Middle row of the surface, where feedback glyphs are drawn.
    pub fn center_row(&self) -> u16 {
        let rows = self.surface_rows();
        rows.start + rows.len() as u16 / 2
    }

    /// Row just above the control bar where the last subtitle line goes.
    pub fn subtitle_bottom_row(&self) -> u16 {
        self.progress_row().saturating_sub(1)
    }

    /// Scrubber track: one column of padding on each side.
    pub fn seek_track(&self) -> TrackGeometry {
        TrackGeometry::new(1.0, self.cols.saturating_sub(2) as f64)
    }

    pub fn volume_track(&self) -> TrackGeometry {
        if self.volume_expanded {
            TrackGeometry::new(VOLUME_BAR_COL as f64, VOLUME_BAR_WIDTH as f64)
        } else {
            TrackGeometry::new(VOLUME_BAR_COL as f64, 0.0)
        }
    }

    /// First column of the time readout.
    pub fn time_col(&self) -> u16 {
        if self.volume_expanded {
            VOLUME_BAR_COL + VOLUME_BAR_WIDTH + 2
        } else {
            VOLUME_BAR_COL
        }
    }

    pub fn fullscreen_col(&self) -> u16 {
        self.cols.saturating_sub(3)
    }

    pub fn settings_col(&self) -> u16 {
        self.cols.saturating_sub(6)
    }

    /// Volume icon plus (when shown) the bar: hovering here expands the bar.
    pub fn in_volume_zone(&self, col: u16, row: u16) -> bool {
        if row != self.status_row() {
            return false;
        }
        let end = if self.volume_expanded {
            VOLUME_BAR_COL + VOLUME_BAR_WIDTH
        } else {
            VOLUME_BAR_COL
        };
        (VOLUME_ICON_COL..end).contains(&col)
    }

    pub fn on_play_glyph(&self, col: u16, row: u16) -> bool {
        row == self.status_row() && (PLAY_COL..PLAY_COL + 2).contains(&col)
    }

    pub fn on_volume_icon(&self, col: u16, row: u16) -> bool {
        row == self.status_row() && (VOLUME_ICON_COL..VOLUME_ICON_COL + 2).contains(&col)
    }

    pub fn on_settings_icon(&self, col: u16, row: u16) -> bool {
        row == self.status_row() && (self.settings_col()..self.settings_col() + 2).contains(&col)
    }

    pub fn on_fullscreen_icon(&self, col: u16, row: u16) -> bool {
        row == self.status_row()
            && (self.fullscreen_col()..self.fullscreen_col() + 2).contains(&col)
    }

    /// Top-left corner of a settings panel with `items` rows, anchored to
    /// the right edge just above the control bar.
    pub fn settings_origin(&self, items: usize) -> (u16, u16) {
        let height = items as u16 + 2;
        let col = self.cols.saturating_sub(SETTINGS_WIDTH + 1);
        let row = self.progress_row().saturating_sub(height);
        (col, row)
    }

    /// Settings row under the pointer, if any.
    pub fn settings_row_at(&self, col: u16, row: u16, items: usize) -> Option<usize> {
        let (left, top) = self.settings_origin(items);
        let inside_cols = col > left && col < left + SETTINGS_WIDTH - 1;
        let first = top + 1;
        if inside_cols && row >= first && row < first + items as u16 {
            Some((row - first) as usize)
        } else {
            None
        }
    }
}
