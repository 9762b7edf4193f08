//! Mouse input handling for the terminal player.
//!
//! Hit-tests pointer events against the current [`Layout`]: scrubber and
//! volume bar drags, control bar buttons, settings rows, and taps on the
//! playback surface.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use crate::controls::SettingsAction;
use crate::player::media::MediaElement;
use crate::player::render::Layout;
use crate::player::shell::Player;
use crate::player::state::InputResult;

/// Handle a mouse event.
pub fn handle_mouse_event<M: MediaElement>(
    mouse: MouseEvent,
    player: &mut Player<M>,
    layout: &Layout,
    now: Instant,
) -> InputResult {
    let (col, row) = (mouse.column, mouse.row);
    let x = col as f64;

    match mouse.kind {
        MouseEventKind::Moved => {
            player.pointer_move(now);
            player.set_sound_hovered(layout.in_volume_zone(col, row));
        }
        MouseEventKind::Down(MouseButton::Left) => {
            player.pointer_move(now);
            return handle_left_press(player, layout, col, row, now);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            player.pointer_move(now);
            if player.is_seeking() {
                player.seek_drag(x);
            } else if player.is_adjusting_volume() {
                player.volume_drag(x);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if player.is_seeking() {
                player.seek_release(x);
            } else if player.is_adjusting_volume() {
                player.volume_release(x);
            }
        }
        _ => {}
    }

    InputResult::Continue
}

fn handle_left_press<M: MediaElement>(
    player: &mut Player<M>,
    layout: &Layout,
    col: u16,
    row: u16,
    now: Instant,
) -> InputResult {
    let x = col as f64;

    if player.settings().is_open() {
        let items = player
            .settings()
            .items(None, &player.quality())
            .len();
        if let Some(index) = layout.settings_row_at(col, row, items) {
            if player.settings_activate(index) == SettingsAction::ChooseSubtitles {
                return InputResult::ChooseSubtitles;
            }
            return InputResult::Continue;
        }
    }

    if player.controls_visible() {
        if row == layout.progress_row() && layout.seek_track().contains(x) {
            player.seek_press(x);
            return InputResult::Continue;
        }
        if row == layout.status_row() {
            if layout.volume_track().contains(x) {
                player.volume_press(x);
            } else if layout.on_play_glyph(col, row) {
                player.toggle_play(now);
            } else if layout.on_volume_icon(col, row) {
                player.toggle_mute();
            } else if layout.on_settings_icon(col, row) {
                player.toggle_settings();
            } else if layout.on_fullscreen_icon(col, row) {
                player.toggle_fullscreen();
            }
            return InputResult::Continue;
        }
    }

    if layout.surface_rows().contains(&row) {
        player.click(now);
    }

    InputResult::Continue
}
