//! Rendering components for the terminal player.
//!
//! Every function writes raw escape sequences into any `Write`, so frames
//! can be rendered into a buffer and flushed to the terminal in one go.

mod layout;
mod overlay;
mod progress;
mod settings;
mod status;
mod subtitles;

use std::io::Write;

use anyhow::Result;

pub use layout::{Layout, CONTROL_ROWS, SETTINGS_WIDTH, VOLUME_BAR_COL, VOLUME_BAR_WIDTH};
pub use overlay::{ping_col, ping_glyph, render_buffering, render_pings, render_title, truncate_to_width};
pub use progress::{build_track_cells, render_progress_bar, TrackCell};
pub use settings::{format_item, render_settings};
pub use status::{render_status_bar, time_readout, volume_cells};
pub use subtitles::{place_lines, render_subtitles};

use crate::player::media::MediaElement;
use crate::player::shell::Player;
use crate::player::state::PlaybackStatus;

/// Render one full frame of the player.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `player` - Player whose state is drawn
/// * `layout` - Current screen layout
/// * `frame` - Frame counter, drives the buffering spinner
pub fn render_frame<M: MediaElement, W: Write>(
    out: &mut W,
    player: &Player<M>,
    layout: &Layout,
    frame: usize,
) -> Result<()> {
    write!(out, "\x1b[2J")?;

    render_title(out, layout, &player.title())?;
    render_pings(out, layout, player.pings())?;

    let snapshot = player.snapshot();
    if snapshot.status == PlaybackStatus::Buffering {
        render_buffering(out, layout, frame)?;
    }

    render_subtitles(out, layout, player.current_subtitle())?;

    let settings = player.settings();
    if settings.is_open() {
        let items = settings.items(
            player.subtitles().and_then(|t| t.name.as_deref()),
            &player.quality(),
        );
        render_settings(out, layout, &items, settings.cursor())?;
    }

    if player.controls_visible() {
        render_progress_bar(
            out,
            layout.cols,
            layout.progress_row(),
            player.progress(),
            &snapshot.buffered,
            player.is_seeking(),
        )?;
        render_status_bar(out, layout, snapshot)?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::player::timeline::TimelineMedia;
    use std::time::Instant;

    fn player() -> Player<TimelineMedia> {
        Player::new(
            TimelineMedia::new(120.0),
            "file:///tmp/clip%201.mp4",
            &Config::default(),
        )
    }

    fn render(player: &Player<TimelineMedia>) -> String {
        let layout = Layout::new(60, 16, false);
        let mut out = Vec::new();
        render_frame(&mut out, player, &layout, 0).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn paused_frame_shows_controls_and_title() {
        let text = render(&player());
        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains("clip 1.mp4"));
        assert!(text.contains('⏺'));
        assert!(text.contains('⚙'));
    }

    #[test]
    fn playing_without_hover_hides_controls() {
        let mut player = player();
        player.toggle_play(Instant::now());
        let text = render(&player);
        assert!(!text.contains('⚙'));
        assert!(text.contains('▶'));
    }

    #[test]
    fn subtitles_are_drawn_at_current_time() {
        let mut player = player();
        player.load_subtitles(None, "1\n00:00:00,000 --> 00:00:05,000\nHello there\n");
        assert!(render(&player).contains("Hello there"));
    }

    #[test]
    fn open_settings_panel_is_drawn() {
        let mut player = player();
        player.toggle_settings();
        let text = render(&player);
        assert!(text.contains("Playback speed"));
        assert!(text.contains("0p"));
    }
}
