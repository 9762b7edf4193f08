//! Input handling for the terminal player.
//!
//! This module handles keyboard, mouse and focus events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::Instant;

use crossterm::event::Event;

use crate::player::media::MediaElement;
use crate::player::render::Layout;
use crate::player::shell::Player;
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `player` - The player shell receiving the gesture
/// * `layout` - Layout the last frame was drawn with, for hit-testing
/// * `now` - Time of the event, for timers
///
/// # Returns
/// `InputResult` indicating whether to continue, quit, or prompt for subtitles
pub fn handle_event<M: MediaElement>(
    event: Event,
    player: &mut Player<M>,
    layout: &Layout,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, player, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, player, layout, now),
        // Terminal focus stands in for the pointer entering/leaving the player
        Event::FocusGained => {
            player.pointer_enter();
            InputResult::Continue
        }
        Event::FocusLost => {
            player.pointer_leave(now);
            player.set_sound_hovered(false);
            InputResult::Continue
        }
        // Resize is picked up by the host loop on the next layout pass
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::player::state::PlaybackStatus;
    use crate::player::timeline::TimelineMedia;
    use std::time::Duration;

    #[test]
    fn focus_lost_hides_controls_after_delay() {
        let config = Config::default();
        let mut player = Player::new(TimelineMedia::new(10.0), "a.mp4", &config);
        let layout = Layout::new(80, 24, false);
        let t0 = Instant::now();

        player.toggle_play(t0);
        assert_eq!(player.snapshot().status, PlaybackStatus::Playing);

        handle_event(Event::FocusGained, &mut player, &layout, t0);
        assert!(player.controls_visible());

        handle_event(Event::FocusLost, &mut player, &layout, t0);
        assert!(player.controls_visible());

        player.tick(t0 + config.timing.leave_hide() + Duration::from_millis(1));
        assert!(!player.controls_visible());
    }

    #[test]
    fn resize_is_a_no_op() {
        let mut player = Player::new(TimelineMedia::new(10.0), "a.mp4", &Config::default());
        let layout = Layout::new(80, 24, false);
        assert_eq!(
            handle_event(Event::Resize(100, 40), &mut player, &layout, Instant::now()),
            InputResult::Continue
        );
    }
}
