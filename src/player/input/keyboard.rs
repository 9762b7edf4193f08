//! Keyboard input handling for the terminal player.
//!
//! While the settings panel is open the arrow keys, Enter and Esc drive the
//! menu; otherwise keys map onto the player's shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use crate::controls::SettingsAction;
use crate::player::media::MediaElement;
use crate::player::shell::{Key, Player};
use crate::player::state::InputResult;

/// Map a key code onto a player shortcut.
pub fn shortcut(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char('f') => Some(Key::Fullscreen),
        KeyCode::Char(';') => Some(Key::Mute),
        _ => None,
    }
}

/// Handle a keyboard event.
pub fn handle_key_event<M: MediaElement>(
    key: KeyEvent,
    player: &mut Player<M>,
    now: Instant,
) -> InputResult {
    // Release and repeat reports (kitty protocol, Windows) would double up
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Quit;
    }

    if player.settings().is_open() {
        return handle_settings_key(key.code, player);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('s') => {
            player.toggle_settings();
            InputResult::Continue
        }
        code => {
            if let Some(shortcut) = shortcut(code) {
                player.handle_key(shortcut, now);
            }
            InputResult::Continue
        }
    }
}

fn handle_settings_key<M: MediaElement>(code: KeyCode, player: &mut Player<M>) -> InputResult {
    match code {
        KeyCode::Up => player.settings_up(),
        KeyCode::Down => player.settings_down(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => player.settings_back(),
        KeyCode::Char('s') => player.toggle_settings(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
            if player.settings_select() == SettingsAction::ChooseSubtitles {
                return InputResult::ChooseSubtitles;
            }
        }
        KeyCode::Char('q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::controls::SettingsPage;
    use crate::player::timeline::TimelineMedia;

    fn player() -> Player<TimelineMedia> {
        let media = TimelineMedia::new(100.0).with_download_rate(f64::INFINITY);
        let mut player = Player::new(media, "clip.mp4", &Config::default());
        player.advance(Instant::now());
        player.media_mut().set_current_time(50.0);
        player
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let mut player = player();
        let now = Instant::now();
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut player, now), InputResult::Quit);
        assert_eq!(handle_key_event(press(KeyCode::Esc), &mut player, now), InputResult::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut player, now), InputResult::Quit);
    }

    #[test]
    fn arrows_seek_by_time_step() {
        let mut player = player();
        handle_key_event(press(KeyCode::Right), &mut player, Instant::now());
        assert_eq!(player.media().current_time(), 60.0);
        assert!(player.pings().forward.is_visible());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut player = player();
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        handle_key_event(key, &mut player, Instant::now());
        assert_eq!(player.media().current_time(), 50.0);
    }

    #[test]
    fn esc_closes_settings_before_quitting() {
        let mut player = player();
        let now = Instant::now();
        handle_key_event(press(KeyCode::Char('s')), &mut player, now);
        assert!(player.settings().is_open());

        assert_eq!(handle_key_event(press(KeyCode::Esc), &mut player, now), InputResult::Continue);
        assert!(!player.settings().is_open());
    }

    #[test]
    fn settings_navigation_applies_speed() {
        let mut player = player();
        let now = Instant::now();
        handle_key_event(press(KeyCode::Char('s')), &mut player, now);
        handle_key_event(press(KeyCode::Down), &mut player, now);
        handle_key_event(press(KeyCode::Enter), &mut player, now);
        assert_eq!(player.settings().page(), SettingsPage::Speed);

        // Back, 0.25, 0.5
        handle_key_event(press(KeyCode::Down), &mut player, now);
        handle_key_event(press(KeyCode::Down), &mut player, now);
        handle_key_event(press(KeyCode::Enter), &mut player, now);
        assert_eq!(player.media().playback_rate(), 0.5);
    }

    #[test]
    fn subtitles_row_asks_host() {
        let mut player = player();
        let now = Instant::now();
        handle_key_event(press(KeyCode::Char('s')), &mut player, now);
        assert_eq!(
            handle_key_event(press(KeyCode::Enter), &mut player, now),
            InputResult::ChooseSubtitles
        );
    }

    #[test]
    fn shortcut_table() {
        assert_eq!(shortcut(KeyCode::Char(';')), Some(Key::Mute));
        assert_eq!(shortcut(KeyCode::Char('f')), Some(Key::Fullscreen));
        assert_eq!(shortcut(KeyCode::Char('x')), None);
    }
}
