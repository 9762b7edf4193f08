//! Integration tests for the player shell driven by the timeline element

use std::time::{Duration, Instant};

use vplay::player::{MediaEvent, PlaybackStatus, Player, TimelineMedia};
use vplay::Config;

use crate::helpers::{fixture, pump, ready};

fn player_with(duration: f64, download_rate: f64) -> Player<TimelineMedia> {
    let media = TimelineMedia::new(duration).with_download_rate(download_rate);
    Player::new(media, "https://cdn.example.com/v/Sample%20Clip.mp4", &Config::default())
}

#[test]
fn seeking_into_second_cue_shows_its_lines() {
    let mut player = player_with(10.0, f64::INFINITY);
    let t0 = Instant::now();
    ready(&mut player, t0);
    assert!(player.load_subtitle_file(&fixture("two_cues.srt")));

    // Scrubber spans columns 0..100 in this test
    player.set_seek_track(vplay::controls::TrackGeometry::new(0.0, 100.0));
    player.seek_press(60.0);
    player.seek_release(60.0);
    pump(&mut player);

    assert!((player.snapshot().current_time - 6.0).abs() < 1e-9);
    assert_eq!(player.current_subtitle(), ["Second cue", "on two lines."]);
    assert_eq!(player.snapshot().status, PlaybackStatus::Playing);
}

#[test]
fn playback_walks_through_cues_over_time() {
    let mut player = player_with(10.0, f64::INFINITY);
    let t0 = Instant::now();
    ready(&mut player, t0);
    player.load_subtitle_file(&fixture("two_cues.srt"));

    player.toggle_play(t0);
    player.advance(t0 + Duration::from_secs(2));
    assert_eq!(player.current_subtitle(), ["Hello, world."]);

    player.advance(t0 + Duration::from_millis(4500));
    assert!(player.current_subtitle().is_empty());

    player.advance(t0 + Duration::from_secs(6));
    assert_eq!(player.current_subtitle()[0], "Second cue");
}

#[test]
fn slow_download_stalls_then_recovers() {
    let mut player = player_with(60.0, 1.0);
    let t0 = Instant::now();
    ready(&mut player, t0);

    player.set_speed(2.0);
    player.toggle_play(t0);
    player.advance(t0 + Duration::from_secs(1));
    assert_eq!(player.snapshot().status, PlaybackStatus::Buffering);
    assert!(player.media().is_stalled());

    // Slower than the download: data gets ahead and playback resumes
    player.set_speed(0.5);
    player.advance(t0 + Duration::from_secs(3));
    assert_eq!(player.snapshot().status, PlaybackStatus::Playing);
    assert!((player.snapshot().current_time - 2.0).abs() < 1e-6);
}

#[test]
fn toggling_while_stalled_keeps_playing() {
    let mut player = player_with(60.0, 1.0);
    let t0 = Instant::now();
    ready(&mut player, t0);

    player.set_speed(2.0);
    player.toggle_play(t0);
    player.advance(t0 + Duration::from_secs(1));
    assert_eq!(player.snapshot().status, PlaybackStatus::Buffering);

    let toggled = t0 + Duration::from_millis(1100);
    player.toggle_play(toggled);
    assert_eq!(player.snapshot().status, PlaybackStatus::Playing);
    assert!(player.pings().play.is_visible());
    assert!(!player.pings().pause.is_visible());
    assert!(player.media().is_playing());
}

#[test]
fn reaching_the_end_reports_ended() {
    let mut player = player_with(3.0, f64::INFINITY);
    let t0 = Instant::now();
    ready(&mut player, t0);

    player.toggle_play(t0);
    player.advance(t0 + Duration::from_secs(5));

    assert_eq!(player.snapshot().status, PlaybackStatus::Ended);
    assert_eq!(player.progress(), 1.0);
    assert!(player.controls_visible());
}

#[test]
fn double_key_press_leaves_single_ping_cycle() {
    let mut player = player_with(60.0, f64::INFINITY);
    let window = Config::default().timing.ping();
    let t0 = Instant::now();
    ready(&mut player, t0);

    player.handle_key(vplay::player::Key::Right, t0);
    player.handle_key(vplay::player::Key::Right, t0 + window / 2);

    // The first expiry was cancelled by the second press
    player.tick(t0 + window + Duration::from_millis(1));
    assert!(player.pings().forward.is_visible());

    player.tick(t0 + window / 2 + window + Duration::from_millis(1));
    assert!(!player.pings().forward.is_visible());
}

#[test]
fn speed_menu_changes_rate_through_media_events() {
    let mut player = player_with(60.0, f64::INFINITY);
    ready(&mut player, Instant::now());

    player.toggle_settings();
    player.settings_activate(1);
    player.settings_activate(7); // x1.75

    let events = pump(&mut player);
    assert!(events.contains(&MediaEvent::RateChange));
    assert_eq!(player.snapshot().playback_rate, 1.75);
}

#[test]
fn title_is_decoded_file_name() {
    let player = player_with(1.0, 1.0);
    assert_eq!(player.title(), "Sample Clip.mp4");
}
