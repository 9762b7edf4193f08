//! Shared helpers for integration tests.

use std::path::PathBuf;
use std::time::Instant;

use vplay::player::{MediaEvent, Player, TimelineMedia};

/// Directory holding the `.srt` fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Deliver every queued timeline notification to the shell.
pub fn pump(player: &mut Player<TimelineMedia>) -> Vec<MediaEvent> {
    let events = player.media_mut().take_events();
    for &event in &events {
        player.handle_media_event(event);
    }
    events
}

/// Tick the timeline once so metadata and buffered ranges are reported.
pub fn ready(player: &mut Player<TimelineMedia>, now: Instant) {
    player.advance(now);
}
