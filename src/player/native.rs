//! Terminal host for the player.
//!
//! Owns the terminal for the duration of a session: raw mode, alternate
//! screen, mouse capture and focus reporting. Drives a [`TimelineMedia`]
//! from the wall clock, renders a frame whenever something changed, and
//! routes crossterm events to the input handlers.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info, warn};

use super::input::handle_event;
use super::render::{render_frame, Layout};
use super::shell::Player;
use super::state::{InputResult, PlaybackStatus};
use super::timeline::{TimelineMedia, DEFAULT_DOWNLOAD_RATE};
use crate::config::Config;

/// How long to wait for input before advancing the timeline again.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// What to play and how.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Media source URL or path; the title is derived from it
    pub source: String,
    /// `.srt` file loaded at start and reloaded from the settings menu
    pub subtitles: Option<PathBuf>,
    /// Length of the timeline in seconds
    pub duration: f64,
    /// Subtitle delay override
    pub delay: Option<f64>,
    /// Initial playback rate
    pub speed: Option<f64>,
    /// Media seconds fetched per wall second
    pub download_rate: f64,
}

impl PlayOptions {
    pub fn new(source: impl Into<String>, duration: f64) -> Self {
        Self {
            source: source.into(),
            subtitles: None,
            duration,
            delay: None,
            speed: None,
            download_rate: DEFAULT_DOWNLOAD_RATE,
        }
    }
}

/// Where playback stood when the session ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub title: String,
    pub position: f64,
    pub duration: f64,
}

/// Source of terminal events, so the session loop can be driven without a tty.
pub trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;

    /// Current terminal size as `(cols, rows)`.
    fn size(&self) -> Result<(u16, u16)>;
}

struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("Failed to query terminal size")
    }
}

/// Restores the terminal when dropped, including on early return or panic
/// unwinding out of the loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            Hide
        )
        .context("Failed to set up terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            Show,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Build the player for a session: timeline, subtitles, overrides.
pub fn build_player(options: &PlayOptions, config: &Config) -> Player<TimelineMedia> {
    let media = TimelineMedia::new(options.duration).with_download_rate(options.download_rate);
    let mut player = Player::new(media, options.source.clone(), config);

    if let Some(delay) = options.delay {
        player.set_subtitle_delay(delay);
    }
    if let Some(speed) = options.speed {
        player.set_speed(speed);
    }
    if let Some(path) = &options.subtitles {
        player.load_subtitle_file(path);
    }

    player
}

/// Play in the terminal until the user quits.
pub fn play_session(options: &PlayOptions, config: &Config) -> Result<SessionSummary> {
    let mut player = build_player(options, config);
    let _guard = TerminalGuard::enter()?;
    let mut out = BufWriter::new(io::stdout());
    run_loop(&mut player, options, &mut CrosstermEvents, &mut out)
}

/// The session loop, generic over the event source and output.
pub fn run_loop<E: EventSource, W: Write>(
    player: &mut Player<TimelineMedia>,
    options: &PlayOptions,
    events: &mut E,
    out: &mut W,
) -> Result<SessionSummary> {
    info!(source = %options.source, duration = options.duration, "session started");

    let mut frame = 0usize;
    let mut last_size = None;
    let mut needs_render = true;

    loop {
        let now = Instant::now();
        needs_render |= player.advance(now);

        let (cols, rows) = events.size()?;
        if last_size != Some((cols, rows)) {
            debug!(cols, rows, "terminal resized");
            last_size = Some((cols, rows));
            needs_render = true;
        }
        let expanded = player.is_sound_hovered() || player.is_adjusting_volume();
        let layout = Layout::new(cols, rows, expanded);
        player.set_seek_track(layout.seek_track());
        player.set_volume_track(layout.volume_track());

        // Keep the spinner moving while stalled
        if player.snapshot().status == PlaybackStatus::Buffering {
            needs_render = true;
        }

        if needs_render {
            render_frame(out, player, &layout, frame)?;
            frame = frame.wrapping_add(1);
            needs_render = false;
        }

        let Some(event) = events.next(FRAME_INTERVAL)? else {
            continue;
        };
        needs_render = true;

        match handle_event(event, player, &layout, Instant::now()) {
            InputResult::Continue => {}
            InputResult::Quit => break,
            InputResult::ChooseSubtitles => match &options.subtitles {
                Some(path) => {
                    player.load_subtitle_file(path);
                    player.toggle_settings();
                }
                None => warn!("no subtitle file given on the command line"),
            },
        }
    }

    let summary = SessionSummary {
        title: player.title(),
        position: player.snapshot().current_time,
        duration: player.snapshot().duration,
    };
    info!(position = summary.position, "session ended");
    Ok(summary)
}
