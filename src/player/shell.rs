//! The player shell.
//!
//! `Player` wraps a [`MediaElement`] and owns all UI state: the playback
//! snapshot, gesture pings, control bar visibility, the two sliders, the
//! settings menu and the loaded subtitles. State changes only through the
//! named transitions below; telemetry arrives through
//! [`Player::handle_media_event`].

use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::controls::{
    ControlsVisibility, DoubleActivation, PingKind, Pings, SettingsAction, SettingsMenu, Slider,
    TrackGeometry,
};
use crate::player::media::{MediaElement, MediaEvent};
use crate::player::state::{BufferSegment, PlaybackSnapshot, PlaybackStatus};
use crate::subtitles::{LoadError, SubtitleTrack};

/// Keys the player reacts to, independent of any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Space: toggle play
    Space,
    /// Seek backward one step
    Left,
    /// Seek forward one step
    Right,
    /// Volume up one step
    Up,
    /// Volume down one step
    Down,
    /// `f`: toggle fullscreen
    Fullscreen,
    /// `;`: toggle mute
    Mute,
}

pub struct Player<M> {
    media: M,
    source: String,
    time_step: f64,
    volume_step: f64,
    snapshot: PlaybackSnapshot,
    subtitles: Option<SubtitleTrack>,
    subtitle_delay: f64,
    pings: Pings,
    controls: ControlsVisibility,
    activation: DoubleActivation,
    seek: Slider,
    volume: Slider,
    settings: SettingsMenu,
    sound_hovered: bool,
}

impl<M: MediaElement> Player<M> {
    pub fn new(media: M, source: impl Into<String>, config: &Config) -> Self {
        let timing = &config.timing;
        let media_rate = media.playback_rate();
        let snapshot = PlaybackSnapshot {
            volume: media.volume(),
            muted: media.muted(),
            playback_rate: media_rate,
            ..Default::default()
        };

        Self {
            media,
            source: source.into(),
            time_step: config.player.time_step,
            volume_step: config.player.volume_step,
            snapshot,
            subtitles: None,
            subtitle_delay: config.subtitles.delay,
            pings: Pings::new(timing.ping()),
            controls: ControlsVisibility::new(timing.leave_hide(), timing.idle_hide()),
            activation: DoubleActivation::new(timing.double_click()),
            seek: Slider::new(TrackGeometry::new(0.0, 0.0)),
            volume: Slider::new(TrackGeometry::new(0.0, 0.0)),
            settings: SettingsMenu::with_speed(config.player.speeds.clone(), media_rate),
            sound_hovered: false,
        }
    }

    // === Accessors ===

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn snapshot(&self) -> &PlaybackSnapshot {
        &self.snapshot
    }

    pub fn pings(&self) -> &Pings {
        &self.pings
    }

    pub fn settings(&self) -> &SettingsMenu {
        &self.settings
    }

    pub fn subtitles(&self) -> Option<&SubtitleTrack> {
        self.subtitles.as_ref()
    }

    pub fn subtitle_delay(&self) -> f64 {
        self.subtitle_delay
    }

    pub fn set_subtitle_delay(&mut self, delay: f64) {
        self.subtitle_delay = delay;
    }

    pub fn is_seeking(&self) -> bool {
        self.seek.is_dragging()
    }

    pub fn is_sound_hovered(&self) -> bool {
        self.sound_hovered
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name shown in the title bar: the percent-decoded last path segment
    /// of the source.
    pub fn title(&self) -> String {
        let segment = self.source.rsplit('/').next().unwrap_or_default();
        urlencoding::decode(segment)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| segment.to_string())
    }

    /// Quality label for the settings menu, e.g. `720p`.
    pub fn quality(&self) -> String {
        format!("{}p", self.media.video_height())
    }

    /// Lines of the subtitle cue active at the current time.
    pub fn current_subtitle(&self) -> &[String] {
        match &self.subtitles {
            Some(track) => track.lines_at(self.snapshot.current_time, self.subtitle_delay),
            None => &[],
        }
    }

    pub fn progress(&self) -> f64 {
        self.snapshot.progress()
    }

    pub fn volume_level(&self) -> f64 {
        self.snapshot.volume_level()
    }

    /// The control bar is up while hovered or whenever playback is not running.
    pub fn controls_visible(&self) -> bool {
        self.controls.is_hovered() || self.snapshot.status != PlaybackStatus::Playing
    }

    // === Layout ===

    pub fn set_seek_track(&mut self, geometry: TrackGeometry) {
        self.seek.set_geometry(geometry);
    }

    pub fn set_volume_track(&mut self, geometry: TrackGeometry) {
        self.volume.set_geometry(geometry);
    }

    pub fn seek_track(&self) -> TrackGeometry {
        self.seek.geometry()
    }

    pub fn volume_track(&self) -> TrackGeometry {
        self.volume.geometry()
    }

    // === Playback transitions ===

    /// User-facing play/pause with ping feedback. Only `Playing` pauses;
    /// toggling while buffering, paused or ended starts playback.
    pub fn toggle_play(&mut self, now: Instant) {
        if self.snapshot.status == PlaybackStatus::Playing {
            self.media.pause();
            self.snapshot.status = PlaybackStatus::Paused;
            self.pings.swap(PingKind::Pause, PingKind::Play, now);
        } else {
            self.pings.swap(PingKind::Play, PingKind::Pause, now);
            self.media.play();
            self.snapshot.status = PlaybackStatus::Playing;
        }
        debug!(status = ?self.snapshot.status, "toggle play");
    }

    /// Pause without feedback (scrubber drag start).
    pub fn silent_pause(&mut self) {
        self.media.pause();
        self.snapshot.status = PlaybackStatus::Paused;
    }

    /// Resume without feedback (scrubber drag end).
    pub fn silent_resume(&mut self) {
        self.media.play();
        self.snapshot.status = PlaybackStatus::Playing;
    }

    /// Seek to `fraction` of the known duration.
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        let target = self.snapshot.duration * fraction;
        debug!(target, "seek");
        self.media.set_current_time(target);
    }

    /// Seek by `delta` seconds, clamped to `[0, duration]`.
    pub fn step_time(&mut self, delta: f64) {
        let target = (self.media.current_time() + delta).clamp(0.0, self.snapshot.duration.max(0.0));
        self.media.set_current_time(target);
    }

    /// Change volume by `delta`, clamped to `[0, 1]`.
    pub fn step_volume(&mut self, delta: f64) {
        let level = (self.media.volume() + delta).clamp(0.0, 1.0);
        self.media.set_volume(level);
        self.sync_volume();
    }

    /// Set volume from a slider fraction; unmutes.
    pub fn set_volume_fraction(&mut self, fraction: f64) {
        self.media.set_muted(false);
        self.media.set_volume(fraction);
        self.sync_volume();
    }

    pub fn toggle_mute(&mut self) {
        let muted = !self.media.muted();
        self.media.set_muted(muted);
        self.sync_volume();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.snapshot.fullscreen = !self.snapshot.fullscreen;
        debug!(fullscreen = self.snapshot.fullscreen, "toggle fullscreen");
    }

    pub fn set_speed(&mut self, rate: f64) {
        debug!(rate, "set playback rate");
        self.media.set_playback_rate(rate);
        self.settings.set_speed(rate);
    }

    fn sync_volume(&mut self) {
        self.snapshot.volume = self.media.volume();
        self.snapshot.muted = self.media.muted();
    }

    // === Scrubber and volume bar ===

    /// Pointer pressed on the scrubber: pause silently and seek.
    pub fn seek_press(&mut self, x: f64) {
        let fraction = self.seek.press(x);
        self.silent_pause();
        self.seek_to_fraction(fraction);
    }

    pub fn seek_drag(&mut self, x: f64) {
        if let Some(fraction) = self.seek.drag(x) {
            self.seek_to_fraction(fraction);
        }
    }

    /// Pointer released: final seek and silent resume.
    pub fn seek_release(&mut self, x: f64) {
        if let Some(fraction) = self.seek.release(x) {
            self.seek_to_fraction(fraction);
            self.silent_resume();
        }
    }

    pub fn volume_press(&mut self, x: f64) {
        let fraction = self.volume.press(x);
        self.set_volume_fraction(fraction);
    }

    pub fn volume_drag(&mut self, x: f64) {
        if let Some(fraction) = self.volume.drag(x) {
            self.set_volume_fraction(fraction);
        }
    }

    pub fn volume_release(&mut self, x: f64) {
        if let Some(fraction) = self.volume.release(x) {
            self.set_volume_fraction(fraction);
        }
    }

    pub fn is_adjusting_volume(&self) -> bool {
        self.volume.is_dragging()
    }

    // === Gestures ===

    /// Keyboard shortcut. Seeks ping the matching arrow and hide the other.
    pub fn handle_key(&mut self, key: Key, now: Instant) {
        match key {
            Key::Space => self.toggle_play(now),
            Key::Left => {
                self.step_time(-self.time_step);
                self.pings.swap(PingKind::Backward, PingKind::Forward, now);
            }
            Key::Right => {
                self.step_time(self.time_step);
                self.pings.swap(PingKind::Forward, PingKind::Backward, now);
            }
            Key::Up => self.step_volume(self.volume_step),
            Key::Down => self.step_volume(-self.volume_step),
            Key::Fullscreen => self.toggle_fullscreen(),
            Key::Mute => self.toggle_mute(),
        }
    }

    /// Tap on the playback surface. A quick second tap also toggles
    /// fullscreen; every tap toggles play.
    pub fn click(&mut self, now: Instant) {
        if self.activation.click(now) {
            self.toggle_fullscreen();
        }
        self.toggle_play(now);
    }

    pub fn pointer_enter(&mut self) {
        self.controls.pointer_enter();
    }

    pub fn pointer_move(&mut self, now: Instant) {
        self.controls.pointer_move(now);
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.controls.pointer_leave(now, self.settings.is_open());
    }

    pub fn set_sound_hovered(&mut self, hovered: bool) {
        self.sound_hovered = hovered;
    }

    // === Settings ===

    pub fn toggle_settings(&mut self) {
        self.settings.toggle();
    }

    pub fn settings_up(&mut self) {
        self.settings.move_up();
    }

    pub fn settings_down(&mut self) {
        self.settings.move_down();
    }

    pub fn settings_back(&mut self) {
        self.settings.back();
    }

    /// Activate the highlighted settings row. Speed changes are applied here;
    /// other actions are returned for the host to handle.
    pub fn settings_select(&mut self) -> SettingsAction {
        let action = self.settings.select();
        self.apply_settings_action(action)
    }

    /// Activate a settings row by index (pointer selection).
    pub fn settings_activate(&mut self, row: usize) -> SettingsAction {
        let action = self.settings.activate(row);
        self.apply_settings_action(action)
    }

    fn apply_settings_action(&mut self, action: SettingsAction) -> SettingsAction {
        if let SettingsAction::ApplySpeed(rate) = action {
            self.set_speed(rate);
        }
        action
    }

    // === Subtitles ===

    /// Replace the loaded cues with an already parsed track.
    pub fn set_subtitles(&mut self, track: SubtitleTrack) {
        self.subtitles = Some(track);
    }

    /// Replace the loaded cues with those parsed from `content`.
    pub fn load_subtitles(&mut self, name: Option<String>, content: &str) {
        let track = SubtitleTrack::from_srt(name, content);
        info!(cues = track.len(), "subtitles loaded");
        self.subtitles = Some(track);
    }

    /// Load an `.srt` file. Wrong extensions are ignored and read failures
    /// only logged; the current subtitles stay in place in both cases.
    pub fn load_subtitle_file(&mut self, path: &Path) -> bool {
        match SubtitleTrack::load(path) {
            Ok(track) => {
                info!(path = %path.display(), cues = track.len(), "subtitles loaded");
                self.subtitles = Some(track);
                true
            }
            Err(LoadError::WrongExtension { path }) => {
                debug!(path = %path.display(), "ignoring non-srt subtitle file");
                false
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    // === Telemetry ===

    /// Apply a notification from the media element. Returns true when the
    /// snapshot changed.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> bool {
        let before = self.snapshot.clone();

        match event {
            MediaEvent::TimeUpdate => {
                self.snapshot.current_time = self.media.current_time();
            }
            MediaEvent::LoadedMetadata => {
                let duration = self.media.duration();
                self.snapshot.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
            }
            MediaEvent::Progress => self.update_buffered(),
            MediaEvent::RateChange => {
                self.snapshot.playback_rate = self.media.playback_rate();
                self.settings.set_speed(self.snapshot.playback_rate);
            }
            MediaEvent::VolumeChange => self.sync_volume(),
            MediaEvent::Waiting => {
                if self.snapshot.status == PlaybackStatus::Playing {
                    self.snapshot.status = PlaybackStatus::Buffering;
                }
            }
            MediaEvent::CanPlay => {
                if self.snapshot.status == PlaybackStatus::Buffering {
                    self.snapshot.status = PlaybackStatus::Playing;
                }
            }
            MediaEvent::Ended => {
                self.snapshot.status = PlaybackStatus::Ended;
            }
        }

        self.snapshot != before
    }

    fn update_buffered(&mut self) {
        let ranges = self.media.buffered();
        if ranges.is_empty() {
            return;
        }
        let total = if self.snapshot.duration > 0.0 {
            self.snapshot.duration
        } else {
            1.0
        };
        self.snapshot.buffered = ranges
            .iter()
            .map(|r| BufferSegment {
                offset: r.start / total,
                duration: r.len() / total,
            })
            .collect();
    }

    /// Advance every transient timer. Returns true when something visible
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let pings = self.pings.tick(now);
        let controls = self.controls.tick(now, self.settings.is_open());
        pings || controls
    }
}

/// `MM:SS`, or `HH:MM:SS` from one hour on. Unknown or non-positive times
/// render as `00:00`.
pub fn format_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }

    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if total >= 3600 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
