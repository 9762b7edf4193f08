//! Configuration management for vplay
//!
//! Config lives at `~/.config/vplay/config.toml` (platform config dir). Every
//! field has a default, so a missing file or a partial file is valid.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::controls::SPEED_PRESETS;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub timing: TimingConfig,
    pub subtitles: SubtitlesConfig,
}

/// Keyboard steps and menu contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seconds skipped by the left/right keys
    pub time_step: f64,
    /// Volume change per up/down key press
    pub volume_step: f64,
    /// Entries of the playback speed menu
    pub speeds: Vec<f64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            time_step: 10.0,
            volume_step: 0.1,
            speeds: SPEED_PRESETS.to_vec(),
        }
    }
}

/// Durations of the transient affordances, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long a gesture ping stays visible
    pub ping_ms: u64,
    /// Delay before hiding controls after the pointer leaves
    pub leave_hide_ms: u64,
    /// Pointer idle time before controls start hiding during playback
    pub idle_hide_ms: u64,
    /// Two taps closer than this toggle fullscreen
    pub double_click_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ping_ms: 1000,
            leave_hide_ms: 500,
            idle_hide_ms: 3000,
            double_click_ms: 300,
        }
    }
}

impl TimingConfig {
    pub fn ping(&self) -> Duration {
        Duration::from_millis(self.ping_ms)
    }

    pub fn leave_hide(&self) -> Duration {
        Duration::from_millis(self.leave_hide_ms)
    }

    pub fn idle_hide(&self) -> Duration {
        Duration::from_millis(self.idle_hide_ms)
    }

    pub fn double_click(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitlesConfig {
    /// Seconds added to every cue's start and end
    pub delay: f64,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("vplay").join("config.toml"))
    }

    /// Load config from the default path, or defaults if the file is missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = self.to_toml()?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Replace values that would make the controls unusable.
    fn sanitized(mut self) -> Self {
        let defaults = PlayerConfig::default();
        if !(self.player.time_step.is_finite() && self.player.time_step > 0.0) {
            warn!(value = self.player.time_step, "invalid player.time_step, using default");
            self.player.time_step = defaults.time_step;
        }
        if !(self.player.volume_step.is_finite() && self.player.volume_step > 0.0) {
            warn!(value = self.player.volume_step, "invalid player.volume_step, using default");
            self.player.volume_step = defaults.volume_step;
        }
        let listed = self.player.speeds.len();
        self.player.speeds.retain(|s| s.is_finite() && *s > 0.0);
        if self.player.speeds.len() < listed {
            warn!(dropped = listed - self.player.speeds.len(), "ignoring invalid player.speeds entries");
        }
        if self.player.speeds.is_empty() {
            warn!("player.speeds has no usable entries, using defaults");
            self.player.speeds = defaults.speeds;
        }
        if !self.subtitles.delay.is_finite() {
            warn!(value = self.subtitles.delay, "invalid subtitles.delay, using 0");
            self.subtitles.delay = 0.0;
        }
        self
    }
}
