//! Log setup for the binary.
//!
//! The player owns the terminal while running, so logs go to a file under
//! the user's state directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `VPLAY_LOG=vplay=debug`.
pub const LOG_ENV: &str = "VPLAY_LOG";

/// Path of the log file: `$XDG_STATE_HOME/vplay/vplay.log`, falling back to
/// the cache directory on platforms without a state directory.
pub fn log_path() -> Result<PathBuf> {
    let base = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .context("Could not determine a directory for the log file")?;
    Ok(base.join("vplay").join("vplay.log"))
}

/// Filter from `VPLAY_LOG`, or `warn` (`debug` when verbose).
pub fn build_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install the global subscriber. Returns the log file path.
pub fn init(verbose: bool) -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_namespaced() {
        if let Ok(path) = log_path() {
            assert!(path.ends_with("vplay/vplay.log"));
        }
    }

    #[test]
    fn verbose_raises_default_level() {
        // Only meaningful when the variable is not set in the test environment
        if std::env::var_os(LOG_ENV).is_none() {
            assert_eq!(build_filter(false).max_level_hint(), Some(LevelFilter::WARN));
            assert_eq!(build_filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
        }
    }
}
