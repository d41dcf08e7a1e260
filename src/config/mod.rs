// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user-tunable timing settings.
//!
//! The controllers never read timing values from globals: callers build a
//! [`Timings`] (usually via [`Config::timings`]) and pass it in at
//! construction time. Settings persist to a `settings.toml` under the
//! platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use admin_shell::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.base_delay_ms = Some(4_000);
//! config::save(&config).expect("Failed to save config");
//!
//! let timings = config.timings();
//! assert_eq!(timings.base_delay.as_millis(), 4_000);
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AdminShell";

/// Resolved timing values handed to the interaction controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay before a new notification becomes visible.
    pub paint_delay: Duration,
    /// Time a notification stays on screen before auto-dismiss.
    pub base_delay: Duration,
    /// Exit-animation hold between dismiss and removal.
    pub removal_hold: Duration,
    /// Per-entry appearance offset for a replayed batch.
    pub replay_show_stagger: Duration,
    /// Per-entry auto-dismiss offset for a replayed batch.
    pub replay_dismiss_stagger: Duration,
    /// Exit-animation hold for modals.
    pub modal_close_hold: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            paint_delay: Duration::from_millis(NOTIFICATION_PAINT_DELAY_MS),
            base_delay: Duration::from_millis(NOTIFICATION_BASE_DELAY_MS),
            removal_hold: Duration::from_millis(NOTIFICATION_REMOVAL_HOLD_MS),
            replay_show_stagger: Duration::from_millis(REPLAY_SHOW_STAGGER_MS),
            replay_dismiss_stagger: Duration::from_millis(REPLAY_DISMISS_STAGGER_MS),
            modal_close_hold: Duration::from_millis(MODAL_CLOSE_HOLD_MS),
        }
    }
}

/// Persisted user preferences. Absent fields fall back to the defaults
/// from [`defaults`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub base_delay_ms: Option<u64>,
    #[serde(default)]
    pub removal_hold_ms: Option<u64>,
    #[serde(default)]
    pub replay_show_stagger_ms: Option<u64>,
    #[serde(default)]
    pub replay_dismiss_stagger_ms: Option<u64>,
    #[serde(default)]
    pub modal_close_hold_ms: Option<u64>,
}

impl Config {
    /// Resolves this configuration into concrete [`Timings`].
    #[must_use]
    pub fn timings(&self) -> Timings {
        let or_default = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default))
        };
        Timings {
            paint_delay: Duration::from_millis(NOTIFICATION_PAINT_DELAY_MS),
            base_delay: or_default(self.base_delay_ms, NOTIFICATION_BASE_DELAY_MS),
            removal_hold: or_default(self.removal_hold_ms, NOTIFICATION_REMOVAL_HOLD_MS),
            replay_show_stagger: or_default(self.replay_show_stagger_ms, REPLAY_SHOW_STAGGER_MS),
            replay_dismiss_stagger: or_default(
                self.replay_dismiss_stagger_ms,
                REPLAY_DISMISS_STAGGER_MS,
            ),
            modal_close_hold: or_default(self.modal_close_hold_ms, MODAL_CLOSE_HOLD_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_timings_match_constants() {
        let timings = Timings::default();
        assert_eq!(timings.base_delay, Duration::from_millis(6_000));
        assert_eq!(timings.removal_hold, Duration::from_millis(400));
        assert_eq!(timings.replay_show_stagger, Duration::from_millis(150));
        assert_eq!(timings.replay_dismiss_stagger, Duration::from_millis(800));
    }

    #[test]
    fn config_overrides_selected_timings() {
        let config = Config {
            base_delay_ms: Some(2_000),
            removal_hold_ms: None,
            ..Config::default()
        };
        let timings = config.timings();
        assert_eq!(timings.base_delay, Duration::from_millis(2_000));
        assert_eq!(timings.removal_hold, Duration::from_millis(400));
    }

    #[test]
    fn save_and_load_round_trip_preserves_overrides() {
        let config = Config {
            base_delay_ms: Some(3_000),
            modal_close_hold_ms: Some(150),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.base_delay_ms, config.base_delay_ms);
        assert_eq!(loaded.modal_close_hold_ms, config.modal_close_hold_ms);
        assert_eq!(loaded.removal_hold_ms, None);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is { not toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should tolerate bad toml");
        assert_eq!(loaded.base_delay_ms, None);
    }
}
