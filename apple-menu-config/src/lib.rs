// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

//! Persisted settings for the apple-menu applet.
//!
//! The panel host hands the applet a per-instance file path; everything in
//! here is best effort. A missing file, an unreadable file or a missing key
//! falls back to the defaults and a failed save is ignored, since the applet
//! has no error-reporting path for either.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Icon shipped with the applet, shown unless the user picks another one.
pub const APPLE_ICON_NAME: &str = "apple-logo";
/// Shown instead of the apple logo when `use_apple_logo` is off.
pub const FALLBACK_ICON_NAME: &str = "distributor-logo";
pub const DEFAULT_APP_STORE_COMMAND: &str = "pamac-manager";
pub const DEFAULT_TRANSPARENCY: i32 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AppleMenuConfig {
    pub show_recent_items: bool,
    /// Persisted for forward compatibility; the recent-items section is
    /// still a disabled placeholder and never reads it.
    pub recent_items_max: i32,
    pub use_apple_logo: bool,
    pub custom_icon_name: String,
    pub app_store_command: String,
    /// 0–100; values of 100 and up mean no opacity override at all.
    pub transparency: i32,
}

impl Default for AppleMenuConfig {
    fn default() -> Self {
        Self {
            show_recent_items: true,
            recent_items_max: 10,
            use_apple_logo: true,
            custom_icon_name: APPLE_ICON_NAME.to_owned(),
            app_store_command: DEFAULT_APP_STORE_COMMAND.to_owned(),
            transparency: DEFAULT_TRANSPARENCY,
        }
    }
}

impl AppleMenuConfig {
    /// Reads the config from the host-provided path. Never fails the
    /// caller: anything unexpected yields the defaults.
    pub fn load(path: &Path) -> Self {
        let mut config = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(
                        "failed to parse {}: {err}, using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        config.transparency = config.transparency.clamp(0, 100);
        config
    }

    /// Writes all keys unconditionally. Best effort; a failure to serialize
    /// or to open the file for writing is logged and otherwise ignored.
    pub fn save(&self, path: &Path) {
        let contents = match toml::to_string_pretty(self) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!("failed to serialize config: {err}");
                return;
            }
        };

        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        if let Err(err) = fs::write(path, contents) {
            tracing::debug!("failed to write {}: {err}", path.display());
        }
    }

    /// Rendering alpha for the button and menu surfaces, or `None` when the
    /// surfaces should keep the host's full opacity.
    pub fn opacity(&self) -> Option<f64> {
        (self.transparency < 100).then(|| f64::from(self.transparency) / 100.0)
    }

    /// Icon shown on the panel button.
    pub fn icon_name(&self) -> &str {
        if self.use_apple_logo {
            &self.custom_icon_name
        } else {
            FALLBACK_ICON_NAME
        }
    }

    /// Fallback location used when the host does not supply a path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("apple-menu-applet").join("config.toml"))
    }
}
