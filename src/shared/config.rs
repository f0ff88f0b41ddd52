//! Application Configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up in each config location
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user config dir
const CONFIG_DIR_NAME: &str = "overlay-launcher";

// ============================================================================
// OVERLAY LAUNCHER CONFIGURATION (config.toml)
// ============================================================================

/// Configuration loaded from config.toml
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Overlay window section
    #[serde(default)]
    pub overlay: OverlaySettings,

    /// Launcher section
    #[serde(default)]
    pub launcher: LauncherSettings,
}

/// Which window backend drives the overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowBackend {
    /// Native on Windows, simulated elsewhere
    #[default]
    Auto,
    /// Win32 window APIs
    Native,
    /// In-memory window
    Simulated,
    /// No window at all
    None,
}

/// `[overlay]` section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// Minimum time between two click-through flips
    #[serde(default = "default_toggle_cooldown_ms")]
    pub toggle_cooldown_ms: u64,

    /// Fraction of the screen used by the overlay window
    #[serde(default = "default_overlay_scale")]
    pub overlay_scale: f32,

    /// Start as a click-through overlay instead of an opaque window
    #[serde(default = "default_true")]
    pub start_in_transparent_mode: bool,

    #[serde(default)]
    pub backend: WindowBackend,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            toggle_cooldown_ms: default_toggle_cooldown_ms(),
            overlay_scale: default_overlay_scale(),
            start_in_transparent_mode: true,
            backend: WindowBackend::Auto,
        }
    }
}

impl OverlaySettings {
    pub fn toggle_cooldown(&self) -> Duration {
        Duration::from_millis(self.toggle_cooldown_ms)
    }
}

/// `[launcher]` section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Application names shown on the launcher; empty admits every shortcut
    #[serde(default = "default_allowed_apps")]
    pub allowed_apps: Vec<String>,

    /// Folders scanned in addition to the desktops
    #[serde(default)]
    pub extra_dirs: Vec<PathBuf>,

    /// Scan the user and public desktops
    #[serde(default = "default_true")]
    pub include_default_dirs: bool,

    /// Skip shortcuts whose target is not on disk
    #[serde(default = "default_true")]
    pub require_existing_target: bool,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            allowed_apps: default_allowed_apps(),
            extra_dirs: Vec::new(),
            include_default_dirs: true,
            require_existing_target: true,
        }
    }
}

/// Browsers and messaging apps shown by default
const DEFAULT_ALLOWED_APPS: &[&str] = &[
    "chrome",
    "firefox",
    "msedge",
    "brave",
    "opera",
    "vivaldi",
    "discord",
    "whatsapp",
    "telegram",
    "signal",
    "slack",
    "teams",
    "zoom",
    "skype",
    "thunderbird",
    "outlook",
];

fn default_allowed_apps() -> Vec<String> {
    DEFAULT_ALLOWED_APPS.iter().map(|s| s.to_string()).collect()
}

fn default_toggle_cooldown_ms() -> u64 {
    100
}

fn default_overlay_scale() -> f32 {
    0.7
}

fn default_true() -> bool {
    true
}

impl OverlayConfig {
    /// Find config.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: %APPDATA%/overlay-launcher, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from file, returning defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::find_config_path() else {
            return Self::default();
        };
        match Self::load_from_path(&path) {
            Ok(config) => {
                log!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log!("Ignoring config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: OverlayConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
