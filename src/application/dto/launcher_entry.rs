//! LauncherEntry - a shortcut ready to be shown on the launcher

use std::path::{Path, PathBuf};

use crate::domain::entities::ShortcutRecord;

/// One launchable application discovered from a shortcut
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherEntry {
    /// Display name, the shortcut's file stem
    pub name: String,
    /// Local path the shortcut resolves to
    pub target_path: String,
    /// Human-readable hotkey, empty if unset
    pub hot_key: String,
    /// The .lnk file itself, used to launch through the shell
    pub shortcut_path: PathBuf,
}

impl LauncherEntry {
    pub fn from_record(name: impl Into<String>, shortcut_path: &Path, record: ShortcutRecord) -> Self {
        Self {
            name: name.into(),
            target_path: record.target_path,
            hot_key: record.hot_key,
            shortcut_path: shortcut_path.to_path_buf(),
        }
    }
}
