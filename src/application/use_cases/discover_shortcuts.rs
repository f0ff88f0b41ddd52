//! ShortcutDiscovery - turn desktop shortcuts into launcher entries
//!
//! Scans the user and public desktops (plus configured folders) for .lnk
//! files, parses each one, and keeps the shortcuts that point at an
//! allowlisted application. A broken shortcut is logged and skipped; it
//! never aborts the scan.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::application::dto::LauncherEntry;
use crate::domain::entities::ShortcutRecord;
use crate::domain::errors::ShortcutError;
use crate::domain::services::parse_shortcut_file;
use crate::shared::config::LauncherSettings;

/// Patterns to filter out from shortcut names (case-insensitive)
const FILTER_NAME_PATTERNS: &[&str] = &["uninstall", "setup", "readme", "repair"];

/// Check if a name belongs to an installer or helper shortcut
fn should_filter_name(name: &str) -> bool {
    let name_lower = name.to_lowercase();
    FILTER_NAME_PATTERNS
        .iter()
        .any(|pattern| name_lower.contains(pattern))
}

/// Use case for discovering launchable shortcuts
pub struct ShortcutDiscovery {
    settings: LauncherSettings,
    allowed: Vec<String>,
}

impl ShortcutDiscovery {
    /// Create a discovery pass over the configured folders
    pub fn new(settings: LauncherSettings) -> Self {
        let allowed = settings
            .allowed_apps
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        Self { settings, allowed }
    }

    /// Folders that will be scanned, in priority order
    pub fn scan_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if self.settings.include_default_dirs {
            dirs.extend(default_desktop_dirs());
        }
        dirs.extend(self.settings.extra_dirs.iter().cloned());
        dirs
    }

    /// Discover launcher entries, sorted by name
    pub fn scan(&self) -> Vec<LauncherEntry> {
        let paths: Vec<PathBuf> = self
            .scan_dirs()
            .iter()
            .flat_map(|dir| shortcut_files(dir))
            .collect();
        log!("ShortcutDiscovery: {} shortcut file(s) found", paths.len());

        let results = parse_all(&paths);

        let mut entries = Vec::new();
        let mut seen_names: HashSet<String> = HashSet::new();
        for (path, result) in paths.iter().zip(results) {
            let Some(entry) = self.admit(path, result) else {
                continue;
            };
            // Earlier folders win on duplicate names
            if seen_names.insert(entry.name.to_lowercase()) {
                entries.push(entry);
            }
        }

        entries.sort_by_key(|e| e.name.to_lowercase());
        log!("ShortcutDiscovery: {} launcher entries", entries.len());
        entries
    }

    /// Apply the filtering rules to one parse result
    fn admit(
        &self,
        path: &Path,
        result: Result<ShortcutRecord, ShortcutError>,
    ) -> Option<LauncherEntry> {
        let name = path.file_stem()?.to_string_lossy().to_string();

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log!("ShortcutDiscovery: skipping {}", e);
                return None;
            }
        };

        if !record.has_target() {
            log!("ShortcutDiscovery: no local target: {}", name);
            return None;
        }

        if should_filter_name(&name) {
            log!("ShortcutDiscovery: filtering out by name: {}", name);
            return None;
        }

        if self.settings.require_existing_target && !record.target_exists() {
            log!(
                "ShortcutDiscovery: target doesn't exist: {} -> {}",
                name,
                record.target_path
            );
            return None;
        }

        let stem = record.target_stem().unwrap_or_default();
        if !self.is_allowed(&name, &stem) {
            return None;
        }

        Some(LauncherEntry::from_record(name, path, record))
    }

    /// Check a shortcut name and target stem against the allowlist
    ///
    /// An exact (case-insensitive) match is tried before a substring match.
    pub fn is_allowed(&self, name: &str, target_stem: &str) -> bool {
        if self.allowed.is_empty() {
            return true;
        }

        let name = name.to_lowercase();
        let stem = target_stem.to_lowercase();

        if self.allowed.iter().any(|a| *a == name || *a == stem) {
            return true;
        }

        let partial = self.allowed.iter().find(|a| {
            name.contains(a.as_str()) || (!stem.is_empty() && stem.contains(a.as_str()))
        });
        if let Some(allowed) = partial {
            log!("ShortcutDiscovery: {} matched {} by substring", name, allowed);
            return true;
        }
        false
    }
}

/// Parse every path, one result per input, in order
pub fn parse_all<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<ShortcutRecord, ShortcutError>> {
    paths
        .iter()
        .map(|path| parse_shortcut_file(path.as_ref()))
        .collect()
}

/// The user desktop and the public desktop
fn default_desktop_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(desktop) = dirs::desktop_dir() {
        dirs.push(desktop);
    }
    if let Some(public) = std::env::var_os("PUBLIC") {
        dirs.push(PathBuf::from(public).join("Desktop"));
    }
    dirs
}

/// .lnk files directly inside `folder`, in file-name order
fn shortcut_files(folder: &Path) -> Vec<PathBuf> {
    if !folder.is_dir() {
        return Vec::new();
    }

    let entries = match std::fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            log!("Failed to read directory {:?}: {:?}", folder, e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map_or(false, |ext| ext.eq_ignore_ascii_case("lnk"))
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ParseError;
    use crate::domain::services::shortcut_parser::test_support::LinkBuilder;

    fn settings(dir: &Path, allowed: &[&str]) -> LauncherSettings {
        LauncherSettings {
            allowed_apps: allowed.iter().map(|s| s.to_string()).collect(),
            extra_dirs: vec![dir.to_path_buf()],
            include_default_dirs: false,
            require_existing_target: true,
        }
    }

    fn write_link(dir: &Path, file_name: &str, target: &Path) -> PathBuf {
        let bytes = LinkBuilder::new()
            .local_base_path(target.to_string_lossy().as_bytes())
            .hot_key(0x41, 0x06)
            .build();
        let path = dir.join(file_name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    fn touch(dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, b"MZ").unwrap();
        path
    }

    #[test]
    fn test_parse_all_keeps_going_after_failures() {
        let dir = tempfile::tempdir().unwrap();
        let target = touch(dir.path(), "app.exe");

        let good = write_link(dir.path(), "App.lnk", &target);
        let empty = dir.path().join("Network.lnk");
        std::fs::write(&empty, LinkBuilder::new().build()).unwrap();
        let broken = dir.path().join("Broken.lnk");
        std::fs::write(&broken, [0u8; 10]).unwrap();

        let results = parse_all(&[good, empty, broken]);
        assert_eq!(results.len(), 3);

        let first = results[0].as_ref().unwrap();
        assert_eq!(first.target_path, target.to_string_lossy());
        assert_eq!(first.hot_key, "ctrl+shift+A");

        assert_eq!(results[1].as_ref().unwrap().target_path, "");

        let err = results[2].as_ref().unwrap_err();
        assert!(matches!(
            err.parse_error(),
            Some(ParseError::Truncated { .. })
        ));
    }

    #[test]
    fn test_parse_all_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let results = parse_all(&[dir.path().join("gone.lnk")]);
        assert!(matches!(results[0], Err(ShortcutError::Io { .. })));
    }

    #[test]
    fn test_scan_keeps_only_usable_shortcuts() {
        let dir = tempfile::tempdir().unwrap();
        let target = touch(dir.path(), "app.exe");

        write_link(dir.path(), "App.lnk", &target);
        write_link(dir.path(), "Stale.lnk", &dir.path().join("deleted.exe"));
        std::fs::write(dir.path().join("Network.lnk"), LinkBuilder::new().build()).unwrap();
        std::fs::write(dir.path().join("Broken.lnk"), [0u8; 10]).unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"not a shortcut").unwrap();

        let discovery = ShortcutDiscovery::new(settings(dir.path(), &[]));
        let entries = discovery.scan();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "App");
        assert_eq!(entries[0].hot_key, "ctrl+shift+A");
        assert_eq!(entries[0].shortcut_path, dir.path().join("App.lnk"));
    }

    #[test]
    fn test_scan_without_existence_check() {
        let dir = tempfile::tempdir().unwrap();
        write_link(dir.path(), "Stale.lnk", &dir.path().join("deleted.exe"));

        let mut settings = settings(dir.path(), &[]);
        settings.require_existing_target = false;
        let entries = ShortcutDiscovery::new(settings).scan();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Stale");
    }

    #[test]
    fn test_scan_applies_allowlist_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let chrome = touch(dir.path(), "chrome.exe");
        let slack = touch(dir.path(), "slack.exe");
        let game = touch(dir.path(), "game.exe");

        write_link(dir.path(), "Google Chrome.lnk", &chrome);
        write_link(dir.path(), "slack.lnk", &slack);
        write_link(dir.path(), "Game.lnk", &game);

        let discovery = ShortcutDiscovery::new(settings(dir.path(), &["Chrome", "slack"]));
        let names: Vec<String> = discovery.scan().into_iter().map(|e| e.name).collect();

        assert_eq!(names, vec!["Google Chrome", "slack"]);
    }

    #[test]
    fn test_scan_filters_helper_shortcuts() {
        let dir = tempfile::tempdir().unwrap();
        let target = touch(dir.path(), "tool.exe");
        write_link(dir.path(), "Uninstall Tool.lnk", &target);
        write_link(dir.path(), "Tool.lnk", &target);

        let entries = ShortcutDiscovery::new(settings(dir.path(), &[])).scan();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Tool");
    }

    #[test]
    fn test_scan_dedups_by_name_across_folders() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let a = touch(first.path(), "a.exe");
        let b = touch(second.path(), "b.exe");
        write_link(first.path(), "Editor.lnk", &a);
        write_link(second.path(), "EDITOR.lnk", &b);

        let settings = LauncherSettings {
            allowed_apps: Vec::new(),
            extra_dirs: vec![first.path().to_path_buf(), second.path().to_path_buf()],
            include_default_dirs: false,
            require_existing_target: true,
        };
        let entries = ShortcutDiscovery::new(settings).scan();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target_path, a.to_string_lossy());
    }

    #[test]
    fn test_scan_of_missing_folder_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let discovery = ShortcutDiscovery::new(settings(&dir.path().join("nope"), &[]));
        assert!(discovery.scan().is_empty());
    }

    #[test]
    fn test_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let discovery = ShortcutDiscovery::new(settings(dir.path(), &["chrome", " Zoom ", ""]));

        assert!(discovery.is_allowed("Chrome", ""));
        assert!(discovery.is_allowed("Google Chrome", "chrome"));
        assert!(discovery.is_allowed("Work", "Zoom"));
        assert!(discovery.is_allowed("Zoom Workplace", "launcher"));
        assert!(!discovery.is_allowed("Notepad", "notepad"));
        assert!(!discovery.is_allowed("Notepad", ""));
    }

    #[test]
    fn test_default_dirs_only_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let discovery = ShortcutDiscovery::new(settings(dir.path(), &[]));
        assert_eq!(discovery.scan_dirs(), vec![dir.path().to_path_buf()]);
    }
}
