//! ShortcutRecord entity - what a parsed .lnk file resolves to

use std::path::Path;

/// Information extracted from a .lnk shortcut file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutRecord {
    /// Local base path the shortcut points to; empty for network or
    /// ID-list-only targets
    pub target_path: String,
    /// Whether the target carries the directory attribute
    pub is_directory: bool,
    /// Human-readable hotkey such as `ctrl+shift+A`, empty if unset
    pub hot_key: String,
}

impl ShortcutRecord {
    /// Check if a local target path was recovered
    pub fn has_target(&self) -> bool {
        !self.target_path.is_empty()
    }

    /// Check if the target path exists on disk
    pub fn target_exists(&self) -> bool {
        if self.target_path.is_empty() {
            return false;
        }
        Path::new(&self.target_path).exists()
    }

    /// File stem of the target, e.g. `chrome` for `C:\...\chrome.exe`
    pub fn target_stem(&self) -> Option<String> {
        // Split on both separators so Windows paths work on any host
        let file_name = self
            .target_path
            .rsplit(['\\', '/'])
            .next()
            .filter(|s| !s.is_empty())?;
        let stem = match file_name.rfind('.') {
            Some(0) | None => file_name,
            Some(idx) => &file_name[..idx],
        };
        Some(stem.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_record_default() {
        let record = ShortcutRecord::default();
        assert!(!record.has_target());
        assert!(!record.target_exists());
        assert!(record.hot_key.is_empty());
        assert_eq!(record.target_stem(), None);
    }

    #[test]
    fn test_target_exists() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("demo.exe");
        std::fs::write(&exe, b"MZ").unwrap();

        let mut record = ShortcutRecord {
            target_path: exe.to_string_lossy().into_owned(),
            ..Default::default()
        };
        assert!(record.target_exists());

        record.target_path = dir.path().join("missing.exe").to_string_lossy().into_owned();
        assert!(!record.target_exists());
    }

    #[test]
    fn test_target_stem() {
        let record = ShortcutRecord {
            target_path: "C:\\Program Files\\Google\\Chrome\\chrome.exe".to_string(),
            ..Default::default()
        };
        assert_eq!(record.target_stem().as_deref(), Some("chrome"));

        let record = ShortcutRecord {
            target_path: "C:\\Tools\\".to_string(),
            ..Default::default()
        };
        assert_eq!(record.target_stem(), None);

        let record = ShortcutRecord {
            target_path: "/opt/apps/signal-desktop".to_string(),
            ..Default::default()
        };
        assert_eq!(record.target_stem().as_deref(), Some("signal-desktop"));
    }
}
