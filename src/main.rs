//! Overlay launcher - lists launchable desktop shortcuts
//!
//! With no arguments, scans the configured folders and prints the launcher
//! entries. With .lnk paths as arguments, prints what each one resolves to.

use std::path::PathBuf;

use overlay_launcher::application::use_cases::discover_shortcuts::parse_all;
use overlay_launcher::infrastructure::CompositionRoot;
use overlay_launcher::{log, log_fn};
use overlay_launcher::shared::OverlayConfig;

fn main() {
    // Initialize logging first
    log::init();
    log_fn!("main");

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if !paths.is_empty() {
        print_shortcuts(&paths);
        return;
    }

    let config = OverlayConfig::load();
    let mut root = CompositionRoot::with_config(config);
    root.start();

    let entries = root.discover();
    if entries.is_empty() {
        println!("No launchable shortcuts found");
    }
    for entry in &entries {
        if entry.hot_key.is_empty() {
            println!("{}\t{}", entry.name, entry.target_path);
        } else {
            println!("{}\t{}\t[{}]", entry.name, entry.target_path, entry.hot_key);
        }
    }

    log!(
        "main() exiting, {} entries, overlay mode {:?}",
        entries.len(),
        root.overlay.mode()
    );
}

fn print_shortcuts(paths: &[PathBuf]) {
    log_fn!("print_shortcuts", "{} path(s)", paths.len());
    for (path, result) in paths.iter().zip(parse_all(paths)) {
        match result {
            Ok(record) => {
                let kind = if record.is_directory { "dir" } else { "file" };
                let target = if record.has_target() {
                    record.target_path.as_str()
                } else {
                    "<no local target>"
                };
                println!("{}\t{}\t{}\t{}", path.display(), kind, target, record.hot_key);
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}
