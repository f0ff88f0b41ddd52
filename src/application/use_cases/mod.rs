//! Use Cases - Single-purpose application operations

pub mod discover_shortcuts;

pub use discover_shortcuts::ShortcutDiscovery;
