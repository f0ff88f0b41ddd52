//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.
//! They represent the core business concepts of the application.

pub mod shortcut;
pub mod window_state;

pub use shortcut::ShortcutRecord;
pub use window_state::{OverlayMode, WindowVisualState};
