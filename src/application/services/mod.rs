//! Application Services - Coordination and management services
//!
//! These services coordinate ports and domain state over the application's lifetime.

pub mod overlay_controller;

pub use overlay_controller::{
    HitResult, OverlayWindowController, TickOutcome, DEFAULT_OVERLAY_SCALE,
    DEFAULT_TOGGLE_COOLDOWN,
};
