//! WindowVisualState entity - transparency state of the overlay window
//!
//! Tracks the overlay mode, the click-through flag derived from it, and the
//! bookkeeping used to debounce automatic toggling.

use std::time::Duration;

use crate::domain::value_objects::Point;

/// Overlay mode of the window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayMode {
    /// Normal window, no layered/transparent styles
    #[default]
    Opaque,
    /// Layered and transparent to pointer input
    TransparentClickThrough,
    /// Layered but accepting pointer input
    TransparentInteractive,
}

impl OverlayMode {
    /// Check if the window is in one of the transparent modes
    pub fn is_transparent(&self) -> bool {
        !matches!(self, OverlayMode::Opaque)
    }
}

/// Complete visual state of the overlay window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowVisualState {
    /// Current overlay mode
    pub mode: OverlayMode,
    /// Clock reading of the last click-through flip
    pub last_toggle: Option<Duration>,
    /// Whether `tick` may toggle click-through automatically
    pub auto_toggle: bool,
    /// Last cursor position handed to the hit test (render-surface space)
    pub last_cursor: Option<Point>,
    /// Diagnostic label of the last hit test
    pub last_hit_label: String,
}

impl Default for WindowVisualState {
    fn default() -> Self {
        Self {
            mode: OverlayMode::Opaque,
            last_toggle: None,
            auto_toggle: true,
            last_cursor: None,
            last_hit_label: "none".to_string(),
        }
    }
}

impl WindowVisualState {
    /// Create a state starting in the given mode
    pub fn new(mode: OverlayMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Logical click-through flag
    pub fn is_click_through(&self) -> bool {
        self.mode == OverlayMode::TransparentClickThrough
    }

    /// Check if a flip at `now` falls inside the cooldown window
    pub fn in_cooldown(&self, now: Duration, cooldown: Duration) -> bool {
        match self.last_toggle {
            Some(last) => now.saturating_sub(last) < cooldown,
            None => false,
        }
    }

    /// Enter a transparent mode with the given click-through flag
    pub fn set_click_through(&mut self, enabled: bool) {
        self.mode = if enabled {
            OverlayMode::TransparentClickThrough
        } else {
            OverlayMode::TransparentInteractive
        };
    }

    /// Record a click-through flip at `now`
    pub fn record_toggle(&mut self, now: Duration) {
        self.last_toggle = Some(now);
    }

    /// Return to the opaque mode, discarding any pending cooldown
    pub fn reset_to_opaque(&mut self) {
        self.mode = OverlayMode::Opaque;
        self.last_toggle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque() {
        let state = WindowVisualState::default();
        assert_eq!(state.mode, OverlayMode::Opaque);
        assert!(!state.is_click_through());
        assert!(!state.mode.is_transparent());
        assert!(state.auto_toggle);
    }

    #[test]
    fn test_cooldown_window() {
        let mut state = WindowVisualState::new(OverlayMode::TransparentClickThrough);
        let cooldown = Duration::from_millis(100);

        assert!(!state.in_cooldown(Duration::ZERO, cooldown));

        state.record_toggle(Duration::from_millis(1000));
        assert!(state.in_cooldown(Duration::from_millis(1050), cooldown));
        assert!(state.in_cooldown(Duration::from_millis(1099), cooldown));
        assert!(!state.in_cooldown(Duration::from_millis(1100), cooldown));
    }

    #[test]
    fn test_reset_to_opaque_clears_cooldown() {
        let mut state = WindowVisualState::new(OverlayMode::TransparentInteractive);
        state.record_toggle(Duration::from_millis(5));
        state.reset_to_opaque();
        assert_eq!(state.mode, OverlayMode::Opaque);
        assert_eq!(state.last_toggle, None);
    }

    #[test]
    fn test_set_click_through_modes() {
        let mut state = WindowVisualState::default();
        state.set_click_through(false);
        assert_eq!(state.mode, OverlayMode::TransparentInteractive);
        state.set_click_through(true);
        assert!(state.is_click_through());
    }
}
