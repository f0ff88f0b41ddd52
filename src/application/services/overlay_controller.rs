//! OverlayWindowController - transparency and click-through of the overlay
//!
//! Drives one window between an opaque mode and a transparent overlay mode,
//! and while transparent flips click-through on and off depending on
//! whether the pointer is over interactive content. Flips are debounced
//! with a cooldown so noisy per-frame hit tests cannot oscillate.
//!
//! The controller is single-threaded: it must be driven from the thread
//! that owns the window and calls [`OverlayWindowController::tick`].

use std::time::Duration;

use crate::application::ports::{ex_style, Clock, SystemClock, WindowHandle, WindowPort, ZOrder};
use crate::domain::entities::{OverlayMode, WindowVisualState};
use crate::domain::value_objects::{FrameMargins, Point, WindowRect};

/// Minimum time between two click-through flips
pub const DEFAULT_TOGGLE_COOLDOWN: Duration = Duration::from_millis(100);

/// Fraction of the screen used by `set_overlay_size`
pub const DEFAULT_OVERLAY_SCALE: f32 = 0.7;

/// Result of the caller's hit test
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitResult {
    /// Whether the pointer is over interactive UI or a hit-testable object
    pub hit: bool,
    /// What was hit, for diagnostics only
    pub label: String,
}

impl HitResult {
    pub fn hit(label: impl Into<String>) -> Self {
        Self {
            hit: true,
            label: label.into(),
        }
    }

    pub fn miss() -> Self {
        Self {
            hit: false,
            label: "none".to_string(),
        }
    }
}

/// What a `tick` did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not polling: opaque, auto toggle disabled, or no window
    Inactive,
    /// Hit test agreed with the current state
    Unchanged,
    /// A flip was wanted but the cooldown has not elapsed
    Suppressed,
    /// Click-through turned off and focus requested
    BecameInteractive,
    /// Click-through turned on
    BecameClickThrough,
}

#[derive(Clone, Copy, Debug)]
enum HandleSlot {
    Unresolved,
    Resolved(Option<WindowHandle>),
}

/// Manages the overlay window's transparency state
pub struct OverlayWindowController<P, C = SystemClock>
where
    P: WindowPort,
    C: Clock,
{
    port: P,
    clock: C,
    handle: HandleSlot,
    state: WindowVisualState,
    cooldown: Duration,
    overlay_scale: f32,
}

impl<P> OverlayWindowController<P, SystemClock>
where
    P: WindowPort,
{
    /// Create a controller timed by the system clock
    pub fn new(port: P) -> Self {
        Self::with_clock(port, SystemClock::new())
    }
}

impl<P, C> OverlayWindowController<P, C>
where
    P: WindowPort,
    C: Clock,
{
    /// Create a controller with an explicit clock
    pub fn with_clock(port: P, clock: C) -> Self {
        Self {
            port,
            clock,
            handle: HandleSlot::Unresolved,
            state: WindowVisualState::default(),
            cooldown: DEFAULT_TOGGLE_COOLDOWN,
            overlay_scale: DEFAULT_OVERLAY_SCALE,
        }
    }

    /// Configure the click-through cooldown
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Configure the fraction of the screen used by `set_overlay_size`
    pub fn with_overlay_scale(mut self, scale: f32) -> Self {
        self.overlay_scale = scale.clamp(0.1, 1.0);
        self
    }

    /// Resolve and cache the window handle. Returns whether a window exists.
    pub fn initialize(&mut self) -> bool {
        self.hwnd().is_some()
    }

    /// The handle is looked up once; later calls reuse the cached answer
    fn hwnd(&mut self) -> Option<WindowHandle> {
        if let HandleSlot::Resolved(handle) = self.handle {
            return handle;
        }
        let handle = self.port.resolve_handle();
        match handle {
            Some(h) => log!("OverlayWindowController: window handle {:?}", h),
            None => log!("OverlayWindowController: no window handle, operations disabled"),
        }
        self.handle = HandleSlot::Resolved(handle);
        handle
    }

    /// Switch to a layered, click-through, topmost overlay
    pub fn make_transparent(&mut self) {
        let Some(hwnd) = self.hwnd() else {
            return;
        };

        self.port.extend_frame(hwnd, FrameMargins::SHEET_OF_GLASS);
        let style = self.port.ex_style(hwnd) | ex_style::CLICK_THROUGH;
        self.port.set_ex_style(hwnd, style);
        self.port.set_window_pos(hwnd, ZOrder::Topmost, None);

        self.state.set_click_through(true);
        log!("OverlayWindowController: transparent overlay mode");
    }

    /// Return to a normal full-screen window
    ///
    /// Safe to call mid-cooldown; the cooldown is discarded.
    pub fn make_opaque(&mut self) {
        let Some(hwnd) = self.hwnd() else {
            return;
        };

        self.port.extend_frame(hwnd, FrameMargins::NONE);
        let style = self.port.ex_style(hwnd) & !ex_style::CLICK_THROUGH;
        self.port.set_ex_style(hwnd, style);

        let screen = self.port.screen_size();
        self.port
            .set_window_pos(hwnd, ZOrder::NotTopmost, Some(WindowRect::at_origin(screen)));
        self.port.set_foreground(hwnd);

        self.state.reset_to_opaque();
        log!(
            "OverlayWindowController: opaque mode at {}x{}",
            screen.width,
            screen.height
        );
    }

    /// Turn click-through on or off, keeping the window layered
    ///
    /// Has no effect while the window is opaque.
    pub fn set_click_through(&mut self, enabled: bool) {
        let Some(hwnd) = self.hwnd() else {
            return;
        };
        if !self.state.mode.is_transparent() {
            log!(
                "OverlayWindowController: set_click_through({}) ignored while opaque",
                enabled
            );
            return;
        }

        self.apply_click_through(hwnd, enabled);
        self.state.record_toggle(self.clock.now());
    }

    fn apply_click_through(&mut self, hwnd: WindowHandle, enabled: bool) {
        let style = self.port.ex_style(hwnd) | ex_style::LAYERED;
        let style = if enabled {
            style | ex_style::TRANSPARENT
        } else {
            style & !ex_style::TRANSPARENT
        };
        self.port.set_ex_style(hwnd, style);
        self.state.set_click_through(enabled);
    }

    /// Per-frame update
    ///
    /// Converts `cursor` from screen space to the render surface
    /// (bottom-left origin), hit-tests it, and flips click-through when the
    /// result disagrees with the current state and the cooldown has elapsed.
    pub fn tick<F>(&mut self, cursor: Point, hit_test: F) -> TickOutcome
    where
        F: FnOnce(Point) -> HitResult,
    {
        if !self.state.mode.is_transparent() || !self.state.auto_toggle {
            return TickOutcome::Inactive;
        }
        let Some(hwnd) = self.hwnd() else {
            return TickOutcome::Inactive;
        };
        let Some(client) = self.port.screen_to_client(hwnd, cursor) else {
            return TickOutcome::Inactive;
        };

        let surface_height = self.port.client_size(hwnd).height;
        let local = client.flip_y(surface_height);
        let result = hit_test(local);

        self.state.last_cursor = Some(local);
        self.state.last_hit_label = result.label;

        let click_through = self.state.is_click_through();
        let wants_flip = result.hit == click_through;
        if !wants_flip {
            return TickOutcome::Unchanged;
        }

        let now = self.clock.now();
        if self.state.in_cooldown(now, self.cooldown) {
            return TickOutcome::Suppressed;
        }

        self.state.record_toggle(now);
        if result.hit {
            log!(
                "OverlayWindowController: click-through OFF, hit {}",
                self.state.last_hit_label
            );
            self.apply_click_through(hwnd, false);
            self.focus_window();
            TickOutcome::BecameInteractive
        } else {
            log!("OverlayWindowController: click-through ON");
            self.apply_click_through(hwnd, true);
            TickOutcome::BecameClickThrough
        }
    }

    /// `tick` using the OS cursor position
    pub fn poll<F>(&mut self, hit_test: F) -> TickOutcome
    where
        F: FnOnce(Point) -> HitResult,
    {
        match self.port.cursor_pos() {
            Some(cursor) => self.tick(cursor, hit_test),
            None => TickOutcome::Inactive,
        }
    }

    /// Bring the overlay to the foreground unless it already is
    pub fn focus_window(&mut self) {
        let Some(hwnd) = self.hwnd() else {
            return;
        };
        if self.port.foreground_window() != Some(hwnd) {
            self.port.set_foreground(hwnd);
            log!("OverlayWindowController: window brought to foreground");
        }
    }

    /// Activate the window beneath the overlay, so input goes to the app
    pub fn focus_window_behind(&mut self) {
        let Some(hwnd) = self.hwnd() else {
            return;
        };
        match self.port.window_below(hwnd) {
            Some(below) => self.port.set_foreground(below),
            None => log!("OverlayWindowController: no window below overlay"),
        }
    }

    /// Resize to the configured fraction of the screen, pinned topmost
    pub fn set_overlay_size(&mut self) {
        let Some(hwnd) = self.hwnd() else {
            return;
        };
        let size = self.port.screen_size().scaled(self.overlay_scale);
        self.port
            .set_window_pos(hwnd, ZOrder::Topmost, Some(WindowRect::at_origin(size)));
        log!(
            "OverlayWindowController: resized to {}x{}",
            size.width,
            size.height
        );
    }

    /// Move and resize the window, keeping the z-order of the current mode
    pub fn set_window_position(&mut self, rect: WindowRect) {
        let Some(hwnd) = self.hwnd() else {
            return;
        };
        let z_order = if self.state.mode.is_transparent() {
            ZOrder::Topmost
        } else {
            ZOrder::NotTopmost
        };
        self.port.set_window_pos(hwnd, z_order, Some(rect));
    }

    /// Size the window to a fraction of the screen in its bottom-right corner
    pub fn anchor_bottom_right(&mut self, width_percent: f32, height_percent: f32) {
        let Some(hwnd) = self.hwnd() else {
            return;
        };
        let screen = self.port.screen_size();
        let rect = WindowRect::anchored_bottom_right(screen, width_percent, height_percent);
        self.set_window_position(rect);
    }

    /// Resume automatic click-through toggling and re-enter overlay mode
    pub fn enable_transparency(&mut self) {
        self.state.auto_toggle = true;
        self.make_transparent();
        log!("OverlayWindowController: transparency enabled");
    }

    /// Stop automatic toggling and leave the window interactive
    pub fn disable_transparency(&mut self) {
        self.state.auto_toggle = false;
        self.set_click_through(false);
        log!("OverlayWindowController: transparency disabled");
    }

    /// Logical click-through flag
    pub fn is_click_through(&self) -> bool {
        self.state.is_click_through()
    }

    /// Current overlay mode
    pub fn mode(&self) -> OverlayMode {
        self.state.mode
    }

    /// Full visual state, for diagnostics
    pub fn state(&self) -> &WindowVisualState {
        &self.state
    }

    /// Label of the most recent hit test
    pub fn last_hit_label(&self) -> &str {
        &self.state.last_hit_label
    }

    /// Render-surface position of the most recent hit test
    pub fn last_cursor(&self) -> Option<Point> {
        self.state.last_cursor
    }

    /// The cached handle, if it has been resolved
    pub fn handle(&self) -> Option<WindowHandle> {
        match self.handle {
            HandleSlot::Resolved(handle) => handle,
            HandleSlot::Unresolved => None,
        }
    }

    /// The configured cooldown
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// The window backend
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable access to the window backend
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}
