//! SimulatedWindowPort - in-memory window for tests and non-Windows hosts
//!
//! Mirrors the observable effect of each window-manager call: style bits,
//! frame margins, bounds, z-order, and focus. Every call is also appended
//! to a call log.

use crate::application::ports::{WindowHandle, WindowPort, ZOrder};
use crate::domain::value_objects::{FrameMargins, Point, Size, WindowRect};

/// A recorded window-manager call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindowCall {
    SetExStyle(u32),
    ExtendFrame(FrameMargins),
    SetWindowPos(ZOrder, Option<WindowRect>),
    SetForeground(WindowHandle),
}

/// In-memory window state
#[derive(Clone, Debug)]
pub struct SimulatedWindowPort {
    handle: Option<WindowHandle>,
    resolve_count: usize,
    ex_style: u32,
    margins: FrameMargins,
    z_order: ZOrder,
    bounds: WindowRect,
    screen: Size,
    foreground: Option<WindowHandle>,
    below: Option<WindowHandle>,
    cursor: Option<Point>,
    calls: Vec<WindowCall>,
}

impl SimulatedWindowPort {
    /// Default handle value handed out by [`SimulatedWindowPort::new`]
    pub const HANDLE: WindowHandle = WindowHandle(0x1000);

    /// A 1920x1080 screen with a window covering it
    pub fn new() -> Self {
        Self::with_screen(Size::new(1920, 1080))
    }

    /// A window covering a screen of the given size
    pub fn with_screen(screen: Size) -> Self {
        Self {
            handle: Some(Self::HANDLE),
            resolve_count: 0,
            ex_style: 0,
            margins: FrameMargins::NONE,
            z_order: ZOrder::NotTopmost,
            bounds: WindowRect::at_origin(screen),
            screen,
            foreground: None,
            below: None,
            cursor: None,
            calls: Vec::new(),
        }
    }

    /// A port whose handle never resolves
    pub fn unresolved() -> Self {
        Self {
            handle: None,
            ..Self::new()
        }
    }

    /// Set the window that sits below the overlay
    pub fn with_window_below(mut self, below: WindowHandle) -> Self {
        self.below = Some(below);
        self
    }

    /// Move the OS cursor
    pub fn set_cursor(&mut self, cursor: Option<Point>) {
        self.cursor = cursor;
    }

    /// Make another window the foreground window
    pub fn set_foreground_window(&mut self, hwnd: Option<WindowHandle>) {
        self.foreground = hwnd;
    }

    /// Current extended style bits
    pub fn current_ex_style(&self) -> u32 {
        self.ex_style
    }

    /// Last frame margins applied
    pub fn margins(&self) -> FrameMargins {
        self.margins
    }

    /// Current z-order placement
    pub fn z_order(&self) -> ZOrder {
        self.z_order
    }

    /// Current window bounds
    pub fn bounds(&self) -> WindowRect {
        self.bounds
    }

    /// Current foreground window
    pub fn foreground(&self) -> Option<WindowHandle> {
        self.foreground
    }

    /// How many times the handle was looked up
    pub fn resolve_count(&self) -> usize {
        self.resolve_count
    }

    /// All recorded calls, oldest first
    pub fn calls(&self) -> &[WindowCall] {
        &self.calls
    }

    /// Number of `set_foreground` calls made
    pub fn focus_requests(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, WindowCall::SetForeground(_)))
            .count()
    }

    /// Forget recorded calls
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Default for SimulatedWindowPort {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowPort for SimulatedWindowPort {
    fn resolve_handle(&mut self) -> Option<WindowHandle> {
        self.resolve_count += 1;
        self.handle
    }

    fn ex_style(&self, _hwnd: WindowHandle) -> u32 {
        self.ex_style
    }

    fn set_ex_style(&mut self, _hwnd: WindowHandle, style: u32) {
        self.ex_style = style;
        self.calls.push(WindowCall::SetExStyle(style));
    }

    fn extend_frame(&mut self, _hwnd: WindowHandle, margins: FrameMargins) {
        self.margins = margins;
        self.calls.push(WindowCall::ExtendFrame(margins));
    }

    fn set_window_pos(&mut self, _hwnd: WindowHandle, z_order: ZOrder, bounds: Option<WindowRect>) {
        self.z_order = z_order;
        if let Some(rect) = bounds {
            self.bounds = rect;
        }
        self.calls.push(WindowCall::SetWindowPos(z_order, bounds));
    }

    fn screen_size(&self) -> Size {
        self.screen
    }

    fn screen_to_client(&self, _hwnd: WindowHandle, point: Point) -> Option<Point> {
        Some(Point::new(point.x - self.bounds.x, point.y - self.bounds.y))
    }

    fn client_size(&self, _hwnd: WindowHandle) -> Size {
        self.bounds.size()
    }

    fn cursor_pos(&self) -> Option<Point> {
        self.cursor
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        self.foreground
    }

    fn set_foreground(&mut self, hwnd: WindowHandle) {
        self.foreground = Some(hwnd);
        self.calls.push(WindowCall::SetForeground(hwnd));
    }

    fn window_below(&self, _hwnd: WindowHandle) -> Option<WindowHandle> {
        self.below
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_client_uses_window_origin() {
        let mut port = SimulatedWindowPort::new();
        let hwnd = port.resolve_handle().unwrap();
        port.set_window_pos(
            hwnd,
            ZOrder::Topmost,
            Some(WindowRect::new(100, 50, 800, 600)),
        );

        assert_eq!(
            port.screen_to_client(hwnd, Point::new(150, 80)),
            Some(Point::new(50, 30))
        );
        assert_eq!(port.client_size(hwnd), Size::new(800, 600));
    }

    #[test]
    fn test_calls_are_recorded() {
        let mut port = SimulatedWindowPort::new();
        let hwnd = port.resolve_handle().unwrap();
        port.set_ex_style(hwnd, 0x20);
        port.set_foreground(hwnd);

        assert_eq!(
            port.calls(),
            &[
                WindowCall::SetExStyle(0x20),
                WindowCall::SetForeground(hwnd)
            ]
        );
        assert_eq!(port.focus_requests(), 1);
        assert_eq!(port.resolve_count(), 1);
    }

    #[test]
    fn test_unresolved_port() {
        let mut port = SimulatedWindowPort::unresolved();
        assert_eq!(port.resolve_handle(), None);
    }
}
