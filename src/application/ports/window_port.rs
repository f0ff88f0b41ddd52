//! WindowPort - interface for OS window operations
//!
//! This port defines the handful of window-manager calls the overlay
//! controller needs. Implementations are best-effort: they swallow OS
//! failures instead of reporting them.

use crate::domain::value_objects::{FrameMargins, Point, Size, WindowRect};

/// Opaque OS window identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Extended window style bits used by the overlay
pub mod ex_style {
    /// `WS_EX_TRANSPARENT`
    pub const TRANSPARENT: u32 = 0x0000_0020;
    /// `WS_EX_LAYERED`
    pub const LAYERED: u32 = 0x0008_0000;
    /// Style of a click-through overlay
    pub const CLICK_THROUGH: u32 = LAYERED | TRANSPARENT;
}

/// Z-order placement for `set_window_pos`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZOrder {
    /// `HWND_TOPMOST`
    Topmost,
    /// `HWND_NOTOPMOST`
    NotTopmost,
}

/// Port interface for window operations
pub trait WindowPort {
    /// Resolve the window this process renders into. Returns `None` when
    /// there is no window to manage.
    fn resolve_handle(&mut self) -> Option<WindowHandle>;

    /// Read the extended window style
    fn ex_style(&self, hwnd: WindowHandle) -> u32;

    /// Replace the extended window style
    fn set_ex_style(&mut self, hwnd: WindowHandle, style: u32);

    /// Extend the DWM frame into the client area
    fn extend_frame(&mut self, hwnd: WindowHandle, margins: FrameMargins);

    /// Change z-order, and also move/resize and show when `bounds` is given
    fn set_window_pos(&mut self, hwnd: WindowHandle, z_order: ZOrder, bounds: Option<WindowRect>);

    /// Resolution of the primary screen
    fn screen_size(&self) -> Size;

    /// Convert a screen point to client coordinates
    fn screen_to_client(&self, hwnd: WindowHandle, point: Point) -> Option<Point>;

    /// Client area size of the window
    fn client_size(&self, hwnd: WindowHandle) -> Size;

    /// Current cursor position in screen coordinates
    fn cursor_pos(&self) -> Option<Point>;

    /// The current foreground window
    fn foreground_window(&self) -> Option<WindowHandle>;

    /// Bring a window to the foreground and activate it
    fn set_foreground(&mut self, hwnd: WindowHandle);

    /// The next visible window below `hwnd` in z-order
    fn window_below(&self, hwnd: WindowHandle) -> Option<WindowHandle>;
}

impl<P: WindowPort + ?Sized> WindowPort for Box<P> {
    fn resolve_handle(&mut self) -> Option<WindowHandle> {
        (**self).resolve_handle()
    }

    fn ex_style(&self, hwnd: WindowHandle) -> u32 {
        (**self).ex_style(hwnd)
    }

    fn set_ex_style(&mut self, hwnd: WindowHandle, style: u32) {
        (**self).set_ex_style(hwnd, style)
    }

    fn extend_frame(&mut self, hwnd: WindowHandle, margins: FrameMargins) {
        (**self).extend_frame(hwnd, margins)
    }

    fn set_window_pos(&mut self, hwnd: WindowHandle, z_order: ZOrder, bounds: Option<WindowRect>) {
        (**self).set_window_pos(hwnd, z_order, bounds)
    }

    fn screen_size(&self) -> Size {
        (**self).screen_size()
    }

    fn screen_to_client(&self, hwnd: WindowHandle, point: Point) -> Option<Point> {
        (**self).screen_to_client(hwnd, point)
    }

    fn client_size(&self, hwnd: WindowHandle) -> Size {
        (**self).client_size(hwnd)
    }

    fn cursor_pos(&self) -> Option<Point> {
        (**self).cursor_pos()
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        (**self).foreground_window()
    }

    fn set_foreground(&mut self, hwnd: WindowHandle) {
        (**self).set_foreground(hwnd)
    }

    fn window_below(&self, hwnd: WindowHandle) -> Option<WindowHandle> {
        (**self).window_below(hwnd)
    }
}

/// A window port with no window, for headless runs
///
/// Every controller operation against it degrades to a no-op.
#[derive(Debug, Default)]
pub struct NullWindowPort;

impl WindowPort for NullWindowPort {
    fn resolve_handle(&mut self) -> Option<WindowHandle> {
        None
    }

    fn ex_style(&self, _hwnd: WindowHandle) -> u32 {
        0
    }

    fn set_ex_style(&mut self, _hwnd: WindowHandle, _style: u32) {}

    fn extend_frame(&mut self, _hwnd: WindowHandle, _margins: FrameMargins) {}

    fn set_window_pos(
        &mut self,
        _hwnd: WindowHandle,
        _z_order: ZOrder,
        _bounds: Option<WindowRect>,
    ) {
    }

    fn screen_size(&self) -> Size {
        Size::default()
    }

    fn screen_to_client(&self, _hwnd: WindowHandle, _point: Point) -> Option<Point> {
        None
    }

    fn client_size(&self, _hwnd: WindowHandle) -> Size {
        Size::default()
    }

    fn cursor_pos(&self) -> Option<Point> {
        None
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        None
    }

    fn set_foreground(&mut self, _hwnd: WindowHandle) {}

    fn window_below(&self, _hwnd: WindowHandle) -> Option<WindowHandle> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_through_style_bits() {
        assert_eq!(ex_style::CLICK_THROUGH, 0x0008_0020);
        assert_eq!(ex_style::CLICK_THROUGH & !ex_style::TRANSPARENT, ex_style::LAYERED);
    }

    #[test]
    fn test_null_port_never_resolves() {
        let mut port: Box<dyn WindowPort> = Box::new(NullWindowPort);
        assert_eq!(port.resolve_handle(), None);
        assert_eq!(port.cursor_pos(), None);
    }
}
