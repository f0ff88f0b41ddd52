//! Win32 implementation of the overlay window port

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Dwm::DwmExtendFrameIntoClientArea;
use windows::Win32::Graphics::Gdi::ScreenToClient;
use windows::Win32::UI::Controls::MARGINS;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetActiveWindow, SetActiveWindow};
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::application::ports::{WindowHandle, WindowPort, ZOrder};
use crate::domain::value_objects::{FrameMargins, Point, Size, WindowRect};

fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut c_void)
}

fn from_hwnd(hwnd: HWND) -> Option<WindowHandle> {
    if hwnd.is_invalid() {
        None
    } else {
        Some(WindowHandle(hwnd.0 as isize))
    }
}

/// Window port backed by the Win32 window manager
///
/// Every call is best-effort; failures are logged and otherwise ignored.
#[derive(Debug, Default)]
pub struct Win32WindowPort {
    explicit: Option<WindowHandle>,
}

impl Win32WindowPort {
    /// Manage the window that is active on the calling thread
    pub fn new() -> Self {
        Self::default()
    }

    /// Manage a specific window
    pub fn with_handle(handle: WindowHandle) -> Self {
        Self {
            explicit: Some(handle),
        }
    }
}

impl WindowPort for Win32WindowPort {
    fn resolve_handle(&mut self) -> Option<WindowHandle> {
        if self.explicit.is_some() {
            return self.explicit;
        }
        unsafe { from_hwnd(GetActiveWindow()) }
    }

    fn ex_style(&self, hwnd: WindowHandle) -> u32 {
        unsafe { GetWindowLongW(to_hwnd(hwnd), GWL_EXSTYLE) as u32 }
    }

    fn set_ex_style(&mut self, hwnd: WindowHandle, style: u32) {
        unsafe {
            SetWindowLongW(to_hwnd(hwnd), GWL_EXSTYLE, style as i32);
        }
    }

    fn extend_frame(&mut self, hwnd: WindowHandle, margins: FrameMargins) {
        let margins = MARGINS {
            cxLeftWidth: margins.left,
            cxRightWidth: margins.right,
            cyTopHeight: margins.top,
            cyBottomHeight: margins.bottom,
        };
        unsafe {
            if let Err(e) = DwmExtendFrameIntoClientArea(to_hwnd(hwnd), &margins) {
                log!("DwmExtendFrameIntoClientArea failed: {:?}", e);
            }
        }
    }

    fn set_window_pos(&mut self, hwnd: WindowHandle, z_order: ZOrder, bounds: Option<WindowRect>) {
        let insert_after = match z_order {
            ZOrder::Topmost => HWND_TOPMOST,
            ZOrder::NotTopmost => HWND_NOTOPMOST,
        };
        let (rect, flags) = match bounds {
            Some(r) => (r, SWP_SHOWWINDOW | SWP_FRAMECHANGED),
            None => (WindowRect::default(), SWP_NOMOVE | SWP_NOSIZE),
        };
        unsafe {
            if let Err(e) = SetWindowPos(
                to_hwnd(hwnd),
                insert_after,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                flags,
            ) {
                log!("SetWindowPos failed: {:?}", e);
            }
        }
    }

    fn screen_size(&self) -> Size {
        unsafe { Size::new(GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) }
    }

    fn screen_to_client(&self, hwnd: WindowHandle, point: Point) -> Option<Point> {
        let mut pt = POINT {
            x: point.x,
            y: point.y,
        };
        unsafe {
            if ScreenToClient(to_hwnd(hwnd), &mut pt).as_bool() {
                Some(Point::new(pt.x, pt.y))
            } else {
                None
            }
        }
    }

    fn client_size(&self, hwnd: WindowHandle) -> Size {
        let mut rect = RECT::default();
        unsafe {
            if let Err(e) = GetClientRect(to_hwnd(hwnd), &mut rect) {
                log!("GetClientRect failed: {:?}", e);
            }
        }
        Size::new(rect.right - rect.left, rect.bottom - rect.top)
    }

    fn cursor_pos(&self) -> Option<Point> {
        let mut pt = POINT::default();
        unsafe { GetCursorPos(&mut pt).ok().map(|_| Point::new(pt.x, pt.y)) }
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        unsafe { from_hwnd(GetForegroundWindow()) }
    }

    fn set_foreground(&mut self, hwnd: WindowHandle) {
        let hwnd = to_hwnd(hwnd);
        unsafe {
            let _ = ShowWindow(hwnd, SW_SHOW);
            if !SetForegroundWindow(hwnd).as_bool() {
                log!("SetForegroundWindow refused for {:?}", hwnd);
            }
            let _ = SetActiveWindow(hwnd);
        }
    }

    fn window_below(&self, hwnd: WindowHandle) -> Option<WindowHandle> {
        unsafe {
            let mut next = GetWindow(to_hwnd(hwnd), GW_HWNDNEXT).ok()?;
            while !next.is_invalid() {
                if IsWindowVisible(next).as_bool() {
                    return from_hwnd(next);
                }
                next = GetWindow(next, GW_HWNDNEXT).ok()?;
            }
            None
        }
    }
}
