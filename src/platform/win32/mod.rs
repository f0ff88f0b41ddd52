//! Win32 platform implementation

pub mod codepage;
pub mod overlay_window;

pub use codepage::decode_active_code_page;
pub use overlay_window::Win32WindowPort;
