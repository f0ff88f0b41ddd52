//! Platform abstraction layer
//!
//! Currently only Windows (win32) is supported.

#[cfg(windows)]
pub mod win32;

#[cfg(windows)]
pub use win32::*;
