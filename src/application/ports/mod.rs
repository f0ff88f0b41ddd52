//! Application Ports - Interfaces for external dependencies
//!
//! Ports define the interfaces that infrastructure must implement.
//! They allow the application layer to remain platform-agnostic.

pub mod clock_port;
pub mod window_port;

pub use clock_port::{Clock, ManualClock, SystemClock};
pub use window_port::{ex_style, NullWindowPort, WindowHandle, WindowPort, ZOrder};
