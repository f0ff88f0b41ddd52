//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.
//! They are immutable and can be freely shared.

pub mod geometry;
pub mod hotkey;

pub use geometry::{FrameMargins, Point, Size, WindowRect};
pub use hotkey::{Hotkey, HotkeyModifiers, VirtualKey};
