//! Domain Layer - Pure logic with no platform dependencies
//!
//! This layer contains:
//! - **Entities**: ShortcutRecord, WindowVisualState
//! - **Value Objects**: Hotkey, Point, WindowRect, FrameMargins
//! - **Domain Services**: the Shell Link parser and ANSI decoding
//! - **Domain Errors**: Error types for domain operations
//!
//! # Clean Architecture Rules
//! - No dependency on the windows crate outside the ANSI fallback hook
//! - Testable without mocks

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::{ParseError, ShortcutError};
pub use value_objects::*;
