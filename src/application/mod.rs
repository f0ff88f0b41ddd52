//! Application Layer - Use Cases and Business Workflows
//!
//! This layer orchestrates domain entities and defines application-specific workflows.
//! It contains:
//! - **Use Cases**: Single-purpose operations (ShortcutDiscovery)
//! - **Ports**: Interfaces for external dependencies (window manager, clock)
//! - **Services**: Long-lived coordination (OverlayWindowController)
//! - **DTOs**: Data transfer objects for layer boundaries
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer and shared configuration
//! - Defines ports that infrastructure implements
//! - Contains no platform-specific code

pub mod dto;
pub mod ports;
pub mod services;
pub mod use_cases;

// Re-export commonly used types
pub use dto::*;
pub use ports::*;
pub use services::*;
pub use use_cases::*;
