//! Infrastructure Layer - Port implementations and wiring

pub mod composition_root;
pub mod simulated_window;

pub use composition_root::{window_port_for, CompositionRoot, DynOverlayController};
pub use simulated_window::{SimulatedWindowPort, WindowCall};
