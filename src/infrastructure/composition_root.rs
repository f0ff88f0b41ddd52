//! CompositionRoot - Dependency Injection Container
//!
//! This module wires together all the dependencies for the application.
//! It creates and owns all the major components.

use crate::application::dto::LauncherEntry;
use crate::application::ports::{NullWindowPort, SystemClock, WindowPort};
use crate::application::services::OverlayWindowController;
use crate::application::use_cases::ShortcutDiscovery;
use crate::infrastructure::simulated_window::SimulatedWindowPort;
use crate::shared::config::{OverlayConfig, WindowBackend};

/// Overlay controller over a runtime-selected window backend
pub type DynOverlayController = OverlayWindowController<Box<dyn WindowPort>, SystemClock>;

/// Application composition root - owns all dependencies
pub struct CompositionRoot {
    // Application services
    pub overlay: DynOverlayController,

    // Use cases
    pub discovery: ShortcutDiscovery,

    pub config: OverlayConfig,
}

impl CompositionRoot {
    /// Create a new composition root from the config file, or defaults
    pub fn new() -> Self {
        Self::with_config(OverlayConfig::load())
    }

    /// Create with custom configuration
    pub fn with_config(config: OverlayConfig) -> Self {
        let port = window_port_for(config.overlay.backend);

        let overlay = OverlayWindowController::with_clock(port, SystemClock::new())
            .with_cooldown(config.overlay.toggle_cooldown())
            .with_overlay_scale(config.overlay.overlay_scale);

        let discovery = ShortcutDiscovery::new(config.launcher.clone());

        Self {
            overlay,
            discovery,
            config,
        }
    }

    /// Put the window into its configured starting mode
    pub fn start(&mut self) {
        if !self.overlay.initialize() {
            log!("CompositionRoot: no window to manage");
            return;
        }
        if self.config.overlay.start_in_transparent_mode {
            self.overlay.set_overlay_size();
            self.overlay.make_transparent();
        } else {
            self.overlay.make_opaque();
        }
    }

    /// Scan for launchable shortcuts
    pub fn discover(&self) -> Vec<LauncherEntry> {
        self.discovery.scan()
    }
}

impl Default for CompositionRoot {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the window port for a backend choice
pub fn window_port_for(backend: WindowBackend) -> Box<dyn WindowPort> {
    match backend {
        WindowBackend::Auto => default_window_port(),
        WindowBackend::Native => native_window_port(),
        WindowBackend::Simulated => Box::new(SimulatedWindowPort::new()),
        WindowBackend::None => Box::new(NullWindowPort),
    }
}

#[cfg(windows)]
fn default_window_port() -> Box<dyn WindowPort> {
    native_window_port()
}

#[cfg(not(windows))]
fn default_window_port() -> Box<dyn WindowPort> {
    Box::new(SimulatedWindowPort::new())
}

#[cfg(windows)]
fn native_window_port() -> Box<dyn WindowPort> {
    Box::new(crate::platform::win32::Win32WindowPort::new())
}

#[cfg(not(windows))]
fn native_window_port() -> Box<dyn WindowPort> {
    log!("Native window backend is only available on Windows");
    Box::new(NullWindowPort)
}
