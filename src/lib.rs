//! Overlay launcher library
//!
//! Parses Windows shell links into launcher entries and drives a
//! transparent, click-through overlay window. The binary is in main.rs;
//! everything here builds on any host so the tests run without Windows.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod platform;
pub mod shared;
