//! Data Transfer Objects - For layer boundary crossing
//!
//! DTOs are simple data structures used to transfer data between layers.

pub mod launcher_entry;

pub use launcher_entry::LauncherEntry;
