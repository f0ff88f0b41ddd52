//! Domain Services - Operations that don't belong to a single entity

pub mod codepage;
pub mod shortcut_parser;

pub use shortcut_parser::{parse_shortcut, parse_shortcut_file};
