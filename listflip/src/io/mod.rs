//! I/O helpers for listflip commands.

pub mod config;
pub mod script;
