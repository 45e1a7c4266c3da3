//! Deterministic, pure logic for the fixture challenges.
//!
//! Core modules must be free of I/O side effects. They parse literal text,
//! apply transforms and render results in memory.

pub mod answer;
pub mod challenge;
pub mod literal;
pub mod render;
pub mod transform;
pub mod value;
