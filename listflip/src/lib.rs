//! Test-fixture challenges: flip a list of booleans, upper-case a list of
//! strings, and print the results the way Python would.
//!
//! - **[`core`]**: Pure, deterministic logic (transforms, literal parsing,
//!   rendering, grading). No I/O.
//! - **[`io`]**: Config files and fixture scripts on disk.
//!
//! Orchestration modules ([`evaluate`], [`check`]) combine the two for the
//! CLI commands.

pub mod check;
pub mod core;
pub mod evaluate;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
