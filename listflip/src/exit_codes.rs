//! Stable exit codes for listflip commands.

/// Command succeeded, or the checked answer was correct.
pub const OK: i32 = 0;
/// Invalid arguments, config, script or any other error.
pub const INVALID: i32 = 1;
/// `listflip check` graded the answer as incorrect.
pub const INCORRECT: i32 = 2;
