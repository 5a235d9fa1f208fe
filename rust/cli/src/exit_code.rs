//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code, used for parse, config and engine failures alike.
pub const ERROR: i32 = 2;
