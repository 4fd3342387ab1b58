//! Exit code constants for the aiprompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, prompt cannot be assembled)
//! - 2: Configuration error (config or tips file)
//! - 3: Input error (result payload is not usable JSON)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, or no role for the system prompt.
pub const USER_ERROR: i32 = 1;

/// Config or tips file missing, malformed or invalid.
pub const CONFIG_ERROR: i32 = 2;

/// Result payload could not be read or parsed.
pub const INPUT_ERROR: i32 = 3;
