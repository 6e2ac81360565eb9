//! Exit code constants for the diffscan CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Configuration error (unreadable or invalid config file)
//! - 3: Output failure (result could not be serialized or written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or input that could not be read.
pub const USER_ERROR: i32 = 1;

/// Configuration error: config file missing, malformed, or invalid.
pub const CONFIG_ERROR: i32 = 2;

/// Output failure: serialization or stdout write failed.
pub const OUTPUT_ERROR: i32 = 3;
