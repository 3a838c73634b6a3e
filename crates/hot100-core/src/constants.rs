//! Shared constants for the hot100 solutions.

/// hot100 version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size of the letter-count key alphabet (`'a'..='z'`).
pub const LETTER_COUNT: usize = 26;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "hot100.toml";

/// User config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".hot100";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "HOT100_LOG";

/// Filter used when `HOT100_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "hot100=info";
