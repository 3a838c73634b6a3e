//! Hot100ErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait Hot100ErrorCode {
    /// Returns the error code string (e.g., "INVALID_CHARACTER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INVALID_CHARACTER: &str = "INVALID_CHARACTER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
