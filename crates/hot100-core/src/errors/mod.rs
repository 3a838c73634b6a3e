//! Error handling for hot100.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod grouping_error;
pub mod key_error;

pub use config_error::ConfigError;
pub use error_code::Hot100ErrorCode;
pub use grouping_error::GroupingError;
pub use key_error::KeyError;
