//! # hot100-core
//!
//! Shared foundation for the hot100 solutions: error enums with stable
//! error codes, layered TOML configuration, tracing setup, collection
//! aliases, strategy selectors, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
