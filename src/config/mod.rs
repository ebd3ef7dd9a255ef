//! Client configuration and constants.
//!
//! This module provides:
//! - Endpoint defaults and request limits
//! - The `Config` value every component is constructed from
//! - Logging option types shared with the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
