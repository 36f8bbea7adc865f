//! Application configuration and constants.
//!
//! This module provides:
//! - Request defaults and redirect/proxy constants
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, LogFormat, LogLevel};
