//! Application initialization.
//!
//! This module provides:
//! - Logger setup for the binary
//! - HTTP client construction for each dispatch

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
