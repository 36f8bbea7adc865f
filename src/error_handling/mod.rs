//! Error handling.
//!
//! This module provides:
//! - `RequestError`, returned by every fallible builder operation and `send`
//! - `RedirectRejection`, the error the redirect policy hands to the client
//! - `ErrorKind` and transport error categorization
//! - `InitializationError` for logger and client setup

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_transport_error, classify_transport_error};
pub use types::{ErrorKind, InitializationError, RedirectRejection, RequestError};
