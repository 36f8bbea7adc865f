//! Command-line application glue.
//!
//! This module provides the pieces the binary strings together: URL
//! normalization, CLI options to `RequestBuilder`, and response printing.

pub mod options;
pub mod output;
pub mod url;

// Re-export public API
pub use options::build_request;
pub use output::write_response;
pub use url::normalize_url;
