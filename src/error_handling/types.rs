//! Error type definitions.
//!
//! This module defines the errors raised by request mutators and dispatch, the
//! redirect rejections produced by the redirect policy, and the flat
//! `ErrorKind` used for reporting.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while building or sending a request.
///
/// Every validation error is raised by the mutator that received the bad
/// input; the builder is left unchanged in that case. Only `Transport` and the
/// redirect variants come out of `send`.
#[derive(Error, Debug)]
pub enum RequestError {
    /// A URI, host or port could not be parsed into a valid target.
    #[error("Cannot parse URL: {0}")]
    Parse(String),

    /// A path did not start with `/`.
    #[error("Invalid path (must start with '/'): {0:?}")]
    InvalidPath(String),

    /// A method outside GET, POST, PUT, DELETE, HEAD, OPTIONS.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A scheme other than `http` or `https`.
    #[error("Invalid scheme: {0:?}")]
    InvalidScheme(String),

    /// A header or cookie name/value that cannot go on the wire.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The request has no host yet.
    #[error("No address set: call set_address or set_host first")]
    MissingHost,

    /// A redirect was attempted while redirects are disabled.
    #[error("No redirects allowed")]
    NoRedirects,

    /// The redirect chain reached the hop ceiling.
    #[error("Stopped after {0} redirects")]
    RedirectLimitExceeded(usize),

    /// Network, TLS, proxy or other client failure, passed through unchanged.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] ReqwestError),
}

/// Rejection returned by the redirect policy.
///
/// Travels inside the `reqwest::Error` as its source and is turned back into
/// the matching `RequestError` variant once `send` returns.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectRejection {
    #[error("No redirects allowed")]
    NoRedirects,

    #[error("Stopped after {0} redirects")]
    LimitExceeded(usize),
}

impl From<RedirectRejection> for RequestError {
    fn from(rejection: RedirectRejection) -> Self {
        match rejection {
            RedirectRejection::NoRedirects => RequestError::NoRedirects,
            RedirectRejection::LimitExceeded(hops) => RequestError::RedirectLimitExceeded(hops),
        }
    }
}

/// Flat classification of every failure the crate can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    // Validation errors
    Parse,
    InvalidPath,
    UnsupportedMethod,
    InvalidScheme,
    InvalidHeader,
    MissingHost,
    // Redirect policy
    NoRedirects,
    RedirectLimitExceeded,
    // Transport errors (see categorize_transport_error)
    TransportBuilder,
    TransportRedirect,
    TransportStatus,
    TransportTimeout,
    TransportRequest,
    TransportConnect,
    TransportBody,
    TransportDecode,
    TransportOther,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "URL parse error",
            ErrorKind::InvalidPath => "Invalid path",
            ErrorKind::UnsupportedMethod => "Unsupported method",
            ErrorKind::InvalidScheme => "Invalid scheme",
            ErrorKind::InvalidHeader => "Invalid header",
            ErrorKind::MissingHost => "Missing host",
            ErrorKind::NoRedirects => "Redirects disabled",
            ErrorKind::RedirectLimitExceeded => "Redirect limit exceeded",
            ErrorKind::TransportBuilder => "HTTP request builder error",
            ErrorKind::TransportRedirect => "HTTP request redirect error",
            ErrorKind::TransportStatus => "HTTP request status error",
            ErrorKind::TransportTimeout => "HTTP request timeout error",
            ErrorKind::TransportRequest => "HTTP request error",
            ErrorKind::TransportConnect => "HTTP request connect error",
            ErrorKind::TransportBody => "HTTP request body error",
            ErrorKind::TransportDecode => "HTTP request decode error",
            ErrorKind::TransportOther => "HTTP request other error",
        }
    }
}

impl RequestError {
    /// Returns the `ErrorKind` for this error.
    ///
    /// Transport errors are classified further by
    /// [`categorize_transport_error`](super::categorize_transport_error).
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::Parse(_) => ErrorKind::Parse,
            RequestError::InvalidPath(_) => ErrorKind::InvalidPath,
            RequestError::UnsupportedMethod(_) => ErrorKind::UnsupportedMethod,
            RequestError::InvalidScheme(_) => ErrorKind::InvalidScheme,
            RequestError::InvalidHeader(_) => ErrorKind::InvalidHeader,
            RequestError::MissingHost => ErrorKind::MissingHost,
            RequestError::NoRedirects => ErrorKind::NoRedirects,
            RequestError::RedirectLimitExceeded(_) => ErrorKind::RedirectLimitExceeded,
            RequestError::Transport(e) => super::categorize_transport_error(e),
        }
    }
}
