//! Transport error categorization.
//!
//! This module classifies `reqwest::Error`s and recovers redirect rejections
//! that the redirect policy smuggled through the client.

use std::error::Error as StdError;

use super::types::{ErrorKind, RedirectRejection, RequestError};

/// Categorizes a `reqwest::Error` into an `ErrorKind`.
///
/// Status codes are never inspected by `send`, so `TransportStatus` only shows
/// up for errors a caller produced with `Response::error_for_status`.
pub fn categorize_transport_error(error: &reqwest::Error) -> ErrorKind {
    match find_redirect_rejection(error) {
        Some(RedirectRejection::NoRedirects) => return ErrorKind::NoRedirects,
        Some(RedirectRejection::LimitExceeded(_)) => return ErrorKind::RedirectLimitExceeded,
        None => {}
    }

    if error.is_builder() {
        ErrorKind::TransportBuilder
    } else if error.is_redirect() {
        ErrorKind::TransportRedirect
    } else if error.is_status() {
        ErrorKind::TransportStatus
    } else if error.is_timeout() {
        ErrorKind::TransportTimeout
    } else if error.is_connect() {
        ErrorKind::TransportConnect
    } else if error.is_request() {
        ErrorKind::TransportRequest
    } else if error.is_body() {
        ErrorKind::TransportBody
    } else if error.is_decode() {
        ErrorKind::TransportDecode
    } else {
        ErrorKind::TransportOther
    }
}

/// Walks the source chain of `error` looking for a `RedirectRejection`.
fn find_redirect_rejection(error: &reqwest::Error) -> Option<RedirectRejection> {
    let mut source = error.source();
    while let Some(err) = source {
        if let Some(rejection) = err.downcast_ref::<RedirectRejection>() {
            return Some(*rejection);
        }
        source = err.source();
    }
    None
}

/// Converts a transport error into a `RequestError`.
///
/// Redirect rejections raised by the redirect policy become `NoRedirects` or
/// `RedirectLimitExceeded`; everything else is wrapped verbatim in
/// `RequestError::Transport`.
pub fn classify_transport_error(error: reqwest::Error) -> RequestError {
    // The client may wrap the policy error more than once, so the whole
    // chain is searched rather than only redirect-kind errors
    match find_redirect_rejection(&error) {
        Some(rejection) => {
            log::debug!("Redirect rejected by policy: {rejection}");
            rejection.into()
        }
        None => RequestError::Transport(error),
    }
}
