//! Supported HTTP methods.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error_handling::RequestError;

/// The fixed set of methods a request may use.
///
/// Parsing is case-sensitive: `"get"` is not a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Parses a method name, rejecting anything outside the supported set.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::UnsupportedMethod` carrying the rejected name.
    pub fn parse(method: &str) -> Result<Self, RequestError> {
        Method::from_str(method).map_err(|_| RequestError::UnsupportedMethod(method.to_string()))
    }

    /// Whether the body is put on the wire for this method.
    ///
    /// Only POST and PUT carry the request body; every other method is sent
    /// without one even when a body has been set.
    pub fn sends_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }

    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}
