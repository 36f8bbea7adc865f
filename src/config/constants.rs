//! Configuration constants.
//!
//! This module defines the defaults a fresh request starts from, the redirect
//! ceiling, and the environment variable names consulted for proxies.

/// Value of the `Accept` header every new request starts with.
pub const DEFAULT_ACCEPT: &str = "*/*";

/// Scheme of a request before an address is set.
pub const DEFAULT_SCHEME: &str = "http";

/// Port used for `http` targets without an explicit port.
pub const DEFAULT_HTTP_PORT: u16 = 80;
/// Port used for `https` targets without an explicit port.
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Schemes a request target may use.
pub const SUPPORTED_SCHEMES: &[&str] = &["http", "https"];

/// Maximum number of requests in a redirect chain.
///
/// Once this many requests have been made, the next redirect is rejected.
/// Applies to every non-zero `max_redirects` setting: the configured value only
/// switches redirects on, it does not change the ceiling.
pub const MAX_REDIRECT_HOPS: usize = 10;

// Proxy environment variables, lower-case checked first
pub const HTTP_PROXY_VAR: &str = "http_proxy";
pub const HTTP_PROXY_VAR_UPPER: &str = "HTTP_PROXY";
pub const HTTPS_PROXY_VAR: &str = "https_proxy";
pub const HTTPS_PROXY_VAR_UPPER: &str = "HTTPS_PROXY";

/// Separator between cookies in a `Cookie` header.
pub const COOKIE_SEPARATOR: &str = "; ";
