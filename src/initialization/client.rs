//! HTTP client initialization.
//!
//! A client is built for every dispatch so that the proxy and redirect policy
//! always match the request being sent.

use reqwest::redirect::Policy;
use reqwest::{ClientBuilder, Proxy};
use url::Url;

/// Initializes the HTTP client for one request.
///
/// # Arguments
///
/// * `proxy` - Proxy for all traffic, or `None` to connect directly. `None`
///   also disables reqwest's own lookup of proxy environment variables.
/// * `policy` - Redirect policy to install
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails. A proxy with a scheme
/// reqwest cannot speak is accepted here and only fails when a request is sent.
pub fn init_client(proxy: Option<&Url>, policy: Policy) -> Result<reqwest::Client, reqwest::Error> {
    let builder = ClientBuilder::new().redirect(policy);
    let builder = match proxy {
        Some(url) => builder.proxy(Proxy::all(url.clone())?),
        None => builder.no_proxy(),
    };
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_without_proxy() {
        assert!(init_client(None, Policy::none()).is_ok());
    }

    #[test]
    fn test_init_client_with_proxy() {
        let proxy = Url::parse("http://127.0.0.1:8080").unwrap();
        assert!(init_client(Some(&proxy), Policy::limited(10)).is_ok());
    }

    #[test]
    fn test_init_client_defers_unknown_proxy_scheme() {
        // Unsupported proxy schemes surface as transport errors at send time
        let proxy = Url::parse("ftp://127.0.0.1:21").unwrap();
        assert!(init_client(Some(&proxy), Policy::none()).is_ok());
    }
}
