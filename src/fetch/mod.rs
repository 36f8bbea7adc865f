//! Request dispatch.
//!
//! This module turns a `RequestBuilder` into a wire request and hands it to
//! the HTTP client:
//! - proxy resolution from the environment (`proxy`)
//! - the redirect policy (`redirects`)
//! - `dispatch`, which ties both to a freshly built `reqwest::Client`

mod proxy;
mod redirects;

use log::{debug, info};

pub use proxy::{proxy_vars, resolve_proxy, Environment, SystemEnvironment};
pub use redirects::{redirect_policy, RedirectMode};

use crate::error_handling::{classify_transport_error, RequestError};
use crate::initialization::init_client;
use crate::request::RequestBuilder;

/// Sends `request` and returns the response unchanged.
///
/// Steps:
/// 1. Assemble the target URL.
/// 2. Resolve the proxy for the target scheme from `env`.
/// 3. Install the redirect policy for `max_redirects`.
/// 4. Build the wire request: POST and PUT carry the current body, every other
///    method goes out without one. Headers are copied verbatim and take
///    precedence over client defaults, `Host` included.
/// 5. Execute. Status codes are not interpreted and nothing is retried.
///
/// The body is read through its re-readable buffer, so it is still available
/// on the builder afterwards.
///
/// # Errors
///
/// - `RequestError::MissingHost` if no address has been set
/// - `RequestError::NoRedirects` / `RequestError::RedirectLimitExceeded` when
///   the redirect policy refuses a hop
/// - `RequestError::Transport` for client, network, TLS and proxy failures
pub async fn dispatch<E: Environment + ?Sized>(
    request: &mut RequestBuilder,
    env: &E,
) -> Result<reqwest::Response, RequestError> {
    let url = request.url()?;
    let method = request.method();

    let proxy = resolve_proxy(url.scheme(), env);
    let policy = redirect_policy(request.max_redirects());
    let client = init_client(proxy.as_ref(), policy)?;

    let mut wire = client
        .request(method.as_reqwest(), url.clone())
        .headers(request.headers().as_header_map().clone());

    if method.sends_body() {
        let body = request.body_bytes();
        debug!("Attaching {} byte body to {method} {url}", body.len());
        wire = wire.body(body);
    }

    if let Some(credentials) = request.credentials() {
        wire = wire.basic_auth(&credentials.username, credentials.password.as_ref());
    }

    info!("Sending {method} {url}");
    let response = wire.send().await.map_err(classify_transport_error)?;
    debug!("{method} {url} returned {}", response.status());
    Ok(response)
}
