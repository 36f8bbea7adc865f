//! reqforge library: build and send one HTTP request at a time
//!
//! A [`RequestBuilder`] collects the target, method, headers, cookies, query
//! parameters and body of a request. [`RequestBuilder::send`] resolves the
//! proxy from `http_proxy`/`https_proxy` (and their upper-case forms),
//! installs the redirect policy and hands the request to `reqwest`.
//!
//! # Example
//!
//! ```no_run
//! use reqforge::RequestBuilder;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut request = RequestBuilder::new();
//! request.set_address("https://example.com/search")?;
//! request.add_query("q", "rust");
//! request.add_cookie("session", "abc123")?;
//! request.set_max_redirects(1);
//!
//! let response = request.send().await?;
//! println!("{} {}", response.status(), response.text().await?);
//! # Ok(())
//! # }
//! ```
//!
//! # Redirects
//!
//! `max_redirects == 0` (the default) refuses every redirect with
//! [`RequestError::NoRedirects`]. Any other value follows redirects until the
//! chain holds [`config::MAX_REDIRECT_HOPS`] requests and then fails with
//! [`RequestError::RedirectLimitExceeded`].
//!
//! # Requirements
//!
//! `send` is async and needs a Tokio runtime.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod request;

// Re-export public API
pub use error_handling::{ErrorKind, RequestError};
pub use fetch::{Environment, SystemEnvironment};
pub use request::{Cookie, HeaderSet, Method, QueryParams, RequestBuilder};
