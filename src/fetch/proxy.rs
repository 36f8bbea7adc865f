//! Proxy resolution from environment variables.
//!
//! For `https` targets `https_proxy` is consulted, then `HTTPS_PROXY`; for
//! everything else `http_proxy`, then `HTTP_PROXY`. The first non-empty
//! variable wins, even if its value turns out to be unusable.

use std::collections::HashMap;

use log::{debug, warn};
use url::Url;

use crate::config::{HTTPS_PROXY_VAR, HTTPS_PROXY_VAR_UPPER, HTTP_PROXY_VAR, HTTP_PROXY_VAR_UPPER};

/// Read-only source of environment variables.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The variable names checked for `scheme`, in lookup order.
pub fn proxy_vars(scheme: &str) -> [&'static str; 2] {
    if scheme == "https" {
        [HTTPS_PROXY_VAR, HTTPS_PROXY_VAR_UPPER]
    } else {
        [HTTP_PROXY_VAR, HTTP_PROXY_VAR_UPPER]
    }
}

/// Resolves the proxy to use for a request with the given scheme.
///
/// A value without `://` is treated as `http://<value>`. A value that still
/// fails to parse is logged and ignored.
///
/// # Returns
///
/// The proxy URL, or `None` when no variable is set or the value is unusable.
pub fn resolve_proxy<E: Environment + ?Sized>(scheme: &str, env: &E) -> Option<Url> {
    let (name, value) = proxy_vars(scheme).into_iter().find_map(|name| {
        env.var(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| (name, value))
    })?;

    let candidate = if value.contains("://") {
        value.clone()
    } else {
        format!("http://{value}")
    };

    match Url::parse(&candidate) {
        Ok(url) => {
            debug!("Using proxy {url} from {name}");
            Some(url)
        }
        Err(e) => {
            warn!("Ignoring {name}={value:?}: {e}");
            None
        }
    }
}
