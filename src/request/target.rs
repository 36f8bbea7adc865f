//! Structured request target.
//!
//! A `Target` keeps the parts of the URL separately so that replacing the
//! host, port or path leaves everything else (including the query and the
//! fragment) in place. The `url::Url` is assembled on demand.

use url::Url;

use super::query::QueryParams;
use crate::config::{
    DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT, DEFAULT_SCHEME, SUPPORTED_SCHEMES,
};
use crate::error_handling::RequestError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    scheme: String,
    /// Host without port; empty until an address is set.
    host: String,
    /// Explicitly configured port, if any.
    port: Option<u16>,
    path: String,
    query: QueryParams,
    fragment: String,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: String::new(),
            port: None,
            path: "/".to_string(),
            query: QueryParams::new(),
            fragment: String::new(),
        }
    }
}

fn check_scheme(scheme: &str) -> Result<(), RequestError> {
    if SUPPORTED_SCHEMES.contains(&scheme) {
        Ok(())
    } else {
        Err(RequestError::InvalidScheme(scheme.to_string()))
    }
}

impl Target {
    /// Parses a full URI into a target.
    ///
    /// # Errors
    ///
    /// - `RequestError::Parse` if `uri` is not a valid absolute URL, or carries
    ///   credentials (use basic auth on the request instead)
    /// - `RequestError::InvalidScheme` if the scheme is not `http` or `https`
    pub fn parse(uri: &str) -> Result<Self, RequestError> {
        let url = Url::parse(uri).map_err(|e| RequestError::Parse(format!("{uri}: {e}")))?;
        check_scheme(url.scheme())?;

        if !url.username().is_empty() || url.password().is_some() {
            return Err(RequestError::Parse(format!(
                "{uri}: credentials in the URL are not supported"
            )));
        }

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| RequestError::Parse(format!("{uri}: missing host")))?;

        Ok(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port(),
            path: url.path().to_string(),
            query: url.query().map(QueryParams::parse).unwrap_or_default(),
            fragment: url.fragment().unwrap_or_default().to_string(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host including `:port` when a port was given explicitly.
    pub fn host(&self) -> String {
        match self.port {
            Some(port) if !self.host.is_empty() => format!("{}:{}", self.host, port),
            _ => self.host.clone(),
        }
    }

    /// Host without the port.
    pub fn hostname(&self) -> &str {
        &self.host
    }

    /// The explicit port, or the scheme's default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(if self.scheme == "https" {
            DEFAULT_HTTPS_PORT
        } else {
            DEFAULT_HTTP_PORT
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    /// Replaces the host, accepting `host` or `host:port`.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Parse` if the input is not a bare authority
    /// (a path, query, fragment or userinfo part is rejected).
    pub fn set_host(&mut self, host: &str) -> Result<(), RequestError> {
        let candidate = format!("{}://{}/", self.scheme, host);
        let url = Url::parse(&candidate).map_err(|e| RequestError::Parse(format!("{host}: {e}")))?;

        let bare = url.path() == "/"
            && url.query().is_none()
            && url.fragment().is_none()
            && url.username().is_empty()
            && url.password().is_none();
        let parsed_host = url.host_str().filter(|h| !h.is_empty());

        match parsed_host {
            Some(parsed) if bare => {
                self.host = parsed.to_string();
                self.port = url.port();
                Ok(())
            }
            _ => Err(RequestError::Parse(format!("{host}: not a valid host"))),
        }
    }

    /// # Errors
    ///
    /// Returns `RequestError::InvalidPath` unless `path` starts with `/`, or
    /// if it carries a query (`?`) or fragment (`#`).
    pub fn set_path(&mut self, path: &str) -> Result<(), RequestError> {
        if !path.starts_with('/') || path.contains(['?', '#']) {
            return Err(RequestError::InvalidPath(path.to_string()));
        }
        self.path = path.to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RequestError::Parse` for port 0.
    pub fn set_port(&mut self, port: u16) -> Result<(), RequestError> {
        if port == 0 {
            return Err(RequestError::Parse("port 0 is not a valid port".to_string()));
        }
        self.port = Some(port);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RequestError::InvalidScheme` unless `scheme` is `http` or `https`.
    pub fn set_scheme(&mut self, scheme: &str) -> Result<(), RequestError> {
        check_scheme(scheme)?;
        self.scheme = scheme.to_string();
        Ok(())
    }

    pub fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
    }

    /// Assembles the full URL.
    ///
    /// # Errors
    ///
    /// - `RequestError::MissingHost` before a host has been set
    /// - `RequestError::Parse` if the parts do not form a valid URL
    pub fn to_url(&self) -> Result<Url, RequestError> {
        if self.host.is_empty() {
            return Err(RequestError::MissingHost);
        }
        let authority = format!("{}://{}", self.scheme, self.host());
        let mut url =
            Url::parse(&authority).map_err(|e| RequestError::Parse(format!("{authority}: {e}")))?;
        url.set_path(&self.path);
        if !self.query.is_empty() {
            url.set_query(Some(&self.query.encode()));
        }
        if !self.fragment.is_empty() {
            url.set_fragment(Some(&self.fragment));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_uri() {
        let target = Target::parse("https://example.com:8443/a/b?x=1&y=2#frag").unwrap();
        assert_eq!(target.scheme(), "https");
        assert_eq!(target.hostname(), "example.com");
        assert_eq!(target.host(), "example.com:8443");
        assert_eq!(target.port(), 8443);
        assert_eq!(target.path(), "/a/b");
        assert_eq!(target.query().encode(), "x=1&y=2");
        assert_eq!(target.fragment(), "frag");
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(Target::parse("https://example.com").unwrap().port(), 443);
        assert_eq!(Target::parse("http://example.com").unwrap().port(), 80);
        assert_eq!(Target::default().port(), 80);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Target::parse("not a uri"),
            Err(RequestError::Parse(_))
        ));
        assert!(matches!(
            Target::parse("ftp://example.com/file"),
            Err(RequestError::InvalidScheme(s)) if s == "ftp"
        ));
        assert!(matches!(
            Target::parse("http://user:pw@example.com/"),
            Err(RequestError::Parse(_))
        ));
    }

    #[test]
    fn test_set_host_keeps_path_query_and_fragment() {
        let mut target = Target::parse("http://a.example/p?q=1#f").unwrap();
        target.set_host("b.example:8080").unwrap();

        assert_eq!(target.host(), "b.example:8080");
        assert_eq!(
            target.to_url().unwrap().as_str(),
            "http://b.example:8080/p?q=1#f"
        );
    }

    #[test]
    fn test_set_host_rejects_non_authority() {
        let mut target = Target::parse("http://a.example/").unwrap();
        for bad in ["", "b.example/path", "b.example?x=1", "u@b.example", "bad host"] {
            assert!(
                matches!(target.set_host(bad), Err(RequestError::Parse(_))),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(target.host(), "a.example");
    }

    #[test]
    fn test_set_port_replaces_port_only() {
        let mut target = Target::parse("http://a.example:81/p?q=1").unwrap();
        target.set_port(9000).unwrap();
        assert_eq!(target.host(), "a.example:9000");
        assert_eq!(target.to_url().unwrap().as_str(), "http://a.example:9000/p?q=1");
        assert!(matches!(target.set_port(0), Err(RequestError::Parse(_))));
    }

    #[test]
    fn test_set_path_requires_leading_slash() {
        let mut target = Target::parse("http://a.example/old?q=1").unwrap();
        assert!(matches!(
            target.set_path("new"),
            Err(RequestError::InvalidPath(p)) if p == "new"
        ));
        assert!(matches!(target.set_path(""), Err(RequestError::InvalidPath(_))));
        target.set_path("/new").unwrap();
        assert_eq!(target.path(), "/new");
        assert_eq!(target.to_url().unwrap().as_str(), "http://a.example/new?q=1");
    }

    #[test]
    fn test_set_path_rejects_query_and_fragment() {
        let mut target = Target::parse("http://example.com/?keep=1").unwrap();
        for path in ["/search?q=1", "/page#top"] {
            assert!(matches!(
                target.set_path(path),
                Err(RequestError::InvalidPath(_))
            ));
        }
        assert_eq!(target.path(), "/");
        assert_eq!(
            target.to_url().unwrap().as_str(),
            "http://example.com/?keep=1"
        );
    }

    #[test]
    fn test_set_scheme() {
        let mut target = Target::parse("http://a.example/").unwrap();
        target.set_scheme("https").unwrap();
        assert_eq!(target.port(), 443);
        assert!(matches!(
            target.set_scheme("ftp"),
            Err(RequestError::InvalidScheme(_))
        ));
        assert_eq!(target.scheme(), "https");
    }

    #[test]
    fn test_to_url_without_host() {
        assert!(matches!(
            Target::default().to_url(),
            Err(RequestError::MissingHost)
        ));
    }
}
