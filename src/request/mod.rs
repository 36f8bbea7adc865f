//! The mutable request builder.
//!
//! A `RequestBuilder` holds everything needed for one HTTP request: target,
//! method, headers, cookies, query parameters, body and redirect setting.
//! Every mutator validates its input up front and leaves the builder
//! unchanged when it returns an error. Dispatch lives in [`crate::fetch`].
//!
//! # Example
//!
//! ```no_run
//! use reqforge::RequestBuilder;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), reqforge::RequestError> {
//! let mut request = RequestBuilder::new();
//! request.set_address("https://httpbin.org/anything")?;
//! request.set_method("POST")?;
//! request.add_header("Content-Type", "text/plain")?;
//! request.add_query("page", "1");
//! request.set_body_as_string("hello");
//!
//! let response = request.send().await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

mod body;
mod cookies;
mod headers;
mod method;
mod query;
mod target;

use log::debug;
use reqwest::header::{HeaderValue, ACCEPT, COOKIE};
use url::Url;

pub use body::ReusableBody;
pub use cookies::Cookie;
pub use headers::HeaderSet;
pub use method::Method;
pub use query::QueryParams;
pub use target::Target;

use cookies::CookieList;

use crate::config::DEFAULT_ACCEPT;
use crate::error_handling::RequestError;
use crate::fetch::{self, Environment, SystemEnvironment};

/// Basic-auth credentials applied at dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

/// One pending HTTP request.
///
/// Not synchronized: share it across tasks only behind your own lock.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    target: Target,
    method: Method,
    headers: HeaderSet,
    body: ReusableBody,
    content_length: u64,
    max_redirects: usize,
    credentials: Option<Credentials>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    /// Creates a GET request with `Accept: */*`, an `http` scheme, no host and
    /// redirects disabled.
    pub fn new() -> Self {
        let mut headers = HeaderSet::new();
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        Self {
            target: Target::default(),
            method: Method::Get,
            headers,
            body: ReusableBody::default(),
            content_length: 0,
            max_redirects: 0,
            credentials: None,
        }
    }

    // ----- address and routing -----

    /// Replaces the whole target with the parsed `uri`.
    ///
    /// # Errors
    ///
    /// `RequestError::Parse` for malformed input, `RequestError::InvalidScheme`
    /// for schemes other than `http`/`https`.
    pub fn set_address(&mut self, uri: &str) -> Result<(), RequestError> {
        self.target = Target::parse(uri)?;
        debug!("Target set to {uri}");
        Ok(())
    }

    /// Replaces the host (`host` or `host:port`), keeping path, query and fragment.
    pub fn set_host(&mut self, host: &str) -> Result<(), RequestError> {
        self.target.set_host(host)
    }

    /// Replaces the path, keeping query and fragment. The path must start with `/`.
    pub fn set_path(&mut self, path: &str) -> Result<(), RequestError> {
        self.target.set_path(path)
    }

    pub fn set_port(&mut self, port: u16) -> Result<(), RequestError> {
        self.target.set_port(port)
    }

    /// Accepts exactly `http` or `https`.
    pub fn set_scheme(&mut self, scheme: &str) -> Result<(), RequestError> {
        self.target.set_scheme(scheme)
    }

    pub fn set_fragment(&mut self, fragment: &str) {
        self.target.set_fragment(fragment);
    }

    pub fn clear_fragment(&mut self) {
        self.target.set_fragment("");
    }

    /// Host, with `:port` appended when the port was set explicitly.
    pub fn host(&self) -> String {
        self.target.host()
    }

    pub fn path(&self) -> &str {
        self.target.path()
    }

    /// Explicit port, else 443 for `https` and 80 otherwise.
    pub fn port(&self) -> u16 {
        self.target.port()
    }

    pub fn scheme(&self) -> &str {
        self.target.scheme()
    }

    pub fn fragment(&self) -> &str {
        self.target.fragment()
    }

    /// The URL-encoded query string, without `?`.
    pub fn query(&self) -> String {
        self.target.query().encode()
    }

    pub fn query_params(&self) -> &QueryParams {
        self.target.query()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The full URL the request will be sent to.
    ///
    /// # Errors
    ///
    /// `RequestError::MissingHost` before an address or host has been set.
    pub fn url(&self) -> Result<Url, RequestError> {
        self.target.to_url()
    }

    // ----- method -----

    /// # Errors
    ///
    /// `RequestError::UnsupportedMethod` unless `method` is one of GET, POST,
    /// PUT, DELETE, HEAD, OPTIONS. The current method is kept on error.
    pub fn set_method(&mut self, method: &str) -> Result<(), RequestError> {
        self.method = Method::parse(method)?;
        Ok(())
    }

    pub fn set_method_typed(&mut self, method: Method) {
        self.method = method;
    }

    pub fn method(&self) -> Method {
        self.method
    }

    // ----- headers -----

    /// Adds a header, overwriting any existing value for the same name.
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<(), RequestError> {
        self.headers.set(name, value)
    }

    pub fn remove_header(&mut self, name: &str) {
        self.headers.remove(name);
    }

    pub fn clear_headers(&mut self) {
        self.headers.clear();
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    // ----- query -----

    /// Appends a query parameter; earlier values for `name` are kept.
    pub fn add_query(&mut self, name: &str, value: &str) {
        self.target.query_mut().append(name, value);
    }

    /// Removes every value of `name` from the query.
    pub fn remove_query(&mut self, name: &str) {
        self.target.query_mut().remove(name);
    }

    pub fn clear_query(&mut self) {
        self.target.query_mut().clear();
    }

    // ----- cookies -----

    /// Inserts or replaces the cookie `name`.
    ///
    /// The updated cookie moves to the end of the `Cookie` header.
    ///
    /// # Errors
    ///
    /// `RequestError::InvalidHeader` if the name is empty, the name contains
    /// `=`, `;` or whitespace, the value contains `;` or starts or ends with
    /// whitespace, or either part is not allowed in a header value.
    pub fn add_cookie(&mut self, name: &str, value: &str) -> Result<(), RequestError> {
        if name.is_empty()
            || name.contains(|c: char| c == '=' || c == ';' || c.is_whitespace())
            || value.contains(';')
            || value.trim() != value
        {
            return Err(RequestError::InvalidHeader(format!(
                "invalid cookie {name:?}={value:?}"
            )));
        }
        let mut cookies = CookieList::from_header(self.headers.get("cookie"));
        cookies.upsert(name, value);
        self.write_cookies(&cookies)
    }

    pub fn remove_cookie(&mut self, name: &str) {
        let mut cookies = CookieList::from_header(self.headers.get("cookie"));
        if !cookies.remove(name) {
            return;
        }
        match cookies.to_header().map(|header| HeaderValue::from_str(&header)) {
            Some(Ok(value)) => self.headers.insert(COOKIE, value),
            Some(Err(_)) => log::warn!("Dropping unrenderable Cookie header"),
            None => {
                self.headers.remove("cookie");
            }
        }
    }

    /// Removes the `Cookie` header.
    pub fn clear_cookies(&mut self) {
        self.headers.remove("cookie");
    }

    pub fn cookies(&self) -> Vec<Cookie> {
        CookieList::from_header(self.headers.get("cookie")).into_vec()
    }

    fn write_cookies(&mut self, cookies: &CookieList) -> Result<(), RequestError> {
        match cookies.to_header() {
            Some(header) => self.headers.set("Cookie", &header),
            None => {
                self.headers.remove("cookie");
                Ok(())
            }
        }
    }

    // ----- body -----

    pub fn set_body_as_string(&mut self, body: &str) {
        self.set_body_as_bytes(body.as_bytes().to_vec());
    }

    pub fn set_body_as_bytes(&mut self, body: Vec<u8>) {
        self.content_length = body.len() as u64;
        self.body = ReusableBody::new(body);
    }

    /// Current body as text. Reading does not consume the body.
    pub fn body(&mut self) -> String {
        self.body.read_text()
    }

    /// Current body as bytes. Reading does not consume the body.
    pub fn body_bytes(&mut self) -> Vec<u8> {
        self.body.read_all()
    }

    pub fn clear_body(&mut self) {
        self.set_body_as_bytes(Vec::new());
    }

    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    // ----- redirects and auth -----

    /// `0` disables redirects. Any other value follows up to
    /// [`MAX_REDIRECT_HOPS`](crate::config::MAX_REDIRECT_HOPS) hops, whatever
    /// the exact number.
    pub fn set_max_redirects(&mut self, max_redirects: usize) {
        self.max_redirects = max_redirects;
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub fn set_basic_auth(&mut self, username: &str, password: Option<&str>) {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.map(str::to_string),
        });
    }

    pub fn clear_basic_auth(&mut self) {
        self.credentials = None;
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    // ----- dispatch -----

    /// Sends the request using proxy settings from the process environment.
    ///
    /// See [`fetch::dispatch`] for the full algorithm.
    pub async fn send(&mut self) -> Result<reqwest::Response, RequestError> {
        fetch::dispatch(self, &SystemEnvironment).await
    }

    /// Sends the request, reading proxy variables from `env`.
    pub async fn send_with_env<E: Environment>(
        &mut self,
        env: &E,
    ) -> Result<reqwest::Response, RequestError> {
        fetch::dispatch(self, env).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> RequestBuilder {
        let mut request = RequestBuilder::new();
        request.set_address(uri).expect("test URI should parse");
        request
    }

    #[test]
    fn test_new_defaults() {
        let request = RequestBuilder::new();
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.headers().get("accept"), Some("*/*"));
        assert_eq!(request.port(), 80);
        assert_eq!(request.scheme(), "http");
        assert_eq!(request.host(), "");
        assert_eq!(request.max_redirects(), 0);
        assert_eq!(request.content_length(), 0);
        assert!(matches!(request.url(), Err(RequestError::MissingHost)));
    }

    #[test]
    fn test_set_method_keeps_previous_on_error() {
        let mut request = RequestBuilder::new();
        for name in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS"] {
            request.set_method(name).unwrap();
            assert_eq!(request.method().as_ref(), name);
        }
        assert!(matches!(
            request.set_method("PATCH"),
            Err(RequestError::UnsupportedMethod(_))
        ));
        assert_eq!(request.method(), Method::Options);
    }

    #[test]
    fn test_set_path() {
        let mut request = request("http://example.com/");
        request.set_path("/foo").unwrap();
        assert_eq!(request.path(), "/foo");
        assert!(matches!(
            request.set_path("foo"),
            Err(RequestError::InvalidPath(_))
        ));
        assert_eq!(request.path(), "/foo");
    }

    #[test]
    fn test_port_accessor() {
        assert_eq!(request("https://example.com:8443/").port(), 8443);
        assert_eq!(request("https://example.com/").port(), 443);
        assert_eq!(request("http://example.com/").port(), 80);
    }

    #[test]
    fn test_host_includes_explicit_port() {
        let mut request = request("http://example.com/x");
        assert_eq!(request.host(), "example.com");
        request.set_port(8080).unwrap();
        assert_eq!(request.host(), "example.com:8080");
        request.set_host("other.example").unwrap();
        assert_eq!(request.host(), "other.example");
        assert_eq!(request.port(), 80);
    }

    #[test]
    fn test_set_scheme_accepts_only_http_and_https() {
        let mut request = request("http://example.com/");
        request.set_scheme("https").unwrap();
        assert_eq!(request.scheme(), "https");
        request.set_scheme("http").unwrap();
        assert_eq!(request.scheme(), "http");
        for bad in ["ftp", "HTTP", "", "https "] {
            assert!(matches!(
                request.set_scheme(bad),
                Err(RequestError::InvalidScheme(_))
            ));
        }
        assert_eq!(request.scheme(), "http");
    }

    #[test]
    fn test_fragment() {
        let mut request = request("http://example.com/#top");
        assert_eq!(request.fragment(), "top");
        request.set_fragment("bottom");
        assert_eq!(request.url().unwrap().fragment(), Some("bottom"));
        request.clear_fragment();
        assert_eq!(request.url().unwrap().fragment(), None);
    }

    #[test]
    fn test_body_is_rereadable() {
        let mut request = RequestBuilder::new();
        request.set_body_as_string("abc");
        assert_eq!(request.body(), "abc");
        assert_eq!(request.body(), "abc");
        assert_eq!(request.content_length(), 3);

        request.set_body_as_bytes(vec![1, 2, 3, 4]);
        assert_eq!(request.body_bytes(), vec![1, 2, 3, 4]);
        assert_eq!(request.content_length(), 4);

        request.clear_body();
        assert_eq!(request.body(), "");
        assert_eq!(request.content_length(), 0);
    }

    #[test]
    fn test_add_header_overwrites() {
        let mut request = RequestBuilder::new();
        request.add_header("X", "1").unwrap();
        request.add_header("X", "2").unwrap();
        assert_eq!(request.headers().get("x"), Some("2"));
        assert_eq!(
            request.headers().as_header_map().get_all("x").iter().count(),
            1
        );
    }

    #[test]
    fn test_remove_and_clear_headers() {
        let mut request = RequestBuilder::new();
        request.add_header("X-One", "1").unwrap();
        request.remove_header("X-Missing");
        request.remove_header("x-one");
        assert!(!request.headers().contains("x-one"));
        assert!(request.headers().contains("accept"));

        request.clear_headers();
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_add_query_appends() {
        let mut request = request("http://example.com/");
        request.add_query("a", "1");
        request.add_query("a", "2");
        let query = request.query();
        assert!(query.contains("a=1"));
        assert!(query.contains("a=2"));
        assert_eq!(request.url().unwrap().as_str(), "http://example.com/?a=1&a=2");
    }

    #[test]
    fn test_remove_and_clear_query_persist() {
        let mut request = request("http://example.com/?a=1&b=2&a=3");
        request.remove_query("a");
        assert_eq!(request.query(), "b=2");

        request.clear_query();
        assert_eq!(request.query(), "");
        assert_eq!(request.url().unwrap().as_str(), "http://example.com/");
    }

    #[test]
    fn test_query_and_fragment_survive_routing_changes() {
        let mut request = request("http://example.com/a?x=1#f");
        request.set_path("/b").unwrap();
        request.set_port(8080).unwrap();
        request.set_host("other.example").unwrap();
        assert_eq!(
            request.url().unwrap().as_str(),
            "http://other.example/b?x=1#f"
        );
    }

    #[test]
    fn test_add_cookie_upserts() {
        let mut request = RequestBuilder::new();
        request.add_cookie("s", "v1").unwrap();
        request.add_cookie("t", "1").unwrap();
        request.add_cookie("s", "v2").unwrap();

        let cookies = request.cookies();
        let named_s: Vec<&Cookie> = cookies.iter().filter(|c| c.name == "s").collect();
        assert_eq!(named_s.len(), 1);
        assert_eq!(named_s[0].value, "v2");
        assert_eq!(request.headers().get("cookie"), Some("t=1; s=v2"));
    }

    #[test]
    fn test_add_cookie_rejects_invalid_names() {
        let mut request = RequestBuilder::new();
        for (name, value) in [("", "v"), ("a=b", "v"), ("a b", "v"), ("a", "x;y")] {
            assert!(matches!(
                request.add_cookie(name, value),
                Err(RequestError::InvalidHeader(_))
            ));
        }
        assert!(request.cookies().is_empty());
    }

    #[test]
    fn test_cookie_values_round_trip() {
        let mut request = RequestBuilder::new();
        for value in [" x ", " x", "x\t"] {
            assert!(matches!(
                request.add_cookie("a", value),
                Err(RequestError::InvalidHeader(_))
            ));
        }
        request.add_cookie("a", "x y").unwrap();
        assert_eq!(request.cookies(), vec![Cookie::new("a", "x y")]);
        assert_eq!(request.headers().get("cookie"), Some("a=x y"));
    }

    #[test]
    fn test_remove_and_clear_cookies() {
        let mut request = RequestBuilder::new();
        request.add_cookie("a", "1").unwrap();
        request.add_cookie("b", "2").unwrap();

        request.remove_cookie("a");
        assert_eq!(request.cookies(), vec![Cookie::new("b", "2")]);

        request.remove_cookie("b");
        assert!(!request.headers().contains("cookie"));

        request.add_cookie("c", "3").unwrap();
        request.clear_cookies();
        assert!(request.cookies().is_empty());
    }

    #[test]
    fn test_basic_auth_placeholder() {
        let mut request = RequestBuilder::new();
        request.set_basic_auth("user", Some("secret"));
        let credentials = request.credentials().unwrap();
        assert_eq!(credentials.username, "user");
        assert_eq!(credentials.password.as_deref(), Some("secret"));
        request.clear_basic_auth();
        assert!(request.credentials().is_none());
    }
}
