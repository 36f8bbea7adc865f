//! Cookie list stored in the request's `Cookie` header.
//!
//! The header is the single source of truth: every cookie operation parses
//! it, edits the list and writes it back.

use crate::config::COOKIE_SEPARATOR;

/// A `name=value` pair sent in the `Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CookieList {
    cookies: Vec<Cookie>,
}

impl CookieList {
    /// Parses a `Cookie` header value. Segments without `=` are skipped.
    pub(crate) fn from_header(header: Option<&str>) -> Self {
        let cookies = header
            .unwrap_or_default()
            .split(';')
            .filter_map(|segment| {
                let (name, value) = segment.trim().split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(Cookie::new(name, value.trim()))
            })
            .collect();
        Self { cookies }
    }

    /// Drops any cookie called `name` and appends the new value at the end.
    pub(crate) fn upsert(&mut self, name: &str, value: &str) {
        self.remove(name);
        self.cookies.push(Cookie::new(name, value));
    }

    pub(crate) fn remove(&mut self, name: &str) -> bool {
        let before = self.cookies.len();
        self.cookies.retain(|cookie| cookie.name != name);
        self.cookies.len() != before
    }

    /// Renders the header value, or `None` once the list is empty.
    pub(crate) fn to_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|cookie| format!("{}={}", cookie.name, cookie.value))
                .collect::<Vec<_>>()
                .join(COOKIE_SEPARATOR),
        )
    }

    pub(crate) fn into_vec(self) -> Vec<Cookie> {
        self.cookies
    }
}
