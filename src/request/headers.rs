//! Request header storage with overwrite semantics.
//!
//! Header names are case-insensitive. Each name holds exactly one value:
//! setting a header that already exists replaces it instead of appending a
//! second value. Query parameters use the opposite rule, see
//! [`QueryParams`](super::query::QueryParams).

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error_handling::RequestError;

#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    map: HeaderMap,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any value already present.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidHeader` if the name is not a valid HTTP
    /// token or the value contains characters not allowed on the wire.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), RequestError> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RequestError::InvalidHeader(format!("{name:?}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| RequestError::InvalidHeader(format!("{name}: {value:?}: {e}")))?;
        self.map.insert(header_name, header_value);
        Ok(())
    }

    pub(crate) fn insert(&mut self, name: HeaderName, value: HeaderValue) {
        self.map.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .get(name)
            .map(|value| value.to_str().unwrap_or_default())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Removes every value stored under `name`.
    ///
    /// Returns whether anything was removed. Unknown or syntactically invalid
    /// names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        match HeaderName::from_bytes(name.as_bytes()) {
            Ok(header_name) => self.map.remove(header_name).is_some(),
            Err(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(name, value)` pairs; names are lower-case.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map
            .iter()
            .map(|(name, value)| (name.as_str(), value.to_str().unwrap_or_default()))
    }

    /// The headers in the form the HTTP client consumes.
    pub fn as_header_map(&self) -> &HeaderMap {
        &self.map
    }
}
