//! URL-style key/value parameters.
//!
//! Both the request's query string and form-encoded POST bodies end up here.
//! Blank values are kept but never returned by `get`, and for repeated keys
//! the first non-empty value wins. Form bodies are appended after the URL
//! parameters so that the URL always takes precedence.

use url::form_urlencoded;

/// Parameter names shared by the URL and every body encoding.
pub const QUERY: &str = "query";
pub const VARIABLES: &str = "variables";
pub const OPERATION_NAME: &str = "operationName";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Parse a raw (still percent-encoded) query string.
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        if let Some(raw) = raw {
            params.extend_encoded(raw.as_bytes());
        }
        params
    }

    /// Append `application/x-www-form-urlencoded` pairs after the existing ones.
    pub fn extend_encoded(&mut self, encoded: &[u8]) {
        self.entries.extend(
            form_urlencoded::parse(encoded).map(|(k, v)| (k.into_owned(), v.into_owned())),
        );
    }

    /// First non-empty value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, v)| k == name && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }
}
