//! Body and variables decoding.
//!
//! # Responsibilities
//! - Classify the declared content-type
//! - Decode JSON bodies (key order preserved)
//! - Take raw `application/graphql` bodies verbatim
//! - Decode JSON-encoded variables text into a mapping
//!
//! Form bodies are plain key/value parameters and are handled by `Params`.

use serde_json::Value;

use crate::graphql::error::NormalizationError;
use crate::graphql::request::Variables;

/// How a POST body is interpreted, derived from its content-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `application/json`
    Json,
    /// `application/graphql`: the body is the query document.
    Document,
    /// `application/x-www-form-urlencoded`
    Form,
    /// Anything else, or no content-type at all.
    Other,
}

impl ContentKind {
    /// Classify a content-type header value.
    ///
    /// Matching is a case-insensitive substring test, so parameters such as
    /// `; charset=utf-8` are ignored.
    pub fn from_header(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return ContentKind::Other;
        };
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("application/json") {
            ContentKind::Json
        } else if content_type.contains("application/graphql") {
            ContentKind::Document
        } else if content_type.contains("application/x-www-form-urlencoded") {
            ContentKind::Form
        } else {
            ContentKind::Other
        }
    }
}

/// Decode a JSON POST body. An empty body is invalid.
pub fn decode_json_body(body: &[u8]) -> Result<Value, NormalizationError> {
    if body.is_empty() {
        return Err(NormalizationError::InvalidBody);
    }
    serde_json::from_slice(body).map_err(|_| NormalizationError::InvalidBody)
}

/// Take an `application/graphql` body as query text. Never fails.
pub fn decode_document(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Decode JSON-encoded variables text.
///
/// `null` decodes to no variables. Any other non-object value is rejected,
/// since bindings must be a name → value mapping.
pub fn decode_variables(text: &str) -> Result<Option<Variables>, NormalizationError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(Some(Variables::new(map))),
        Ok(Value::Null) => Ok(None),
        Ok(_) | Err(_) => Err(NormalizationError::InvalidVariables),
    }
}

/// Whether a JSON field value counts as "not supplied".
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
