//! Builds an `OperationRequest` from URL parameters and the request body.
//!
//! # Precedence
//! For POST, each of `query`, `variables` and `operationName` is resolved
//! independently: a value supplied in the URL is never replaced by the body.
//! A URL `variables` value that fails to decode is reported as an error even
//! when the body carries valid variables. One that decodes to `null` counts as
//! absent, so the body is still consulted.
//!
//! GET never looks at the body.

use std::borrow::Cow;

use serde_json::Value;

use crate::graphql::decoder::{
    decode_document, decode_json_body, decode_variables, is_blank, ContentKind,
};
use crate::graphql::error::NormalizationError;
use crate::graphql::params::{Params, OPERATION_NAME, QUERY, VARIABLES};
use crate::graphql::request::{OperationRequest, Variables};

/// Fields resolved so far. `None` means no source has supplied the field yet.
#[derive(Debug, Default)]
struct Resolved {
    query: Option<String>,
    variables: Option<Variables>,
    operation_name: Option<String>,
}

impl Resolved {
    fn from_params(params: &Params) -> Result<Self, NormalizationError> {
        Ok(Self {
            query: params.get(QUERY).map(str::to_owned),
            variables: match params.get(VARIABLES) {
                Some(text) => decode_variables(text)?,
                None => None,
            },
            operation_name: params.get(OPERATION_NAME).map(str::to_owned),
        })
    }

    /// Fill unresolved fields from a decoded JSON body.
    fn merge_json(&mut self, payload: &Value) -> Result<(), NormalizationError> {
        if self.query.is_none() {
            self.query = non_empty_str(field(payload, QUERY)).map(str::to_owned);
        }
        if self.query.is_none() {
            return Err(NormalizationError::MissingQuery);
        }

        if self.variables.is_none() {
            self.variables = match field(payload, VARIABLES) {
                Some(value) if !is_blank(value) => json_variables(value)?,
                _ => None,
            };
        }

        if self.operation_name.is_none() {
            self.operation_name = non_empty_str(field(payload, OPERATION_NAME)).map(str::to_owned);
        }
        Ok(())
    }

    fn finish(self) -> Result<OperationRequest, NormalizationError> {
        let query = self.query.ok_or(NormalizationError::MissingQuery)?;
        OperationRequest::new(query, self.variables, self.operation_name)
            .ok_or(NormalizationError::MissingQuery)
    }
}

fn field<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    payload.as_object()?.get(name)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// The body's `variables` field is conventionally a JSON-encoded string;
/// an inline object is accepted as well.
fn json_variables(value: &Value) -> Result<Option<Variables>, NormalizationError> {
    match value {
        Value::String(text) => decode_variables(text),
        Value::Object(map) => Ok(Some(Variables::new(map.clone()))),
        _ => Err(NormalizationError::InvalidVariables),
    }
}

/// Normalize a GET request. Only URL parameters are consulted.
pub fn normalize_get(params: &Params) -> Result<OperationRequest, NormalizationError> {
    if params.get(QUERY).is_none() {
        return Err(NormalizationError::MissingQuery);
    }
    Resolved::from_params(params)?.finish()
}

/// Normalize a POST request.
pub fn normalize_post(
    params: &Params,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<OperationRequest, NormalizationError> {
    let kind = ContentKind::from_header(content_type);

    let params = match kind {
        ContentKind::Form => {
            let mut merged = params.clone();
            merged.extend_encoded(body);
            Cow::Owned(merged)
        }
        _ => Cow::Borrowed(params),
    };
    let mut resolved = Resolved::from_params(&params)?;

    match kind {
        ContentKind::Json => {
            let payload = decode_json_body(body)?;
            resolved.merge_json(&payload)?;
        }
        ContentKind::Document => {
            if resolved.query.is_none() {
                let document = decode_document(body);
                if !document.is_empty() {
                    resolved.query = Some(document);
                }
            }
        }
        ContentKind::Form | ContentKind::Other => {}
    }

    resolved.finish()
}
