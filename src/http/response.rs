//! Response formatting.
//!
//! # Responsibilities
//! - Map an `ExecutionResult` or a `RequestError` to status + JSON body
//! - Flatten engine errors to `{"message": ...}`; locations are never sent
//!
//! # Envelope
//! ```text
//! data present            → 200 {"data":...}
//!   (+ expose_partial_errors and errors) → 200 {"data":...,"errors":[...]}
//! errors only             → 400 {"errors":[{"message":...},...]}
//! neither                 → 500 (engine contract violation)
//! request error           → its status, {"errors":[{"message":...}]}
//! ```
//!
//! Bodies are compact JSON.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::engine::ExecutionResult;
use crate::http::error::RequestError;

/// Value of the `Allow` header on every GraphQL endpoint response.
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";

const JSON_CONTENT_TYPE: &str = "application/json";
const FALLBACK_BODY: &str = r#"{"errors":[{"message":"Internal server error."}]}"#;

#[derive(Serialize)]
struct ErrorMessage<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ErrorMessage<'a>>,
}

/// A rendered response for the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQlResponse {
    pub status: StatusCode,
    pub body: String,
}

impl GraphQlResponse {
    fn render(status: StatusCode, envelope: &Envelope<'_>) -> Self {
        match serde_json::to_string(envelope) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response envelope");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: FALLBACK_BODY.to_string(),
                }
            }
        }
    }

    /// `{"errors":[{"message":...}, ...]}` with the given status.
    pub fn errors<'a>(status: StatusCode, messages: impl IntoIterator<Item = &'a str>) -> Self {
        let envelope = Envelope {
            data: None,
            errors: messages
                .into_iter()
                .map(|message| ErrorMessage { message })
                .collect(),
        };
        Self::render(status, &envelope)
    }
}

impl IntoResponse for GraphQlResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
            self.body,
        )
            .into_response()
    }
}

/// Render an execution result.
pub fn format_result(
    result: &ExecutionResult,
    expose_partial_errors: bool,
) -> Result<GraphQlResponse, RequestError> {
    if result.is_empty() {
        return Err(RequestError::EngineContractViolation);
    }

    let messages = || result.errors.iter().map(|e| ErrorMessage { message: &e.message });

    match &result.data {
        Some(data) => {
            let errors = if expose_partial_errors {
                messages().collect()
            } else {
                Vec::new()
            };
            let envelope = Envelope {
                data: Some(data),
                errors,
            };
            Ok(GraphQlResponse::render(StatusCode::OK, &envelope))
        }
        None => {
            let envelope = Envelope {
                data: None,
                errors: messages().collect(),
            };
            Ok(GraphQlResponse::render(StatusCode::BAD_REQUEST, &envelope))
        }
    }
}

/// Render a request error.
pub fn format_error(error: &RequestError) -> GraphQlResponse {
    let message = error.client_message();
    GraphQlResponse::errors(error.status(), [message.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ExecutionError;
    use crate::graphql::NormalizationError;
    use serde_json::json;

    #[test]
    fn test_data_only() {
        let result = ExecutionResult::data(json!({"hello": "Hello world!"}));
        let response = format_result(&result, false).unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, r#"{"data":{"hello":"Hello world!"}}"#);
    }

    #[test]
    fn test_partial_result_hides_errors_by_default() {
        let result = ExecutionResult::data(json!({"rollDice": null}))
            .with_error(ExecutionError::new("sides must be at least 1"));
        let response = format_result(&result, false).unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, r#"{"data":{"rollDice":null}}"#);
    }

    #[test]
    fn test_partial_result_exposed() {
        let result = ExecutionResult::data(json!({"rollDice": null}))
            .with_error(ExecutionError::new("sides must be at least 1").with_location(1, 2));
        let response = format_result(&result, true).unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            r#"{"data":{"rollDice":null},"errors":[{"message":"sides must be at least 1"}]}"#
        );
    }

    #[test]
    fn test_errors_only_keep_order_and_drop_locations() {
        let result = ExecutionResult::errors(vec![
            ExecutionError::new("first").with_location(1, 1),
            ExecutionError::new("second"),
        ]);
        let response = format_result(&result, false).unwrap();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            r#"{"errors":[{"message":"first"},{"message":"second"}]}"#
        );
    }

    #[test]
    fn test_empty_result_is_contract_violation() {
        let err = format_result(&ExecutionResult::default(), false).unwrap_err();
        assert!(matches!(err, RequestError::EngineContractViolation));
    }

    #[test]
    fn test_empty_object_data_is_success() {
        let response = format_result(&ExecutionResult::data(json!({})), false).unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, r#"{"data":{}}"#);
    }

    #[test]
    fn test_format_errors() {
        let response = format_error(&NormalizationError::MissingQuery.into());
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            r#"{"errors":[{"message":"Must provide query string."}]}"#
        );

        let response = format_error(&RequestError::MethodNotAllowed);
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.body,
            r#"{"errors":[{"message":"GraphQL only supports GET and POST requests."}]}"#
        );

        let response = format_error(&RequestError::EngineContractViolation);
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, FALLBACK_BODY);
    }
}
