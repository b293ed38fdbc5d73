//! Failures the GraphQL endpoint answers with an error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::graphql::NormalizationError;
use crate::http::response::format_error;

/// Message sent to clients in place of internal failure details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be turned into an operation.
    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    /// PUT, PATCH, DELETE and any other unsupported method.
    #[error("GraphQL only supports GET and POST requests.")]
    MethodNotAllowed,

    /// Declared content length exceeds the configured limit.
    #[error("POST body is too large.")]
    BodyTooLarge,

    /// The body stream failed or exceeded the limit while reading.
    #[error("POST body could not be read.")]
    BodyUnreadable,

    /// The request did not complete within the configured timeout.
    #[error("Request timed out.")]
    Timeout,

    /// The engine returned neither data nor errors.
    #[error("execution result carried neither data nor errors")]
    EngineContractViolation,
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::Normalization(_) | RequestError::BodyUnreadable => {
                StatusCode::BAD_REQUEST
            }
            RequestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RequestError::Timeout => StatusCode::REQUEST_TIMEOUT,
            RequestError::EngineContractViolation => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the response's `errors[0].message`.
    pub fn client_message(&self) -> String {
        match self {
            RequestError::EngineContractViolation => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        format_error(&self).into_response()
    }
}
