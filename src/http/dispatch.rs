//! GraphQL endpoint handler.
//!
//! # Method table
//! ```text
//! GET, POST     → normalize → execute → format
//! OPTIONS       → 204
//! HEAD          → 200, empty body
//! anything else → 405 {"errors":[{"message":"GraphQL only supports GET and POST requests."}]}
//! ```
//!
//! The `Allow` header is added by a layer in `server.rs`, so it is present on
//! every response of this route. Requests that outlive the route timeout are
//! answered by [`handle_timeout`] with a 408 envelope.

use std::time::Instant;

use axum::{
    body::{self, Body, Bytes},
    extract::State,
    BoxError,
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::engine::ExecutionAdapter;
use crate::graphql::{normalize_get, normalize_post, OperationRequest, Params};
use crate::http::error::RequestError;
use crate::http::request::request_id;
use crate::http::response::{format_result, GraphQlResponse};
use crate::observability::metrics;

/// State shared by all requests to the GraphQL endpoint.
#[derive(Clone)]
pub struct GraphQlState {
    pub adapter: ExecutionAdapter,
    pub expose_partial_errors: bool,
    pub max_body_size: usize,
}

/// Entry point for every method on the GraphQL path.
pub async fn graphql_handler(
    State(state): State<GraphQlState>,
    request: Request<Body>,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let request_id = request_id(request.headers()).to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        "GraphQL request"
    );

    let response = match method {
        Method::GET | Method::POST => match execute(&state, request).await {
            Ok(response) => response.into_response(),
            Err(e) => {
                log_failure(&request_id, &e);
                e.into_response()
            }
        },
        Method::OPTIONS => StatusCode::NO_CONTENT.into_response(),
        Method::HEAD => StatusCode::OK.into_response(),
        _ => RequestError::MethodNotAllowed.into_response(),
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}

async fn execute(
    state: &GraphQlState,
    request: Request<Body>,
) -> Result<GraphQlResponse, RequestError> {
    let operation = normalize(state, request).await?;
    let result = state.adapter.execute(&operation).await;
    format_result(&result, state.expose_partial_errors)
}

async fn normalize(
    state: &GraphQlState,
    request: Request<Body>,
) -> Result<OperationRequest, RequestError> {
    let (parts, body) = request.into_parts();
    let params = Params::from_query(parts.uri.query());

    if parts.method == Method::GET {
        return Ok(normalize_get(&params)?);
    }

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let body = read_body(&parts.headers, body, state.max_body_size).await?;

    Ok(normalize_post(&params, content_type, &body)?)
}

async fn read_body(headers: &HeaderMap, body: Body, limit: usize) -> Result<Bytes, RequestError> {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    if declared.is_some_and(|len| len > limit as u64) {
        return Err(RequestError::BodyTooLarge);
    }

    body::to_bytes(body, limit)
        .await
        .map_err(|_| RequestError::BodyUnreadable)
}

/// Error handler for the route's timeout layer, the only fallible layer
/// wrapping [`graphql_handler`].
pub async fn handle_timeout(error: BoxError) -> RequestError {
    if error.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("GraphQL request timed out");
    } else {
        tracing::error!(error = %error, "GraphQL route layer failed");
    }
    RequestError::Timeout
}

fn log_failure(request_id: &str, error: &RequestError) {
    match error {
        RequestError::EngineContractViolation => {
            tracing::error!(request_id = %request_id, "Engine returned neither data nor errors");
        }
        RequestError::Normalization(e) => {
            metrics::record_normalization_error(e.reason());
            tracing::debug!(request_id = %request_id, error = %e, "Rejected GraphQL request");
        }
        other => {
            tracing::debug!(request_id = %request_id, error = %other, "Rejected GraphQL request");
        }
    }
}
