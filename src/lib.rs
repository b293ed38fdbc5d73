//! GraphQL-over-HTTP server library.
//!
//! Accepts GET, JSON, `application/graphql` and form-encoded requests,
//! normalizes them into one `OperationRequest`, runs it on an injected
//! `ExecutionEngine` and answers with the `{data}` / `{errors}` envelope.

pub mod config;
pub mod engine;
pub mod graphql;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use engine::{ExecutionEngine, ExecutionResult};
pub use graphql::{NormalizationError, OperationRequest};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
