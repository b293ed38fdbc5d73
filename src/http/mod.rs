//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID)
//!     → dispatch.rs (method table, body read)
//!     → graphql::normalizer → engine::ExecutionAdapter
//!     → response.rs (status + JSON envelope)
//!     → Send to client
//! ```

pub mod dashboard;
pub mod dispatch;
pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use error::RequestError;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::{GraphQlResponse, ALLOW_METHODS};
pub use server::HttpServer;
