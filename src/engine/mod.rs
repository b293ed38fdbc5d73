//! Execution engine boundary.
//!
//! # Data Flow
//! ```text
//! OperationRequest
//!     → adapter.rs (ExecutionAdapter: injected engine + diagnostics sink)
//!     → ExecutionEngine::execute (any GraphQL engine)
//!     → result.rs (ExecutionResult: data and/or errors)
//! ```
//!
//! # Design Decisions
//! - The engine is a trait object handed in at startup, never a global
//! - Engine side output goes through `Diagnostics`, never to stdout
//! - `schema.rs` is the bundled demo engine, built on async-graphql

use async_trait::async_trait;

use crate::graphql::OperationRequest;

pub mod adapter;
pub mod diagnostics;
pub mod result;
pub mod schema;

pub use adapter::ExecutionAdapter;
pub use diagnostics::{CaptureSink, DiagnosticSink, Diagnostics, DiscardSink, TracingSink};
pub use result::{ErrorLocation, ExecutionError, ExecutionResult};
pub use schema::DemoEngine;

/// A GraphQL engine that can run one operation.
///
/// Omitting the operation name must select the document's only operation.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    async fn execute(&self, request: &OperationRequest, diagnostics: &Diagnostics)
        -> ExecutionResult;
}
