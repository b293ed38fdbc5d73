//! Bridge between the HTTP pipeline and the injected engine.

use std::sync::Arc;
use std::time::Instant;

use crate::engine::diagnostics::Diagnostics;
use crate::engine::result::ExecutionResult;
use crate::engine::ExecutionEngine;
use crate::graphql::OperationRequest;

/// Runs normalized requests against the configured engine.
///
/// Whatever the engine emits as diagnostics goes to the adapter's sink.
#[derive(Clone)]
pub struct ExecutionAdapter {
    engine: Arc<dyn ExecutionEngine>,
    diagnostics: Diagnostics,
}

impl ExecutionAdapter {
    pub fn new(engine: Arc<dyn ExecutionEngine>, diagnostics: Diagnostics) -> Self {
        Self {
            engine,
            diagnostics,
        }
    }

    pub async fn execute(&self, request: &OperationRequest) -> ExecutionResult {
        let start = Instant::now();
        let result = self.engine.execute(request, &self.diagnostics).await;

        tracing::debug!(
            operation_name = request.operation_name().unwrap_or("<default>"),
            has_data = result.data.is_some(),
            error_count = result.errors.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Operation executed"
        );
        result
    }
}
