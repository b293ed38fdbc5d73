//! Execution outcome as reported by an engine.

use serde::Serialize;
use serde_json::Value;

/// Source position an engine may attach to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// One engine error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.locations.push(ErrorLocation { line, column });
        self
    }
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of running an operation.
///
/// A well-formed result has `data`, non-empty `errors`, or both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult {
    pub data: Option<Value>,
    pub errors: Vec<ExecutionError>,
}

impl ExecutionResult {
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn errors(errors: Vec<ExecutionError>) -> Self {
        Self { data: None, errors }
    }

    pub fn with_error(mut self, error: ExecutionError) -> Self {
        self.errors.push(error);
        self
    }

    /// Neither data nor errors: the engine broke its contract.
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.errors.is_empty()
    }
}
