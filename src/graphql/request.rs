//! The canonical operation request.

use serde::Serialize;
use serde_json::{Map, Value};

/// Variable bindings for an operation, in the order the client sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(Map<String, Value>);

impl Variables {
    pub fn new(bindings: Map<String, Value>) -> Self {
        Self(bindings)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Transport-independent `(query, variables, operationName)` triple.
///
/// `variables == None` means the client supplied no bindings at all; the
/// engine treats it the same as an empty mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Variables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_name: Option<String>,
}

impl OperationRequest {
    /// Build a request. Returns `None` when `query` is empty.
    pub fn new(
        query: impl Into<String>,
        variables: Option<Variables>,
        operation_name: Option<String>,
    ) -> Option<Self> {
        let query = query.into();
        if query.is_empty() {
            return None;
        }
        Some(Self {
            query,
            variables,
            operation_name,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn variables(&self) -> Option<&Variables> {
        self.variables.as_ref()
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }
}
