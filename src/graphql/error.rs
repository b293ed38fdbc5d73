//! Client-side normalization failures.

use thiserror::Error;

/// A terminal failure while building an `OperationRequest`.
///
/// The `Display` text is exactly the message sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// No usable query text in the URL or the body.
    #[error("Must provide query string.")]
    MissingQuery,

    /// A variables value could not be decoded into a JSON object.
    #[error("Variables are invalid JSON.")]
    InvalidVariables,

    /// A JSON-typed POST body was empty or not valid JSON.
    #[error("POST body sent invalid JSON.")]
    InvalidBody,
}

impl NormalizationError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            NormalizationError::MissingQuery => "missing_query",
            NormalizationError::InvalidVariables => "invalid_variables",
            NormalizationError::InvalidBody => "invalid_body",
        }
    }
}
