//! Request normalization subsystem.
//!
//! # Data Flow
//! ```text
//! URL query string + content-type + body bytes
//!     → params.rs (URL / form key-value parameters)
//!     → decoder.rs (JSON payload or raw query document)
//!     → normalizer.rs (precedence: URL first, body second, per field)
//!     → OperationRequest (query, variables, operation name)
//! ```
//!
//! # Design Decisions
//! - Normalization is a pure function of the request parts; no I/O
//! - Every failure is a `NormalizationError` that maps to a 400
//! - An `OperationRequest` can only be built with a non-empty query

pub mod decoder;
pub mod error;
pub mod normalizer;
pub mod params;
pub mod request;

pub use decoder::ContentKind;
pub use error::NormalizationError;
pub use normalizer::{normalize_get, normalize_post};
pub use params::Params;
pub use request::{OperationRequest, Variables};
