//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    DashboardConfig, DiagnosticsMode, GraphQlConfig, LimitsConfig, ListenerConfig,
    ObservabilityConfig, ServerConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
