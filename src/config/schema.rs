//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the GraphQL server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// GraphQL endpoint settings.
    pub graphql: GraphQlConfig,

    /// GraphiQL dashboard settings.
    pub dashboard: DashboardConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:4004").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:4004".to_string(),
        }
    }
}

/// Where engine diagnostic output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsMode {
    /// Drop it.
    #[default]
    Discard,
    /// Forward it to the debug log.
    Log,
}

/// GraphQL endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GraphQlConfig {
    /// Path the endpoint is mounted on.
    pub path: String,

    /// Include `errors` next to `data` when a result is a partial success.
    pub expose_partial_errors: bool,

    /// Destination for engine diagnostics.
    pub diagnostics: DiagnosticsMode,
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            path: "/graphql".to_string(),
            expose_partial_errors: false,
            diagnostics: DiagnosticsMode::Discard,
        }
    }
}

/// GraphiQL dashboard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Serve the dashboard.
    pub enabled: bool,

    /// Mount path; assets live under `<path>/{file}`.
    pub path: String,

    /// Directory holding graphiql.html and its assets.
    pub assets_dir: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/graphiql".to_string(),
            assets_dir: "graphiql".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum POST body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
