//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Check addresses parse and mount paths do not collide
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: path {value:?} must start with '/'")]
    InvalidPath { field: &'static str, value: String },

    #[error("graphql.path and dashboard.path are both {0:?}")]
    PathCollision(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("observability.log_level: invalid filter {0:?}")]
    InvalidLogLevel(String),
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(
        &mut errors,
        "listener.bind_address",
        &config.listener.bind_address,
    );
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    check_path(&mut errors, "graphql.path", &config.graphql.path);
    if config.dashboard.enabled {
        check_path(&mut errors, "dashboard.path", &config.dashboard.path);
        if config.dashboard.path == config.graphql.path {
            errors.push(ValidationError::PathCollision(config.graphql.path.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::Zero("limits.max_body_size"));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_path(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if !value.starts_with('/') {
        errors.push(ValidationError::InvalidPath {
            field,
            value: value.to_string(),
        });
    }
}
