//! Metrics collection and exposition.
//!
//! # Metrics
//! - `graphql_requests_total` (counter): requests by method, status
//! - `graphql_request_duration_seconds` (histogram): latency by method
//! - `graphql_normalization_errors_total` (counter): rejected requests by reason

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request on the GraphQL endpoint.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "graphql_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "graphql_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a request rejected before execution.
pub fn record_normalization_error(reason: &'static str) {
    metrics::counter!("graphql_normalization_errors_total", "reason" => reason).increment(1);
}
