//! Structured logging.
//!
//! `RUST_LOG` wins over the configured level when it is set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("graphql_http={level},tower_http={level}")
    }
}

/// Install the global tracing subscriber.
pub fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("debug"), "graphql_http=debug,tower_http=debug");
        assert_eq!(default_filter("graphql_http=trace"), "graphql_http=trace");
    }
}
