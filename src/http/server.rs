//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for the GraphQL endpoint and dashboard
//! - Wire up middleware (tracing, timeout, request ID, `Allow` header)
//! - Inject the execution engine
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::{DiagnosticsMode, ServerConfig};
use crate::engine::{DemoEngine, Diagnostics, ExecutionAdapter, ExecutionEngine};
use crate::http::dashboard::dashboard_router;
use crate::http::dispatch::{graphql_handler, handle_timeout, GraphQlState};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::http::response::ALLOW_METHODS;

/// HTTP server for the GraphQL endpoint.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server backed by the bundled demo schema.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_engine(config, Arc::new(DemoEngine::new()))
    }

    /// Create a server backed by the given engine.
    pub fn with_engine(config: ServerConfig, engine: Arc<dyn ExecutionEngine>) -> Self {
        let router = Self::build_router(&config, engine);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ServerConfig, engine: Arc<dyn ExecutionEngine>) -> Router {
        let diagnostics = match config.graphql.diagnostics {
            DiagnosticsMode::Discard => Diagnostics::discard(),
            DiagnosticsMode::Log => Diagnostics::tracing(),
        };
        let state = GraphQlState {
            adapter: ExecutionAdapter::new(engine, diagnostics),
            expose_partial_errors: config.graphql.expose_partial_errors,
            max_body_size: config.limits.max_body_size,
        };

        let mut router = Router::new()
            .route(&config.graphql.path, any(graphql_handler))
            .route_layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(handle_timeout))
                    .timeout(Duration::from_secs(config.timeouts.request_secs)),
            )
            .route_layer(SetResponseHeaderLayer::overriding(
                header::ALLOW,
                HeaderValue::from_static(ALLOW_METHODS),
            ))
            .with_state(state);

        if config.dashboard.enabled {
            router = router.merge(dashboard_router(&config.dashboard));
        }

        router
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            graphql_path = %self.config.graphql.path,
            dashboard = self.config.dashboard.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
