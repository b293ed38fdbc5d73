//! GraphQL HTTP server.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ http::server ──▶ http::dispatch ──▶ graphql::normalizer
//!                   (request id,     (method table,     (URL params, JSON,
//!                    trace, timeout)  body read)          document, form)
//!                                                              │
//!                                                              ▼
//!   Client Response                                   engine::ExecutionAdapter
//!   ◀────────────── http::response ◀───────────────── (injected engine,
//!                   ({data} / {errors})                 diagnostics sink)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use graphql_http::config::{load_config, ServerConfig};
use graphql_http::lifecycle::{wait_for_signal, Shutdown};
use graphql_http::observability::{logging, metrics};
use graphql_http::HttpServer;

#[derive(Parser)]
#[command(name = "graphql-http")]
#[command(about = "GraphQL over HTTP server", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!("graphql-http v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        graphql_path = %config.graphql.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
