//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use graphql_http::config::ServerConfig;
use graphql_http::lifecycle::Shutdown;
use graphql_http::HttpServer;
use tokio::net::TcpListener;

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Config with the dashboard pointed at the repository's asset directory.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.dashboard.assets_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/graphiql").to_string();
    config
}

/// Start the demo server with `config`.
pub async fn start_server(config: ServerConfig) -> TestServer {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
