//! GraphiQL dashboard assets.
//!
//! `GET <path>` serves `graphiql.html`; `GET <path>/{file}` serves a file
//! from the assets directory. Only plain file names are accepted.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::config::DashboardConfig;

const INDEX_FILE: &str = "graphiql.html";

#[derive(Clone)]
struct DashboardState {
    assets_dir: Arc<PathBuf>,
}

/// Routes for the dashboard page and its assets.
pub fn dashboard_router(config: &DashboardConfig) -> Router {
    let state = DashboardState {
        assets_dir: Arc::new(PathBuf::from(&config.assets_dir)),
    };
    let base = config.path.trim_end_matches('/');

    Router::new()
        .route(&config.path, get(index))
        .route(&format!("{base}/{{file}}"), get(asset))
        .with_state(state)
}

async fn index(State(state): State<DashboardState>) -> Response {
    serve(&state, INDEX_FILE).await
}

async fn asset(State(state): State<DashboardState>, Path(file): Path<String>) -> Response {
    if !is_plain_file_name(&file) {
        return StatusCode::NOT_FOUND.into_response();
    }
    serve(&state, &file).await
}

async fn serve(state: &DashboardState, file: &str) -> Response {
    let path = state.assets_dir.join(file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(file))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::debug!(path = ?path, error = %e, "Dashboard asset not available");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn is_plain_file_name(file: &str) -> bool {
    !file.is_empty()
        && !file.contains('/')
        && !file.contains('\\')
        && !file.contains("..")
}

fn content_type_for(file: &str) -> &'static str {
    if file.ends_with(".html") {
        "text/html; charset=UTF-8"
    } else if file.ends_with(".css") {
        "text/css; charset=UTF-8"
    } else {
        "application/javascript; charset=UTF-8"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("graphiql.html"), "text/html; charset=UTF-8");
        assert_eq!(content_type_for("graphiql.css"), "text/css; charset=UTF-8");
        assert_eq!(
            content_type_for("graphiql.js"),
            "application/javascript; charset=UTF-8"
        );
    }

    #[test]
    fn test_file_name_filter() {
        assert!(is_plain_file_name("graphiql.css"));
        assert!(!is_plain_file_name("../Cargo.toml"));
        assert!(!is_plain_file_name("..%2FCargo.toml"));
        assert!(!is_plain_file_name("a\\b"));
        assert!(!is_plain_file_name(""));
    }
}
