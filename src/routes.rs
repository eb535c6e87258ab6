//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The game is fully client-side; this binary serves the built client bundle
//! as static files plus a health endpoint, with request tracing, CORS, and
//! compression.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Resolve the directory holding the built client bundle.
///
/// `SITE_DIR` overrides; the default is `site/` next to the manifest, where
/// the client build lands.
pub fn site_dir(env_value: Option<String>) -> PathBuf {
    env_value
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site"))
}

/// Parse the listen port, defaulting to 3000. `None` means the value was set
/// but invalid.
pub fn port(env_value: Option<String>) -> Option<u16> {
    match env_value {
        Some(raw) => raw.parse().ok(),
        None => Some(3000),
    }
}

/// Static hosting for the game plus `/healthz`.
pub fn app(site_root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let site = ServeDir::new(site_root).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
