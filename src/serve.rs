//! Landing page preview server.
//!
//! Serves the current working directory on a fixed port with caching
//! disabled on every response, and opens the landing page in the default
//! browser. Runs on a current-thread runtime until Ctrl-C.

use std::path::Path;

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{instrument, warn};

use crate::cli::output;
use crate::errors::{AssetError, AssetResult};

pub const PORT: u16 = 8080;
pub const LANDING_PAGE: &str = "landing.html";
pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate";

/// Static file router rooted at `dir`, with the no-cache header forced
/// onto every response (404s included).
pub fn router(dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(NO_CACHE),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serve the landing page until interrupted.
#[instrument]
pub fn run() -> AssetResult<()> {
    run_on(&format!("0.0.0.0:{}", PORT))
}

/// Same server bound to an explicit address.
pub fn run_on(addr: &str) -> AssetResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AssetError::io("build tokio runtime", e))?;
    runtime.block_on(serve(addr))
}

async fn serve(addr: &str) -> AssetResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AssetError::Bind {
            addr: addr.to_string(),
            source: e,
        })?;

    let url = format!("http://localhost:{}/{}", PORT, LANDING_PAGE);
    output::info(&format!("Server running at {}", url));
    output::detail("Press Ctrl+C to stop the server");
    if let Err(e) = webbrowser::open(&url) {
        warn!("could not open browser: {}", e);
    }

    axum::serve(listener, router(Path::new(".")))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AssetError::io("serve landing page", e))?;

    output::info("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
    }
}
