//! HTTP front end
//!
//! One route, `POST /api/analyze`, with permissive CORS so a browser client on
//! another origin can call it.

mod error;
mod routes;

pub use error::{ApiError, ErrorEnvelope};
pub use routes::AnalyzeRequest;

use crate::analyzer::ProfileAnalyzer;
use axum::Router;
use axum::routing::post;
use log::info;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Shared, read-only state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub analyzer: ProfileAnalyzer,
}

/// Builds the application router.
pub fn router(analyzer: ProfileAnalyzer) -> Router {
    Router::new()
        .route("/api/analyze", post(routes::analyze))
        .layer(CorsLayer::permissive())
        .with_state(AppState { analyzer })
}

/// Serves the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve<F>(
    listener: TcpListener,
    analyzer: ProfileAnalyzer,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Server running on {addr}");
    }
    axum::serve(listener, router(analyzer))
        .with_graceful_shutdown(shutdown)
        .await
}
