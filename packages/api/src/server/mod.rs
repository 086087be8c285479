//! HTTP boundary
//!
//! Routes:
//! - `GET /ping` liveness probe
//! - `POST /api/regex/match` evaluation
//!
//! The handler checks the text size before doing any work, runs the
//! evaluation on tokio's blocking pool and maps the three engine failures to
//! 413, 422 and 408.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use rxplay_engine::Evaluator;
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::ApiError;

/// Read-only state shared by every request
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub evaluator: Evaluator,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let evaluator = Evaluator::new(config.eval.clone());
        Self { config, evaluator }
    }
}

/// Build the service router for `config`
pub fn router(config: ServerConfig) -> Router {
    let body_limit = config.max_body_bytes;
    let state = Arc::new(AppState::new(config));

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/api/regex/match", post(handlers::regex_match))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn_with_state(Arc::clone(&state), cors::cors))
        .with_state(state)
}

/// Bind `config.bind` and serve until `shutdown` resolves
///
/// # Errors
///
/// Returns the I/O error if the listener cannot be bound or the server fails.
pub async fn serve<F>(config: ServerConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        origin = %config.allowed_origin,
        timeout = ?config.eval.timeout,
        "rxplay listening"
    );

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
}
