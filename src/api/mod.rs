//! HTTP surface: dispatch table, shared state, middleware stack

pub mod handlers;
pub mod payloads;

use crate::extractor::traits::Extractor;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Upper bound on one request, covering the extractor subprocess.
/// Hardening only; the extractor itself carries no timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Handler dependencies; everything here is immutable and shared
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn Extractor>,
}

/// Build the router. CORS stays permissive because callers are
/// separately hosted front-ends and edge workers.
pub fn create_router(extractor: Arc<dyn Extractor>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/download", post(handlers::download))
        .route("/info", post(handlers::info))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { extractor })
}
