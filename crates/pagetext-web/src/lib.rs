//! HTTP surface for the pagetext extraction service.
//!
//! Endpoints:
//!
//! - `POST /extract-text` – extract one PDF with a selectable backend.
//! - `POST /extract-text-advanced` – one PDF with optional metadata and a
//!   page-range selection.
//! - `POST /extract-text-batch` – many PDFs under one backend choice;
//!   per-file failures are embedded in the response, never fatal.
//! - `POST /extract-text-batch-advanced` – batch with metadata/page-range
//!   options.
//! - `GET /health`, `GET /` – liveness and endpoint catalog.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod upload;

pub use state::AppState;

/// Default per-batch file cap, overridable per request via `max_files`.
pub const DEFAULT_MAX_BATCH_FILES: usize = 10;

/// Build the HTTP router exposing the extraction API surface.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Allow large uploads (50MB)
    let body_limit = DefaultBodyLimit::max(50 * 1024 * 1024);

    Router::new()
        .route("/", get(handlers::index::root))
        .route("/health", get(handlers::index::health))
        .route("/extract-text", post(handlers::extract::extract_text))
        .route(
            "/extract-text-advanced",
            post(handlers::extract::extract_text_advanced),
        )
        .route(
            "/extract-text-batch",
            post(handlers::batch::extract_text_batch),
        )
        .route(
            "/extract-text-batch-advanced",
            post(handlers::batch::extract_text_batch_advanced),
        )
        .layer(body_limit)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
