use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};

use pagetext_core::{
    DocumentInput, ExtractionMethod, ExtractionOptions, PdfBackend, resolve_page_range, run_batch,
};

use crate::error::ApiError;
use crate::models::BatchResponse;
use crate::state::AppState;
use crate::upload;

/// `POST /extract-text-batch`: many files under one backend choice.
pub async fn extract_text_batch(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<BatchResponse>, ApiError> {
    let form = upload::parse_form(multipart).await?;

    let backend = resolve_backend(&state, form.method.as_deref());
    let options = ExtractionOptions {
        include_metadata: true,
        pages: None,
    };
    let max_files = form.max_files.unwrap_or(state.default_max_files);

    run_batch_request(form.files, backend, options, max_files).await
}

/// `POST /extract-text-batch-advanced`: many files on the default
/// backend, with metadata and page-range options shared by the batch.
pub async fn extract_text_batch_advanced(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<BatchResponse>, ApiError> {
    let form = upload::parse_form(multipart).await?;

    let backend = Some(state.backend(ExtractionMethod::default()));
    let options = ExtractionOptions {
        include_metadata: form.include_metadata.unwrap_or(true),
        pages: resolve_page_range(form.page_range.as_deref())?,
    };
    let max_files = form.max_files.unwrap_or(state.default_max_files);

    run_batch_request(form.files, backend, options, max_files).await
}

/// The method is a batch-wide option, resolved once before the loop.
/// `None` marks an unrecognised name, which the orchestrator reports on
/// every per-document outcome rather than as a request failure.
fn resolve_backend(state: &AppState, method: Option<&str>) -> Option<Arc<dyn PdfBackend>> {
    match method {
        None => Some(state.backend(ExtractionMethod::default())),
        Some(raw) => ExtractionMethod::from_wire(raw).map(|m| state.backend(m)),
    }
}

async fn run_batch_request(
    documents: Vec<DocumentInput>,
    backend: Option<Arc<dyn PdfBackend>>,
    options: ExtractionOptions,
    max_files: usize,
) -> Result<Json<BatchResponse>, ApiError> {
    tracing::info!(files = documents.len(), max_files, "batch extract request");

    let batch = tokio::task::spawn_blocking(move || {
        run_batch(documents, backend.as_deref(), &options, max_files)
    })
    .await
    .map_err(|e| ApiError::internal(format!("Extraction task error: {e}")))??;

    Ok(Json(BatchResponse::from(batch)))
}
