use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};

use pagetext_core::{
    DocumentInput, DocumentText, ExtractionMethod, ExtractionOptions, INVALID_METHOD, PdfBackend,
    extract_document, resolve_page_range, validate_document,
};

use crate::error::ApiError;
use crate::models::ExtractResponse;
use crate::state::AppState;
use crate::upload;

/// `POST /extract-text`: one file, selectable backend, metadata always
/// included.
pub async fn extract_text(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, ApiError> {
    let form = upload::parse_form(multipart).await?;
    let doc = take_document(form.file)?;

    let method = match form.method.as_deref() {
        None => ExtractionMethod::default(),
        Some(raw) => ExtractionMethod::from_wire(raw)
            .ok_or_else(|| ApiError::bad_request(INVALID_METHOD))?,
    };
    let options = ExtractionOptions {
        include_metadata: true,
        pages: None,
    };

    run_single(&state, doc, method, options).await
}

/// `POST /extract-text-advanced`: one file on the default backend, with
/// optional metadata and a page-range selection.
pub async fn extract_text_advanced(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, ApiError> {
    let form = upload::parse_form(multipart).await?;
    let doc = take_document(form.file)?;

    let options = ExtractionOptions {
        include_metadata: form.include_metadata.unwrap_or(true),
        pages: resolve_page_range(form.page_range.as_deref())?,
    };

    run_single(&state, doc, ExtractionMethod::default(), options).await
}

/// File checks come first, before any other field is interpreted.
fn take_document(file: Option<DocumentInput>) -> Result<DocumentInput, ApiError> {
    let doc = file.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;
    validate_document(&doc).map_err(ApiError::bad_request)?;
    Ok(doc)
}

async fn run_single(
    state: &AppState,
    doc: DocumentInput,
    method: ExtractionMethod,
    options: ExtractionOptions,
) -> Result<Json<ExtractResponse>, ApiError> {
    tracing::info!(file = %doc.filename, method = method.wire_name(), "extract request");

    let extracted = run_extraction(state.backend(method), doc.data, options).await?;

    Ok(Json(ExtractResponse {
        success: true,
        message: format!(
            "Successfully extracted text from {} pages",
            extracted.pages_extracted
        ),
        text: extracted.text,
        pages: extracted.pages_extracted,
        metadata: extracted.metadata,
    }))
}

/// PDF parsing is synchronous; run it off the async reactor.
async fn run_extraction(
    backend: Arc<dyn PdfBackend>,
    data: Vec<u8>,
    options: ExtractionOptions,
) -> Result<DocumentText, ApiError> {
    tokio::task::spawn_blocking(move || extract_document(backend.as_ref(), &data, &options))
        .await
        .map_err(|e| ApiError::internal(format!("Extraction task error: {e}")))?
        .map_err(|e| ApiError::internal(format!("Text extraction failed: {e}")))
}
