use axum::Json;
use serde_json::{Value, json};

/// Service metadata and endpoint catalog.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "PDF Text Extractor API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "extract_text": "/extract-text",
            "extract_text_advanced": "/extract-text-advanced",
            "extract_text_batch": "/extract-text-batch",
            "extract_text_batch_advanced": "/extract-text-batch-advanced",
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "message": "API is running" }))
}
