use std::collections::BTreeMap;

use serde::Serialize;

use pagetext_core::{BatchResult, ExtractionOutcome};

// ── Single-file response ────────────────────────────────────────────────

/// Response body for the single-file extraction endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub text: String,
    pub pages: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

// ── Batch response ──────────────────────────────────────────────────────

/// One per-document entry in a batch response.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeJson {
    pub filename: String,
    pub success: bool,
    pub text: String,
    pub pages: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ExtractionOutcome> for OutcomeJson {
    fn from(outcome: &ExtractionOutcome) -> Self {
        Self {
            filename: outcome.filename.clone(),
            success: outcome.success,
            text: outcome.text.clone(),
            pages: outcome.pages,
            message: outcome.message.clone(),
            metadata: outcome.metadata.clone(),
            error: outcome.error.clone(),
        }
    }
}

/// Response body for the batch extraction endpoints. Results are in
/// upload order, failures interleaved with successes.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub total_files: usize,
    pub successful_extractions: usize,
    pub failed_extractions: usize,
    pub results: Vec<OutcomeJson>,
    pub summary: String,
}

impl From<BatchResult> for BatchResponse {
    fn from(batch: BatchResult) -> Self {
        let results = batch.results.iter().map(OutcomeJson::from).collect();
        Self {
            success: batch.success(),
            total_files: batch.total_files,
            successful_extractions: batch.successful,
            failed_extractions: batch.failed,
            results,
            summary: batch.summary,
        }
    }
}
