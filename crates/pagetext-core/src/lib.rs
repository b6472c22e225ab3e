use std::collections::BTreeMap;

pub mod backend;
pub mod batch;
pub mod extract;
pub mod range;

#[cfg(test)]
pub(crate) mod mock;

// Re-export for convenience
pub use backend::{BackendError, DocMetadata, PdfBackend, RawDocument};
pub use batch::{
    BatchError, EMPTY_FILE, INVALID_METHOD, NOT_A_PDF, run_batch, validate_document,
};
pub use extract::{DocumentText, extract_document, metadata_map};
pub use range::{PageSelection, RangeParseError, resolve_page_range};

/// The two interchangeable extraction backends, selectable per request.
///
/// Wire names on the `method` form field are kept from the service's
/// original API for client compatibility: `"pypdf2"` selects the lopdf
/// backend and `"pdfplumber"` the pdf-extract backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    Lopdf,
    PdfExtract,
}

impl ExtractionMethod {
    /// Parse a wire-level method name, case-insensitively.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "pypdf2" => Some(Self::Lopdf),
            "pdfplumber" => Some(Self::PdfExtract),
            _ => None,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Lopdf => "pypdf2",
            Self::PdfExtract => "pdfplumber",
        }
    }
}

impl Default for ExtractionMethod {
    fn default() -> Self {
        Self::PdfExtract
    }
}

/// Per-request extraction options, shared read-only by every file in a
/// batch. The method choice is resolved into a backend instance at the
/// transport boundary and passed alongside these options.
#[derive(Debug, Clone, Default)]
pub struct ExtractionOptions {
    pub include_metadata: bool,
    /// `None` means "extract every page", resolved per document against
    /// that document's own page count.
    pub pages: Option<PageSelection>,
}

/// One uploaded file: name as sent by the client plus raw bytes.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Per-document result within a batch.
///
/// `success == false` implies empty text, zero pages and a populated
/// `error`; `success == true` implies `error` is absent.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub filename: String,
    pub success: bool,
    pub text: String,
    pub pages: usize,
    pub message: String,
    pub metadata: Option<BTreeMap<String, String>>,
    pub error: Option<String>,
}

impl ExtractionOutcome {
    pub fn succeeded(filename: String, extracted: DocumentText) -> Self {
        Self {
            filename,
            success: true,
            message: format!(
                "Successfully extracted text from {} pages",
                extracted.pages_extracted
            ),
            text: extracted.text,
            pages: extracted.pages_extracted,
            metadata: extracted.metadata,
            error: None,
        }
    }

    pub fn failed(filename: String, error: impl Into<String>) -> Self {
        Self {
            filename,
            success: false,
            text: String::new(),
            pages: 0,
            message: "Text extraction failed".to_string(),
            metadata: None,
            error: Some(error.into()),
        }
    }
}

/// Aggregate result of one batch request. Outcomes are in input order,
/// failures interleaved with successes.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub total_files: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<ExtractionOutcome>,
    pub summary: String,
}

impl BatchResult {
    /// A batch counts as successful when at least one file succeeded.
    pub fn success(&self) -> bool {
        self.successful > 0
    }
}
