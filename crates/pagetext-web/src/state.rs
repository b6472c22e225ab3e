use std::sync::Arc;

use pagetext_core::{ExtractionMethod, PdfBackend};
use pagetext_pdf_extract::PdfExtractBackend;
use pagetext_pdf_lopdf::LopdfBackend;

/// Shared application state accessible from all handlers. Fixed at
/// startup, never mutated; requests share nothing else.
pub struct AppState {
    lopdf: Arc<dyn PdfBackend>,
    pdf_extract: Arc<dyn PdfBackend>,
    pub default_max_files: usize,
}

impl AppState {
    pub fn new(default_max_files: usize) -> Self {
        Self {
            lopdf: Arc::new(LopdfBackend),
            pdf_extract: Arc::new(PdfExtractBackend),
            default_max_files,
        }
    }

    pub fn backend(&self, method: ExtractionMethod) -> Arc<dyn PdfBackend> {
        match method {
            ExtractionMethod::Lopdf => Arc::clone(&self.lopdf),
            ExtractionMethod::PdfExtract => Arc::clone(&self.pdf_extract),
        }
    }
}
