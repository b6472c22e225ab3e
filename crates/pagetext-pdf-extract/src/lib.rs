use pagetext_core::{BackendError, PdfBackend, RawDocument};

/// pdf-extract-based implementation of [`PdfBackend`].
///
/// Reconstructs text in device space, which copes better with
/// multi-column and positioned layouts than raw content-stream decoding.
/// pdf-extract exposes no document metadata, so the Info dictionary is
/// read through the lopdf reader instead. Wire-level method name:
/// `pdfplumber`.
pub struct PdfExtractBackend;

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn read_document(&self, bytes: &[u8]) -> Result<RawDocument, BackendError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| BackendError::Extraction(e.to_string()))?;

        Ok(RawDocument {
            pages,
            metadata: pagetext_pdf_lopdf::read_metadata_from_bytes(bytes),
        })
    }
}
