use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
}

/// Document metadata read from the PDF Info dictionary. Fields missing
/// from the source document stay `None`; the transport-level mapping
/// turns them into empty strings.
#[derive(Debug, Clone, Default)]
pub struct DocMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
}

/// What a backend produces for one parsed document: the extracted text of
/// every page, in page order, plus document metadata.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub pages: Vec<String>,
    pub metadata: DocMetadata,
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level per-page text and metadata; page
/// selection, bounds handling and output assembly live in
/// [`crate::extract::extract_document`].
pub trait PdfBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Parse a PDF held in memory and extract the text of every page.
    fn read_document(&self, bytes: &[u8]) -> Result<RawDocument, BackendError>;
}
