//! Stub PDF backend for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, DocMetadata, PdfBackend, RawDocument};

/// A hand-rolled [`PdfBackend`] for tests: returns a fixed set of page
/// texts (and optional title), or a fixed error. Counts calls so tests
/// can assert that upfront failures never reach the backend.
pub struct StubBackend {
    pages: Vec<String>,
    title: Option<String>,
    error: Option<String>,
    call_count: AtomicUsize,
}

impl StubBackend {
    /// A backend that successfully extracts the given page texts.
    pub fn with_pages(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|p| p.to_string()).collect(),
            title: None,
            error: None,
            call_count: AtomicUsize::new(0),
        }
    }

    /// A backend that fails every document with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            pages: Vec::new(),
            title: None,
            error: Some(message.to_string()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// How many times `read_document()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl PdfBackend for StubBackend {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn read_document(&self, _bytes: &[u8]) -> Result<RawDocument, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.error {
            return Err(BackendError::Open(message.clone()));
        }
        Ok(RawDocument {
            pages: self.pages.clone(),
            metadata: DocMetadata {
                title: self.title.clone(),
                ..DocMetadata::default()
            },
        })
    }
}
