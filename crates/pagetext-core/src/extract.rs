use std::collections::BTreeMap;

use crate::ExtractionOptions;
use crate::backend::{BackendError, DocMetadata, PdfBackend};

/// Assembled result of extracting one document.
#[derive(Debug, Clone)]
pub struct DocumentText {
    pub text: String,
    /// Number of page extractions performed for this document: in-bounds
    /// selection entries (duplicates counted), or the total page count
    /// when no selection was given.
    pub pages_extracted: usize,
    pub total_pages: usize,
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Extract one document through `backend` and assemble the response text.
///
/// A shared page selection may cover files of different lengths: indices
/// past the end of *this* document are skipped silently rather than
/// reported as errors. Pages whose extracted text is empty contribute no
/// block at all, header included.
pub fn extract_document(
    backend: &dyn PdfBackend,
    bytes: &[u8],
    options: &ExtractionOptions,
) -> Result<DocumentText, BackendError> {
    let raw = backend.read_document(bytes)?;
    let total_pages = raw.pages.len();

    let mut text = String::new();
    let mut pages_extracted = 0;

    match &options.pages {
        Some(selection) => {
            for &index in selection.indices() {
                let Some(page_text) = raw.pages.get(index) else {
                    continue;
                };
                pages_extracted += 1;
                push_page(&mut text, index, page_text);
            }
        }
        None => {
            pages_extracted = total_pages;
            for (index, page_text) in raw.pages.iter().enumerate() {
                push_page(&mut text, index, page_text);
            }
        }
    }

    let metadata = options
        .include_metadata
        .then(|| metadata_map(&raw.metadata));

    Ok(DocumentText {
        text: text.trim().to_string(),
        pages_extracted,
        total_pages,
        metadata,
    })
}

fn push_page(out: &mut String, index: usize, page_text: &str) {
    if page_text.is_empty() {
        return;
    }
    out.push_str(&format!("\n--- Page {} ---\n{}\n", index + 1, page_text));
}

/// The fixed seven-key metadata mapping. Fields absent from the source
/// document map to empty strings so the key set is stable for clients.
pub fn metadata_map(meta: &DocMetadata) -> BTreeMap<String, String> {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    BTreeMap::from([
        ("title".to_string(), field(&meta.title)),
        ("author".to_string(), field(&meta.author)),
        ("subject".to_string(), field(&meta.subject)),
        ("creator".to_string(), field(&meta.creator)),
        ("producer".to_string(), field(&meta.producer)),
        ("creation_date".to_string(), field(&meta.creation_date)),
        ("modification_date".to_string(), field(&meta.modification_date)),
    ])
}
