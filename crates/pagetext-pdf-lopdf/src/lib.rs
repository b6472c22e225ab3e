use lopdf::{Dictionary, Document};

use pagetext_core::{BackendError, DocMetadata, PdfBackend, RawDocument};

/// lopdf-based implementation of [`PdfBackend`].
///
/// Decodes page content streams directly via the page tree. Faster than
/// the pdf-extract backend, but less tolerant of unusual layouts; the
/// wire-level method name for this backend is `pypdf2`.
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn read_document(&self, bytes: &[u8]) -> Result<RawDocument, BackendError> {
        let doc = Document::load_mem(bytes).map_err(|e| BackendError::Open(e.to_string()))?;

        let mut pages = Vec::with_capacity(doc.get_pages().len());
        for (page_num, _page_id) in doc.get_pages() {
            let text = doc
                .extract_text(&[page_num])
                .map_err(|e| BackendError::Extraction(e.to_string()))?;
            pages.push(text);
        }

        Ok(RawDocument {
            pages,
            metadata: read_metadata(&doc),
        })
    }
}

/// Read the Info dictionary of a loaded document into [`DocMetadata`].
///
/// Missing or non-string entries stay `None`; so does everything when the
/// trailer carries no `Info` reference at all.
pub fn read_metadata(doc: &Document) -> DocMetadata {
    let Some(info) = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|obj| obj.as_reference().ok())
        .and_then(|id| doc.get_object(id).ok())
        .and_then(|obj| obj.as_dict().ok())
    else {
        return DocMetadata::default();
    };

    DocMetadata {
        title: info_string(info, b"Title"),
        author: info_string(info, b"Author"),
        subject: info_string(info, b"Subject"),
        creator: info_string(info, b"Creator"),
        producer: info_string(info, b"Producer"),
        creation_date: info_string(info, b"CreationDate"),
        modification_date: info_string(info, b"ModDate"),
    }
}

/// Read the Info dictionary straight from raw bytes, without extracting
/// any text. Unparseable documents yield empty metadata rather than an
/// error; the text-extraction path reports parse failures on its own.
pub fn read_metadata_from_bytes(bytes: &[u8]) -> DocMetadata {
    match Document::load_mem(bytes) {
        Ok(doc) => read_metadata(&doc),
        Err(_) => DocMetadata::default(),
    }
}

fn info_string(dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .ok()
        .and_then(|obj| obj.as_str().ok())
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .map(str::to_owned)
}
