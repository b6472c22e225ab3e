use thiserror::Error;

use crate::backend::PdfBackend;
use crate::extract::extract_document;
use crate::{BatchResult, DocumentInput, ExtractionOptions, ExtractionOutcome};

/// Case-insensitive filename suffix every uploaded document must carry.
pub const PDF_SUFFIX: &str = ".pdf";

/// Fixed per-document failure messages, shared with the single-file
/// endpoints where the same checks surface as request-level errors.
pub const NOT_A_PDF: &str = "File must be a PDF";
pub const EMPTY_FILE: &str = "Empty file";
pub const INVALID_METHOD: &str = "Invalid method. Use 'pypdf2' or 'pdfplumber'";

/// Batch-wide preconditions, checked before any document is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("No files provided")]
    NoFiles,
    #[error("Too many files: {count} exceeds the limit of {max}")]
    TooManyFiles { count: usize, max: usize },
}

/// Validation applied to every uploaded document before extraction.
pub fn validate_document(doc: &DocumentInput) -> Result<(), &'static str> {
    if !doc.filename.to_lowercase().ends_with(PDF_SUFFIX) {
        return Err(NOT_A_PDF);
    }
    if doc.data.is_empty() {
        return Err(EMPTY_FILE);
    }
    Ok(())
}

/// Process a batch of uploaded documents under one shared set of options.
///
/// Documents are processed strictly sequentially in input order, and each
/// one independently: a failed document is recorded as a failed outcome
/// and never aborts its siblings. `backend` is `None` when the request
/// named an unrecognised method; the method is a batch-wide option, but
/// its invalidity is still reported on every per-document outcome.
pub fn run_batch(
    documents: Vec<DocumentInput>,
    backend: Option<&dyn PdfBackend>,
    options: &ExtractionOptions,
    max_files: usize,
) -> Result<BatchResult, BatchError> {
    if documents.is_empty() {
        return Err(BatchError::NoFiles);
    }
    if documents.len() > max_files {
        return Err(BatchError::TooManyFiles {
            count: documents.len(),
            max: max_files,
        });
    }

    let results: Vec<ExtractionOutcome> = documents
        .into_iter()
        .map(|doc| process_document(doc, backend, options))
        .collect();

    let successful = results.iter().filter(|r| r.success).count();
    let failed = results.len() - successful;
    let summary = format!(
        "Processed {} files: {} succeeded, {} failed",
        results.len(),
        successful,
        failed
    );

    Ok(BatchResult {
        total_files: results.len(),
        successful,
        failed,
        results,
        summary,
    })
}

fn process_document(
    doc: DocumentInput,
    backend: Option<&dyn PdfBackend>,
    options: &ExtractionOptions,
) -> ExtractionOutcome {
    if let Err(message) = validate_document(&doc) {
        return ExtractionOutcome::failed(doc.filename, message);
    }

    let Some(backend) = backend else {
        return ExtractionOutcome::failed(doc.filename, INVALID_METHOD);
    };

    match extract_document(backend, &doc.data, options) {
        Ok(extracted) => {
            tracing::debug!(
                file = %doc.filename,
                pages = extracted.pages_extracted,
                backend = backend.name(),
                "document extracted"
            );
            ExtractionOutcome::succeeded(doc.filename, extracted)
        }
        Err(err) => {
            tracing::warn!(file = %doc.filename, error = %err, "document extraction failed");
            ExtractionOutcome::failed(doc.filename, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::StubBackend;
    use crate::resolve_page_range;

    fn doc(filename: &str, data: &[u8]) -> DocumentInput {
        DocumentInput {
            filename: filename.to_string(),
            data: data.to_vec(),
        }
    }

    fn plain_options() -> ExtractionOptions {
        ExtractionOptions {
            include_metadata: false,
            pages: None,
        }
    }

    #[test]
    fn outcomes_preserve_input_order_and_counts_balance() {
        let backend = StubBackend::with_pages(&["text"]);
        let docs = vec![
            doc("a.pdf", b"%PDF"),
            doc("notes.txt", b"plain"),
            doc("b.pdf", b""),
            doc("c.pdf", b"%PDF"),
        ];

        let batch = run_batch(docs, Some(&backend), &plain_options(), 10).unwrap();

        assert_eq!(batch.total_files, 4);
        assert_eq!(batch.successful, 2);
        assert_eq!(batch.failed, 2);
        assert_eq!(batch.successful + batch.failed, batch.total_files);
        assert!(batch.success());

        let names: Vec<&str> = batch.results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "notes.txt", "b.pdf", "c.pdf"]);

        let txt = &batch.results[1];
        assert!(!txt.success);
        assert_eq!(txt.error.as_deref(), Some(NOT_A_PDF));
        assert_eq!(txt.text, "");
        assert_eq!(txt.pages, 0);

        let empty = &batch.results[2];
        assert_eq!(empty.error.as_deref(), Some(EMPTY_FILE));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let backend = StubBackend::with_pages(&["text"]);
        let batch = run_batch(
            vec![doc("REPORT.PDF", b"%PDF")],
            Some(&backend),
            &plain_options(),
            10,
        )
        .unwrap();

        assert!(batch.results[0].success);
    }

    #[test]
    fn too_many_files_fails_before_any_document_is_touched() {
        let backend = StubBackend::with_pages(&["text"]);
        let docs = (0..11).map(|i| doc(&format!("f{i}.pdf"), b"%PDF")).collect();

        let err = run_batch(docs, Some(&backend), &plain_options(), 10).unwrap_err();

        assert_eq!(
            err,
            BatchError::TooManyFiles {
                count: 11,
                max: 10
            }
        );
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn empty_input_is_a_batch_wide_error() {
        let backend = StubBackend::with_pages(&["text"]);
        let err = run_batch(vec![], Some(&backend), &plain_options(), 10).unwrap_err();
        assert_eq!(err, BatchError::NoFiles);
    }

    #[test]
    fn unrecognised_method_fails_every_document_individually() {
        let docs = vec![doc("a.pdf", b"%PDF"), doc("b.pdf", b"%PDF")];
        let batch = run_batch(docs, None, &plain_options(), 10).unwrap();

        assert_eq!(batch.failed, 2);
        assert!(!batch.success());
        for outcome in &batch.results {
            assert_eq!(outcome.error.as_deref(), Some(INVALID_METHOD));
        }
    }

    #[test]
    fn backend_failure_is_isolated_to_its_document() {
        let backend = StubBackend::failing("broken xref table");
        let docs = vec![doc("a.pdf", b"%PDF"), doc("b.pdf", b"%PDF")];

        let batch = run_batch(docs, Some(&backend), &plain_options(), 10).unwrap();

        assert_eq!(batch.failed, 2);
        assert_eq!(backend.call_count(), 2);
        assert!(
            batch.results[0]
                .error
                .as_deref()
                .unwrap()
                .contains("broken xref table")
        );
    }

    #[test]
    fn shared_selection_extracts_different_page_counts_per_file() {
        // One shared "1-3" selection over a 2-page backend: both files
        // succeed, each extracting only what it has.
        let backend = StubBackend::with_pages(&["one", "two"]);
        let options = ExtractionOptions {
            include_metadata: false,
            pages: resolve_page_range(Some("1-3")).unwrap(),
        };
        let docs = vec![doc("a.pdf", b"%PDF"), doc("b.pdf", b"%PDF")];

        let batch = run_batch(docs, Some(&backend), &options, 10).unwrap();

        assert_eq!(batch.successful, 2);
        for outcome in &batch.results {
            assert_eq!(outcome.pages, 2);
            assert!(!outcome.text.contains("--- Page 3 ---"));
        }
    }

    #[test]
    fn metadata_is_absent_unless_requested() {
        let backend = StubBackend::with_pages(&["text"]).with_title("T");
        let docs = vec![doc("a.pdf", b"%PDF")];

        let without = run_batch(docs.clone(), Some(&backend), &plain_options(), 10).unwrap();
        assert!(without.results[0].metadata.is_none());

        let options = ExtractionOptions {
            include_metadata: true,
            pages: None,
        };
        let with = run_batch(docs, Some(&backend), &options, 10).unwrap();
        let metadata = with.results[0].metadata.as_ref().unwrap();
        assert_eq!(metadata["title"], "T");
        assert_eq!(metadata.len(), 7);
    }

    #[test]
    fn summary_reflects_the_tally() {
        let backend = StubBackend::with_pages(&["text"]);
        let docs = vec![doc("a.pdf", b"%PDF"), doc("b.txt", b"x")];
        let batch = run_batch(docs, Some(&backend), &plain_options(), 10).unwrap();
        assert_eq!(batch.summary, "Processed 2 files: 1 succeeded, 1 failed");
    }
}
