//! Text Extractor — the one seam where a PDF-parsing capability is required.
//!
//! Page texts are joined with a single space; pages that yield no text are
//! skipped silently. Only a failure of the library itself (encrypted or
//! corrupted document it cannot open) surfaces as an error.

use crate::errors::AppError;

/// External collaborator contract for PDF text extraction.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>` so tests and future
/// backends can swap the implementation without touching handler code.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> Result<String, AppError>;
}

/// Default extractor backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, AppError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(document)
            .map_err(|e| AppError::Extraction(e.to_string()))?;
        Ok(join_pages(pages))
    }
}

/// Joins per-page text with a single space, dropping pages with no text.
fn join_pages(pages: Vec<String>) -> String {
    pages
        .iter()
        .filter(|page| !page.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_skips_empty_pages() {
        let pages = vec![
            "Senior Rust Engineer".to_string(),
            String::new(),
            "Requirements: Rust, Tokio".to_string(),
        ];
        assert_eq!(
            join_pages(pages),
            "Senior Rust Engineer Requirements: Rust, Tokio"
        );
    }

    #[test]
    fn test_join_pages_all_empty_yields_empty_string() {
        assert_eq!(join_pages(vec![String::new(), String::new()]), "");
        assert_eq!(join_pages(vec![]), "");
    }

    #[test]
    fn test_join_pages_single_page_is_unchanged() {
        assert_eq!(join_pages(vec!["one page".to_string()]), "one page");
    }

    #[test]
    fn test_extractor_rejects_garbage_bytes() {
        let result = PdfTextExtractor.extract(b"not a pdf at all");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
