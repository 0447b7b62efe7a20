use std::sync::Arc;

use crate::config::Config;
use crate::screening::extractor::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// The service is stateless between requests; this carries only configuration
/// and the extraction collaborator.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: PdfTextExtractor (pdf-extract crate).
    pub extractor: Arc<dyn TextExtractor>,
}
