use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::storage::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where uploads are written before extraction.
    pub store: UploadStore,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
