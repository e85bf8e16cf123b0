use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::SourceDocument;

/// Reads the document as UTF-8 directly, standing in for the real tool.
pub struct MockTextExtractor;

#[async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract_text(&self, document: &SourceDocument) -> Result<String, TextExtractorError> {
        tokio::fs::read_to_string(&document.path)
            .await
            .map_err(|e| TextExtractorError::ExtractionFailed(e.to_string()))
    }
}
