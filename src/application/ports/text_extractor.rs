use std::time::Duration;

use async_trait::async_trait;

use crate::domain::SourceDocument;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        document: &SourceDocument,
    ) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
    #[error("extraction timed out after {0:?}")]
    TimedOut(Duration),
}
